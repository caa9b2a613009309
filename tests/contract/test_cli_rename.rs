// Contract test for the `rename-project` command line

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn scaffold(parent: &Path) -> PathBuf {
    let root = parent.join("my-app");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("package.json"), "{\"name\": \"my-app\"}\n").unwrap();
    fs::write(root.join("setup.js"), "// setup\n").unwrap();
    root
}

fn rename_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rename-project").unwrap();
    cmd.current_dir(dir)
        .env_remove("RENAME_PROJECT_NAME")
        .env_remove("RUST_LOG")
        .args(["--script", "setup.js"]);
    cmd
}

#[test]
fn test_help_lists_options() {
    let mut cmd = Command::cargo_bin("rename-project").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--name"))
        .stdout(predicate::str::contains("--keep-script"))
        .stdout(predicate::str::contains("--project-dir"));
}

#[test]
fn test_prompts_for_name() {
    let temp_dir = TempDir::new().unwrap();
    let root = scaffold(temp_dir.path());

    rename_cmd(&root)
        .write_stdin("cool-app\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Enter the new project name"));
}

#[test]
fn test_invalid_name_exits_with_code_one() {
    let temp_dir = TempDir::new().unwrap();
    let root = scaffold(temp_dir.path());

    rename_cmd(&root)
        .args(["--name", "invalid-name!"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Invalid project name 'invalid-name!'"));

    assert!(root.join("setup.js").exists());
}

#[test]
fn test_degraded_run_exits_with_code_two() {
    let temp_dir = TempDir::new().unwrap();
    let root = scaffold(temp_dir.path());
    fs::create_dir(root.join("README.md")).unwrap();

    rename_cmd(&root)
        .args(["--name", "cool-app"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("Setup encountered some errors"));
}

#[test]
fn test_name_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let root = scaffold(temp_dir.path());

    rename_cmd(&root)
        .env("RENAME_PROJECT_NAME", "env-app")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the new project name").not());

    assert!(temp_dir.path().join("env-app/package.json").exists());
}

#[test]
fn test_project_dir_flag() {
    let temp_dir = TempDir::new().unwrap();
    let root = scaffold(temp_dir.path());

    rename_cmd(temp_dir.path())
        .args(["--name", "cool-app", "--project-dir"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("from 'my-app' to 'cool-app'"));

    assert!(!root.exists());
    assert!(temp_dir.path().join("cool-app").is_dir());
}

#[test]
fn test_missing_project_dir_fails() {
    let temp_dir = TempDir::new().unwrap();

    rename_cmd(temp_dir.path())
        .args(["--name", "cool-app", "--project-dir", "no-such-folder"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot resolve project folder"));
}

#[test]
fn test_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let root = scaffold(temp_dir.path());

    let output = rename_cmd(&root)
        .args(["--name", "cool-app", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["outcome"], "completed");
    assert_eq!(json["report"]["identity"]["old_name"], "my-app");
    assert_eq!(json["report"]["identity"]["new_name"], "cool-app");
    assert!(json["report"]["outcomes"].is_array());
    assert_eq!(json["report"]["cleanup"]["status"], "deleted");
}

#[test]
fn test_keep_script_flag() {
    let temp_dir = TempDir::new().unwrap();
    let root = scaffold(temp_dir.path());

    rename_cmd(&root)
        .args(["--name", "cool-app", "--keep-script"])
        .assert()
        .success();

    assert!(temp_dir.path().join("cool-app/setup.js").exists());
}

#[test]
fn test_invalid_utf8_name_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let root = scaffold(temp_dir.path());

    rename_cmd(&root)
        .write_stdin(vec![b'a', 0xff, b'\n'])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Invalid project name"))
        .stderr(predicate::str::contains("IO error").not());

    assert!(root.join("setup.js").exists());
    assert!(fs::read_to_string(root.join("package.json")).unwrap().contains("my-app"));
}

#[test]
fn test_json_with_prompt_keeps_stdout_parseable() {
    let temp_dir = TempDir::new().unwrap();
    let root = scaffold(temp_dir.path());

    let output = rename_cmd(&root)
        .arg("--json")
        .write_stdin("cool-app\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["outcome"], "completed");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Enter the new project name"));
}
