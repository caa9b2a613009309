// End-to-end rename scenarios run through the compiled binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn create_project(parent: &Path, name: &str) -> PathBuf {
    let root = parent.join(name);
    fs::create_dir_all(&root).unwrap();
    fs::write(
        root.join("package.json"),
        format!(
            "{{\n  \"name\": \"{0}\",\n  \"scripts\": {{ \"dev\": \"vite --open /{0}\" }}\n}}\n",
            name
        ),
    )
    .unwrap();
    fs::write(
        root.join("vite.config.js"),
        format!("export default {{ base: '/{}/' }}\n", name),
    )
    .unwrap();
    fs::write(root.join("setup.js"), "// one-shot setup\n").unwrap();
    root
}

fn rename_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rename-project").unwrap();
    cmd.current_dir(dir)
        .env_remove("RENAME_PROJECT_NAME")
        .args(["--script", "setup.js"]);
    cmd
}

#[test]
fn test_rename_complete_project() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_project(temp_dir.path(), "my-app");

    rename_cmd(&root)
        .write_stdin("cool-app\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Updated package.json"))
        .stdout(predicate::str::contains("✅ Updated vite.config.js"))
        .stdout(predicate::str::contains("✅ Project folder renamed to 'cool-app'."))
        .stdout(predicate::str::contains("🎉 Renaming complete!"))
        .stdout(predicate::str::contains("cd cool-app"))
        .stdout(predicate::str::contains("npm install"))
        .stdout(predicate::str::contains("Setup script deleted automatically"));

    let new_root = temp_dir.path().join("cool-app");
    assert!(!root.exists());
    assert!(new_root.is_dir());

    let manifest = fs::read_to_string(new_root.join("package.json")).unwrap();
    assert_eq!(manifest.matches("cool-app").count(), 2);
    assert!(!manifest.contains("my-app"));

    let build = fs::read_to_string(new_root.join("vite.config.js")).unwrap();
    assert_eq!(build.matches("cool-app").count(), 1);
    assert!(!build.contains("my-app"));

    assert!(!new_root.join("setup.js").exists());
}

#[test]
fn test_rejected_name_changes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_project(temp_dir.path(), "my-app");
    let manifest_before = fs::read_to_string(root.join("package.json")).unwrap();

    rename_cmd(&root)
        .write_stdin("bad name!\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("❌ Invalid project name"))
        .stdout(predicate::str::contains("Updating project name").not());

    assert!(root.is_dir());
    assert_eq!(fs::read_to_string(root.join("package.json")).unwrap(), manifest_before);
    assert!(root.join("setup.js").exists());
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
}

#[test]
fn test_existing_destination_folder() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_project(temp_dir.path(), "my-app");
    let occupied = temp_dir.path().join("cool-app");
    fs::create_dir(&occupied).unwrap();
    fs::write(occupied.join("setup.js"), "// belongs to another project\n").unwrap();

    rename_cmd(&root)
        .write_stdin("cool-app\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("A folder with the new name already exists"))
        .stdout(predicate::str::contains("🎉 Renaming complete!"));

    // Files were rewritten in place, the folder kept its name
    assert!(root.is_dir());
    let manifest = fs::read_to_string(root.join("package.json")).unwrap();
    assert!(manifest.contains("\"name\": \"cool-app\""));

    // The script is removed from the original folder, never from the occupied one
    assert!(!root.join("setup.js").exists());
    assert!(occupied.join("setup.js").exists());
}

#[test]
fn test_missing_target_files_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("bare-app");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("setup.js"), "// setup\n").unwrap();

    rename_cmd(&root)
        .write_stdin("dressed-app\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated").not())
        .stdout(predicate::str::contains("🎉 Renaming complete!"));

    let new_root = temp_dir.path().join("dressed-app");
    assert!(new_root.is_dir());
    assert!(!new_root.join("package.json").exists());
    assert!(!new_root.join("setup.js").exists());
}

#[test]
fn test_failed_file_keeps_script_and_still_renames() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_project(temp_dir.path(), "my-app");
    // A folder named like a target file cannot be rewritten
    fs::create_dir(root.join("README.md")).unwrap();

    rename_cmd(&root)
        .write_stdin("cool-app\n")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("❌ Error reading or writing README.md"))
        .stdout(predicate::str::contains("Keeping setup.js for debugging"))
        .stdout(predicate::str::contains("🎉").not())
        .stdout(predicate::str::contains("Setup script deleted").not());

    let new_root = temp_dir.path().join("cool-app");
    assert!(new_root.join("setup.js").exists());
    let manifest = fs::read_to_string(new_root.join("package.json")).unwrap();
    assert!(manifest.contains("cool-app"));
}

#[test]
fn test_new_name_containing_old_name() {
    let temp_dir = TempDir::new().unwrap();
    let root = create_project(temp_dir.path(), "app");

    rename_cmd(&root)
        .write_stdin("app-v2\n")
        .assert()
        .success();

    let manifest = fs::read_to_string(temp_dir.path().join("app-v2/package.json")).unwrap();
    assert_eq!(manifest.matches("app-v2").count(), 2);
    assert_eq!(manifest.matches("app").count(), 2);
}
