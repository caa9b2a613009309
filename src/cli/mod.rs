// CLI module for command-line interface

pub mod rename;

use clap::Parser;
use std::path::PathBuf;

use self::rename::RenameCommand;

/// Main CLI structure
#[derive(Debug, Parser)]
#[command(name = "rename-project")]
#[command(about = "Rename a freshly scaffolded project and remove the setup script")]
#[command(long_about = r#"Rename a freshly scaffolded JavaScript project in one shot.

Run it from inside the project folder. It asks for the new project name, then:
  • Replaces the old name in package.json, vite.config.js and README.md
  • Renames the project folder to the new name
  • Deletes the setup script once everything succeeded

If anything fails, the setup script is kept so the run can be inspected.

Examples:
  rename-project                          Prompt for the new name
  rename-project --name cool-app          Rename without prompting
  rename-project --keep-script            Rename but keep the setup script
  rename-project --name cool-app --json   Print the result as JSON"#)]
#[command(version)]
pub struct Cli {
    /// New project name (letters, numbers, hyphens, underscores); prompts when omitted
    #[arg(long, env = "RENAME_PROJECT_NAME")]
    pub name: Option<String>,

    /// Project folder to rename (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Setup script removed after a successful run (default: this executable's file name)
    #[arg(long, value_name = "FILE")]
    pub script: Option<String>,

    /// Keep the setup script even when everything succeeded
    #[arg(long)]
    pub keep_script: bool,

    /// Output JSON instead of human-readable text (the name prompt, if any, goes to stderr)
    #[arg(long)]
    pub json: bool,

    /// Increase diagnostic verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Build the rename command from the parsed arguments
    pub fn command(self) -> RenameCommand {
        RenameCommand {
            name: self.name,
            project_dir: self.project_dir,
            script: self.script,
            keep_script: self.keep_script,
            json: self.json,
        }
    }
}
