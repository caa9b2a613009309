// rename-project - one-shot project rename
// Main CLI entry point

use clap::Parser;
use rename_project::cli::Cli;
use rename_project::utils::error::UserError;
use rename_project::utils::logging;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command().run().await {
        Ok(outcome) => {
            let code = outcome.exit_code();
            if code != 0 {
                process::exit(code);
            }
        }
        Err(err) => {
            let user_error = UserError::from_rename_error(&err);
            user_error.print();
            process::exit(user_error.exit_code);
        }
    }
}
