//! apimex - export one API-Manager front-end API into a JSON document

use clap::Parser;
use clap::error::ErrorKind;

mod cli;
mod client;
mod config;
mod error;
mod export;

/// Exit code for argument parsing failures, distinct from export failures so
/// wrapper scripts can tell a bad invocation from an unreachable manager.
const EXIT_USAGE: i32 = 99;

/// Exit code for any runtime failure.
const EXIT_FAILURE: i32 = 255;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return;
        }
        Err(err) => {
            let _ = err.print();
            std::process::exit(EXIT_USAGE);
        }
    };

    if let Err(err) = cli::export::run(cli).await {
        log::error!("{}", error::error_chain(&err));
        std::process::exit(EXIT_FAILURE);
    }
}
