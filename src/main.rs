#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

use std::process::ExitCode;

use clap::Parser;
use thisslime::TracingError;
use tracing_unwrap::ResultExt;

mod account;

mod cli;
pub use cli::Cli;

mod commands;

mod display;

mod errors;
pub use errors::Error;

mod framework;
use framework::{config::ConfigSetup, AppData};

mod history;

mod utils;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[tokio::main]
async fn main() -> ExitCode {
    framework::logging::init_tracing();

    let cli = Cli::parse();

    let config = ConfigSetup::load(&cli)
        .expect_or_log("config should load")
        .finish();

    let data = AppData::new(config, !cli.no_history);

    match commands::run(&data, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.trace();
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
