//! exoprobe CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use exoprobe::cli::commands::probe;
use exoprobe::cli::{handle_error, Cli};
use exoprobe::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match probe::resolve_config(&cli.probe) {
        Ok(config) => config,
        Err(err) => return handle_error(&err, cli.json),
    };

    let logger = match LogConfig::try_from(&config.logging)
        .map_err(anyhow::Error::from)
        .and_then(|log_config| LoggerImpl::init(&log_config))
    {
        Ok(logger) => logger,
        Err(err) => return handle_error(&err, cli.json),
    };

    let code = match probe::execute(&config, cli.json).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => handle_error(&err, cli.json),
    };

    // Flushes the file writer before the process exits
    drop(logger);
    code
}
