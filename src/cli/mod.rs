//! Command-line interface.

pub mod commands;
pub mod output;
pub mod types;

use std::process::ExitCode;

pub use types::Cli;

/// Report a fatal error on stderr and return the failing exit code.
///
/// Nothing is written to stdout, so a failed probe never prints a partial
/// `Status:`/`Response:` pair. The caller keeps ownership of the logger and
/// drops it before exiting, which flushes any file log.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ExitCode {
    tracing::debug!(error = %format_args!("{err:#}"), "probe failed");
    if json_mode {
        let payload = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{payload}");
    } else {
        eprintln!("Error: {err:#}");
    }
    ExitCode::FAILURE
}
