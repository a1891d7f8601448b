//! CLI type definitions
//!
//! Clap structures for the `exoprobe` command line.

use clap::Parser;

use super::commands::probe::ProbeArgs;

/// Top-level command line
#[derive(Parser, Debug)]
#[command(name = "exoprobe")]
#[command(
    about = "Send one authenticated request to the Exoscale compute API and print the response",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Probe settings
    #[command(flatten)]
    pub probe: ProbeArgs,

    /// Output in JSON format
    #[arg(short, long)]
    pub json: bool,
}
