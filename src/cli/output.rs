//! Output formatting utilities for the CLI.

use serde::Serialize;

/// A command result that can be shown as text or as JSON
pub trait CommandOutput: Serialize {
    /// Plain-text rendering for the terminal.
    fn to_human(&self) -> String;
    /// Structured rendering for `--json`.
    fn to_json(&self) -> serde_json::Value;
}

/// Render a command result in the selected mode, without a trailing newline.
pub fn render<T: CommandOutput>(result: &T, json_mode: bool) -> String {
    if json_mode {
        serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
    } else {
        result.to_human()
    }
}

/// Print a command result on stdout.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    println!("{}", render(result, json_mode));
}
