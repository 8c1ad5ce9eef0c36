//! JSON output for scripts (`--json`).

use crate::cli::output::CommandOutput;
use crate::error::Result;

/// Serialize a command result, one document per invocation.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn render(output: &CommandOutput, pretty: bool) -> Result<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(output)?
    } else {
        serde_json::to_string(output)?
    };
    json.push('\n');
    Ok(json)
}
