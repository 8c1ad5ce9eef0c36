//! Error rendering.
//!
//! Human mode prints one diagnostic line prefixed with `✗`. JSON mode prints
//! a structured object with the stable error code for scripts.

use colored::Colorize;
use serde::Serialize;

use crate::error::BlinkoError;

const FAILURE_MARK: &str = "✗";

/// Structured error for `--json` output.
#[derive(Debug, Serialize)]
pub struct ErrorJson {
    pub code: &'static str,
    pub category: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorJson {
    /// Build from an error.
    #[must_use]
    pub fn from_error(error: &BlinkoError) -> Self {
        Self {
            code: error.error_code(),
            category: error.category().to_string(),
            message: error.to_string(),
            status: error.status(),
        }
    }
}

/// Render an error for stderr.
#[must_use]
pub fn render_error(error: &BlinkoError, json: bool, color: bool) -> String {
    if json {
        return render_error_json(error);
    }
    let message = error.to_string();
    if color {
        format!("{} {}", FAILURE_MARK.red().bold(), message.red())
    } else {
        format!("{FAILURE_MARK} {message}")
    }
}

/// Render error as a single-line JSON object.
#[must_use]
pub fn render_error_json(error: &BlinkoError) -> String {
    let wrapped = serde_json::json!({ "error": ErrorJson::from_error(error) });
    serde_json::to_string(&wrapped).unwrap_or_else(|_| format!("{FAILURE_MARK} {error}"))
}
