//! Error types for blinko.
//!
//! Uses `thiserror` for structured error types. Every error is fatal for the
//! current invocation: it is logged once, rendered as a single diagnostic line
//! and the process exits with status 1.
//!
//! ## Error Taxonomy
//!
//! - **Configuration**: missing or unreadable credential file, missing keys
//! - **Usage**: malformed or incomplete command invocations
//! - **Remote**: the Blinko server answered with a non-success status or a
//!   body we could not interpret
//! - **Network**: connection failures and timeouts
//! - **Internal**: I/O and serialization failures
//!
//! Each error has a stable error code (e.g., `BLINKO-U001`) for programmatic
//! handling, surfaced by `--json` error output.

use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// High-level error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Credential file problems.
    Configuration,
    /// Bad command-line invocation.
    Usage,
    /// The server rejected the request or sent something unparseable.
    Remote,
    /// Transport failures (connect, timeout).
    Network,
    /// Local I/O and serialization failures.
    Internal,
}

impl ErrorCategory {
    /// Returns a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Configuration => "Configuration error",
            Self::Usage => "Usage error",
            Self::Remote => "Remote error",
            Self::Network => "Network error",
            Self::Internal => "Internal error",
        }
    }

    /// Returns a short code prefix for this category.
    #[must_use]
    pub const fn code_prefix(&self) -> &'static str {
        match self {
            Self::Configuration => "C",
            Self::Usage => "U",
            Self::Remote => "R",
            Self::Network => "N",
            Self::Internal => "X",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Main error type for blinko operations.
#[derive(Error, Debug)]
pub enum BlinkoError {
    // ==========================================================================
    // Configuration errors
    // ==========================================================================
    /// Credential file not found at the resolved path.
    #[error("config file not found: {path}")]
    ConfigNotFound { path: String },

    /// The credential file exists but could not be read.
    #[error("cannot read config {path}: {source}")]
    ConfigUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A required key is absent or empty.
    #[error("config {path} is missing required key '{key}'")]
    ConfigMissingKey { path: String, key: &'static str },

    /// An optional key carries a value we cannot use.
    #[error("invalid config value for '{key}': {message}")]
    ConfigInvalid {
        key: String,
        value: String,
        message: String,
    },

    /// The home directory could not be determined.
    #[error("cannot determine home directory; pass --config <PATH>")]
    NoHomeDir,

    // ==========================================================================
    // Usage errors
    // ==========================================================================
    /// Invocation is missing data or carries invalid data.
    #[error("{reason}; usage: {usage}")]
    Usage { reason: String, usage: String },

    /// A value-taking flag was not followed by a value.
    #[error("option requires a value: {flag}")]
    MissingOptionValue { flag: String },

    /// The command word is not registered.
    #[error("unknown command: {0} (run `blinko help` for the command list)")]
    UnknownCommand(String),

    // ==========================================================================
    // Remote errors
    // ==========================================================================
    /// The server answered with a non-success status.
    #[error("{status} {reason}: {message}")]
    Api {
        status: u16,
        reason: String,
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("failed to parse response: {0}")]
    ParseResponse(String),

    // ==========================================================================
    // Network errors
    // ==========================================================================
    /// Request timeout.
    #[error("request timeout after {0} seconds")]
    Timeout(u64),

    /// Connection or protocol failure.
    #[error("network error: {0}")]
    Network(String),

    // ==========================================================================
    // Internal errors
    // ==========================================================================
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BlinkoError {
    /// Build a usage error carrying the expected invocation form.
    pub fn usage(reason: impl Into<String>, usage: impl Into<String>) -> Self {
        Self::Usage {
            reason: reason.into(),
            usage: usage.into(),
        }
    }

    /// Returns the error category for classification.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigNotFound { .. }
            | Self::ConfigUnreadable { .. }
            | Self::ConfigMissingKey { .. }
            | Self::ConfigInvalid { .. }
            | Self::NoHomeDir => ErrorCategory::Configuration,

            Self::Usage { .. } | Self::MissingOptionValue { .. } | Self::UnknownCommand(_) => {
                ErrorCategory::Usage
            }

            Self::Api { .. } | Self::ParseResponse(_) => ErrorCategory::Remote,

            Self::Timeout(_) | Self::Network(_) => ErrorCategory::Network,

            Self::Io(_) | Self::Json(_) => ErrorCategory::Internal,
        }
    }

    /// Returns a stable error code for programmatic handling.
    ///
    /// Format: `BLINKO-{category}{number}`.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigNotFound { .. } => "BLINKO-C001",
            Self::ConfigMissingKey { .. } => "BLINKO-C002",
            Self::ConfigInvalid { .. } => "BLINKO-C003",
            Self::NoHomeDir => "BLINKO-C004",
            Self::ConfigUnreadable { .. } => "BLINKO-C005",

            Self::Usage { .. } => "BLINKO-U001",
            Self::MissingOptionValue { .. } => "BLINKO-U002",
            Self::UnknownCommand(_) => "BLINKO-U003",

            Self::Api { .. } => "BLINKO-R001",
            Self::ParseResponse(_) => "BLINKO-R002",

            Self::Timeout(_) => "BLINKO-N001",
            Self::Network(_) => "BLINKO-N099",

            Self::Io(_) => "BLINKO-X001",
            Self::Json(_) => "BLINKO-X002",
        }
    }

    /// HTTP status for errors reported by the server.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for blinko operations.
pub type Result<T> = std::result::Result<T, BlinkoError>;

// =============================================================================
// Tests
// =============================================================================
