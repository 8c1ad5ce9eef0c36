//! Test logging infrastructure for structured test output and debugging.
//!
//! Provides a `TestLogger` with phase tracking and duration reporting.
//!
//! # Usage
//!
//! ```rust,ignore
//! use common::logger::TestLogger;
//!
//! #[test]
//! fn test_example() {
//!     let log = TestLogger::new("test_example");
//!     log.phase("setup");
//!     // ... setup code ...
//!     log.phase("verify");
//!     log.finish_ok();
//! }
//! ```
//!
//! # Environment Variables
//!
//! - `TEST_LOG_LEVEL` - Set log level: trace, debug, info, warn, error (default: info)
//! - `TEST_LOG_JSON` - Set to "1" or "true" for JSON output format

use std::env;
use std::fmt::Display;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::log_capture::TestLogCapture;

/// Log severity levels matching standard conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse from string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        };
        write!(f, "{name}")
    }
}

/// Structured log entry for JSON output mode.
#[derive(Debug, Serialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub test: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
}

static MIN_LEVEL: OnceLock<LogLevel> = OnceLock::new();
static JSON_MODE: OnceLock<bool> = OnceLock::new();

fn min_level() -> LogLevel {
    *MIN_LEVEL.get_or_init(|| {
        env::var("TEST_LOG_LEVEL")
            .ok()
            .and_then(|s| LogLevel::parse(&s))
            .unwrap_or(LogLevel::Info)
    })
}

fn is_json_mode() -> bool {
    *JSON_MODE.get_or_init(|| {
        env::var("TEST_LOG_JSON").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
    })
}

/// Per-test logger with phase and duration tracking.
pub struct TestLogger {
    test_name: String,
    start_time: Instant,
    current_phase: Mutex<String>,
}

impl TestLogger {
    /// Create a new test logger.
    #[must_use]
    pub fn new(test_name: &str) -> Self {
        let logger = Self {
            test_name: test_name.to_string(),
            start_time: Instant::now(),
            current_phase: Mutex::new("init".to_string()),
        };
        logger.log(LogLevel::Info, "Test starting");
        logger
    }

    /// Create logger with capture for assertions.
    pub fn with_capture(test_name: &str) -> (Self, TestLogCapture) {
        let capture = TestLogCapture::start();
        (Self::new(test_name), capture)
    }

    /// Set the current test phase.
    pub fn phase(&self, phase: &str) {
        if let Ok(mut current) = self.current_phase.lock() {
            *current = phase.to_string();
        }
        self.log(LogLevel::Debug, &format!("Phase: {phase}"));
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Log an HTTP request (for HTTP tests).
    pub fn http_request(&self, method: &str, url: &str) {
        self.debug(&format!("HTTP {method} {url}"));
    }

    /// Log a CLI invocation (for E2E tests).
    pub fn command(&self, args: &[&str]) {
        self.debug(&format!("$ blinko {}", args.join(" ")));
    }

    /// Mark test as passed with duration.
    pub fn finish_ok(&self) {
        let duration_ms = self.start_time.elapsed().as_millis();
        self.log(
            LogLevel::Info,
            &format!("Test passed (duration: {duration_ms}ms)"),
        );
    }

    fn log(&self, level: LogLevel, message: &str) {
        if level < min_level() {
            return;
        }
        let phase = self.current_phase.lock().ok().map(|p| p.clone());

        if is_json_mode() {
            let entry = LogEntry {
                timestamp: Utc::now(),
                level,
                test: self.test_name.clone(),
                message: message.to_string(),
                phase,
            };
            if let Ok(json) = serde_json::to_string(&entry) {
                eprintln!("{json}");
            }
        } else {
            let ts = Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");
            eprintln!("[{ts}] [{level}] [{}] {message}", self.test_name);
        }
    }
}
