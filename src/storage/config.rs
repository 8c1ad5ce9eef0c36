//! Credential file loading.
//!
//! Loads `~/.config/blinko.skill.yaml` (or the path given by `--config` /
//! `BLINKO_CONFIG`). Despite the extension the file is not parsed as YAML:
//! it is a flat list of `key: value` lines.
//!
//! ```text
//! # Blinko credentials
//! server_url: "https://blinko.example.com"
//! token: 'eyJhbGciOi...'
//! timeout: 15
//! ```
//!
//! ## Keys
//!
//! - `server_url` (required): base URL of the Blinko server
//! - `token` (required): API token sent as a bearer token
//! - `timeout` (optional): request timeout in seconds, default 30

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::AppPaths;
use crate::core::http::DEFAULT_TIMEOUT;
use crate::error::{BlinkoError, Result};

/// Environment variable to override the config file path.
pub const ENV_CONFIG: &str = "BLINKO_CONFIG";

const KEY_SERVER_URL: &str = "server_url";
const KEY_TOKEN: &str = "token";
const KEY_TIMEOUT: &str = "timeout";

/// Loaded credentials and connection settings.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the Blinko server, as written in the file.
    pub server_url: String,
    /// Bearer token.
    pub token: String,
    /// Request timeout.
    pub timeout: Duration,
    /// File the values were read from.
    pub path: PathBuf,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("server_url", &self.server_url)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("path", &self.path)
            .finish()
    }
}

impl Config {
    /// Resolve the config path: explicit override first, then the default.
    ///
    /// # Errors
    ///
    /// Returns [`BlinkoError::NoHomeDir`] when no override is given and the
    /// home directory is unknown.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        AppPaths::new()
            .map(|paths| paths.config_file())
            .ok_or(BlinkoError::NoHomeDir)
    }

    /// Load and validate the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file is missing, cannot be read
    /// or lacks a required key.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BlinkoError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let content =
            fs::read_to_string(path).map_err(|source| BlinkoError::ConfigUnreadable {
                path: path.display().to_string(),
                source,
            })?;
        let config = Self::parse(&content, path)?;
        tracing::debug!(path = %path.display(), server_url = %config.server_url, "Loaded config");
        Ok(config)
    }

    /// Build a config from file contents; `path` is only used in messages.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a required key is absent or empty, or
    /// if `timeout` is not a positive number of seconds.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut entries = parse_entries(content);
        let mut require = |key: &'static str| {
            entries
                .remove(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| BlinkoError::ConfigMissingKey {
                    path: path.display().to_string(),
                    key,
                })
        };
        let server_url = require(KEY_SERVER_URL)?;
        let token = require(KEY_TOKEN)?;

        let timeout = match entries.remove(KEY_TIMEOUT) {
            None => DEFAULT_TIMEOUT,
            Some(raw) => parse_timeout(&raw)?,
        };

        Ok(Self {
            server_url,
            token,
            timeout,
            path: path.to_path_buf(),
        })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    raw.parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .ok_or_else(|| BlinkoError::ConfigInvalid {
            key: KEY_TIMEOUT.to_string(),
            value: raw.to_string(),
            message: "expected a positive number of seconds".to_string(),
        })
}

/// Split `key: value` lines into a map. Later keys overwrite earlier ones.
///
/// Blank lines, `#` comments, lines without a colon and lines starting with a
/// colon are skipped. One layer of matching quotes is stripped from values.
#[must_use]
pub fn parse_entries(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (key, value) = line.split_once(':')?;
            if key.is_empty() {
                return None;
            }
            Some((key.trim().to_string(), unquote(value.trim()).to_string()))
        })
        .collect()
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.starts_with(quote) && value.ends_with(quote) {
            return value.get(1..value.len() - 1).unwrap_or("");
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;
    use crate::test_utils::TestDir;
    use tracing_test::traced_test;

    fn path() -> PathBuf {
        PathBuf::from("/tmp/blinko.skill.yaml")
    }

    #[test]
    fn parses_quoted_and_bare_values() {
        let entries = parse_entries(
            "# comment\n\nserver_url: \"https://b.example.com\"\ntoken: 'abc:def'\nplain: value\n",
        );
        assert_eq!(entries["server_url"], "https://b.example.com");
        assert_eq!(entries["token"], "abc:def");
        assert_eq!(entries["plain"], "value");
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn splits_on_first_colon_only() {
        let entries = parse_entries("server_url: http://localhost:1111");
        assert_eq!(entries["server_url"], "http://localhost:1111");
    }

    #[test]
    fn skips_lines_without_key() {
        let entries = parse_entries(":orphan\nno colon here\n   # indented comment");
        assert!(entries.is_empty());
    }

    #[test]
    fn mismatched_quotes_are_kept() {
        let entries = parse_entries("a: \"half\nb: 'mixed\"\nc: \"");
        assert_eq!(entries["a"], "\"half");
        assert_eq!(entries["b"], "'mixed\"");
        assert_eq!(entries["c"], "");
    }

    #[test]
    fn handles_crlf_and_last_value_wins() {
        let entries = parse_entries("token: one\r\ntoken: two\r\n");
        assert_eq!(entries["token"], "two");
    }

    #[test]
    fn config_requires_server_url_and_token() {
        let err = Config::parse("token: abc", &path()).unwrap_err();
        assert!(matches!(err, BlinkoError::ConfigMissingKey { key: "server_url", .. }));

        let err = Config::parse("server_url: http://x\ntoken: ''", &path()).unwrap_err();
        assert!(matches!(err, BlinkoError::ConfigMissingKey { key: "token", .. }));
    }

    #[test]
    fn config_defaults_timeout() {
        let config = Config::parse("server_url: http://x\ntoken: t", &path()).unwrap();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.server_url, "http://x");
    }

    #[test]
    fn config_rejects_bad_timeout() {
        let err =
            Config::parse("server_url: http://x\ntoken: t\ntimeout: soon", &path()).unwrap_err();
        assert!(matches!(err, BlinkoError::ConfigInvalid { .. }));
        let ok = Config::parse("server_url: http://x\ntoken: t\ntimeout: 5", &path()).unwrap();
        assert_eq!(ok.timeout, Duration::from_secs(5));
    }

    #[test]
    fn debug_output_redacts_token() {
        let config = Config::parse("server_url: http://x\ntoken: s3cret", &path()).unwrap();
        assert!(!format!("{config:?}").contains("s3cret"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = TestDir::new();
        let err = Config::load(&dir.file_path("absent.yaml")).unwrap_err();
        assert!(matches!(err, BlinkoError::ConfigNotFound { .. }));
    }

    #[test]
    fn load_reads_file() {
        let dir = TestDir::new();
        dir.create_file("blinko.skill.yaml", "server_url: http://x/\ntoken: abc\n");
        let config = Config::load(&dir.file_path("blinko.skill.yaml")).unwrap();
        assert_eq!(config.token, "abc");
        assert_eq!(config.path, dir.file_path("blinko.skill.yaml"));
    }

    #[test]
    #[traced_test]
    fn load_logs_server_but_not_token() {
        let dir = TestDir::new();
        let path = dir.create_file("blinko.skill.yaml", "server_url: http://x\ntoken: s3cret\n");
        Config::load(&path).unwrap();
        assert!(logs_contain("Loaded config"));
        assert!(!logs_contain("s3cret"));
    }

    #[test]
    fn lone_quote_value_counts_as_empty() {
        let err = Config::parse("server_url: http://x\ntoken: \"", &path()).unwrap_err();
        assert!(matches!(err, BlinkoError::ConfigMissingKey { key: "token", .. }));
    }

    #[test]
    fn unreadable_file_is_configuration_error() {
        let dir = TestDir::new();
        let err = Config::load(dir.path()).unwrap_err();
        assert!(matches!(err, BlinkoError::ConfigUnreadable { .. }), "{err:?}");
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.error_code(), "BLINKO-C005");
    }

    #[test]
    fn explicit_path_wins() {
        let explicit = PathBuf::from("/etc/blinko.yaml");
        assert_eq!(Config::resolve_path(Some(&explicit)).unwrap(), explicit);
    }
}
