//! Test utilities for blinko.
//!
//! Provides shared helpers, test data factories, and assertion macros
//! for use across all test modules.
//!
//! # Usage
//!
//! ```rust,ignore
//! use blinko::test_utils::*;
//!
//! let note = make_test_note(12, "buy milk");
//! let dir = TestDir::new();
//! let config = dir.create_file("blinko.skill.yaml", &make_test_config("http://127.0.0.1:1111"));
//! ```

use std::fs;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};

use crate::core::models::{HistoryRow, Note, NoteTag, Tag};

// =============================================================================
// Test Data Factories
// =============================================================================

/// Create a fully populated `Note`.
///
/// The note is a plain note (type 1) tagged `#work #ideas`, created
/// 2026-03-10 and updated a day later.
#[must_use]
pub fn make_test_note(id: i64, content: &str) -> Note {
    Note {
        id: Some(id),
        note_type: Some(1),
        content: Some(content.to_string()),
        is_top: Some(false),
        is_recycle: Some(false),
        tags: Some(vec![make_test_tag("work"), make_test_tag("ideas")]),
        created_at: Some("2026-03-10T12:00:00Z".to_string()),
        updated_at: Some("2026-03-11T12:00:00Z".to_string()),
    }
}

/// Create a `Note` with only an id and the default type.
///
/// Useful for testing rendering code that must handle missing optional fields.
#[must_use]
pub fn make_test_note_minimal(id: i64) -> Note {
    Note {
        id: Some(id),
        note_type: Some(0),
        ..Note::default()
    }
}

/// Tag in the nested `{ tag: { name } }` shape.
#[must_use]
pub fn make_test_tag(name: &str) -> NoteTag {
    NoteTag {
        tag: Some(Tag {
            name: Some(name.to_string()),
        }),
        name: None,
    }
}

/// History row for version `version`.
#[must_use]
pub fn make_test_history_row(version: i64, content: &str) -> HistoryRow {
    HistoryRow {
        version: Some(version),
        content: Some(content.to_string()),
        created_at: Some("2026-03-10T12:00:00Z".to_string()),
        ..HistoryRow::default()
    }
}

/// Credential file content pointing at `server_url`.
#[must_use]
pub fn make_test_config(server_url: &str) -> String {
    format!("# test credentials\nserver_url: \"{server_url}\"\ntoken: 'test-token'\n")
}

// =============================================================================
// Temporary Directories
// =============================================================================

/// Isolated temporary directory, removed on drop.
pub struct TestDir {
    inner: tempfile::TempDir,
}

impl TestDir {
    /// Create a new isolated temporary directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: tempfile::tempdir().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the temporary directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Create a file with the given content and return its path.
    ///
    /// Creates parent directories as needed.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be created or written.
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.inner.path().join(name);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        let mut file = fs::File::create(&path).expect("Failed to create test file");
        file.write_all(content.as_bytes())
            .expect("Failed to write test file");
        path
    }

    /// Read a file from the temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn read_file(&self, name: &str) -> io::Result<String> {
        fs::read_to_string(self.inner.path().join(name))
    }

    /// Get the full path to a file in the temporary directory.
    #[must_use]
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.inner.path().join(name)
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Assertion Macros
// =============================================================================

/// Assert that a string contains a substring.
///
/// # Examples
///
/// ```rust,ignore
/// use blinko::assert_contains;
///
/// assert_contains!("✓ Created Note #12", "#12");
/// ```
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        let haystack = $haystack;
        let needle = $needle;
        assert!(
            haystack.contains(needle),
            "Expected string to contain {:?}\n\nActual string:\n{:?}",
            needle,
            haystack
        );
    };
    ($haystack:expr, $needle:expr, $($arg:tt)*) => {
        let haystack = $haystack;
        let needle = $needle;
        assert!(
            haystack.contains(needle),
            $($arg)*
        );
    };
}

/// Assert that a string does NOT contain a substring.
#[macro_export]
macro_rules! assert_not_contains {
    ($haystack:expr, $needle:expr) => {
        let haystack = $haystack;
        let needle = $needle;
        assert!(
            !haystack.contains(needle),
            "Expected string NOT to contain {:?}\n\nActual string:\n{:?}",
            needle,
            haystack
        );
    };
}

/// Assert that a string is valid JSON.
#[macro_export]
macro_rules! assert_json_valid {
    ($json:expr) => {
        let json = $json;
        if let Err(e) = serde_json::from_str::<serde_json::Value>(json) {
            panic!(
                "Expected valid JSON, but parsing failed: {}\n\nJSON string:\n{}",
                e, json
            );
        }
    };
}

/// Assert that a string is valid JSON and matches the expected value.
///
/// # Examples
///
/// ```rust,ignore
/// use blinko::assert_json_eq;
///
/// assert_json_eq!(r#"{"kind": "bin_cleared"}"#, serde_json::json!({"kind": "bin_cleared"}));
/// ```
#[macro_export]
macro_rules! assert_json_eq {
    ($json:expr, $expected:expr) => {
        let json = $json;
        let parsed: serde_json::Value = serde_json::from_str(json).expect("Invalid JSON");
        let expected: serde_json::Value = $expected;
        assert_eq!(
            parsed,
            expected,
            "JSON mismatch\n\nExpected:\n{}\n\nActual:\n{}",
            serde_json::to_string_pretty(&expected).unwrap(),
            serde_json::to_string_pretty(&parsed).unwrap()
        );
    };
}

/// Assert that a string does NOT contain ANSI escape codes.
#[macro_export]
macro_rules! assert_no_ansi_codes {
    ($text:expr) => {
        let text = $text;
        assert!(
            !text.contains('\x1b'),
            "Expected string to NOT contain ANSI escape codes.\n\nActual string:\n{:?}",
            text
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_renders_tags() {
        let note = make_test_note(1, "x");
        assert_eq!(note.tag_names().collect::<Vec<_>>(), ["work", "ideas"]);
    }

    #[test]
    fn test_dir_round_trip() {
        let dir = TestDir::new();
        let path = dir.create_file("nested/a.yaml", "k: v");
        assert!(path.starts_with(dir.path()));
        assert_eq!(dir.read_file("nested/a.yaml").unwrap(), "k: v");
    }

    #[test]
    fn test_config_parses() {
        let entries = crate::storage::config::parse_entries(&make_test_config("http://h:1"));
        assert_eq!(entries["server_url"], "http://h:1");
        assert_eq!(entries["token"], "test-token");
    }
}
