//! Test fixtures and mock-server helpers for integration tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use common::fixtures::*;
//!
//! let note: serde_json::Value = load_fixture("note_detail.json");
//! let server = BlinkoServer::start().await;
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use wiremock::MockServer;

use blinko::test_utils::{TestDir, make_test_config};

// =============================================================================
// Fixture Loading
// =============================================================================

/// Get the path to the fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Load a JSON fixture file and deserialize it.
///
/// # Panics
///
/// Panics if the file cannot be read or parsed.
pub fn load_fixture<T: DeserializeOwned>(path: &str) -> T {
    let full_path = fixtures_dir().join(path);
    let content = fs::read_to_string(&full_path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {e}", full_path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {e}", full_path.display()))
}

// =============================================================================
// Mock Server
// =============================================================================

/// A wiremock server plus a credential file pointing at it.
pub struct BlinkoServer {
    pub mock: MockServer,
    _dir: TestDir,
    config: PathBuf,
}

impl BlinkoServer {
    /// Start a mock server and write a matching credential file.
    pub async fn start() -> Self {
        let mock = MockServer::start().await;
        let dir = TestDir::new();
        // Trailing slash exercises base URL trimming.
        let config = dir.create_file(
            "blinko.skill.yaml",
            &make_test_config(&format!("{}/", mock.uri())),
        );
        Self {
            mock,
            _dir: dir,
            config,
        }
    }

    /// Path of the credential file.
    pub fn config_path(&self) -> &Path {
        &self.config
    }

    /// Bodies of every request received, decoded as JSON.
    pub async fn request_bodies(&self) -> Vec<serde_json::Value> {
        self.mock
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|req| serde_json::from_slice(&req.body).unwrap_or(serde_json::Value::Null))
            .collect()
    }

    /// Paths of every request received, in order.
    pub async fn request_paths(&self) -> Vec<String> {
        self.mock
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|req| req.url.path().to_string())
            .collect()
    }
}
