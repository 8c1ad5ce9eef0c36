//! Core functionality: wire models, HTTP transport, API calls and logging.

pub mod api;
pub mod http;
pub mod logging;
pub mod models;

pub use http::BlinkoClient;
pub use models::{HistoryRow, Note, NoteId, ReferenceDirection, ReferenceEntry};
