//! Utility functions.

pub mod env;
pub mod format;

pub use format::{format_tags, format_timestamp, note_type_label, short_content};
