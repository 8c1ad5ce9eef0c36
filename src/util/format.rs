//! Text formatting helpers for note output.

use chrono::{DateTime, Local};

/// Preview width for `list` rows.
pub const LIST_PREVIEW: usize = 80;
/// Preview width for reference entries.
pub const REFERENCE_PREVIEW: usize = 90;
/// Preview width for `search` and `history` rows.
pub const WIDE_PREVIEW: usize = 120;

/// Collapse whitespace runs to single spaces and cap the length at `max`
/// characters, marking truncation with `…`.
#[must_use]
pub fn short_content(text: &str, max: usize) -> String {
    let one_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if one_line.chars().count() <= max {
        return one_line;
    }
    let mut cut: String = one_line.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Human label for a note type code.
#[must_use]
pub fn note_type_label(note_type: Option<i64>) -> String {
    match note_type {
        Some(0) => "Blinko".to_string(),
        Some(1) => "Note".to_string(),
        Some(2) => "Todo".to_string(),
        Some(other) => format!("Type {other}"),
        None => "Type ?".to_string(),
    }
}

/// Render a server timestamp in local time; unparseable values pass through.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw).map_or_else(
        |_| raw.to_string(),
        |dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
    )
}

/// Space-separated `#tag` list.
#[must_use]
pub fn format_tags<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names
        .map(|name| format!("#{name}"))
        .collect::<Vec<_>>()
        .join(" ")
}
