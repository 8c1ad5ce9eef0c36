//! Human-readable output.
//!
//! Every remote field is optional; missing values render as empty text
//! rather than failing.

use std::fmt::Write as _;

use colored::Colorize;

use crate::cli::output::CommandOutput;
use crate::core::models::{HistoryRow, Note, ReferenceDirection, ReferenceEntry};
use crate::util::format::{LIST_PREVIEW, REFERENCE_PREVIEW, WIDE_PREVIEW};
use crate::util::{format_tags, format_timestamp, note_type_label, short_content};

const SUCCESS_MARK: &str = "✓";
const PIN_MARK: &str = " 📌";
const NONE_MARKER: &str = "  (none)";

fn success(message: &str, color: bool) -> String {
    if color {
        format!("{} {message}\n", SUCCESS_MARK.green().bold())
    } else {
        format!("{SUCCESS_MARK} {message}\n")
    }
}

fn id_label(id: Option<i64>, color: bool) -> String {
    let label = format!("[{}]", id.map_or_else(|| "?".to_string(), |id| id.to_string()));
    if color {
        label.cyan().to_string()
    } else {
        label
    }
}

fn id_text(id: Option<i64>) -> String {
    id.map_or_else(|| "?".to_string(), |id| id.to_string())
}

/// Render a command result as text, one trailing newline per line.
#[must_use]
pub fn render(output: &CommandOutput, color: bool) -> String {
    match output {
        CommandOutput::Created(note) => success(
            &format!(
                "Created {} #{}",
                note_type_label(note.note_type),
                id_text(note.id)
            ),
            color,
        ),
        CommandOutput::Updated(note) => success(&format!("Updated #{}", id_text(note.id)), color),
        CommandOutput::Detail(note) => render_detail(note, color),
        CommandOutput::Listing(notes) => render_rows(notes, LIST_PREVIEW, color),
        CommandOutput::SearchResults(notes) => {
            if notes.is_empty() {
                return render_rows(notes, WIDE_PREVIEW, color);
            }
            let mut out = format!("Found {} notes:\n\n", notes.len());
            out.push_str(&render_rows(notes, WIDE_PREVIEW, color));
            out
        }
        CommandOutput::Trashed(count) => success(&format!("Trashed {count} notes"), color),
        CommandOutput::Deleted(count) => success(&format!("Deleted {count} notes"), color),
        CommandOutput::BinCleared => success("Recycle bin cleared", color),
        CommandOutput::ReferenceAdded { from, to } => {
            success(&format!("Added reference: {from} -> {to}"), color)
        }
        CommandOutput::References { outgoing, incoming } => {
            let mut out = render_reference_section(ReferenceDirection::Outgoing, outgoing, color);
            out.push_str(&render_reference_section(
                ReferenceDirection::Incoming,
                incoming,
                color,
            ));
            out
        }
        CommandOutput::History(rows) => render_history(rows, color),
    }
}

fn render_detail(note: &Note, color: bool) -> String {
    let mut out = String::new();
    let pin = if note.is_top.unwrap_or(false) { PIN_MARK } else { "" };
    let recycled = if note.is_recycle.unwrap_or(false) {
        " (recycle bin)"
    } else {
        ""
    };
    let _ = writeln!(
        out,
        "{} {}{pin}{recycled}",
        id_label(note.id, color),
        note_type_label(note.note_type)
    );
    let tags = format_tags(note.tag_names());
    if !tags.is_empty() {
        let _ = writeln!(out, "{tags}");
    }
    let _ = writeln!(out, "{}", note.content.as_deref().unwrap_or(""));
    if let Some(created) = note.created_at.as_deref() {
        let _ = writeln!(out, "Created: {}", format_timestamp(created));
    }
    if let Some(updated) = note.updated_at.as_deref() {
        let _ = writeln!(out, "Updated: {}", format_timestamp(updated));
    }
    out
}

fn render_rows(notes: &[Note], preview: usize, color: bool) -> String {
    if notes.is_empty() {
        return "No results\n".to_string();
    }
    let mut out = String::new();
    for note in notes {
        let header = format!(
            "{} {} {}",
            id_label(note.id, color),
            note_type_label(note.note_type),
            format_tags(note.tag_names())
        );
        let _ = writeln!(out, "{}", header.trim_end());
        let _ = writeln!(
            out,
            "    {}",
            short_content(note.content.as_deref().unwrap_or(""), preview)
        );
        let _ = writeln!(
            out,
            "    {}",
            note.last_touched().map(format_timestamp).unwrap_or_default()
        );
        out.push('\n');
    }
    out
}

fn render_reference_section(
    direction: ReferenceDirection,
    entries: &[ReferenceEntry],
    color: bool,
) -> String {
    let mut out = format!("{} ({})\n", direction.label(), entries.len());
    if entries.is_empty() {
        out.push_str(NONE_MARKER);
        out.push('\n');
        return out;
    }
    for entry in entries {
        let note = entry.target();
        let _ = writeln!(
            out,
            "  {} {}",
            id_label(note.id, color),
            short_content(note.content.as_deref().unwrap_or(""), REFERENCE_PREVIEW)
        );
    }
    out
}

fn render_history(rows: &[HistoryRow], color: bool) -> String {
    if rows.is_empty() {
        return "No history\n".to_string();
    }
    let mut out = String::new();
    for row in rows {
        let version = format!("[v{}]", row.version_label());
        let version = if color {
            version.cyan().to_string()
        } else {
            version
        };
        let _ = writeln!(
            out,
            "{version} {}",
            row.last_touched().map(format_timestamp).unwrap_or_default()
        );
        let _ = writeln!(out, "    {}", short_content(row.text(), WIDE_PREVIEW));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::NoteId;
    use crate::test_utils::{make_test_history_row, make_test_note, make_test_note_minimal};
    use crate::{assert_contains, assert_no_ansi_codes, assert_not_contains};
    use serde_json::json;

    #[test]
    fn created_confirmation_names_type_and_id() {
        let out = render(&CommandOutput::Created(make_test_note(12, "x")), false);
        assert_eq!(out, "✓ Created Note #12\n");
    }

    #[test]
    fn updated_confirmation_with_missing_id() {
        let out = render(&CommandOutput::Updated(Note::default()), false);
        assert_eq!(out, "✓ Updated #?\n");
    }

    #[test]
    fn detail_shows_pin_tags_and_content() {
        let mut note = make_test_note(3, "Line one\nLine two");
        note.is_top = Some(true);
        let out = render(&CommandOutput::Detail(note), false);
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("[3] Note 📌"));
        assert_eq!(lines.next(), Some("#work #ideas"));
        assert_eq!(lines.next(), Some("Line one"));
        assert_eq!(lines.next(), Some("Line two"));
        assert_contains!(&out, "Created: 2026-03-10 ");
        assert_contains!(&out, "Updated: 2026-03-11 ");
    }

    #[test]
    fn detail_of_empty_note_does_not_panic() {
        let out = render(&CommandOutput::Detail(Note::default()), false);
        assert_eq!(out, "[?] Type ?\n\n");
    }

    #[test]
    fn detail_marks_recycled_notes() {
        let mut note = make_test_note_minimal(8);
        note.is_recycle = Some(true);
        let out = render(&CommandOutput::Detail(note), false);
        assert_contains!(&out, "(recycle bin)");
    }

    #[test]
    fn empty_listing_says_no_results() {
        assert_eq!(render(&CommandOutput::Listing(vec![]), false), "No results\n");
        assert_eq!(
            render(&CommandOutput::SearchResults(vec![]), false),
            "No results\n"
        );
    }

    #[test]
    fn listing_rows_have_header_preview_and_time() {
        let long = "word ".repeat(40);
        let out = render(&CommandOutput::Listing(vec![make_test_note(1, &long)]), false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "[1] Note #work #ideas");
        assert!(lines[1].starts_with("    word word"));
        assert_eq!(lines[1].chars().count(), 4 + LIST_PREVIEW);
        assert!(lines[1].ends_with('…'));
        assert!(lines[2].starts_with("    2026-03-11 "));
        assert_eq!(lines[3], "");
    }

    #[test]
    fn listing_row_without_tags_has_no_trailing_space() {
        let out = render(&CommandOutput::Listing(vec![make_test_note_minimal(4)]), false);
        assert_eq!(out.lines().next(), Some("[4] Blinko"));
    }

    #[test]
    fn search_prints_count_first() {
        let notes = vec![make_test_note(1, "a"), make_test_note(2, "b")];
        let out = render(&CommandOutput::SearchResults(notes), false);
        assert!(out.starts_with("Found 2 notes:\n\n[1]"));
    }

    #[test]
    fn batch_confirmations() {
        assert_eq!(render(&CommandOutput::Trashed(2), false), "✓ Trashed 2 notes\n");
        assert_eq!(render(&CommandOutput::Deleted(1), false), "✓ Deleted 1 notes\n");
        assert_eq!(
            render(&CommandOutput::BinCleared, false),
            "✓ Recycle bin cleared\n"
        );
    }

    #[test]
    fn reference_added_mentions_both_ids() {
        let out = render(
            &CommandOutput::ReferenceAdded {
                from: NoteId::parse("5").unwrap(),
                to: NoteId::parse("9").unwrap(),
            },
            false,
        );
        assert_eq!(out, "✓ Added reference: 5 -> 9\n");
    }

    #[test]
    fn references_print_both_sections_with_none_marker() {
        let out = render(
            &CommandOutput::References {
                outgoing: vec![],
                incoming: vec![],
            },
            false,
        );
        assert_eq!(out, "references (0)\n  (none)\nreferencedBy (0)\n  (none)\n");
    }

    #[test]
    fn references_use_nested_note() {
        let entry: ReferenceEntry =
            serde_json::from_value(json!({"id": 100, "note": {"id": 9, "content": "target"}}))
                .unwrap();
        let out = render(
            &CommandOutput::References {
                outgoing: vec![entry],
                incoming: vec![],
            },
            false,
        );
        assert_contains!(&out, "references (1)\n  [9] target\n");
        assert_not_contains!(&out, "[100]");
    }

    #[test]
    fn history_rows_and_empty_marker() {
        assert_eq!(render(&CommandOutput::History(vec![]), false), "No history\n");
        let row: HistoryRow =
            serde_json::from_value(json!({"version": 3, "content": "v3 text", "updatedAt": "x"}))
                .unwrap();
        let out = render(&CommandOutput::History(vec![row]), false);
        assert_eq!(out, "[v3] x\n    v3 text\n");
    }

    #[test]
    fn history_rows_keep_server_order() {
        let rows = vec![
            make_test_history_row(2, "second  draft"),
            make_test_history_row(1, "first draft"),
        ];
        let out = render(&CommandOutput::History(rows), false);
        let v2 = out.find("[v2] ").unwrap();
        let v1 = out.find("[v1] ").unwrap();
        assert!(v2 < v1);
        assert_contains!(&out, "    second draft\n");
    }

    #[test]
    fn no_color_output_has_no_ansi() {
        let out = render(&CommandOutput::Listing(vec![make_test_note(1, "a")]), false);
        assert_no_ansi_codes!(&out);
    }
}
