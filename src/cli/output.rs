//! Typed results of executed commands.

use serde::Serialize;

use crate::core::models::{HistoryRow, Note, NoteId, ReferenceEntry};

/// What a command produced, ready for any renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum CommandOutput {
    /// `create`: the stored note.
    Created(Note),
    /// `show`: the fetched note.
    Detail(Note),
    /// `update`: the stored note.
    Updated(Note),
    /// `list`: one page of notes.
    Listing(Vec<Note>),
    /// `search`: one page of matches.
    SearchResults(Vec<Note>),
    /// `trash`: number of ids sent.
    Trashed(usize),
    /// `delete`: number of ids sent.
    Deleted(usize),
    /// `clear-bin`.
    BinCleared,
    /// `ref`: the edge that was added.
    ReferenceAdded { from: NoteId, to: NoteId },
    /// `refs`: both directions, outgoing first.
    References {
        outgoing: Vec<ReferenceEntry>,
        incoming: Vec<ReferenceEntry>,
    },
    /// `history`: version rows.
    History(Vec<HistoryRow>),
}
