//! Blinko API data models.
//!
//! Request bodies are built from validated invocations and always carry the
//! fields the server expects. Response types are deliberately loose: every
//! field is optional and unknown fields are ignored, since the renderer has
//! to cope with whatever the server sends back.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Identifiers
// =============================================================================

/// A note id: always a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    /// Parse a command-line token into an id.
    ///
    /// Returns `None` for anything that is not a positive integer.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        token
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .map(Self)
    }

    /// Parse every token, silently dropping invalid ones.
    #[must_use]
    pub fn parse_all<S: AsRef<str>>(tokens: &[S]) -> Vec<Self> {
        tokens
            .iter()
            .filter_map(|t| Self::parse(t.as_ref()))
            .collect()
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Note type used when `create` is not given `-t`.
pub const DEFAULT_NOTE_TYPE: i32 = 0;

/// Note type filter meaning "all types".
pub const ALL_NOTE_TYPES: i32 = -1;

/// Page size for `list` and `search` when `-s` is absent.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

// =============================================================================
// Request bodies
// =============================================================================

/// Body of `/v1/note/upsert`, shared by create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertNote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<NoteId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub note_type: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_top: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<NoteId>>,
}

/// Body of `/v1/note/detail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NoteDetailQuery {
    pub id: NoteId,
}

/// Sort order for note listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Body of `/v1/note/list`, used by both `list` and `search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNotesQuery {
    pub page: u32,
    pub size: u32,
    pub order_by: SortOrder,
    #[serde(rename = "type")]
    pub note_type: i32,
    pub is_recycle: bool,
    pub search_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_use_ai_query: Option<bool>,
}

impl Default for ListNotesQuery {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
            order_by: SortOrder::Desc,
            note_type: ALL_NOTE_TYPES,
            is_recycle: false,
            search_text: String::new(),
            is_use_ai_query: None,
        }
    }
}

/// Body of the batch trash/delete endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteIds {
    pub ids: Vec<NoteId>,
}

/// Body of `/v1/note/add-reference`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddReference {
    pub from_note_id: NoteId,
    pub to_note_id: NoteId,
}

/// Which side of a reference edge to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReferenceDirection {
    /// Notes this note points to.
    #[serde(rename = "references")]
    Outgoing,
    /// Notes pointing at this note.
    #[serde(rename = "referencedBy")]
    Incoming,
}

impl ReferenceDirection {
    /// Label used by the server and in output headings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Outgoing => "references",
            Self::Incoming => "referencedBy",
        }
    }
}

/// Body of `/v1/note/reference-list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceListQuery {
    pub note_id: NoteId,
    #[serde(rename = "type")]
    pub direction: ReferenceDirection,
}

// =============================================================================
// Responses
// =============================================================================

/// Tag name as nested by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A tag attached to a note: either `{tag: {name}}` or `{name}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl NoteTag {
    /// Display name, preferring the nested tag.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.tag
            .as_ref()
            .and_then(|t| t.name.as_deref())
            .or(self.name.as_deref())
            .unwrap_or("")
    }
}

/// A note as returned by detail, upsert and list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Note {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub note_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_top: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_recycle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<NoteTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Note {
    /// Tag names in server order.
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().flatten().map(NoteTag::display_name)
    }

    /// Most recent timestamp the note carries.
    #[must_use]
    pub fn last_touched(&self) -> Option<&str> {
        self.updated_at.as_deref().or(self.created_at.as_deref())
    }
}

/// One entry of a reference listing.
///
/// Some server versions wrap the linked note in `note`, others return the
/// note fields directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<Note>,
    #[serde(flatten)]
    pub inline: Note,
}

impl ReferenceEntry {
    /// The linked note, wherever the server put it.
    #[must_use]
    pub fn target(&self) -> &Note {
        self.note.as_ref().unwrap_or(&self.inline)
    }
}

/// One row of a note's version history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HistoryRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Note>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl HistoryRow {
    /// Version label: the version number, else the row id, else `-`.
    #[must_use]
    pub fn version_label(&self) -> String {
        self.version
            .or(self.id)
            .map_or_else(|| "-".to_string(), |v| v.to_string())
    }

    /// Content of this version, falling back to the nested note.
    #[must_use]
    pub fn text(&self) -> &str {
        self.content
            .as_deref()
            .or_else(|| self.note.as_ref().and_then(|n| n.content.as_deref()))
            .unwrap_or("")
    }

    /// Most recent timestamp the row carries.
    #[must_use]
    pub fn last_touched(&self) -> Option<&str> {
        self.updated_at.as_deref().or(self.created_at.as_deref())
    }
}
