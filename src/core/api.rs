//! Typed Blinko endpoints.
//!
//! Thin wrappers over [`BlinkoClient::send`] so command handlers never build
//! paths or bodies by hand.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::http::BlinkoClient;
use crate::core::models::{
    AddReference, HistoryRow, ListNotesQuery, Note, NoteDetailQuery, NoteId, NoteIds,
    ReferenceDirection, ReferenceEntry, ReferenceListQuery, UpsertNote,
};
use crate::error::{BlinkoError, Result};

const UPSERT: &str = "/v1/note/upsert";
const DETAIL: &str = "/v1/note/detail";
const LIST: &str = "/v1/note/list";
const BATCH_TRASH: &str = "/v1/note/batch-trash";
const BATCH_DELETE: &str = "/v1/note/batch-delete";
const CLEAR_RECYCLE_BIN: &str = "/v1/note/clear-recycle-bin";
const ADD_REFERENCE: &str = "/v1/note/add-reference";
const REFERENCE_LIST: &str = "/v1/note/reference-list";
const HISTORY: &str = "/v1/note/history";

/// Decode a listing; anything that is not an array counts as empty.
fn list_or_empty<T: DeserializeOwned>(payload: Value) -> Result<Vec<T>> {
    match payload {
        Value::Array(_) => {
            serde_json::from_value(payload).map_err(|e| BlinkoError::ParseResponse(e.to_string()))
        }
        other => {
            tracing::debug!(kind = json_kind(&other), "Non-array listing treated as empty");
            Ok(Vec::new())
        }
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl BlinkoClient {
    /// Create or update a note.
    ///
    /// # Errors
    ///
    /// Transport errors, or [`BlinkoError::ParseResponse`] if the reply is not a note.
    pub async fn upsert_note(&self, body: &UpsertNote) -> Result<Note> {
        self.send_as(Method::POST, UPSERT, Some(body), &[]).await
    }

    /// Fetch one note.
    ///
    /// # Errors
    ///
    /// Transport errors, or [`BlinkoError::ParseResponse`] if the reply is not a note.
    pub async fn note_detail(&self, id: NoteId) -> Result<Note> {
        self.send_as(Method::POST, DETAIL, Some(&NoteDetailQuery { id }), &[])
            .await
    }

    /// List or search notes.
    ///
    /// # Errors
    ///
    /// Transport errors, or [`BlinkoError::ParseResponse`] for malformed entries.
    pub async fn list_notes(&self, query: &ListNotesQuery) -> Result<Vec<Note>> {
        let payload = self.send(Method::POST, LIST, Some(query), &[]).await?;
        list_or_empty(payload)
    }

    /// Move notes to the recycle bin.
    ///
    /// # Errors
    ///
    /// Transport errors.
    pub async fn trash_notes(&self, ids: &[NoteId]) -> Result<()> {
        let body = NoteIds { ids: ids.to_vec() };
        self.send(Method::POST, BATCH_TRASH, Some(&body), &[]).await?;
        Ok(())
    }

    /// Delete notes permanently.
    ///
    /// # Errors
    ///
    /// Transport errors.
    pub async fn delete_notes(&self, ids: &[NoteId]) -> Result<()> {
        let body = NoteIds { ids: ids.to_vec() };
        self.send(Method::POST, BATCH_DELETE, Some(&body), &[]).await?;
        Ok(())
    }

    /// Empty the recycle bin.
    ///
    /// # Errors
    ///
    /// Transport errors.
    pub async fn clear_recycle_bin(&self) -> Result<()> {
        let empty = serde_json::Map::new();
        self.send(Method::POST, CLEAR_RECYCLE_BIN, Some(&empty), &[])
            .await?;
        Ok(())
    }

    /// Add a directed reference `from -> to`.
    ///
    /// # Errors
    ///
    /// Transport errors.
    pub async fn add_reference(&self, from: NoteId, to: NoteId) -> Result<()> {
        let body = AddReference {
            from_note_id: from,
            to_note_id: to,
        };
        self.send(Method::POST, ADD_REFERENCE, Some(&body), &[])
            .await?;
        Ok(())
    }

    /// References of `note_id` in one direction.
    ///
    /// # Errors
    ///
    /// Transport errors, or [`BlinkoError::ParseResponse`] for malformed entries.
    pub async fn reference_list(
        &self,
        note_id: NoteId,
        direction: ReferenceDirection,
    ) -> Result<Vec<ReferenceEntry>> {
        let body = ReferenceListQuery { note_id, direction };
        let payload = self
            .send(Method::POST, REFERENCE_LIST, Some(&body), &[])
            .await?;
        list_or_empty(payload)
    }

    /// Version history of a note.
    ///
    /// # Errors
    ///
    /// Transport errors, or [`BlinkoError::ParseResponse`] for malformed rows.
    pub async fn note_history(&self, note_id: NoteId) -> Result<Vec<HistoryRow>> {
        let query = [("noteId", note_id.to_string())];
        let payload = self
            .send::<()>(Method::GET, HISTORY, None, &query)
            .await?;
        list_or_empty(payload)
    }
}
