//! `list` and `search`.

use crate::cli::dispatch::{CommandSpec, Invocation, int_flag};
use crate::cli::options::ParsedOptions;
use crate::cli::output::CommandOutput;
use crate::core::http::BlinkoClient;
use crate::core::models::{ALL_NOTE_TYPES, DEFAULT_PAGE_SIZE, ListNotesQuery};
use crate::error::Result;

pub const FLAG_SIZE: &str = "-s";
pub const FLAG_TYPE: &str = "-t";
pub const FLAG_RECYCLE: &str = "--recycle";
pub const FLAG_AI: &str = "--ai";

/// A validated `list` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListNotes {
    pub size: u32,
    pub note_type: i32,
    pub recycle: bool,
}

impl ListNotes {
    /// First page, newest first, no search text.
    #[must_use]
    pub fn to_query(&self) -> ListNotesQuery {
        ListNotesQuery {
            size: self.size,
            note_type: self.note_type,
            is_recycle: self.recycle,
            ..ListNotesQuery::default()
        }
    }
}

/// A validated `search` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNotes {
    pub query: String,
    pub size: u32,
    pub ai: bool,
}

impl SearchNotes {
    /// First page over all live notes matching the query.
    #[must_use]
    pub fn to_query(&self) -> ListNotesQuery {
        ListNotesQuery {
            size: self.size,
            search_text: self.query.clone(),
            is_use_ai_query: Some(self.ai),
            ..ListNotesQuery::default()
        }
    }
}

fn page_size(spec: &CommandSpec, opts: &ParsedOptions) -> Result<u32> {
    match int_flag::<u32>(spec, opts, FLAG_SIZE)? {
        None => Ok(DEFAULT_PAGE_SIZE),
        Some(0) => Err(spec.usage_error(format!("{FLAG_SIZE} must be at least 1"))),
        Some(size) => Ok(size),
    }
}

pub(crate) fn parse_list(spec: &CommandSpec, opts: &ParsedOptions) -> Result<Invocation> {
    Ok(Invocation::List(ListNotes {
        size: page_size(spec, opts)?,
        note_type: int_flag(spec, opts, FLAG_TYPE)?.unwrap_or(ALL_NOTE_TYPES),
        recycle: opts.is_present(FLAG_RECYCLE),
    }))
}

pub(crate) fn parse_search(spec: &CommandSpec, opts: &ParsedOptions) -> Result<Invocation> {
    let query = opts.joined();
    if query.is_empty() {
        return Err(spec.usage_error("search query is required"));
    }
    Ok(Invocation::Search(SearchNotes {
        query,
        size: page_size(spec, opts)?,
        ai: opts.is_present(FLAG_AI),
    }))
}

/// List notes.
///
/// # Errors
///
/// Transport or response errors.
pub async fn list(client: &BlinkoClient, args: &ListNotes) -> Result<CommandOutput> {
    let notes = client.list_notes(&args.to_query()).await?;
    tracing::debug!(count = notes.len(), "Listed notes");
    Ok(CommandOutput::Listing(notes))
}

/// Search notes.
///
/// # Errors
///
/// Transport or response errors.
pub async fn search(client: &BlinkoClient, args: &SearchNotes) -> Result<CommandOutput> {
    let notes = client.list_notes(&args.to_query()).await?;
    tracing::debug!(count = notes.len(), ai = args.ai, "Search finished");
    Ok(CommandOutput::SearchResults(notes))
}
