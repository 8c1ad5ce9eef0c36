//! `create`, `show` and `update`.

use crate::cli::dispatch::{CommandSpec, Invocation, int_flag, positional_id};
use crate::cli::options::ParsedOptions;
use crate::cli::output::CommandOutput;
use crate::core::http::BlinkoClient;
use crate::core::models::{DEFAULT_NOTE_TYPE, NoteId, UpsertNote};
use crate::error::Result;

pub const FLAG_TYPE: &str = "-t";
pub const FLAG_REF: &str = "--ref";
pub const FLAG_TOP: &str = "--top";
pub const FLAG_UNTOP: &str = "--untop";
pub const FLAG_CONTENT: &str = "-c";

/// A validated `create` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateNote {
    pub content: String,
    pub note_type: i32,
    pub pinned: bool,
    pub references: Vec<NoteId>,
}

impl CreateNote {
    /// Upsert body without an id, so the server allocates one.
    #[must_use]
    pub fn to_request(&self) -> UpsertNote {
        UpsertNote {
            id: None,
            content: Some(self.content.clone()),
            note_type: Some(self.note_type),
            is_top: Some(self.pinned),
            references: Some(self.references.clone()),
        }
    }
}

/// A validated `update` invocation: at least one field is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateNote {
    pub id: NoteId,
    pub content: Option<String>,
    pub pinned: Option<bool>,
}

impl UpdateNote {
    /// Upsert body carrying only the fields being changed.
    #[must_use]
    pub fn to_request(&self) -> UpsertNote {
        UpsertNote {
            id: Some(self.id),
            content: self.content.clone(),
            is_top: self.pinned,
            ..UpsertNote::default()
        }
    }
}

pub(crate) fn parse_create(spec: &CommandSpec, opts: &ParsedOptions) -> Result<Invocation> {
    let content = opts.joined();
    if content.is_empty() {
        return Err(spec.usage_error("note content is required"));
    }
    let note_type = int_flag(spec, opts, FLAG_TYPE)?.unwrap_or(DEFAULT_NOTE_TYPE);
    let references = match opts.value(FLAG_REF) {
        Some(csv) => parse_reference_ids(spec, csv)?,
        None => Vec::new(),
    };
    Ok(Invocation::Create(CreateNote {
        content,
        note_type,
        pinned: opts.is_present(FLAG_TOP),
        references,
    }))
}

/// Split `--ref` on commas; empty entries are skipped, invalid ids rejected.
fn parse_reference_ids(spec: &CommandSpec, csv: &str) -> Result<Vec<NoteId>> {
    csv.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            NoteId::parse(entry)
                .ok_or_else(|| spec.usage_error(format!("invalid note id in {FLAG_REF}: {entry}")))
        })
        .collect()
}

pub(crate) fn parse_show(spec: &CommandSpec, opts: &ParsedOptions) -> Result<Invocation> {
    positional_id(spec, opts, 0, "note id").map(Invocation::Show)
}

pub(crate) fn parse_update(spec: &CommandSpec, opts: &ParsedOptions) -> Result<Invocation> {
    let id = positional_id(spec, opts, 0, "note id")?;
    let pinned = match (opts.is_present(FLAG_TOP), opts.is_present(FLAG_UNTOP)) {
        (true, true) => {
            return Err(spec.usage_error(format!(
                "{FLAG_TOP} and {FLAG_UNTOP} cannot be combined"
            )));
        }
        (true, false) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    };
    let content = opts.value(FLAG_CONTENT).map(str::to_string);
    if content.is_none() && pinned.is_none() {
        return Err(spec.usage_error(format!(
            "nothing to update: pass {FLAG_CONTENT}, {FLAG_TOP} or {FLAG_UNTOP}"
        )));
    }
    Ok(Invocation::Update(UpdateNote {
        id,
        content,
        pinned,
    }))
}

/// Create a note.
///
/// # Errors
///
/// Transport or response errors.
pub async fn create(client: &BlinkoClient, args: &CreateNote) -> Result<CommandOutput> {
    tracing::debug!(
        note_type = args.note_type,
        pinned = args.pinned,
        references = args.references.len(),
        "Creating note"
    );
    let note = client.upsert_note(&args.to_request()).await?;
    Ok(CommandOutput::Created(note))
}

/// Fetch one note.
///
/// # Errors
///
/// Transport or response errors.
pub async fn show(client: &BlinkoClient, id: NoteId) -> Result<CommandOutput> {
    let note = client.note_detail(id).await?;
    Ok(CommandOutput::Detail(note))
}

/// Update fields of an existing note.
///
/// # Errors
///
/// Transport or response errors.
pub async fn update(client: &BlinkoClient, args: &UpdateNote) -> Result<CommandOutput> {
    tracing::debug!(id = %args.id, content = args.content.is_some(), pinned = ?args.pinned, "Updating note");
    let note = client.upsert_note(&args.to_request()).await?;
    Ok(CommandOutput::Updated(note))
}
