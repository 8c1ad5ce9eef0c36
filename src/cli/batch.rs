//! `trash`, `delete` and `clear-bin`.

use crate::cli::dispatch::{CommandSpec, Invocation};
use crate::cli::options::ParsedOptions;
use crate::cli::output::CommandOutput;
use crate::core::http::BlinkoClient;
use crate::core::models::NoteId;
use crate::error::Result;

/// Valid ids among the positionals; invalid tokens are dropped.
fn batch_ids(spec: &CommandSpec, opts: &ParsedOptions) -> Result<Vec<NoteId>> {
    let ids = NoteId::parse_all(opts.positionals());
    let dropped = opts.positionals().len() - ids.len();
    if dropped > 0 {
        tracing::debug!(command = spec.name, dropped, "Ignoring invalid note ids");
    }
    if ids.is_empty() {
        return Err(spec.usage_error("at least one valid note id is required"));
    }
    Ok(ids)
}

pub(crate) fn parse_trash(spec: &CommandSpec, opts: &ParsedOptions) -> Result<Invocation> {
    batch_ids(spec, opts).map(Invocation::Trash)
}

pub(crate) fn parse_delete(spec: &CommandSpec, opts: &ParsedOptions) -> Result<Invocation> {
    batch_ids(spec, opts).map(Invocation::Delete)
}

pub(crate) fn parse_clear_bin(_spec: &CommandSpec, _opts: &ParsedOptions) -> Result<Invocation> {
    Ok(Invocation::ClearBin)
}

/// Move notes to the recycle bin.
///
/// # Errors
///
/// Transport errors.
pub async fn trash(client: &BlinkoClient, ids: &[NoteId]) -> Result<CommandOutput> {
    client.trash_notes(ids).await?;
    Ok(CommandOutput::Trashed(ids.len()))
}

/// Permanently delete notes.
///
/// # Errors
///
/// Transport errors.
pub async fn delete(client: &BlinkoClient, ids: &[NoteId]) -> Result<CommandOutput> {
    client.delete_notes(ids).await?;
    Ok(CommandOutput::Deleted(ids.len()))
}

/// Empty the recycle bin.
///
/// # Errors
///
/// Transport errors.
pub async fn clear_bin(client: &BlinkoClient) -> Result<CommandOutput> {
    client.clear_recycle_bin().await?;
    Ok(CommandOutput::BinCleared)
}
