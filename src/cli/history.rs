//! `history`.

use crate::cli::dispatch::{CommandSpec, Invocation, positional_id};
use crate::cli::options::ParsedOptions;
use crate::cli::output::CommandOutput;
use crate::core::http::BlinkoClient;
use crate::core::models::NoteId;
use crate::error::Result;

pub(crate) fn parse_history(spec: &CommandSpec, opts: &ParsedOptions) -> Result<Invocation> {
    positional_id(spec, opts, 0, "note id").map(Invocation::History)
}

/// Fetch the version history of a note.
///
/// # Errors
///
/// Transport or response errors.
pub async fn execute(client: &BlinkoClient, id: NoteId) -> Result<CommandOutput> {
    let rows = client.note_history(id).await?;
    Ok(CommandOutput::History(rows))
}
