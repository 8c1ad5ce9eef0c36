//! `ref` and `refs`.

use crate::cli::dispatch::{CommandSpec, Invocation, positional_id};
use crate::cli::options::ParsedOptions;
use crate::cli::output::CommandOutput;
use crate::core::http::BlinkoClient;
use crate::core::models::{NoteId, ReferenceDirection};
use crate::error::Result;

pub(crate) fn parse_ref(spec: &CommandSpec, opts: &ParsedOptions) -> Result<Invocation> {
    let from = positional_id(spec, opts, 0, "source note id")?;
    let to = positional_id(spec, opts, 1, "target note id")?;
    Ok(Invocation::AddReference { from, to })
}

pub(crate) fn parse_refs(spec: &CommandSpec, opts: &ParsedOptions) -> Result<Invocation> {
    positional_id(spec, opts, 0, "note id").map(Invocation::References)
}

/// Add a directed reference between two notes.
///
/// # Errors
///
/// Transport errors.
pub async fn add(client: &BlinkoClient, from: NoteId, to: NoteId) -> Result<CommandOutput> {
    client.add_reference(from, to).await?;
    Ok(CommandOutput::ReferenceAdded { from, to })
}

/// List references in both directions: outgoing first, then incoming.
///
/// The two requests are issued one after the other.
///
/// # Errors
///
/// Transport or response errors from either request.
pub async fn list(client: &BlinkoClient, id: NoteId) -> Result<CommandOutput> {
    let outgoing = client
        .reference_list(id, ReferenceDirection::Outgoing)
        .await?;
    let incoming = client
        .reference_list(id, ReferenceDirection::Incoming)
        .await?;
    tracing::debug!(%id, outgoing = outgoing.len(), incoming = incoming.len(), "Fetched references");
    Ok(CommandOutput::References { outgoing, incoming })
}
