//! Command registry and dispatch.
//!
//! Each command is one [`CommandSpec`] entry: its name, usage line, the flags
//! that consume a value, and a parse function that turns the raw tokens into a
//! typed [`Invocation`]. Dispatch runs in a fixed order: help and unknown
//! commands are settled first, then the tokens are parsed and validated, and
//! only a valid invocation loads the credential file and reaches the network.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use crate::cli::options::{self, ParsedOptions};
use crate::cli::output::CommandOutput;
use crate::cli::{batch, history, listing, note, reference};
use crate::core::http::BlinkoClient;
use crate::core::models::NoteId;
use crate::error::{BlinkoError, Result};
use crate::render::RenderOptions;
use crate::storage::Config;

/// Words that print the command list instead of running a command.
pub const HELP_ALIASES: &[&str] = &["help", "-h", "--help"];

/// Parses validated options into a typed invocation.
pub type ParseFn = fn(&CommandSpec, &ParsedOptions) -> Result<Invocation>;

/// A registered command.
#[derive(Debug)]
pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
    /// Flags whose next token is their value.
    pub value_flags: &'static [&'static str],
    /// Flags the command reads as switches.
    pub presence_flags: &'static [&'static str],
    parse: ParseFn,
}

impl CommandSpec {
    /// Usage error carrying this command's usage line.
    pub fn usage_error(&self, reason: impl Into<String>) -> BlinkoError {
        BlinkoError::usage(reason, self.usage)
    }

    /// Parse raw tokens into an invocation.
    ///
    /// # Errors
    ///
    /// Returns a usage error when required data is missing or malformed.
    pub fn parse_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Invocation> {
        let parsed = options::parse(tokens, self.value_flags)?;
        let known: Vec<&str> = self
            .value_flags
            .iter()
            .chain(self.presence_flags)
            .copied()
            .collect();
        for flag in parsed.unrecognized(&known) {
            tracing::debug!(command = self.name, flag, "Ignoring unrecognized flag");
        }
        (self.parse)(self, &parsed)
    }
}

pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "create",
        usage: "blinko create <content...> [-t type] [--top] [--ref id1,id2,...]",
        summary: "Create a note",
        value_flags: &[note::FLAG_TYPE, note::FLAG_REF],
        presence_flags: &[note::FLAG_TOP],
        parse: note::parse_create,
    },
    CommandSpec {
        name: "show",
        usage: "blinko show <id>",
        summary: "Show one note",
        value_flags: &[],
        presence_flags: &[],
        parse: note::parse_show,
    },
    CommandSpec {
        name: "update",
        usage: "blinko update <id> [-c content] [--top|--untop]",
        summary: "Change content or pin state",
        value_flags: &[note::FLAG_CONTENT],
        presence_flags: &[note::FLAG_TOP, note::FLAG_UNTOP],
        parse: note::parse_update,
    },
    CommandSpec {
        name: "list",
        usage: "blinko list [-s size] [-t type] [--recycle]",
        summary: "List recent notes",
        value_flags: &[listing::FLAG_SIZE, listing::FLAG_TYPE],
        presence_flags: &[listing::FLAG_RECYCLE],
        parse: listing::parse_list,
    },
    CommandSpec {
        name: "search",
        usage: "blinko search <query...> [--ai] [-s size]",
        summary: "Search notes",
        value_flags: &[listing::FLAG_SIZE],
        presence_flags: &[listing::FLAG_AI],
        parse: listing::parse_search,
    },
    CommandSpec {
        name: "trash",
        usage: "blinko trash <id...>",
        summary: "Move notes to the recycle bin",
        value_flags: &[],
        presence_flags: &[],
        parse: batch::parse_trash,
    },
    CommandSpec {
        name: "delete",
        usage: "blinko delete <id...>",
        summary: "Delete notes permanently",
        value_flags: &[],
        presence_flags: &[],
        parse: batch::parse_delete,
    },
    CommandSpec {
        name: "clear-bin",
        usage: "blinko clear-bin",
        summary: "Empty the recycle bin",
        value_flags: &[],
        presence_flags: &[],
        parse: batch::parse_clear_bin,
    },
    CommandSpec {
        name: "ref",
        usage: "blinko ref <fromId> <toId>",
        summary: "Add a reference between notes",
        value_flags: &[],
        presence_flags: &[],
        parse: reference::parse_ref,
    },
    CommandSpec {
        name: "refs",
        usage: "blinko refs <id>",
        summary: "Show references in both directions",
        value_flags: &[],
        presence_flags: &[],
        parse: reference::parse_refs,
    },
    CommandSpec {
        name: "history",
        usage: "blinko history <id>",
        summary: "Show version history",
        value_flags: &[],
        presence_flags: &[],
        parse: history::parse_history,
    },
];

/// Find a registered command by name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

#[must_use]
pub fn is_help_alias(name: &str) -> bool {
    HELP_ALIASES.contains(&name)
}

/// Command list printed by `blinko help`.
#[must_use]
pub fn help_text() -> String {
    let width = COMMANDS
        .iter()
        .map(|spec| spec.usage.len())
        .max()
        .unwrap_or_default();
    let mut text = String::from("Blinko CLI\n\nUsage: blinko [OPTIONS] <command> [args...]\n\nCommands:\n");
    for spec in COMMANDS {
        let _ = writeln!(text, "  {:<width$}  {}", spec.usage, spec.summary);
    }
    text.push_str(
        "\nOptions:\n  \
         --config <PATH>    Credential file (default: ~/.config/blinko.skill.yaml)\n  \
         --json             Print results as JSON\n  \
         --pretty           Pretty-print JSON output\n  \
         --no-color         Disable colored output\n  \
         --log-level <LVL>  trace, debug, info, warn or error\n  \
         -v, --verbose      Debug logging\n  \
         -V, --version      Print version\n\n\
         Use -- to pass content that starts with a dash.\n",
    );
    text
}

/// Positional `index` as a note id, or a usage error naming `what`.
pub(crate) fn positional_id(
    spec: &CommandSpec,
    opts: &ParsedOptions,
    index: usize,
    what: &str,
) -> Result<NoteId> {
    opts.positionals()
        .get(index)
        .and_then(|token| NoteId::parse(token))
        .ok_or_else(|| spec.usage_error(format!("a valid {what} is required")))
}

/// Integer value of `flag`, if given.
pub(crate) fn int_flag<T: FromStr>(
    spec: &CommandSpec,
    opts: &ParsedOptions,
    flag: &str,
) -> Result<Option<T>> {
    opts.value(flag)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|_| spec.usage_error(format!("invalid value for {flag}: {raw}")))
        })
        .transpose()
}

/// A validated command ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Create(note::CreateNote),
    Show(NoteId),
    Update(note::UpdateNote),
    List(listing::ListNotes),
    Search(listing::SearchNotes),
    Trash(Vec<NoteId>),
    Delete(Vec<NoteId>),
    ClearBin,
    AddReference { from: NoteId, to: NoteId },
    References(NoteId),
    History(NoteId),
}

impl Invocation {
    /// Run against the server.
    ///
    /// # Errors
    ///
    /// Transport and response errors from the handler.
    pub async fn execute(&self, client: &BlinkoClient) -> Result<CommandOutput> {
        match self {
            Self::Create(args) => note::create(client, args).await,
            Self::Show(id) => note::show(client, *id).await,
            Self::Update(args) => note::update(client, args).await,
            Self::List(args) => listing::list(client, args).await,
            Self::Search(args) => listing::search(client, args).await,
            Self::Trash(ids) => batch::trash(client, ids).await,
            Self::Delete(ids) => batch::delete(client, ids).await,
            Self::ClearBin => batch::clear_bin(client).await,
            Self::AddReference { from, to } => reference::add(client, *from, *to).await,
            Self::References(id) => reference::list(client, *id).await,
            Self::History(id) => history::execute(client, *id).await,
        }
    }
}

/// Resolve a command word and its tokens.
///
/// Returns `Ok(None)` for help aliases.
///
/// # Errors
///
/// Unknown command names and invalid invocations.
pub fn resolve<S: AsRef<str>>(name: &str, tokens: &[S]) -> Result<Option<Invocation>> {
    if is_help_alias(name) {
        return Ok(None);
    }
    let spec = lookup(name).ok_or_else(|| BlinkoError::UnknownCommand(name.to_string()))?;
    spec.parse_tokens(tokens).map(Some)
}

/// Run one command and write its rendered result to `out`.
///
/// With no command, or a help alias, the command list is written and nothing
/// else happens.
///
/// # Errors
///
/// Any usage, configuration, transport or rendering error.
pub async fn dispatch<W: Write>(
    command: Option<(&str, &[String])>,
    config_path: Option<&Path>,
    render: RenderOptions,
    out: &mut W,
) -> Result<()> {
    let invocation = match command {
        Some((name, tokens)) => resolve(name, tokens)?,
        None => None,
    };
    let Some(invocation) = invocation else {
        out.write_all(help_text().as_bytes())?;
        return Ok(());
    };

    let path = Config::resolve_path(config_path)?;
    let config = Config::load(&path)?;
    let client = BlinkoClient::from_config(&config)?;

    let output = invocation.execute(&client).await?;
    out.write_all(render.render(&output)?.as_bytes())?;
    Ok(())
}
