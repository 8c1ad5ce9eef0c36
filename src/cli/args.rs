//! Global CLI flags using clap.
//!
//! clap only handles the options that precede the command word. The command
//! word and everything after it are captured verbatim and handed to the
//! dispatcher, which parses them with the per-command option grammar.

use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};

use crate::error::BlinkoError;
use crate::render::{OutputFormat, RenderOptions};
use crate::util::env::should_use_color;

/// Blinko CLI - manage notes on a Blinko server.
#[derive(Parser, Debug)]
#[command(name = "blinko")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print the command list
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Credential file (default: ~/.config/blinko.skill.yaml)
    #[arg(long, value_name = "PATH", env = crate::storage::ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log level
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit JSONL logs to stderr
    #[arg(long)]
    pub json_output: bool,

    /// Verbose output (sets log level to debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// The command word and its raw arguments.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    #[command(external_subcommand)]
    Run(Vec<String>),
}

impl Cli {
    /// Command word and remaining tokens, if a command was given.
    #[must_use]
    pub fn invocation(&self) -> Option<(&str, &[String])> {
        match &self.command {
            Some(Commands::Run(words)) => words
                .split_first()
                .map(|(name, rest)| (name.as_str(), rest)),
            None => None,
        }
    }

    /// Resolve the effective output format.
    #[must_use]
    pub const fn effective_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }

    /// Presentation settings after consulting the terminal.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            format: self.effective_format(),
            pretty: self.pretty,
            color: should_use_color(self.no_color),
        }
    }
}

/// Usage line for the global options.
pub const GLOBAL_USAGE: &str = "blinko [OPTIONS] <command> [args...]";

/// Translate a rejected global option into a blinko error.
///
/// An unrecognized leading dash word is reported as an unknown command.
#[must_use]
pub fn parse_error(err: &clap::Error) -> BlinkoError {
    if err.kind() == ErrorKind::UnknownArgument
        && let Some(ContextValue::String(arg)) = err.get(ContextKind::InvalidArg)
    {
        return BlinkoError::UnknownCommand(arg.clone());
    }
    let rendered = err.render().to_string();
    let reason = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .trim();
    BlinkoError::usage(reason, GLOBAL_USAGE)
}
