//! CLI argument parsing and command dispatch.

pub mod args;
pub mod batch;
pub mod dispatch;
pub mod history;
pub mod listing;
pub mod note;
pub mod options;
pub mod output;
pub mod reference;

pub use args::{Cli, Commands};
pub use dispatch::{COMMANDS, CommandSpec, Invocation, dispatch};
pub use output::CommandOutput;
