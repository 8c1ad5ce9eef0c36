//! Output rendering for command results and errors.

pub mod error;
pub mod human;
pub mod robot;

use crate::cli::output::CommandOutput;
use crate::error::Result;

/// Output format selected by global flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Text for people.
    #[default]
    Human,
    /// JSON for scripts.
    Json,
}

/// Presentation settings for one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub pretty: bool,
    pub color: bool,
}

impl RenderOptions {
    /// Render a command result according to these options.
    ///
    /// # Errors
    ///
    /// Returns error if JSON serialization fails.
    pub fn render(&self, output: &CommandOutput) -> Result<String> {
        match self.format {
            OutputFormat::Human => Ok(human::render(output, self.color)),
            OutputFormat::Json => robot::render(output, self.pretty),
        }
    }
}
