//! Per-command option parsing.
//!
//! Commands share flag spellings with different meanings (`-t` is a note type
//! for `create` but absent from `search`), so there is no global schema. Each
//! command hands its token stream and its own set of value-taking flags to
//! [`parse`]; every other dash token is accepted as a presence flag and left
//! for the command to use or ignore.

use std::collections::HashMap;

use crate::error::{BlinkoError, Result};

/// Token that turns every following token into a positional.
pub const END_OF_OPTIONS: &str = "--";

/// What a flag was set to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// The flag appeared without a value.
    Present,
    /// The flag consumed the following token.
    Value(String),
}

/// Result of parsing one command's token stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOptions {
    positionals: Vec<String>,
    flags: HashMap<String, FlagValue>,
}

impl ParsedOptions {
    /// Non-flag tokens in the order they were given.
    #[must_use]
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// Positionals joined with single spaces and trimmed.
    #[must_use]
    pub fn joined(&self) -> String {
        self.positionals.join(" ").trim().to_string()
    }

    /// Value of a value-taking flag, if it was given.
    #[must_use]
    pub fn value(&self, flag: &str) -> Option<&str> {
        match self.flags.get(flag) {
            Some(FlagValue::Value(v)) => Some(v),
            _ => None,
        }
    }

    /// Whether a flag occurred at all.
    #[must_use]
    pub fn is_present(&self, flag: &str) -> bool {
        self.flags.contains_key(flag)
    }

    /// Raw flag map.
    #[must_use]
    pub const fn flags(&self) -> &HashMap<String, FlagValue> {
        &self.flags
    }

    /// Flags not in `known`, sorted for stable reporting.
    #[must_use]
    pub fn unrecognized<'a>(&'a self, known: &[&str]) -> Vec<&'a str> {
        let mut extra: Vec<&str> = self
            .flags
            .keys()
            .map(String::as_str)
            .filter(|f| !known.contains(f))
            .collect();
        extra.sort_unstable();
        extra
    }
}

fn is_flag(token: &str) -> bool {
    token.starts_with('-')
}

/// Parse `tokens` in a single left-to-right pass.
///
/// # Errors
///
/// Returns [`BlinkoError::MissingOptionValue`] when a flag from
/// `value_flags` is the last token or is followed by an empty token or by a
/// token that starts with `-`.
pub fn parse<S: AsRef<str>>(tokens: &[S], value_flags: &[&str]) -> Result<ParsedOptions> {
    let mut parsed = ParsedOptions::default();
    let mut iter = tokens.iter().map(AsRef::<str>::as_ref);

    while let Some(token) = iter.next() {
        if token == END_OF_OPTIONS {
            parsed.positionals.extend(iter.map(str::to_string));
            break;
        }
        if !is_flag(token) {
            parsed.positionals.push(token.to_string());
            continue;
        }
        if value_flags.contains(&token) {
            let value = iter
                .next()
                .filter(|next| !next.is_empty() && !is_flag(next))
                .ok_or_else(|| BlinkoError::MissingOptionValue {
                    flag: token.to_string(),
                })?;
            parsed
                .flags
                .insert(token.to_string(), FlagValue::Value(value.to_string()));
            continue;
        }
        parsed.flags.insert(token.to_string(), FlagValue::Present);
    }

    Ok(parsed)
}
