//! Terminal data types.
//!
//! Contains the core data structures for representing terminal state:
//! - Prompt: the `user@host` prefix rendered before echoed input
//! - TranscriptEntry: a single echoed input or command output
//! - TerminalEffect: what an `execute` call did, for the host to react to

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default prompt user.
pub const DEFAULT_USER: &str = "guest";

/// Default prompt host.
pub const DEFAULT_HOST: &str = "portfolio";

/// The `user@host` pair shown before every echoed input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub user: String,
    pub host: String,
}

impl Prompt {
    pub fn new(user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            host: host.into(),
        }
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self::new(DEFAULT_USER, DEFAULT_HOST)
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:~$", self.user, self.host)
    }
}

/// A single rendered line (or block of lines) in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TranscriptEntry {
    /// The user's input as typed, preceded by the prompt.
    Echo { prompt: String, input: String },
    /// A command response or the not-found message.
    Output {
        text: String,
        /// False for the not-found message.
        recognized: bool,
    },
}

impl TranscriptEntry {
    pub fn echo(prompt: &Prompt, input: impl Into<String>) -> Self {
        Self::Echo {
            prompt: prompt.to_string(),
            input: input.into(),
        }
    }

    /// Response of a command found in the table.
    pub fn output(text: impl Into<String>) -> Self {
        Self::Output {
            text: text.into(),
            recognized: true,
        }
    }

    /// Response to a name the table does not hold.
    pub fn not_found(text: impl Into<String>) -> Self {
        Self::Output {
            text: text.into(),
            recognized: false,
        }
    }

    pub fn is_echo(&self) -> bool {
        matches!(self, Self::Echo { .. })
    }

    pub fn is_output(&self) -> bool {
        matches!(self, Self::Output { .. })
    }
}

/// Outcome of a single `execute` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEffect {
    /// Input was blank; the transcript is untouched.
    Ignored,
    /// The transcript was emptied by the clear command.
    Cleared,
    /// An echo and an output entry were appended.
    Output {
        text: String,
        /// False when the not-found message was produced.
        recognized: bool,
    },
}

impl TerminalEffect {
    /// Whether the host should scroll its transcript view to the end.
    pub fn scrolls_to_end(&self) -> bool {
        matches!(self, Self::Output { .. })
    }

    pub fn output_text(&self) -> Option<&str> {
        match self {
            Self::Output { text, .. } => Some(text),
            _ => None,
        }
    }
}
