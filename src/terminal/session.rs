//! A terminal session: one command table, one prompt, one transcript.

use super::commands::{not_found_message, CommandTable, CLEAR_COMMAND};
use super::transcript::Transcript;
use super::types::{Prompt, TerminalEffect, TranscriptEntry};

/// Trim surrounding whitespace and lowercase.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Owns the transcript and resolves input lines against an injected table.
///
/// `execute` and `reset` are the only operations that change state.
#[derive(Debug, Clone)]
pub struct TerminalSession {
    table: CommandTable,
    prompt: Prompt,
    transcript: Transcript,
}

impl TerminalSession {
    pub fn new(table: CommandTable, prompt: Prompt) -> Self {
        tracing::info!(commands = table.len(), prompt = %prompt, "terminal session started");
        Self {
            table,
            prompt,
            transcript: Transcript::new(),
        }
    }

    /// Run one line of input.
    ///
    /// Blank input appends nothing. Anything else is echoed first; `clear`
    /// then empties the whole transcript (echo included), and every other
    /// name appends exactly one output entry: the table response, or the
    /// not-found message.
    pub fn execute(&mut self, raw: &str) -> TerminalEffect {
        let command = normalize(raw);
        if command.is_empty() {
            return TerminalEffect::Ignored;
        }

        self.transcript
            .push(TranscriptEntry::echo(&self.prompt, raw.trim()));

        if command == CLEAR_COMMAND {
            self.reset();
            return TerminalEffect::Cleared;
        }

        let (text, recognized) = match self.table.get(&command) {
            Some(response) => (response.to_string(), true),
            None => (not_found_message(&command), false),
        };
        tracing::debug!(%command, recognized, "executed command");

        let entry = if recognized {
            TranscriptEntry::output(text.clone())
        } else {
            TranscriptEntry::not_found(text.clone())
        };
        self.transcript.push(entry);
        TerminalEffect::Output { text, recognized }
    }

    /// Empty the transcript.
    pub fn reset(&mut self) {
        tracing::debug!(entries = self.transcript.len(), "transcript cleared");
        self.transcript.clear();
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new(CommandTable::default_portfolio(), Prompt::default())
    }
}
