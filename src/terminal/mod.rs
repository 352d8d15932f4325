//! Simulated command terminal.
//!
//! A closed-vocabulary terminal: each input line is trimmed, lowercased,
//! and looked up in a [`CommandTable`]. The result is recorded in a
//! [`Transcript`] owned by a [`TerminalSession`].
//!
//! This module has no UI dependency. Hosts (the TUI, the line-mode REPL,
//! `folio run`) call [`TerminalSession::execute`] and render the transcript
//! however they like, scrolling to the end when the returned
//! [`TerminalEffect`] says so.

mod commands;
mod profile;
mod session;
mod transcript;
mod types;

pub use commands::{
    not_found_message, CommandTable, CLEAR_COMMAND, HELP_COMMAND, PORTFOLIO_COMMANDS,
};
pub use profile::Profile;
pub use session::{normalize, TerminalSession};
pub use transcript::Transcript;
pub use types::{Prompt, TerminalEffect, TranscriptEntry, DEFAULT_HOST, DEFAULT_USER};

#[cfg(test)]
mod tests;
