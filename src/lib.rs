//! Folio - portfolio command terminal
//!
//! A closed-vocabulary command terminal (`help`, `whoami`, `ls`, ...) with
//! a UI-free core in [`terminal`] and three hosts: the full-screen [`tui`],
//! the line-mode [`repl`], and `folio run`.

pub mod cli;
pub mod config;
pub mod logging;
pub mod repl;
pub mod terminal;
pub mod theme;
pub mod tui;

pub use config::{Config, ConfigError};
pub use terminal::{CommandTable, Prompt, TerminalEffect, TerminalSession, TranscriptEntry};
