//! Subcommand handlers for the folio binary.

pub mod completions;
pub mod config;
pub mod run;
pub mod shell;
