//! TUI widgets for folio
//!
//! Reusable UI components for the terminal interface.

pub mod transcript;

pub use transcript::TranscriptView;
