//! TUI (Text User Interface) module for folio
//!
//! This module provides the interactive full-screen terminal using
//! ratatui/crossterm. It handles resize, input editing and scroll-back.

pub mod app;
pub mod input;
pub mod terminal_app;
pub mod ui;
pub mod widgets;

// Re-export apps, trait, and shared types for commands and external use
pub use app::{App, TuiApp};
pub use input::InputLine;
pub use terminal_app::{KeyAction, TerminalApp, TerminalView};
