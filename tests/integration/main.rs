//! Integration tests for the folio binary and library.

mod cli_test;
mod config_test;
mod helpers;
mod session_test;
