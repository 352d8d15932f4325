//! Tracing subscriber setup.
//!
//! Logs go to stderr, or to a file when one is given (useful with the TUI,
//! where stderr output would tear the screen). `FOLIO_LOG` takes
//! `EnvFilter` directives and overrides the `-v` count.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "FOLIO_LOG";

/// Default level for a `-v` count.
pub fn level_for_verbosity(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

/// Filter from `FOLIO_LOG`, falling back to the verbosity level.
pub fn build_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose).as_str()))
}

/// Install the global subscriber.
#[cfg(not(tarpaulin_include))]
pub fn init(verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let filter = build_filter(verbose);
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Arc::new(file)))
                .with(filter)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    }
    Ok(())
}
