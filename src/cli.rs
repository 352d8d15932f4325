//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can generate man pages and completions
//! from the same definitions the binary parses.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

/// Version with commit hash and build date.
#[cfg(not(feature = "release"))]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("FOLIO_BUILD_DATE"),
    ")"
);

/// Version with build date.
#[cfg(feature = "release")]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("FOLIO_BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(
    name = "folio",
    version,
    long_version = LONG_VERSION,
    about = "Portfolio command terminal",
    long_about = "Portfolio command terminal.\n\n\
        Type a command (help, whoami, ls, projects, skills, contact, social, clear) \
        and folio prints the matching portfolio entry. Runs full-screen when attached \
        to a terminal and reads commands line by line otherwise."
)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the interactive terminal (default)
    ///
    /// Full-screen when stdin and stdout are terminals, line mode otherwise.
    Shell,

    /// Read commands from stdin, one per line
    Repl,

    /// Run commands and print the resulting transcript
    Run {
        /// Command lines, executed in order
        #[arg(required = true, value_name = "LINE")]
        lines: Vec<String>,

        /// Print the transcript as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available commands
    Commands,

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,

    /// Print the config file path
    Path,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
