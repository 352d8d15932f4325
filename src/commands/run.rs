//! One-shot `run` and `commands` handlers

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use folio::repl::write_transcript;
use folio::terminal::{CLEAR_COMMAND, HELP_COMMAND};
use folio::theme::colors_enabled;
use folio::{Config, TerminalSession};

/// Execute each line in order and print the final transcript.
#[cfg(not(tarpaulin_include))]
pub fn handle_run(config_path: &Path, lines: &[String], json: bool) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let mut session = TerminalSession::new(config.command_table(), config.prompt());
    for line in lines {
        session.execute(line);
    }

    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, session.transcript().entries())?;
        writeln!(stdout)?;
    } else {
        let theme = if colors_enabled() {
            config.theme()
        } else {
            config.theme().without_ansi()
        };
        write_transcript(&mut stdout, session.transcript(), &theme)?;
    }
    Ok(())
}

/// Print the command vocabulary, one name per line.
#[cfg(not(tarpaulin_include))]
pub fn handle_list_commands(config_path: &Path) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let table = config.command_table();

    let mut stdout = io::stdout().lock();
    for name in table.names() {
        writeln!(stdout, "{}", name)?;
        // clear is handled by the session, not the table
        if name == HELP_COMMAND {
            writeln!(stdout, "{}", CLEAR_COMMAND)?;
        }
    }
    Ok(())
}
