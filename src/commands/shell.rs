//! Interactive shell and line-mode REPL handlers

use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;

use folio::repl::run_lines;
use folio::theme::colors_enabled;
use folio::tui::{TerminalApp, TerminalView, TuiApp};
use folio::{Config, TerminalSession};

fn session_from(config: &Config) -> TerminalSession {
    TerminalSession::new(config.command_table(), config.prompt())
}

/// Start the full-screen terminal, or line mode when not attached to a TTY.
#[cfg(not(tarpaulin_include))]
pub fn handle_shell(config_path: &Path) -> Result<()> {
    if !atty::is(atty::Stream::Stdin) || !atty::is(atty::Stream::Stdout) {
        tracing::info!("not a terminal, falling back to line mode");
        return handle_repl(config_path);
    }

    let config = Config::load_from(config_path)?;
    let view = TerminalView::new(session_from(&config), config.theme(), config.ui.history_size);
    let mut app = TerminalApp::new(view, Duration::from_millis(config.ui.tick_ms))?;
    app.run()
}

/// Read commands from stdin, one per line, until EOF.
#[cfg(not(tarpaulin_include))]
pub fn handle_repl(config_path: &Path) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let mut session = session_from(&config);

    let theme = if colors_enabled() {
        config.theme()
    } else {
        config.theme().without_ansi()
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run_lines(&mut session, stdin.lock(), &mut stdout, &theme)?;
    Ok(())
}
