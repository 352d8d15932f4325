//! Base TUI application: terminal setup, event polling and teardown.
//!
//! Concrete apps embed an [`App`] and implement [`TuiApp`] to get the
//! shared draw/poll/dispatch loop.

pub mod status_footer;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

/// Owns the raw-mode terminal for the lifetime of a TUI app.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
    running: bool,
}

impl App {
    /// Enter raw mode and the alternate screen.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self {
            terminal,
            tick_rate,
            running: true,
        })
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Wait up to one tick for an event.
    pub fn next_event(&self) -> Result<Option<Event>> {
        if event::poll(self.tick_rate)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    fn restore(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!(error = %e, "failed to restore terminal");
        }
    }
}

/// Shared event loop for apps built on [`App`].
pub trait TuiApp {
    fn app(&mut self) -> &mut App;

    fn handle_key(&mut self, key: KeyEvent) -> Result<()>;

    fn draw(&mut self) -> Result<()>;

    /// Draw, wait for input, dispatch key presses; repeat until quit.
    #[cfg(not(tarpaulin_include))]
    fn run(&mut self) -> Result<()> {
        while self.app().is_running() {
            self.draw()?;
            match self.app().next_event()? {
                // Windows reports both press and release
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    self.handle_key(key)?;
                }
                // Resize and ticks just trigger a redraw on the next pass
                _ => {}
            }
        }
        Ok(())
    }
}
