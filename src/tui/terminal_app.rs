//! Interactive terminal TUI application
//!
//! Full-screen host for a [`TerminalSession`]: transcript on top, input
//! line with prompt below, key hints in the footer.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::app::status_footer::{render_footer, render_title};
use super::app::{App, TuiApp};
use super::input::InputLine;
use super::ui::{max_scroll_back, terminal_layout};
use super::widgets::TranscriptView;
use crate::terminal::{TerminalSession, CLEAR_COMMAND};
use crate::theme::Theme;

/// Footer key hints.
const FOOTER_KEYS: &[(&str, &str)] = &[
    ("Enter", "run"),
    ("\u{2191}\u{2193}", "history"),
    ("PgUp/PgDn", "scroll"),
    ("Ctrl+L", "clear"),
    ("Esc", "quit"),
];

/// What a key press asks the host loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Quit,
}

/// Terminal state and rendering, independent of the real screen.
///
/// Kept apart from [`TerminalApp`] so it can be driven and drawn against
/// a ratatui `TestBackend`.
pub struct TerminalView {
    session: TerminalSession,
    input: InputLine,
    theme: Theme,
    title: String,
    /// Lines scrolled up from the newest one; zero means pinned to the end.
    scroll_back: usize,
    /// Transcript rows visible in the last draw, used as the page size.
    page_height: usize,
    /// Transcript width in the last draw, for counting wrapped rows.
    page_width: usize,
}

impl TerminalView {
    pub fn new(session: TerminalSession, theme: Theme, history_size: usize) -> Self {
        let title = format!(
            " {} - type 'help' to get started",
            session.prompt().host
        );
        Self {
            session,
            input: InputLine::new(history_size),
            theme,
            title,
            scroll_back: 0,
            page_height: 1,
            page_width: 0,
        }
    }

    pub fn session(&self) -> &TerminalSession {
        &self.session
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_back
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return KeyAction::Quit,
            KeyCode::Char('c') if ctrl => return KeyAction::Quit,
            KeyCode::Char('d') if ctrl && self.input.is_empty() => return KeyAction::Quit,
            KeyCode::Char('l') if ctrl => self.run(CLEAR_COMMAND),
            KeyCode::Char('u') if ctrl => self.input.clear(),
            KeyCode::Char(c) if !ctrl => self.input.insert(c),

            KeyCode::Enter => {
                let line = self.input.submit();
                self.run(&line);
            }
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Up => self.input.history_prev(),
            KeyCode::Down => self.input.history_next(),

            KeyCode::PageUp => self.scroll_up(self.page_height),
            KeyCode::PageDown => {
                self.scroll_back = self.scroll_back.saturating_sub(self.page_height);
            }
            _ => {}
        }
        KeyAction::Continue
    }

    fn run(&mut self, line: &str) {
        let effect = self.session.execute(line);
        if effect.scrolls_to_end() || self.session.transcript().is_empty() {
            self.scroll_back = 0;
        }
    }

    fn scroll_up(&mut self, lines: usize) {
        let total = TranscriptView::new(self.session.transcript(), &self.theme)
            .rows(self.page_width)
            .len();
        let max = max_scroll_back(total, self.page_height);
        self.scroll_back = (self.scroll_back + lines).min(max);
    }

    /// Draw the whole screen.
    pub fn render(&mut self, frame: &mut Frame) {
        let [title_area, body_area, input_area, footer_area] = terminal_layout(frame.area());

        render_title(frame, title_area, &self.title, &self.theme);

        let block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(self.theme.text_secondary_style());
        let inner = block.inner(body_area);
        self.page_height = (inner.height as usize).max(1);
        self.page_width = inner.width as usize;
        frame.render_widget(block, body_area);
        frame.render_widget(
            TranscriptView::new(self.session.transcript(), &self.theme)
                .scroll_back(self.scroll_back),
            inner,
        );

        let prompt = self.session.prompt().to_string();
        let prefix_width = prompt.width().saturating_add(1);
        let field_width = usize::from(input_area.width).saturating_sub(prefix_width);
        let (visible, cursor_col) = self.input.view(field_width);
        let input_line = Line::from(vec![
            Span::styled(prompt, self.theme.accent_bold_style()),
            Span::raw(" "),
            Span::styled(visible.to_string(), self.theme.input_style()),
        ]);
        frame.render_widget(Paragraph::new(input_line), input_area);

        let cursor_x = usize::from(input_area.x)
            .saturating_add(prefix_width)
            .saturating_add(cursor_col)
            .min(usize::from(input_area.right().saturating_sub(1)));
        frame.set_cursor_position((
            u16::try_from(cursor_x).unwrap_or(u16::MAX),
            input_area.y,
        ));

        render_footer(frame, footer_area, FOOTER_KEYS, &self.theme);
    }
}

/// The interactive terminal bound to the real screen.
pub struct TerminalApp {
    app: App,
    view: TerminalView,
}

impl TerminalApp {
    pub fn new(view: TerminalView, tick_rate: Duration) -> Result<Self> {
        let app = App::new(tick_rate)?;
        Ok(Self { app, view })
    }
}

impl TuiApp for TerminalApp {
    fn app(&mut self) -> &mut App {
        &mut self.app
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.view.handle_key(key) == KeyAction::Quit {
            self.app.quit();
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let view = &mut self.view;
        self.app.draw(|frame| view.render(frame))
    }
}
