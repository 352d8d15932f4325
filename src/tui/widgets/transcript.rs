//! Transcript widget: renders echo and output entries, pinned to the bottom.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::terminal::{Transcript, TranscriptEntry};
use crate::theme::Theme;
use crate::tui::ui::{visible_window, wrap_line};

/// Transcript view with a scroll-back offset counted from the newest line.
pub struct TranscriptView<'a> {
    transcript: &'a Transcript,
    theme: &'a Theme,
    scroll_back: usize,
}

impl<'a> TranscriptView<'a> {
    pub fn new(transcript: &'a Transcript, theme: &'a Theme) -> Self {
        Self {
            transcript,
            theme,
            scroll_back: 0,
        }
    }

    pub fn scroll_back(mut self, lines: usize) -> Self {
        self.scroll_back = lines;
        self
    }

    /// Every transcript line with theme styling applied.
    pub fn styled_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for entry in self.transcript {
            match entry {
                TranscriptEntry::Echo { prompt, input } => {
                    lines.push(Line::from(vec![
                        Span::styled(prompt.clone(), self.theme.accent_bold_style()),
                        Span::raw(" "),
                        Span::styled(input.clone(), self.theme.input_style()),
                    ]));
                }
                TranscriptEntry::Output { text, recognized } => {
                    let style = if *recognized {
                        self.theme.text_style()
                    } else {
                        self.theme.error_style()
                    };
                    lines.extend(text.lines().map(|l| Line::styled(l.to_string(), style)));
                }
            }
        }
        lines
    }

    /// Styled lines wrapped to screen rows `width` columns wide.
    pub fn rows(&self, width: usize) -> Vec<Line<'static>> {
        self.styled_lines()
            .iter()
            .flat_map(|line| wrap_line(line, width))
            .collect()
    }
}

impl Widget for TranscriptView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.rows(area.width as usize);
        let (start, end) = visible_window(rows.len(), area.height as usize, self.scroll_back);
        Paragraph::new(rows[start..end].to_vec()).render(area, buf);
    }
}
