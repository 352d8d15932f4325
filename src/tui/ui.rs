//! UI rendering helpers for TUI
//!
//! Common layout, wrapping and scrolling utilities.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;

/// Split the screen into title, transcript, input and footer rows.
pub fn terminal_layout(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Split `line` into screen rows no wider than `width` columns.
///
/// Breaks after the last space that fits, or mid-word when a word is
/// wider than the row. Span and line styles are kept. A zero width
/// leaves the line whole.
pub fn wrap_line(line: &Line<'_>, width: usize) -> Vec<Line<'static>> {
    let cells: Vec<(char, Style)> = line
        .spans
        .iter()
        .flat_map(|span| span.content.chars().map(move |c| (c, span.style)))
        .collect();
    if width == 0 {
        return vec![row(&cells, line.style)];
    }

    let mut rows = Vec::new();
    let mut start = 0;
    let mut used = 0;
    let mut break_at = None;
    let mut i = 0;
    while i < cells.len() {
        let (c, _) = cells[i];
        let w = c.width().unwrap_or(0);
        if used + w > width && i > start {
            let end = break_at.unwrap_or(i);
            rows.push(row(&cells[start..end], line.style));
            start = end;
            used = cells[start..i]
                .iter()
                .map(|(c, _)| c.width().unwrap_or(0))
                .sum();
            break_at = None;
            continue;
        }
        used += w;
        i += 1;
        if c == ' ' {
            break_at = Some(i);
        }
    }
    rows.push(row(&cells[start..], line.style));
    rows
}

/// Rebuild a line from styled cells, merging runs of equal style.
fn row(cells: &[(char, Style)], style: Style) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    for &(c, cell_style) in cells {
        match spans.last_mut() {
            Some(span) if span.style == cell_style => span.content.to_mut().push(c),
            _ => spans.push(Span::styled(c.to_string(), cell_style)),
        }
    }
    Line::from(spans).style(style)
}

/// Largest useful scroll-back offset for `total` lines in a `height`-row view.
pub fn max_scroll_back(total: usize, height: usize) -> usize {
    total.saturating_sub(height)
}

/// Range of lines to show, as `start..end`.
///
/// `scroll_back` counts lines up from the bottom; zero pins the view to
/// the newest line. Offsets past the top are clamped.
pub fn visible_window(total: usize, height: usize, scroll_back: usize) -> (usize, usize) {
    let scroll_back = scroll_back.min(max_scroll_back(total, height));
    let end = total - scroll_back;
    let start = end.saturating_sub(height);
    (start, end)
}
