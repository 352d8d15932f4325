//! Single-line input field with cursor editing and history recall.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Editable input line.
///
/// The cursor is a byte offset into `buffer`, always on a char boundary.
/// History is oldest-first; while browsing it, the line being typed is
/// kept aside as a draft.
#[derive(Debug, Clone)]
pub struct InputLine {
    buffer: String,
    cursor: usize,
    history: Vec<String>,
    history_idx: Option<usize>,
    draft: String,
    max_history: usize,
}

impl InputLine {
    pub fn new(max_history: usize) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_idx: None,
            draft: String::new(),
            max_history: max_history.max(1),
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Cursor position in terminal columns.
    pub fn display_cursor(&self) -> usize {
        self.buffer[..self.cursor].width()
    }

    /// The slice of the line visible in a field `width` columns wide, and
    /// the cursor column inside it.
    ///
    /// The view scrolls horizontally so the cursor always has a cell.
    pub fn view(&self, width: usize) -> (&str, usize) {
        let width = width.max(1);
        let cursor_col = self.display_cursor();
        let offset = cursor_col.saturating_sub(width - 1);

        let mut start = self.buffer.len();
        let mut start_col = 0;
        for (i, c) in self.buffer.char_indices() {
            if start_col >= offset {
                start = i;
                break;
            }
            start_col += c.width().unwrap_or(0);
        }

        let mut end = start;
        let mut used = 0;
        for (i, c) in self.buffer[start..].char_indices() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            end = start + i + c.len_utf8();
        }

        (
            &self.buffer[start..end],
            cursor_col.saturating_sub(start_col),
        )
    }

    fn prev_char(&self) -> Option<char> {
        self.buffer[..self.cursor].chars().next_back()
    }

    fn next_char(&self) -> Option<char> {
        self.buffer[self.cursor..].chars().next()
    }

    pub fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the char before the cursor.
    pub fn backspace(&mut self) {
        if let Some(c) = self.prev_char() {
            self.cursor -= c.len_utf8();
            self.buffer.remove(self.cursor);
        }
    }

    /// Delete the char under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(c) = self.prev_char() {
            self.cursor -= c.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.next_char() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Empty the line without touching history.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Take the line for execution and record it in history.
    ///
    /// Blank lines and repeats of the newest entry are not recorded.
    pub fn submit(&mut self) -> String {
        let line = std::mem::take(&mut self.buffer);
        self.cursor = 0;
        self.history_idx = None;
        self.draft.clear();

        if !line.trim().is_empty() && self.history.last() != Some(&line) {
            self.history.push(line.clone());
            if self.history.len() > self.max_history {
                let excess = self.history.len() - self.max_history;
                self.history.drain(..excess);
            }
        }
        line
    }

    /// Step back to an older history entry.
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.history_idx {
            None => {
                self.draft = self.buffer.clone();
                self.history.len() - 1
            }
            Some(i) => i.saturating_sub(1),
        };
        self.history_idx = Some(idx);
        self.set_buffer(self.history[idx].clone());
    }

    /// Step forward to a newer entry, or back to the draft.
    pub fn history_next(&mut self) {
        let Some(i) = self.history_idx else {
            return;
        };
        if i + 1 < self.history.len() {
            self.history_idx = Some(i + 1);
            self.set_buffer(self.history[i + 1].clone());
        } else {
            self.history_idx = None;
            let draft = std::mem::take(&mut self.draft);
            self.set_buffer(draft);
        }
    }

    fn set_buffer(&mut self, text: String) {
        self.buffer = text;
        self.move_end();
    }
}

impl Default for InputLine {
    fn default() -> Self {
        Self::new(100)
    }
}
