//! Single-line input form for the Pokémon name.

use unicode_width::UnicodeWidthStr;

/// Text buffer with a char-indexed cursor and cycling quick-pick
/// suggestions.
#[derive(Debug, Default)]
pub struct InputForm {
    buf: String,
    cursor: usize,
    suggestions: Vec<String>,
    next_suggestion: usize,
}

impl InputForm {
    pub fn new(value: &str, suggestions: Vec<String>) -> Self {
        let mut form = Self {
            suggestions,
            ..Self::default()
        };
        form.set(value);
        form
    }

    pub fn value(&self) -> &str {
        &self.buf
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display width of the text before the cursor, in terminal columns.
    pub fn cursor_column(&self) -> usize {
        self.buf[..self.byte_index(self.cursor)].width()
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Replaces the buffer and moves the cursor to the end.
    pub fn set(&mut self, value: &str) {
        self.buf = value.to_string();
        self.cursor = self.buf.chars().count();
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.buf.insert(at, c);
        self.cursor += 1;
    }

    /// Inserts pasted text at the cursor; line breaks are dropped.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars().filter(|c| !c.is_control()) {
            self.insert_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.buf.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.buf.chars().count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.buf.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.buf.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buf.chars().count();
    }

    /// Fills the buffer with the next suggestion, wrapping around.
    pub fn cycle_suggestion(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let index = self.next_suggestion % self.suggestions.len();
        let suggestion = self.suggestions[index].clone();
        self.set(&suggestion);
        self.next_suggestion = index + 1;
    }

    /// Trimmed buffer, as handed to `submit`.
    pub fn submission(&self) -> String {
        self.buf.trim().to_string()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.buf
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.buf.len())
    }
}
