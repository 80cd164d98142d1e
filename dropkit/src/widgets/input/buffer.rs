//! Single-line text buffer with a character cursor.
//!
//! Shared by the Input widget and the Dropdown search box.

use crate::events::{Key, Modifiers};

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text was modified.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

/// Text content and cursor. The cursor counts characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    /// Create a buffer with the cursor at the end of `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Replace the text, placing the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.len();
    }

    /// Empty the buffer. Returns true if text changed.
    pub fn clear(&mut self) -> bool {
        let changed = !self.text.is_empty();
        self.text.clear();
        self.cursor = 0;
        changed
    }

    /// Handle a key press for text editing.
    ///
    /// `max_len` caps the number of characters; input beyond it is dropped.
    pub fn handle_key(
        &mut self,
        key: Key,
        modifiers: Modifiers,
        max_len: Option<usize>,
    ) -> TextEditResult {
        if modifiers.is_command() {
            return TextEditResult::Ignored;
        }

        match key {
            Key::Char(c) if !c.is_control() => {
                if self.insert_char(c, max_len) {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }
            Key::Backspace => {
                if self.delete_back() {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }
            Key::Delete => {
                if self.delete_forward() {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }
            Key::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                TextEditResult::Handled
            }
            Key::Right => {
                self.cursor = (self.cursor + 1).min(self.len());
                TextEditResult::Handled
            }
            Key::Home => {
                self.cursor = 0;
                TextEditResult::Handled
            }
            Key::End => {
                self.cursor = self.len();
                TextEditResult::Handled
            }
            Key::Enter => TextEditResult::Submitted,
            _ => TextEditResult::Ignored,
        }
    }

    /// Insert a character at the cursor. Returns false when `max_len` is reached.
    pub fn insert_char(&mut self, c: char, max_len: Option<usize>) -> bool {
        if max_len.is_some_and(|max| self.len() >= max) {
            return false;
        }
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_pos, c);
        self.cursor += 1;
        true
    }

    /// Delete the character before the cursor. Returns true if text changed.
    pub fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte_pos = char_to_byte_index(&self.text, self.cursor - 1);
        self.text.remove(byte_pos);
        self.cursor -= 1;
        true
    }

    /// Delete the character at the cursor. Returns true if text changed.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.remove(byte_pos);
        true
    }
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
