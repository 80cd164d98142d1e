//! Event handling for the Input widget.

use crate::events::{EventResult, Key, Modifiers};

use super::{Input, TextEditResult};

impl Input {
    /// Handle a key press while the input has focus.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        if self.disabled {
            return EventResult::Ignored;
        }

        match self.buffer.handle_key(key, modifiers, self.max_length) {
            TextEditResult::Changed => {
                // Editing clears a stale validation error.
                self.error = None;
                self.emit_change();
                EventResult::Consumed
            }
            TextEditResult::Handled => {
                self.dirty = true;
                EventResult::Consumed
            }
            TextEditResult::Submitted => match self.on_submit.as_mut() {
                Some(callback) => {
                    callback(self.buffer.text().to_string());
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
            TextEditResult::Ignored => EventResult::Ignored,
        }
    }

    /// Handle a pointer click on one of the input's elements.
    pub fn handle_click(&mut self, target: Option<&str>) -> EventResult {
        match target.and_then(|t| self.id.part_name(t)) {
            Some("clear") => {
                self.clear();
                EventResult::Consumed
            }
            Some(_) => EventResult::Consumed,
            None => EventResult::Ignored,
        }
    }
}
