//! Event handling for the Accordion widget.

use crate::events::{EventResult, Key, Modifiers};

use super::Accordion;

impl Accordion {
    /// Handle a key press while a header has focus.
    ///
    /// Up/Down/Home/End move between headers without wrapping; Enter and
    /// Space toggle the focused section.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        if self.disabled || modifiers.is_command() {
            return EventResult::Ignored;
        }
        let Some(last) = self.items.len().checked_sub(1) else {
            return EventResult::Ignored;
        };

        match key {
            Key::Down => {
                self.focused = Some(self.focused.map_or(0, |i| (i + 1).min(last)));
                EventResult::Consumed
            }
            Key::Up => {
                self.focused = Some(self.focused.map_or(0, |i| i.saturating_sub(1)));
                EventResult::Consumed
            }
            Key::Home => {
                self.focused = Some(0);
                EventResult::Consumed
            }
            Key::End => {
                self.focused = Some(last);
                EventResult::Consumed
            }
            Key::Enter | Key::Char(' ') => match self.focused {
                Some(index) => {
                    self.toggle_item(index);
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
            _ => EventResult::Ignored,
        }
    }

    /// Handle a pointer click. Clicking a header focuses and toggles it.
    pub fn handle_click(&mut self, target: Option<&str>) -> EventResult {
        let Some(name) = target.and_then(|t| self.id.part_name(t)) else {
            return EventResult::Ignored;
        };
        if let Some(index) = name
            .strip_prefix("item-")
            .and_then(|i| i.parse::<usize>().ok())
            .filter(|&i| i < self.items.len())
        {
            self.focused = Some(index);
            self.toggle_item(index);
        }
        EventResult::Consumed
    }
}
