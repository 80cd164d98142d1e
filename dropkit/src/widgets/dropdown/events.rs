//! Event handling for the Dropdown widget.

use crate::events::{EventResult, Key, Modifiers};
use crate::widgets::input::TextEditResult;

use super::Dropdown;

/// Element id suffixes of the dropdown's interactive parts.
pub(super) mod part {
    pub const SEARCH: &str = "search";
    pub const LIST: &str = "list";
    pub const CLEAR: &str = "clear";
    pub const OPTION_PREFIX: &str = "opt-";
    pub const GROUP_PREFIX: &str = "group-";
    pub const SELECT_ALL: &str = "action-select-all";
    pub const SELECT_TOP: &str = "action-select-top";
    pub const RANDOM: &str = "action-random";
    pub const CLEAR_ALL: &str = "action-clear-all";
    pub const DONE: &str = "action-done";
}

impl Dropdown {
    /// Handle a key press while the dropdown has focus.
    ///
    /// Navigation runs over the filtered list and never wraps. Tab closes the
    /// panel but is reported as ignored so the host can move focus on.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        if self.config.disabled || modifiers.is_command() {
            return EventResult::Ignored;
        }

        if !self.interaction.is_open {
            return match key {
                Key::Down => {
                    self.open();
                    self.interaction.focused_index = if self.filtered.is_empty() {
                        None
                    } else {
                        Some(0)
                    };
                    EventResult::Consumed
                }
                Key::Up => {
                    self.open();
                    self.interaction.focused_index = self.filtered.len().checked_sub(1);
                    EventResult::Consumed
                }
                Key::Enter | Key::Char(' ') => {
                    self.toggle_open();
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            };
        }

        match key {
            Key::Down => {
                self.move_focus(1);
                EventResult::Consumed
            }
            Key::Up => {
                self.move_focus(-1);
                EventResult::Consumed
            }
            Key::Enter => {
                if let Some(index) = self.interaction.focused_index {
                    self.select_index(index);
                }
                EventResult::Consumed
            }
            Key::Char(' ') if !self.config.searchable || self.interaction.focused_index.is_some() => {
                if let Some(index) = self.interaction.focused_index {
                    self.select_index(index);
                }
                EventResult::Consumed
            }
            Key::Escape => {
                self.close();
                EventResult::Consumed
            }
            Key::Tab | Key::BackTab => {
                self.close();
                EventResult::Ignored
            }
            _ if self.config.searchable => self.edit_search(key, modifiers),
            _ => EventResult::Ignored,
        }
    }

    /// Handle a pointer click.
    ///
    /// `target` is the id of the clicked element, or `None` when the click
    /// hit nothing. Clicks outside the dropdown's own elements close it.
    pub fn handle_click(&mut self, target: Option<&str>) -> EventResult {
        let Some(name) = target.and_then(|t| self.id.part_name(t)) else {
            self.click_outside();
            return EventResult::Ignored;
        };

        if self.config.disabled {
            return EventResult::Consumed;
        }

        match name {
            "" => self.toggle_open(),
            part::CLEAR => {
                self.clear();
            }
            part::SELECT_ALL => {
                self.select_all();
            }
            part::SELECT_TOP => {
                self.select_top_n();
            }
            part::RANDOM => {
                self.select_random();
            }
            part::CLEAR_ALL => {
                self.clear_all();
            }
            part::DONE => self.done(),
            other => {
                if let Some(index) = other
                    .strip_prefix(part::OPTION_PREFIX)
                    .and_then(|i| i.parse::<usize>().ok())
                {
                    if self.interaction.is_open {
                        self.select_index(index);
                    }
                }
                // Search box, list padding and group headers are inert.
            }
        }
        EventResult::Consumed
    }

    /// Close the panel because the pointer went down outside the widget.
    pub fn click_outside(&mut self) {
        self.close();
    }

    /// Move the hover/keyboard focus to a filtered index.
    pub fn set_focused_index(&mut self, index: Option<usize>) {
        let index = index.filter(|&i| i < self.filtered.len());
        if self.interaction.focused_index != index {
            self.interaction.focused_index = index;
            self.dirty = true;
        }
    }

    fn move_focus(&mut self, delta: isize) {
        let Some(last) = self.filtered.len().checked_sub(1) else {
            self.interaction.focused_index = None;
            return;
        };
        let next = match self.interaction.focused_index {
            Some(current) => current.saturating_add_signed(delta).min(last),
            None => 0,
        };
        self.interaction.focused_index = Some(next);
        self.dirty = true;
    }

    fn edit_search(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        match self.interaction.search.handle_key(key, modifiers, None) {
            TextEditResult::Changed => {
                self.search_changed();
                EventResult::Consumed
            }
            TextEditResult::Handled => {
                self.dirty = true;
                EventResult::Consumed
            }
            TextEditResult::Submitted | TextEditResult::Ignored => EventResult::Ignored,
        }
    }
}
