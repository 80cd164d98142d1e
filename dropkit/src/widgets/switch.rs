//! Switch widget - an on/off control.

use crate::events::{EventResult, Key, Modifiers};
use crate::widget::{Callback, WidgetId};

/// An on/off switch.
///
/// The caller owns `checked`; activating the switch reports the flipped
/// value through `on_change` and waits for the caller to supply it back.
pub struct Switch {
    id: WidgetId,
    checked: bool,
    label: Option<String>,
    disabled: bool,
    on_change: Callback<bool>,
}

/// What the host draws for a switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchView {
    pub id: String,
    pub checked: bool,
    pub label: Option<String>,
    pub disabled: bool,
}

impl Switch {
    pub fn new(on_change: Callback<bool>) -> Self {
        Self {
            id: WidgetId::new("switch"),
            checked: false,
            label: None,
            disabled: false,
            on_change,
        }
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Supply the caller's value.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Report the flipped value. Returns false when disabled.
    pub fn activate(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        log::debug!("Switch {} -> {}", self.id, !self.checked);
        (self.on_change)(!self.checked);
        true
    }

    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        if !modifiers.none() {
            return EventResult::Ignored;
        }
        match key {
            Key::Char(' ') | Key::Enter if self.activate() => EventResult::Consumed,
            _ => EventResult::Ignored,
        }
    }

    pub fn handle_click(&mut self, target: Option<&str>) -> EventResult {
        match target {
            Some(t) if self.id.owns(t) => {
                self.activate();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    pub fn view(&self) -> SwitchView {
        SwitchView {
            id: self.id.to_string(),
            checked: self.checked,
            label: self.label.clone(),
            disabled: self.disabled,
        }
    }
}

impl std::fmt::Debug for Switch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Switch")
            .field("id", &self.id)
            .field("checked", &self.checked)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}
