//! Toggle widget - a button that stays pressed.

use crate::events::{EventResult, Key, Modifiers};
use crate::widget::{Callback, WidgetId};

use crate::widget::Size;

/// Toggle button look.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToggleVariant {
    #[default]
    Default,
    Outline,
}

/// A two-state button.
///
/// Same controlled contract as [`Switch`](super::switch::Switch), reported
/// through `on_pressed_change`.
pub struct Toggle {
    id: WidgetId,
    pressed: bool,
    label: String,
    variant: ToggleVariant,
    size: Size,
    disabled: bool,
    on_pressed_change: Callback<bool>,
}

/// What the host draws for a toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleView {
    pub id: String,
    pub label: String,
    pub pressed: bool,
    pub variant: ToggleVariant,
    pub size: Size,
    pub disabled: bool,
}

impl Toggle {
    pub fn new(label: impl Into<String>, on_pressed_change: Callback<bool>) -> Self {
        Self {
            id: WidgetId::new("toggle"),
            pressed: false,
            label: label.into(),
            variant: ToggleVariant::default(),
            size: Size::default(),
            disabled: false,
            on_pressed_change,
        }
    }

    pub fn with_pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    pub fn variant(mut self, variant: ToggleVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Supply the caller's value.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Report the flipped value. Returns false when disabled.
    pub fn activate(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        (self.on_pressed_change)(!self.pressed);
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

    pub fn view(&self) -> ToggleView {
        ToggleView {
            id: self.id.to_string(),
            label: self.label.clone(),
            pressed: self.pressed,
            variant: self.variant,
            size: self.size,
            disabled: self.disabled,
        }
    }
}

impl std::fmt::Debug for Toggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toggle")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("pressed", &self.pressed)
            .finish_non_exhaustive()
    }
}
