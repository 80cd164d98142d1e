//! Tooltip widget - a hint shown while its anchor is hovered or focused.

use crate::events::{EventResult, Key, Modifiers};
use crate::widget::{Callback, WidgetId};

/// Side of the anchor the tooltip appears on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TooltipSide {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

/// A hover/focus hint.
///
/// Unlike the other widgets the tooltip owns its open state; there is
/// nothing for a caller to decide. `on_open_change` reports transitions.
pub struct Tooltip {
    id: WidgetId,
    content: String,
    side: TooltipSide,
    disabled: bool,
    open: bool,
    hovered: bool,
    focused: bool,
    on_open_change: Option<Callback<bool>>,
}

/// What the host draws for a tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipView {
    pub id: String,
    pub content: String,
    pub side: TooltipSide,
}

impl Tooltip {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: WidgetId::new("tooltip"),
            content: content.into(),
            side: TooltipSide::default(),
            disabled: false,
            open: false,
            hovered: false,
            focused: false,
            on_open_change: None,
        }
    }

    pub fn side(mut self, side: TooltipSide) -> Self {
        self.side = side;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn on_open_change(mut self, callback: Callback<bool>) -> Self {
        self.on_open_change = Some(callback);
        self
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Pointer entered the anchor.
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        self.sync();
    }

    /// Pointer left the anchor.
    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        self.sync();
    }

    /// Anchor gained focus.
    pub fn focus(&mut self) {
        self.focused = true;
        self.sync();
    }

    /// Anchor lost focus.
    pub fn blur(&mut self) {
        self.focused = false;
        self.sync();
    }

    /// Escape hides the tooltip until the next pointer enter or focus.
    pub fn handle_key(&mut self, key: Key, _modifiers: Modifiers) -> EventResult {
        if key == Key::Escape && self.open {
            self.hovered = false;
            self.focused = false;
            self.sync();
            return EventResult::Consumed;
        }
        EventResult::Ignored
    }

    pub fn view(&self) -> Option<TooltipView> {
        self.open.then(|| TooltipView {
            id: self.id.to_string(),
            content: self.content.clone(),
            side: self.side,
        })
    }

    fn sync(&mut self) {
        let open = !self.disabled && (self.hovered || self.focused);
        if open != self.open {
            self.open = open;
            if let Some(callback) = self.on_open_change.as_mut() {
                callback(open);
            }
        }
    }
}

impl std::fmt::Debug for Tooltip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tooltip")
            .field("id", &self.id)
            .field("open", &self.open)
            .field("side", &self.side)
            .finish_non_exhaustive()
    }
}
