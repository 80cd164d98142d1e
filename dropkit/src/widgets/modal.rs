//! Modal widget - an overlay dialog.
//!
//! The modal owns no content; the host draws whatever it likes inside the
//! content element. The widget decides when a key or click asks to close it.

use crate::events::{EventResult, Key, Modifiers};
use crate::widget::{Callback, Size, WidgetId};

/// An overlay dialog with a controlled open state.
pub struct Modal {
    id: WidgetId,
    open: bool,
    title: Option<String>,
    size: Size,
    close_on_escape: bool,
    close_on_overlay_click: bool,
    on_open_change: Callback<bool>,
}

/// What the host draws for a modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    /// Backdrop element id. Clicks here count as overlay clicks.
    pub overlay_id: String,
    /// Dialog element id. Clicks inside it are never overlay clicks.
    pub content_id: String,
    pub close_id: String,
    pub title: Option<String>,
    pub size: Size,
}

impl Modal {
    pub fn new(on_open_change: Callback<bool>) -> Self {
        Self {
            id: WidgetId::new("modal"),
            open: false,
            title: None,
            size: Size::default(),
            close_on_escape: true,
            close_on_overlay_click: true,
            on_open_change,
        }
    }

    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Keep the modal open when Escape is pressed.
    pub fn ignore_escape(mut self) -> Self {
        self.close_on_escape = false;
        self
    }

    /// Keep the modal open when the backdrop is clicked.
    pub fn ignore_overlay_click(mut self) -> Self {
        self.close_on_overlay_click = false;
        self
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Supply the caller's open state.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Ask the caller to close the modal.
    pub fn request_close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        log::debug!("Modal {} close requested", self.id);
        (self.on_open_change)(false);
        true
    }

    /// Handle a key press. An open modal swallows every key it does not
    /// handle so nothing underneath reacts.
    pub fn handle_key(&mut self, key: Key, _modifiers: Modifiers) -> EventResult {
        if !self.open {
            return EventResult::Ignored;
        }
        if key == Key::Escape && self.close_on_escape {
            self.request_close();
        }
        EventResult::Consumed
    }

    /// Handle a pointer click.
    pub fn handle_click(&mut self, target: Option<&str>) -> EventResult {
        if !self.open {
            return EventResult::Ignored;
        }
        match target.and_then(|t| self.id.part_name(t)) {
            Some("close") => {
                self.request_close();
            }
            Some(name) if name == "content" || name.starts_with("content-") => {}
            // The backdrop, or anything drawn underneath it.
            _ => {
                if self.close_on_overlay_click {
                    self.request_close();
                }
            }
        }
        EventResult::Consumed
    }

    /// Build the view, or `None` while closed.
    pub fn view(&self) -> Option<ModalView> {
        self.open.then(|| ModalView {
            overlay_id: self.id.to_string(),
            content_id: self.id.part("content"),
            close_id: self.id.part("close"),
            title: self.title.clone(),
            size: self.size,
        })
    }
}

impl std::fmt::Debug for Modal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modal")
            .field("id", &self.id)
            .field("open", &self.open)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}
