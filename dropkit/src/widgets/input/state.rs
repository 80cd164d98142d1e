//! Input widget state.

use crate::widget::{Callback, WidgetId};

use super::TextBuffer;

/// A single-line text input.
///
/// The caller owns the text. Edits are applied to the widget's buffer so the
/// cursor stays put, and every change is reported through `on_change`.
/// Supplying a different value with [`set_value`](Input::set_value)
/// overwrites the buffer.
///
/// # Example
///
/// ```ignore
/// let mut name = Input::new(Box::new(|text| println!("name = {text}")))
///     .with_placeholder("Your name")
///     .max_length(32);
/// name.handle_key(Key::Char('a'), Modifiers::NONE);
/// ```
pub struct Input {
    /// Unique identifier for this input instance
    pub(super) id: WidgetId,
    pub(super) buffer: TextBuffer,
    pub(super) placeholder: String,
    pub(super) max_length: Option<usize>,
    pub(super) clearable: bool,
    pub(super) disabled: bool,
    /// Validation error message (if any)
    pub(super) error: Option<String>,
    pub(super) on_change: Callback<String>,
    pub(super) on_submit: Option<Callback<String>>,
    /// Dirty flag for re-render
    pub(super) dirty: bool,
}

/// What the host draws for an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub id: String,
    pub text: String,
    pub cursor: usize,
    pub placeholder: String,
    pub show_placeholder: bool,
    pub clear_id: Option<String>,
    pub disabled: bool,
    pub error: Option<String>,
}

impl Input {
    /// Create an empty input.
    pub fn new(on_change: Callback<String>) -> Self {
        Self {
            id: WidgetId::new("input"),
            buffer: TextBuffer::default(),
            placeholder: String::new(),
            max_length: None,
            clearable: false,
            disabled: false,
            error: None,
            on_change,
            on_submit: None,
            dirty: true,
        }
    }

    /// Set the initial value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.buffer = TextBuffer::new(value);
        self
    }

    /// Set the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Limit the value to `max` characters.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Show a clear affordance while the input has text.
    pub fn clearable(mut self) -> Self {
        self.clearable = true;
        self
    }

    /// Mark the input as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Register the Enter callback.
    pub fn on_submit(mut self, callback: Callback<String>) -> Self {
        self.on_submit = Some(callback);
        self
    }

    /// Get the unique ID for this input.
    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    /// Get the ID as a string (for element binding).
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Get the current text value.
    pub fn value(&self) -> &str {
        self.buffer.text()
    }

    /// Supply the caller's value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value != self.buffer.text() {
            self.buffer.set_text(value);
            self.dirty = true;
        }
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.dirty = true;
    }

    /// Clear the text. Requires `clearable`.
    pub fn clear(&mut self) -> bool {
        if self.disabled || !self.clearable {
            return false;
        }
        if self.buffer.clear() {
            self.emit_change();
            true
        } else {
            false
        }
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Set a validation error message.
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
        self.dirty = true;
    }

    /// Clear the validation error.
    pub fn clear_error(&mut self) {
        if self.error.take().is_some() {
            self.dirty = true;
        }
    }

    /// Get the current validation error message.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Build the view for the current state.
    pub fn view(&self) -> InputView {
        InputView {
            id: self.id_string(),
            text: self.buffer.text().to_string(),
            cursor: self.buffer.cursor(),
            placeholder: self.placeholder.clone(),
            show_placeholder: self.buffer.is_empty(),
            clear_id: (self.clearable && !self.buffer.is_empty() && !self.disabled)
                .then(|| self.id.part("clear")),
            disabled: self.disabled,
            error: self.error.clone(),
        }
    }

    pub(super) fn emit_change(&mut self) {
        self.dirty = true;
        let text = self.buffer.text().to_string();
        log::debug!("Input {} change len={}", self.id, text.len());
        (self.on_change)(text);
    }
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Input")
            .field("id", &self.id)
            .field("buffer", &self.buffer)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}
