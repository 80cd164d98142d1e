//! Dropdown widget state.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::widget::{Callback, WidgetId};
use crate::widgets::input::TextBuffer;

use super::config::DropdownConfig;
use super::filter::matching_indices;
use super::option::{DropdownOption, OptionValue, ResolvedOptions, resolve_options};
use super::selection::{self, DEFAULT_SAMPLE_SIZE, SelectionValue};

/// Ephemeral interaction state, discarded when the widget closes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    /// Whether the option panel is open.
    pub is_open: bool,
    /// Index into the filtered list (None if nothing focused).
    pub focused_index: Option<usize>,
    /// Search box contents.
    pub search: TextBuffer,
}

/// A dropdown selection widget.
///
/// The caller owns the selection: it passes the current value in with
/// [`set_value`](Dropdown::set_value) and receives proposed changes through
/// the `on_change` callback. The dropdown never writes the value itself, so a
/// caller that ignores a change keeps the old selection.
///
/// # Example
///
/// ```ignore
/// let mut fruit = Dropdown::new(
///     DropdownConfig::new().options([
///         DropdownOption::new("Apple", "apple"),
///         DropdownOption::new("Banana", "banana"),
///     ]),
///     Box::new(move |value| { let _ = tx.send(value); }),
/// );
///
/// fruit.handle_key(Key::Down, Modifiers::NONE);
/// fruit.handle_key(Key::Enter, Modifiers::NONE); // on_change(Single(Some("apple")))
/// ```
pub struct Dropdown {
    /// Unique identifier for this dropdown instance
    pub(super) id: WidgetId,
    pub(super) config: DropdownConfig,
    /// Working list, recomputed only when options or groups change
    pub(super) resolved: ResolvedOptions,
    /// Indices into the working list matching the search text
    pub(super) filtered: Vec<usize>,
    /// Last value supplied by the caller
    pub(super) value: SelectionValue,
    pub(super) interaction: InteractionState,
    pub(super) on_change: Callback<SelectionValue>,
    pub(super) on_open_change: Option<Callback<bool>>,
    pub(super) on_search: Option<Callback<String>>,
    pub(super) rng: StdRng,
    /// Dirty flag for re-render
    pub(super) dirty: bool,
}

impl Dropdown {
    /// Create a dropdown. `on_change` receives every committed selection.
    pub fn new(config: DropdownConfig, on_change: Callback<SelectionValue>) -> Self {
        let config = checked_config(config);
        let resolved = resolve_options(&config.options, &config.option_groups);
        warn_duplicates(&resolved);
        let filtered = (0..resolved.options.len()).collect();
        let value = SelectionValue::empty(config.multi_select);
        Self {
            id: WidgetId::new("dropdown"),
            config,
            resolved,
            filtered,
            value,
            interaction: InteractionState::default(),
            on_change,
            on_open_change: None,
            on_search: None,
            rng: StdRng::from_rng(&mut rand::rng()),
            dirty: true,
        }
    }

    /// Set the initial value.
    pub fn with_value(mut self, value: SelectionValue) -> Self {
        self.value = value;
        self
    }

    /// Register the open/close callback.
    pub fn on_open_change(mut self, callback: Callback<bool>) -> Self {
        self.on_open_change = Some(callback);
        self
    }

    /// Register the search callback.
    pub fn on_search(mut self, callback: Callback<String>) -> Self {
        self.on_search = Some(callback);
        self
    }

    /// Seed the random source used by Random-N, for reproducible draws.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Get the unique ID for this dropdown.
    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    /// Get the ID as a string (for element binding).
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    pub fn config(&self) -> &DropdownConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Props
    // -------------------------------------------------------------------------

    /// Replace the configuration, re-resolving options.
    pub fn set_config(&mut self, config: DropdownConfig) {
        self.config = checked_config(config);
        self.reresolve();
        if self.config.disabled && self.interaction.is_open {
            self.close();
        }
    }

    /// Replace the flat options.
    pub fn set_options(&mut self, options: Vec<DropdownOption>) {
        self.config.options = options;
        self.reresolve();
    }

    /// Toggle the loading display state.
    pub fn set_loading(&mut self, loading: bool) {
        self.config.loading = loading;
        self.dirty = true;
    }

    /// Set or clear the error display state.
    pub fn set_error(&mut self, error: Option<String>) {
        self.config.error = error;
        self.dirty = true;
    }

    /// The caller's current selection.
    pub fn value(&self) -> &SelectionValue {
        &self.value
    }

    /// Supply the caller's current selection.
    pub fn set_value(&mut self, value: SelectionValue) {
        if self.value != value {
            self.value = value;
            self.dirty = true;
        }
    }

    // -------------------------------------------------------------------------
    // Derived state
    // -------------------------------------------------------------------------

    /// The flat working list.
    pub fn options(&self) -> &[DropdownOption] {
        &self.resolved.options
    }

    pub fn resolved(&self) -> &ResolvedOptions {
        &self.resolved
    }

    /// Options matching the current search text, in original order.
    pub fn filtered_options(&self) -> Vec<&DropdownOption> {
        self.filtered
            .iter()
            .map(|&i| &self.resolved.options[i])
            .collect()
    }

    /// Number of options in the filtered list.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn is_open(&self) -> bool {
        self.interaction.is_open
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.interaction.focused_index
    }

    pub fn search_text(&self) -> &str {
        self.interaction.search.text()
    }

    /// Number of values drawn by Random-N and Select Top N.
    pub fn sample_size(&self) -> usize {
        self.config.max_selections.unwrap_or(DEFAULT_SAMPLE_SIZE)
    }

    /// Labels of the selected values, in selection order.
    ///
    /// Values that match no option are skipped.
    pub fn selected_labels(&self) -> Vec<&str> {
        self.value
            .values()
            .iter()
            .filter_map(|v| self.resolved.find(v))
            .map(|o| o.label.as_str())
            .collect()
    }

    /// Trigger text: selected labels, or the placeholder.
    pub fn display_label(&self) -> String {
        let labels = self.selected_labels();
        if labels.is_empty() {
            self.config.placeholder.clone()
        } else if self.config.multi_select {
            labels.join(", ")
        } else {
            labels[0].to_string()
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the dropdown needs to be redrawn.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    /// Open the panel. Does not change the selection.
    pub fn open(&mut self) {
        if self.config.disabled || self.interaction.is_open {
            return;
        }
        log::debug!("Dropdown {} open", self.id);
        self.interaction.is_open = true;
        self.dirty = true;
        self.emit_open_change(true);
    }

    /// Close the panel, resetting focus and search text.
    pub fn close(&mut self) {
        if !self.interaction.is_open {
            return;
        }
        log::debug!("Dropdown {} close", self.id);
        self.interaction = InteractionState::default();
        self.refilter();
        self.dirty = true;
        self.emit_open_change(false);
    }

    /// Toggle the panel open/closed.
    pub fn toggle_open(&mut self) {
        if self.interaction.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Finish a multi-select session.
    pub fn done(&mut self) {
        self.close();
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Replace the search text, as if typed into the search box.
    pub fn set_search(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.interaction.search.text() {
            return;
        }
        self.interaction.search.set_text(text);
        self.search_changed();
    }

    /// Re-filter after a search edit and report the raw text.
    pub(super) fn search_changed(&mut self) {
        self.refilter();
        self.interaction.focused_index = None;
        self.dirty = true;
        let text = self.interaction.search.text().to_string();
        log::debug!(
            "Dropdown {} search={:?} matches={}",
            self.id,
            text,
            self.filtered.len()
        );
        if let Some(callback) = self.on_search.as_mut() {
            callback(text);
        }
    }

    // -------------------------------------------------------------------------
    // Selection actions
    // -------------------------------------------------------------------------

    /// Commit the option at `index` in the filtered list.
    ///
    /// Single-select replaces the value and closes. Multi-select toggles the
    /// value, respecting `max_selections`. Returns true if a change was
    /// reported.
    pub fn select_index(&mut self, index: usize) -> bool {
        if self.config.disabled {
            return false;
        }
        let Some(option) = self
            .filtered
            .get(index)
            .map(|&i| &self.resolved.options[i])
        else {
            return false;
        };
        if option.disabled {
            return false;
        }
        let value = option.value.clone();

        if self.config.multi_select {
            match selection::toggle(self.value.values(), &value, self.config.max_selections) {
                Some(next) => {
                    self.emit_change(SelectionValue::Multiple(next));
                    true
                }
                None => {
                    log::debug!("Dropdown {} at max selections, {} ignored", self.id, value);
                    false
                }
            }
        } else {
            self.emit_change(SelectionValue::Single(Some(value)));
            self.close();
            true
        }
    }

    /// Commit an option by value. It must be in the filtered list.
    pub fn select_value(&mut self, value: &OptionValue) -> bool {
        match self
            .filtered
            .iter()
            .position(|&i| &self.resolved.options[i].value == value)
        {
            Some(index) => self.select_index(index),
            None => false,
        }
    }

    /// Select every enabled filtered option, up to the maximum. Multi-select only.
    pub fn select_all(&mut self) -> bool {
        if !self.multi_actions_enabled() {
            return false;
        }
        let next = selection::select_all(&self.filtered_options(), self.config.max_selections);
        self.emit_change(SelectionValue::Multiple(next));
        true
    }

    /// Select the first N enabled filtered options. Multi-select only.
    pub fn select_top_n(&mut self) -> bool {
        if !self.multi_actions_enabled() {
            return false;
        }
        let next = selection::select_top(&self.filtered_options(), self.sample_size());
        self.emit_change(SelectionValue::Multiple(next));
        true
    }

    /// Replace the selection with a uniform random sample of enabled filtered
    /// options. Multi-select only.
    pub fn select_random(&mut self) -> bool {
        if !self.multi_actions_enabled() {
            return false;
        }
        let n = self.sample_size();
        let options: Vec<&DropdownOption> = self
            .filtered
            .iter()
            .map(|&i| &self.resolved.options[i])
            .collect();
        let next = selection::random_selection(&options, n, &mut self.rng);
        self.emit_change(SelectionValue::Multiple(next));
        true
    }

    /// Empty the selection. No-op when already empty. Multi-select only.
    pub fn clear_all(&mut self) -> bool {
        if !self.multi_actions_enabled() {
            return false;
        }
        match selection::clear_all(self.value.values()) {
            Some(next) => {
                self.emit_change(SelectionValue::Multiple(next));
                true
            }
            None => false,
        }
    }

    /// Reset the value to empty. Requires `clearable`.
    pub fn clear(&mut self) -> bool {
        if self.config.disabled || !self.config.clearable {
            return false;
        }
        self.emit_change(SelectionValue::empty(self.config.multi_select));
        true
    }

    // -------------------------------------------------------------------------
    // Internal methods
    // -------------------------------------------------------------------------

    fn multi_actions_enabled(&self) -> bool {
        self.config.multi_select && !self.config.disabled
    }

    fn reresolve(&mut self) {
        self.resolved = resolve_options(&self.config.options, &self.config.option_groups);
        warn_duplicates(&self.resolved);
        self.refilter();
        self.interaction.focused_index = None;
        self.dirty = true;
    }

    fn refilter(&mut self) {
        self.filtered = matching_indices(&self.resolved.options, self.interaction.search.text());
    }

    fn emit_change(&mut self, value: SelectionValue) {
        log::debug!("Dropdown {} change {:?}", self.id, value);
        (self.on_change)(value);
    }

    fn emit_open_change(&mut self, open: bool) {
        if let Some(callback) = self.on_open_change.as_mut() {
            callback(open);
        }
    }
}

impl std::fmt::Debug for Dropdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dropdown")
            .field("id", &self.id)
            .field("value", &self.value)
            .field("interaction", &self.interaction)
            .field("filtered", &self.filtered)
            .finish_non_exhaustive()
    }
}

/// Validate a config built in code. A zero selection limit becomes no limit.
fn checked_config(mut config: DropdownConfig) -> DropdownConfig {
    if let Err(err) = config.validate() {
        log::warn!("{}; selections left unlimited", err);
        config.max_selections = None;
    }
    config
}

fn warn_duplicates(resolved: &ResolvedOptions) {
    for value in resolved.duplicate_values() {
        log::warn!("duplicate option value {}", value);
    }
}
