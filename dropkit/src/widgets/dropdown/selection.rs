//! Selection value and the pure selection operations.
//!
//! Each operation takes the current selection and the options it may draw
//! from, and returns the proposed new selection. `None` means the action is
//! a no-op and no change should be reported.

use rand::Rng;
use rand::seq::index;

use super::option::{DropdownOption, OptionValue};

/// Draw size used by Random-N and Select Top N when no maximum is configured.
pub const DEFAULT_SAMPLE_SIZE: usize = 3;

/// The caller-owned selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionValue {
    /// Single-select value. `None` is the empty value.
    Single(Option<OptionValue>),
    /// Multi-select values in selection order.
    Multiple(Vec<OptionValue>),
}

impl SelectionValue {
    /// The empty value for the given mode.
    pub fn empty(multi_select: bool) -> Self {
        if multi_select {
            SelectionValue::Multiple(Vec::new())
        } else {
            SelectionValue::Single(None)
        }
    }

    /// The selected values as a slice, whatever the mode.
    pub fn values(&self) -> &[OptionValue] {
        match self {
            SelectionValue::Single(Some(value)) => std::slice::from_ref(value),
            SelectionValue::Single(None) => &[],
            SelectionValue::Multiple(values) => values,
        }
    }

    /// Check if `value` is selected.
    pub fn contains(&self, value: &OptionValue) -> bool {
        self.values().contains(value)
    }

    /// Number of selected values.
    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }
}

impl Default for SelectionValue {
    fn default() -> Self {
        SelectionValue::Single(None)
    }
}

/// Toggle `value` in a multi-select list.
///
/// Selected values are removed. New values are appended only while the list
/// is below `max`; at the limit the toggle is a no-op.
pub fn toggle(
    selected: &[OptionValue],
    value: &OptionValue,
    max: Option<usize>,
) -> Option<Vec<OptionValue>> {
    if selected.contains(value) {
        return Some(selected.iter().filter(|v| *v != value).cloned().collect());
    }
    if max.is_some_and(|max| selected.len() >= max) {
        return None;
    }
    let mut next = selected.to_vec();
    next.push(value.clone());
    Some(next)
}

/// Values of every enabled option, truncated to `max`.
pub fn select_all(options: &[&DropdownOption], max: Option<usize>) -> Vec<OptionValue> {
    first_enabled(options, max.unwrap_or(usize::MAX))
}

/// Values of the first `n` enabled options.
pub fn select_top(options: &[&DropdownOption], n: usize) -> Vec<OptionValue> {
    first_enabled(options, n)
}

/// A uniform sample of `n` enabled options, drawn without replacement.
///
/// Returns every enabled option when fewer than `n` exist. Values come back
/// in the order they were drawn.
pub fn random_selection<R: Rng + ?Sized>(
    options: &[&DropdownOption],
    n: usize,
    rng: &mut R,
) -> Vec<OptionValue> {
    let enabled: Vec<&OptionValue> = options
        .iter()
        .filter(|o| !o.disabled)
        .map(|o| &o.value)
        .collect();
    let amount = n.min(enabled.len());
    index::sample(rng, enabled.len(), amount)
        .into_iter()
        .map(|i| enabled[i].clone())
        .collect()
}

/// Empty the list. `None` when it is already empty.
pub fn clear_all(selected: &[OptionValue]) -> Option<Vec<OptionValue>> {
    if selected.is_empty() {
        None
    } else {
        Some(Vec::new())
    }
}

fn first_enabled(options: &[&DropdownOption], n: usize) -> Vec<OptionValue> {
    options
        .iter()
        .filter(|o| !o.disabled)
        .take(n)
        .map(|o| o.value.clone())
        .collect()
}
