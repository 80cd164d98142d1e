//! Pieces shared by every widget: instance ids and callbacks.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

/// A change callback supplied by the widget's owner.
pub type Callback<T> = Box<dyn FnMut(T)>;

/// Widget size preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Unique identifier for a widget instance.
///
/// The string form (`__dropdown_3`) is the root element id. Every element a
/// widget renders uses it as a prefix, which is how pointer events are
/// classified as inside or outside the widget.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetId {
    kind: &'static str,
    index: usize,
}

impl WidgetId {
    /// Allocate a fresh id for a widget of the given kind.
    pub fn new(kind: &'static str) -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self {
            kind,
            index: COUNTER.fetch_add(1, Ordering::SeqCst),
        }
    }

    /// The widget kind this id was allocated for.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Id of a child element, e.g. `__dropdown_3-opt-2`.
    pub fn part(&self, name: impl std::fmt::Display) -> String {
        format!("{}-{}", self, name)
    }

    /// Check if an element id belongs to this widget's subtree.
    pub fn owns(&self, element_id: &str) -> bool {
        let root = self.to_string();
        match element_id.strip_prefix(root.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('-'),
            None => false,
        }
    }

    /// Strip this widget's prefix from a child element id.
    ///
    /// Returns `Some("")` for the root element itself and `None` for ids that
    /// belong to someone else.
    pub fn part_name<'a>(&self, element_id: &'a str) -> Option<&'a str> {
        let root = self.to_string();
        let rest = element_id.strip_prefix(root.as_str())?;
        if rest.is_empty() {
            Some("")
        } else {
            rest.strip_prefix('-')
        }
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__{}_{}", self.kind, self.index)
    }
}
