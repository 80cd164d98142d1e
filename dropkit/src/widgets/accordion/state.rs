//! Accordion widget state.

use crate::widget::{Callback, WidgetId};

/// How many sections may be open at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccordionMode {
    /// At most one open section. With `collapsible`, the open section can
    /// be closed again, leaving none open.
    Single { collapsible: bool },
    /// Any number of open sections.
    Multiple,
}

impl Default for AccordionMode {
    fn default() -> Self {
        AccordionMode::Single { collapsible: true }
    }
}

/// One section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionItem {
    pub value: String,
    pub title: String,
    pub disabled: bool,
}

impl AccordionItem {
    pub fn new(value: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            title: title.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// A set of collapsible sections.
///
/// The caller owns the list of expanded section values; the accordion keeps
/// only the focused header.
pub struct Accordion {
    pub(super) id: WidgetId,
    pub(super) items: Vec<AccordionItem>,
    pub(super) mode: AccordionMode,
    /// Expanded values supplied by the caller
    pub(super) expanded: Vec<String>,
    /// Focused header (None before the accordion is first focused)
    pub(super) focused: Option<usize>,
    pub(super) disabled: bool,
    pub(super) on_value_change: Callback<Vec<String>>,
}

/// What the host draws for an accordion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionView {
    pub id: String,
    pub items: Vec<AccordionItemView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionItemView {
    /// Header element id.
    pub id: String,
    pub value: String,
    pub title: String,
    pub expanded: bool,
    pub focused: bool,
    pub disabled: bool,
}

impl Accordion {
    pub fn new(
        items: impl IntoIterator<Item = AccordionItem>,
        mode: AccordionMode,
        on_value_change: Callback<Vec<String>>,
    ) -> Self {
        Self {
            id: WidgetId::new("accordion"),
            items: items.into_iter().collect(),
            mode,
            expanded: Vec::new(),
            focused: None,
            disabled: false,
            on_value_change,
        }
    }

    /// Set the initially expanded sections.
    pub fn with_expanded(mut self, expanded: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.expanded = expanded.into_iter().map(Into::into).collect();
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    pub fn items(&self) -> &[AccordionItem] {
        &self.items
    }

    pub fn expanded(&self) -> &[String] {
        &self.expanded
    }

    /// Supply the caller's expanded sections.
    pub fn set_expanded(&mut self, expanded: Vec<String>) {
        self.expanded = expanded;
    }

    pub fn is_expanded(&self, value: &str) -> bool {
        self.expanded.iter().any(|v| v == value)
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Expand or collapse the section at `index`. Returns true if a change
    /// was reported.
    pub fn toggle_item(&mut self, index: usize) -> bool {
        if self.disabled {
            return false;
        }
        let Some(item) = self.items.get(index) else {
            return false;
        };
        if item.disabled {
            return false;
        }
        let value = item.value.clone();
        let is_open = self.is_expanded(&value);

        let next = match self.mode {
            AccordionMode::Single { collapsible } => {
                if !is_open {
                    vec![value]
                } else if collapsible {
                    Vec::new()
                } else {
                    return false;
                }
            }
            AccordionMode::Multiple => {
                if is_open {
                    self.expanded.iter().filter(|v| **v != value).cloned().collect()
                } else {
                    let mut next = self.expanded.clone();
                    next.push(value);
                    next
                }
            }
        };

        log::debug!("Accordion {} expanded {:?}", self.id, next);
        (self.on_value_change)(next);
        true
    }

    pub fn view(&self) -> AccordionView {
        AccordionView {
            id: self.id.to_string(),
            items: self
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| AccordionItemView {
                    id: self.id.part(format!("item-{}", i)),
                    value: item.value.clone(),
                    title: item.title.clone(),
                    expanded: self.is_expanded(&item.value),
                    focused: self.focused == Some(i),
                    disabled: item.disabled,
                })
                .collect(),
        }
    }
}

impl std::fmt::Debug for Accordion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Accordion")
            .field("id", &self.id)
            .field("mode", &self.mode)
            .field("expanded", &self.expanded)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}
