//! Option model and the options resolver.

use std::collections::HashSet;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// The identity of an option: a string or an integer.
///
/// Deserializes untagged, so `"banana"` and `42` are both accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionValue::Number(n) => write!(f, "{}", n),
            OptionValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Number(value)
    }
}

/// A single selectable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownOption {
    /// Display text, also what the search filter matches against.
    pub label: String,
    /// Identity of the option.
    pub value: OptionValue,
    /// Disabled options are shown but can never be selected.
    #[serde(default)]
    pub disabled: bool,
    /// Icon name, drawn by the host.
    #[serde(default)]
    pub icon: Option<String>,
    /// Secondary text shown under the label.
    #[serde(default)]
    pub description: Option<String>,
    /// Free-form group tag.
    #[serde(default)]
    pub group: Option<String>,
}

impl DropdownOption {
    /// Create an enabled option.
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            disabled: false,
            icon: None,
            description: None,
            group: None,
        }
    }

    /// Mark the option as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the icon name.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A named partition of options displayed under a shared header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionGroup {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub options: Vec<DropdownOption>,
}

impl OptionGroup {
    /// Create a group.
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        options: impl IntoIterator<Item = DropdownOption>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            options: options.into_iter().collect(),
        }
    }
}

/// Header for a run of options in the flattened working list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSpan {
    pub label: String,
    pub value: String,
    /// Indices of the group's options in the working list.
    pub range: Range<usize>,
}

/// The flat working list plus the group headers it was built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedOptions {
    pub options: Vec<DropdownOption>,
    pub groups: Vec<GroupSpan>,
}

impl ResolvedOptions {
    /// Check if the options came from groups.
    pub fn is_grouped(&self) -> bool {
        !self.groups.is_empty()
    }

    /// The group containing the option at `index`, if any.
    pub fn group_of(&self, index: usize) -> Option<&GroupSpan> {
        self.groups.iter().find(|g| g.range.contains(&index))
    }

    /// Find an option by value.
    pub fn find(&self, value: &OptionValue) -> Option<&DropdownOption> {
        self.options.iter().find(|o| &o.value == value)
    }

    /// Values that appear more than once, in first-seen order.
    pub fn duplicate_values(&self) -> Vec<&OptionValue> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for option in &self.options {
            if !seen.insert(&option.value) && !duplicates.contains(&&option.value) {
                duplicates.push(&option.value);
            }
        }
        duplicates
    }
}

/// Flatten the two possible input shapes into one working list.
///
/// Non-empty `groups` win: their options are concatenated in group order.
/// Otherwise the flat `options` are used as-is.
pub fn resolve_options(options: &[DropdownOption], groups: &[OptionGroup]) -> ResolvedOptions {
    if groups.is_empty() {
        return ResolvedOptions {
            options: options.to_vec(),
            groups: Vec::new(),
        };
    }

    let mut resolved = ResolvedOptions::default();
    for group in groups {
        let start = resolved.options.len();
        resolved.options.extend(group.options.iter().cloned());
        resolved.groups.push(GroupSpan {
            label: group.label.clone(),
            value: group.value.clone(),
            range: start..resolved.options.len(),
        });
    }
    resolved
}
