//! Dropdown configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::widget::Size;

use super::option::{DropdownOption, OptionGroup};

/// Trigger look.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropdownVariant {
    #[default]
    Default,
    Outline,
    Ghost,
}

/// Where the option panel opens relative to the trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropdownPosition {
    #[default]
    Bottom,
    Top,
    Left,
    Right,
}

/// Construction inputs for a [`Dropdown`](super::Dropdown).
///
/// Everything except the selection value and the callbacks. Deserializes from
/// camelCase JSON; every field is optional.
///
/// # Example
///
/// ```ignore
/// let config = DropdownConfig::new()
///     .options([
///         DropdownOption::new("Apple", "apple"),
///         DropdownOption::new("Banana", "banana"),
///     ])
///     .multi_select()
///     .max_selections(2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DropdownConfig {
    /// Flat options. Ignored when `option_groups` is non-empty.
    pub options: Vec<DropdownOption>,
    /// Grouped options.
    pub option_groups: Vec<OptionGroup>,
    /// Trigger text when nothing is selected.
    pub placeholder: String,
    /// Disabled dropdowns ignore all input.
    pub disabled: bool,
    pub multi_select: bool,
    /// Selection limit in multi-select mode (None = unlimited).
    pub max_selections: Option<usize>,
    /// Show a search box in the open panel.
    pub searchable: bool,
    pub search_placeholder: String,
    /// Show a clear affordance on the trigger while a value is selected.
    pub clearable: bool,
    pub size: Size,
    pub variant: DropdownVariant,
    /// Accent colour. Display only.
    pub color: Option<String>,
    /// Accent gradient, takes precedence over `color`. Display only.
    pub gradient: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub border_color: Option<String>,
    pub position: DropdownPosition,
    /// Panel width in cells.
    pub width: Option<u16>,
    /// Maximum number of visible rows in the panel.
    pub max_height: Option<u16>,
    /// Show the loading state instead of options.
    pub loading: bool,
    /// Show an error message instead of options.
    pub error: Option<String>,
    /// Message when no option matches.
    pub empty_message: String,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            option_groups: Vec::new(),
            placeholder: "Select...".into(),
            disabled: false,
            multi_select: false,
            max_selections: None,
            searchable: false,
            search_placeholder: "Search...".into(),
            clearable: false,
            size: Size::default(),
            variant: DropdownVariant::default(),
            color: None,
            gradient: None,
            background_color: None,
            text_color: None,
            border_color: None,
            position: DropdownPosition::default(),
            width: None,
            max_height: None,
            loading: false,
            error: None,
            empty_message: "No options available".into(),
        }
    }
}

impl DropdownConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Check the configuration for values no interaction could work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_selections == Some(0) {
            return Err(ConfigError::ZeroMaxSelections);
        }
        if !self.multi_select && self.max_selections.is_some() {
            log::warn!("maxSelections has no effect without multiSelect");
        }
        if !self.option_groups.is_empty() && !self.options.is_empty() {
            log::warn!("both options and optionGroups given; flat options are ignored");
        }
        Ok(())
    }

    /// Set the flat options.
    pub fn options(mut self, options: impl IntoIterator<Item = DropdownOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    /// Set the option groups.
    pub fn option_groups(mut self, groups: impl IntoIterator<Item = OptionGroup>) -> Self {
        self.option_groups = groups.into_iter().collect();
        self
    }

    /// Set the placeholder text shown when no value is selected.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Mark the dropdown as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Enable multi-select mode.
    pub fn multi_select(mut self) -> Self {
        self.multi_select = true;
        self
    }

    /// Limit the number of selections in multi-select mode.
    pub fn max_selections(mut self, max: usize) -> Self {
        self.max_selections = Some(max);
        self
    }

    /// Show a search box.
    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    /// Show a clear affordance.
    pub fn clearable(mut self) -> Self {
        self.clearable = true;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn variant(mut self, variant: DropdownVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn position(mut self, position: DropdownPosition) -> Self {
        self.position = position;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn gradient(mut self, gradient: impl Into<String>) -> Self {
        self.gradient = Some(gradient.into());
        self
    }

    /// Toggle the loading display state.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set or clear the error display state.
    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }
}
