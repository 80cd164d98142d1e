//! View model construction for the Dropdown widget.
//!
//! The view is a plain description of what to draw. Every interactive part
//! carries the element id the host should report back through
//! [`Dropdown::handle_click`].

use crate::widget::Size;

use super::Dropdown;
use super::config::{DropdownConfig, DropdownPosition, DropdownVariant};
use super::events::part;

/// Resolved accent: gradient over colour over the theme default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accent {
    Gradient(String),
    Color(String),
    Theme,
}

impl Accent {
    pub fn resolve(config: &DropdownConfig) -> Self {
        match (&config.gradient, &config.color) {
            (Some(gradient), _) => Accent::Gradient(gradient.clone()),
            (None, Some(color)) => Accent::Color(color.clone()),
            (None, None) => Accent::Theme,
        }
    }
}

/// Everything the host needs to draw one dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownView {
    pub trigger: TriggerView,
    /// Present while the dropdown is open.
    pub panel: Option<PanelView>,
}

/// The always-visible trigger row.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerView {
    pub id: String,
    /// Selected labels or the placeholder.
    pub label: String,
    pub is_placeholder: bool,
    /// Id of the clear affordance, when it should be shown.
    pub clear_id: Option<String>,
    pub open: bool,
    pub disabled: bool,
    pub size: Size,
    pub variant: DropdownVariant,
    pub accent: Accent,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub border_color: Option<String>,
}

/// The option panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub id: String,
    pub position: DropdownPosition,
    pub width: Option<u16>,
    pub max_height: Option<u16>,
    pub search: Option<SearchView>,
    pub body: PanelBody,
    /// Multi-select action bar.
    pub footer: Option<FooterView>,
}

/// The search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    pub id: String,
    pub text: String,
    pub cursor: usize,
    pub placeholder: String,
}

/// What the panel shows below the search box.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelBody {
    Loading,
    Error(String),
    /// No option matched; carries the empty message.
    Empty(String),
    Rows(Vec<ListRow>),
}

/// One row in the option list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListRow {
    GroupHeader { id: String, label: String },
    Option(OptionRow),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionRow {
    pub id: String,
    /// Position in the filtered list.
    pub index: usize,
    pub label: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub selected: bool,
    pub focused: bool,
    pub disabled: bool,
}

/// Multi-select footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterView {
    pub selected_count: usize,
    pub max_selections: Option<usize>,
    pub actions: Vec<FooterAction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterAction {
    pub id: String,
    pub label: String,
    pub enabled: bool,
}

impl Dropdown {
    /// Build the view for the current state.
    pub fn view(&self) -> DropdownView {
        let labels = self.selected_labels();
        let is_placeholder = labels.is_empty();

        let trigger = TriggerView {
            id: self.id_string(),
            label: self.display_label(),
            is_placeholder,
            clear_id: (self.config.clearable && !is_placeholder && !self.config.disabled)
                .then(|| self.id.part(part::CLEAR)),
            open: self.interaction.is_open,
            disabled: self.config.disabled,
            size: self.config.size,
            variant: self.config.variant,
            accent: Accent::resolve(&self.config),
            background_color: self.config.background_color.clone(),
            text_color: self.config.text_color.clone(),
            border_color: self.config.border_color.clone(),
        };

        let panel = self.interaction.is_open.then(|| self.panel_view());

        DropdownView { trigger, panel }
    }

    fn panel_view(&self) -> PanelView {
        log::debug!(
            "Dropdown {} rendering {} of {} options",
            self.id,
            self.filtered.len(),
            self.resolved.options.len()
        );

        let search = self.config.searchable.then(|| SearchView {
            id: self.id.part(part::SEARCH),
            text: self.interaction.search.text().to_string(),
            cursor: self.interaction.search.cursor(),
            placeholder: self.config.search_placeholder.clone(),
        });

        let body = if self.config.loading {
            PanelBody::Loading
        } else if let Some(error) = &self.config.error {
            PanelBody::Error(error.clone())
        } else if self.filtered.is_empty() {
            PanelBody::Empty(self.config.empty_message.clone())
        } else {
            PanelBody::Rows(self.rows())
        };

        let footer = self.config.multi_select.then(|| self.footer_view());

        PanelView {
            id: self.id.part(part::LIST),
            position: self.config.position,
            width: self.config.width,
            max_height: self.config.max_height,
            search,
            body,
            footer,
        }
    }

    fn rows(&self) -> Vec<ListRow> {
        let mut rows = Vec::with_capacity(self.filtered.len() + self.resolved.groups.len());
        let mut current_group = None;

        for (index, &option_index) in self.filtered.iter().enumerate() {
            if let Some((group_index, group)) = self
                .resolved
                .groups
                .iter()
                .enumerate()
                .find(|(_, g)| g.range.contains(&option_index))
            {
                // Groups with no matching options never get a header.
                if current_group != Some(group_index) {
                    current_group = Some(group_index);
                    rows.push(ListRow::GroupHeader {
                        id: self.id.part(format!("{}{}", part::GROUP_PREFIX, group.value)),
                        label: group.label.clone(),
                    });
                }
            }

            let option = &self.resolved.options[option_index];
            rows.push(ListRow::Option(OptionRow {
                id: self.id.part(format!("{}{}", part::OPTION_PREFIX, index)),
                index,
                label: option.label.clone(),
                description: option.description.clone(),
                icon: option.icon.clone(),
                selected: self.value.contains(&option.value),
                focused: self.interaction.focused_index == Some(index),
                disabled: option.disabled,
            }));
        }

        rows
    }

    fn footer_view(&self) -> FooterView {
        let n = self.sample_size();
        let selected_count = self.value.len();
        let has_options = !self.filtered.is_empty();
        let action = |name: &str, label: String, enabled: bool| FooterAction {
            id: self.id.part(name),
            label,
            enabled,
        };

        FooterView {
            selected_count,
            max_selections: self.config.max_selections,
            actions: vec![
                action(part::SELECT_ALL, "Select All".into(), has_options),
                action(part::SELECT_TOP, format!("Select Top {}", n), has_options),
                action(part::RANDOM, format!("Random {}", n), has_options),
                action(part::CLEAR_ALL, "Clear All".into(), selected_count > 0),
                action(part::DONE, "Done".into(), true),
            ],
        }
    }
}
