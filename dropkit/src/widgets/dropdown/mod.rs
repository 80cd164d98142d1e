//! Dropdown widget - single or multi-select with search, groups and
//! keyboard navigation.

mod config;
mod events;
mod filter;
mod option;
mod render;
mod selection;
mod state;

pub use config::{DropdownConfig, DropdownPosition, DropdownVariant};
pub use filter::{LabelMatcher, filter_options, matching_indices};
pub use option::{
    DropdownOption, GroupSpan, OptionGroup, OptionValue, ResolvedOptions, resolve_options,
};
pub use render::{
    Accent, DropdownView, FooterAction, FooterView, ListRow, OptionRow, PanelBody, PanelView,
    SearchView, TriggerView,
};
pub use selection::{
    DEFAULT_SAMPLE_SIZE, SelectionValue, clear_all, random_selection, select_all, select_top,
    toggle,
};
pub use state::{Dropdown, InteractionState};
