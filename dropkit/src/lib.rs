//! Headless interactive widgets.
//!
//! Every widget follows the controlled-component pattern: the caller owns the
//! authoritative value and hands it to the widget, the widget keeps only its
//! ephemeral interaction state (open/closed, focus, search text) and reports
//! proposed changes through callbacks. Rendering is left to the host, which
//! draws the plain view models the widgets produce.

pub mod error;
pub mod events;
pub mod widget;
pub mod widgets;

pub use error::ConfigError;
pub use events::{EventResult, Key, Modifiers};
pub use widget::{Size, WidgetId};

pub mod prelude {
    pub use crate::error::ConfigError;
    pub use crate::events::{EventResult, Key, Modifiers};
    pub use crate::widget::{Callback, Size, WidgetId};
    pub use crate::widgets::accordion::{Accordion, AccordionItem, AccordionMode};
    pub use crate::widgets::dropdown::{
        Accent, Dropdown, DropdownConfig, DropdownOption, DropdownPosition, DropdownVariant,
        DropdownView, OptionGroup, OptionValue, SelectionValue,
    };
    pub use crate::widgets::input::{Input, TextBuffer};
    pub use crate::widgets::modal::Modal;
    pub use crate::widgets::switch::Switch;
    pub use crate::widgets::toggle::{Toggle, ToggleVariant};
    pub use crate::widgets::tooltip::{Tooltip, TooltipSide};
}
