//! Accordion widget - stacked sections that expand and collapse.

mod events;
mod state;

pub use state::{Accordion, AccordionItem, AccordionItemView, AccordionMode, AccordionView};
