//! Built-in widgets.
//!
//! Each widget lives in its own module. Larger widgets split into:
//! - `state.rs` - the interaction state type
//! - `events.rs` - key and pointer handling
//! - `render.rs` - view model construction
//! - `mod.rs` - public exports

pub mod accordion;
pub mod dropdown;
pub mod input;
pub mod modal;
pub mod switch;
pub mod toggle;
pub mod tooltip;
