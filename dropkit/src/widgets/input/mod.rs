//! Input widget - a single-line text field.

mod buffer;
mod events;
mod state;

pub use buffer::{TextBuffer, TextEditResult};
pub use state::{Input, InputView};
