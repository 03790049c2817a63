//! Reusable TUI widgets.

pub mod selector;
pub mod time_picker;

pub use selector::{cycle_selection, draw_selector};
pub use time_picker::{DismissPolicy, Segment, TimePickerState, draw_time_picker};
