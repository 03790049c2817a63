//! TUI screen implementations.

pub mod report_entry;

pub use report_entry::{Field, ReportEntryState, draw_report_entry};
