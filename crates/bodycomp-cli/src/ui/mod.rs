//! UI primitives for the Bodycomp CLI.
//!
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens, verdict colors, trend symbols
//! - **Render**: Tables, headers, receipts, hints
//! - **Format**: Value, date and id formatting

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{
    badge, blank_line, divider, header, hint, kv, print, print_error, receipt, simple_table,
    table, Column,
};

pub use format::{format_date, format_datetime, format_value, format_with_unit, short_id};
