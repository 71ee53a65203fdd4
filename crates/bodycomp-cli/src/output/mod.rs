//! Output formatting helpers for the CLI.
//!
//! Formats entries, summary cards and the history series as JSON or text.

mod json;
mod text;

pub use json::{entries_json, entry_json, history_json, summary_json};
pub use text::{print_entry_list, print_history, print_summary};
