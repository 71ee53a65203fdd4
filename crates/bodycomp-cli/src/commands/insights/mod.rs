pub mod history;
pub mod summary;

pub use history::handle_history;
pub use summary::handle_summary;
