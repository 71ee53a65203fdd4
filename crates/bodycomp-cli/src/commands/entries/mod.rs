pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;

pub use add::handle_add;
pub use delete::handle_delete;
pub use edit::handle_edit;
pub use export::handle_export;
pub use list::handle_list;
