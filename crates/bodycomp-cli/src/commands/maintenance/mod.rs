pub mod check;
pub mod clear;
pub mod seed;

pub use check::handle_check;
pub use clear::handle_clear;
pub use seed::handle_seed;
