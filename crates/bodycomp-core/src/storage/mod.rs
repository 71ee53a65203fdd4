//! Storage abstraction for Bodycomp.
//!
//! This module defines the `EntryStore` trait and the core data types for
//! persisting body entries.
//!
//! ## Backends
//!
//! - `JsonFileStore`: a single JSON file holding the entry array
//! - `MemoryStore`: an in-process slot for tests and embedding
//!
//! Every backend keeps the whole collection in one slot and rewrites it in
//! full on each mutation.

pub mod json_file;
pub mod memory;
pub mod traits;
pub mod types;

// Re-export public types
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::EntryStore;
pub use types::{BodyEntry, Measurement};
