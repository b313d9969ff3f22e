//! Concrete catalog implementations

pub mod json_dir;
pub mod memory;

pub use json_dir::JsonDirCatalog;
pub use memory::InMemoryCatalog;
