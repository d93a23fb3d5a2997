//! Infrastructure adapters for Stubsmith.
//!
//! This crate implements the ports defined in `stubsmith-core::application::ports`.
//! It contains all I/O operations.

pub mod filesystem;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_store::{BuiltinTemplateStore, FileTemplateStore, InMemoryTemplateStore};
