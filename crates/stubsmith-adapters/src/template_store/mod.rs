//! Template store adapters.

mod builtin;
mod file;
mod memory;

pub use builtin::{BUILTIN_STUBS, BuiltinTemplateStore};
pub use file::FileTemplateStore;
pub use memory::InMemoryTemplateStore;

/// Extension of template files, without the dot.
pub const STUB_EXTENSION: &str = "stub";
