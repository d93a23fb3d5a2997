//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stubsmith-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::Template;
use crate::error::StubsmithResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stubsmith_adapters::filesystem::LocalFilesystem` (production)
/// - `stubsmith_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Every call blocks until done; there is no locking between invocations
/// - `create_dir_all` is idempotent
/// - `write_file` truncates, with no backup and no atomic rename
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parents. Existing directories are fine.
    fn create_dir_all(&self, path: &Path) -> StubsmithResult<()>;

    /// Create or truncate a file and write `content` to it.
    fn write_file(&self, path: &Path, content: &str) -> StubsmithResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> StubsmithResult<String>;

    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for template lookup.
///
/// Implemented by:
/// - `stubsmith_adapters::template_store::FileTemplateStore` (shipped stubs on disk)
/// - `stubsmith_adapters::template_store::InMemoryTemplateStore` (testing)
///
/// Implementations must not cache: every `load` reads the asset again.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Load the template with the given logical name.
    ///
    /// Fails with `ApplicationError::TemplateNotFound` carrying the
    /// attempted location when the asset is missing.
    fn load(&self, name: &str) -> StubsmithResult<Template>;

    /// Where the template with this logical name is expected to live.
    fn location(&self, name: &str) -> PathBuf;
}
