//! Application layer for Stubsmith.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, ProjectLocator)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! validation rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ArtifactContext,
    ArtifactInfo, // DTO for registry listings
    GenerateRequest,
    ProjectLocator,
    PublishRequest,
    ScaffoldService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateStore};

pub use error::ApplicationError;
