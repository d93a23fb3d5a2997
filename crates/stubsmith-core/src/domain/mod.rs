// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Stubsmith.
//!
//! This module contains pure logic with no I/O. Reading templates, probing
//! the filesystem and writing files are handled via ports (traits) defined
//! in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: Identifiers and segments are validated on construction
//!
// Public API - what the world sees
pub mod artifacts;
pub mod entities;
pub mod error;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use artifacts::{
    ARTIFACT_REGISTRY, ArtifactDef, RESOURCE_CONTROLLER_TEMPLATE, SERVICE_PROVIDER_SUFFIX,
    SERVICE_SUBDIRECTORIES, artifacts_in_scope, find_artifact,
};

pub use entities::{
    GenerationTarget, ProjectLayout, ProjectRoot, RenderContext, Template,
    compute_display_path, substitute_placeholders,
};

pub use error::{DomainError, IdentifierRejection, SegmentRejection};

pub use validation::{
    DEFAULT_SEGMENT_ROLE, MAX_IDENTIFIER_LENGTH, NameValidator, RESERVED_KEYWORDS,
};

pub use value_objects::{ArtifactKind, ArtifactScope, DirectorySegment, Identifier};
