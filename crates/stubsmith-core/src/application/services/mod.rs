//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "locate the project" or "generate a controller".

pub mod project_locator;
pub mod scaffold_service;

pub use project_locator::ProjectLocator;
pub use scaffold_service::{
    ArtifactContext, ArtifactInfo, GenerateRequest, PublishRequest, ScaffoldService,
};
