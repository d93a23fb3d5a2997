//! Stubsmith Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Stubsmith
//! code generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stubsmith-cli (CLI)           │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, ProjectLocator)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, TemplateStore)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   stubsmith-adapters (Infrastructure)   │
//! │ (LocalFilesystem, FileTemplateStore...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (NameValidator, Registry, Templates)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stubsmith_core::prelude::*;
//!
//! // 1. Find the enclosing project
//! let locator = ProjectLocator::new(filesystem.clone(), ProjectLayout::default());
//! let root = locator.discover(&std::env::current_dir()?)?;
//!
//! // 2. Generate with injected adapters
//! let service = ScaffoldService::new(filesystem, templates, ProjectLayout::default());
//! let request = GenerateRequest::in_module(ArtifactKind::Controller, "Order", "Checkout", "Storefront");
//! let target = service.generate(&root, &request)?;
//! println!("Created {}", target.display_path());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ArtifactContext, ArtifactInfo, GenerateRequest, ProjectLocator, PublishRequest,
        ScaffoldService,
        ports::{Filesystem, TemplateStore},
    };
    pub use crate::domain::{
        ArtifactKind, ArtifactScope, DirectorySegment, GenerationTarget, Identifier,
        NameValidator, ProjectLayout, ProjectRoot, RenderContext, Template,
    };
    pub use crate::error::{ErrorCategory, StubsmithError, StubsmithResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
