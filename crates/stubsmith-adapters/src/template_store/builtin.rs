//! Templates compiled into the binary.
//!
//! The `.stub` files under `stubs/` are embedded with `include_str!`, so an
//! installed binary needs nothing on disk. [`FileTemplateStore`](super::FileTemplateStore)
//! takes over when a custom stubs directory is configured.

use std::path::PathBuf;

use stubsmith_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::Template,
    error::StubsmithResult,
};
use tracing::debug;

use super::STUB_EXTENSION;

macro_rules! stub {
    ($name:literal) => {
        ($name, include_str!(concat!("../../stubs/", $name, ".stub")))
    };
}

/// Every shipped template, keyed by logical name.
pub const BUILTIN_STUBS: &[(&str, &str)] = &[
    stub!("action"),
    stub!("context"),
    stub!("controller"),
    stub!("controller.resource"),
    stub!("dto"),
    stub!("enum"),
    stub!("event"),
    stub!("exception"),
    stub!("model"),
    stub!("operation"),
    stub!("policy"),
    stub!("query"),
    stub!("request"),
    stub!("service-provider"),
    stub!("skill"),
    stub!("use-case"),
];

/// Serves [`BUILTIN_STUBS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplateStore;

impl BuiltinTemplateStore {
    pub fn new() -> Self {
        Self
    }

    /// Logical names of all embedded templates.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        BUILTIN_STUBS.iter().map(|(name, _)| *name)
    }
}

impl TemplateStore for BuiltinTemplateStore {
    fn load(&self, name: &str) -> StubsmithResult<Template> {
        let path = self.location(name);
        debug!(template = name, "Using built-in template");

        BUILTIN_STUBS
            .iter()
            .find(|(stub, _)| *stub == name)
            .map(|(_, content)| Template::new(name, &path, *content))
            .ok_or_else(|| {
                ApplicationError::TemplateNotFound {
                    name: name.to_string(),
                    path,
                }
                .into()
            })
    }

    fn location(&self, name: &str) -> PathBuf {
        PathBuf::from(format!("builtin://{name}.{STUB_EXTENSION}"))
    }
}
