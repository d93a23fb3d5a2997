//! In-memory template store for testing.

use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, RwLock},
};

use stubsmith_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::Template,
    error::StubsmithResult,
};

/// Thread-safe in-memory template store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryTemplateStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(name, content);
        self
    }

    pub fn insert(&self, name: impl Into<String>, content: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert(name.into(), content.into());
        }
    }

    pub fn remove(&self, name: &str) {
        if let Ok(mut inner) = self.inner.write() {
            inner.remove(name);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateStore for InMemoryTemplateStore {
    fn load(&self, name: &str) -> StubsmithResult<Template> {
        let content = self
            .inner
            .read()
            .ok()
            .and_then(|inner| inner.get(name).cloned());

        content
            .map(|content| Template::new(name, self.location(name), content))
            .ok_or_else(|| {
                ApplicationError::TemplateNotFound {
                    name: name.to_string(),
                    path: self.location(name),
                }
                .into()
            })
    }

    fn location(&self, name: &str) -> PathBuf {
        PathBuf::from(format!("memory://{name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_inserted_templates() {
        let store = InMemoryTemplateStore::new().with("model", "class {{class}}");
        assert_eq!(store.len(), 1);
        assert_eq!(store.load("model").unwrap().content(), "class {{class}}");
    }

    #[test]
    fn removed_templates_are_not_found() {
        let store = InMemoryTemplateStore::new().with("model", "x");
        store.remove("model");
        assert!(store.is_empty());
        assert!(store.load("model").is_err());
    }
}
