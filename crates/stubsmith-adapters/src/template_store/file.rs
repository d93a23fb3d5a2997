//! Template store backed by `.stub` files in a directory.

use std::io;
use std::path::{Path, PathBuf};

use stubsmith_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::Template,
    error::StubsmithResult,
};
use tracing::debug;

use super::STUB_EXTENSION;

/// Reads `{dir}/{name}.stub` on every load. Nothing is cached.
///
/// Used for a configured custom stubs directory.
#[derive(Debug, Clone)]
pub struct FileTemplateStore {
    dir: PathBuf,
}

impl FileTemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TemplateStore for FileTemplateStore {
    fn load(&self, name: &str) -> StubsmithResult<Template> {
        let path = self.location(name);
        debug!(template = name, path = %path.display(), "Reading template");

        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Template::new(name, path, content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ApplicationError::TemplateNotFound {
                    name: name.to_string(),
                    path,
                }
                .into())
            }
            Err(e) => Err(ApplicationError::FilesystemError {
                reason: format!("Failed to read template: {e}"),
                path,
            }
            .into()),
        }
    }

    fn location(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{STUB_EXTENSION}"))
    }
}
