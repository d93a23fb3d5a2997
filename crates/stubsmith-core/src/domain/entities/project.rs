//! Host project conventions and the discovered project root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Naming conventions of the host project.
///
/// Every path the engine builds is derived from these fields, so a project
/// with a different layout only needs a different `ProjectLayout`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLayout {
    /// Manifest file that marks the root and maps namespaces to directories.
    pub manifest: String,
    /// Entry-point marker that must sit next to the manifest.
    pub entry_point: String,
    /// Conventional source directory, relative to the root.
    pub source_dir: String,
    /// Top-level segment for delivery-layer code, under `source_dir`.
    pub services_dir: String,
    /// Top-level segment for business-logic code, under `source_dir`.
    pub domain_dir: String,
    /// Extension of generated source files, without the dot.
    pub extension: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            manifest: "composer.json".into(),
            entry_point: "artisan".into(),
            source_dir: "app".into(),
            services_dir: "Services".into(),
            domain_dir: "Domain".into(),
            extension: "php".into(),
        }
    }
}

impl ProjectLayout {
    pub fn services_root(&self, root: &Path) -> PathBuf {
        root.join(&self.source_dir).join(&self.services_dir)
    }

    pub fn domains_root(&self, root: &Path) -> PathBuf {
        root.join(&self.source_dir).join(&self.domain_dir)
    }

    /// `{class}.{extension}`.
    pub fn file_name(&self, class: &str) -> String {
        format!("{class}.{}", self.extension)
    }
}

/// The enclosing host project: where it lives and its root namespace.
///
/// Discovered once per invocation and threaded through every call; never
/// created or modified by the tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    path: PathBuf,
    namespace: String,
}

impl ProjectRoot {
    pub fn new(path: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            namespace: namespace.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Root namespace without a trailing separator, e.g. `App`.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Join the root namespace with further segments using `\`.
    pub fn namespace_for<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> String {
        let mut namespace = self.namespace.clone();
        for segment in segments.into_iter().filter(|s| !s.is_empty()) {
            if !namespace.is_empty() {
                namespace.push('\\');
            }
            namespace.push_str(segment);
        }
        namespace
    }
}
