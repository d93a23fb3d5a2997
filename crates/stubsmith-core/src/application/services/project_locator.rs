//! Project root and root-namespace discovery.
//!
//! The root is the nearest ancestor (inclusive) holding both the manifest
//! and the entry-point marker. The root namespace is the `autoload.psr-4`
//! key of the manifest whose path is the source directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{ProjectLayout, ProjectRoot},
    error::StubsmithResult,
};

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    autoload: Autoload,
}

#[derive(Debug, Default, Deserialize)]
struct Autoload {
    #[serde(default, rename = "psr-4")]
    psr4: BTreeMap<String, Psr4Paths>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Psr4Paths {
    One(String),
    Many(Vec<String>),
}

impl Psr4Paths {
    fn iter(&self) -> impl Iterator<Item = &str> {
        let paths: &[String] = match self {
            Self::One(path) => std::slice::from_ref(path),
            Self::Many(paths) => paths,
        };
        paths.iter().map(String::as_str)
    }
}

/// Walks up from a start directory to the host project.
pub struct ProjectLocator {
    filesystem: Box<dyn Filesystem>,
    layout: ProjectLayout,
}

impl ProjectLocator {
    pub fn new(filesystem: Box<dyn Filesystem>, layout: ProjectLayout) -> Self {
        Self { filesystem, layout }
    }

    /// Find the root, then its namespace.
    #[instrument(skip_all, fields(start = %start.display()))]
    pub fn discover(&self, start: &Path) -> StubsmithResult<ProjectRoot> {
        let root = self.find_project_root(start)?;
        let namespace = self.find_root_namespace(&root)?;
        debug!(root = %root.display(), namespace = %namespace, "Discovered project");
        Ok(ProjectRoot::new(root, namespace))
    }

    /// Nearest ancestor of `start` (inclusive) with both marker files.
    ///
    /// `start` should be absolute; the walk ends at the filesystem root.
    pub fn find_project_root(&self, start: &Path) -> StubsmithResult<PathBuf> {
        start
            .ancestors()
            .find(|dir| self.is_project_root(dir))
            .map(Path::to_path_buf)
            .ok_or_else(|| {
                ApplicationError::ProjectRootNotFound {
                    start: start.to_path_buf(),
                    manifest: self.layout.manifest.clone(),
                    entry_point: self.layout.entry_point.clone(),
                }
                .into()
            })
    }

    /// Namespace mapped to the source directory, without trailing `\`.
    pub fn find_root_namespace(&self, root: &Path) -> StubsmithResult<String> {
        let manifest_path = root.join(&self.layout.manifest);
        let not_found = |reason: String| ApplicationError::NamespaceNotFound {
            manifest: manifest_path.clone(),
            reason,
        };

        let raw = self
            .filesystem
            .read_to_string(&manifest_path)
            .map_err(|e| not_found(e.to_string()))?;

        let manifest: Manifest = serde_json::from_str(&raw)
            .map_err(|e| not_found(format!("invalid JSON: {e}")))?;

        manifest
            .autoload
            .psr4
            .iter()
            .find(|(_, paths)| {
                paths
                    .iter()
                    .any(|path| normalize_source_path(path) == self.layout.source_dir)
            })
            .map(|(namespace, _)| namespace.trim_end_matches('\\').to_string())
            .ok_or_else(|| {
                not_found(format!(
                    "no autoload.psr-4 entry maps to '{}/'",
                    self.layout.source_dir
                ))
                .into()
            })
    }

    fn is_project_root(&self, dir: &Path) -> bool {
        self.filesystem.exists(&dir.join(&self.layout.manifest))
            && self.filesystem.exists(&dir.join(&self.layout.entry_point))
    }
}

/// `./app/` and `app` both name the `app` directory.
fn normalize_source_path(path: &str) -> &str {
    path.trim_start_matches("./").trim_end_matches('/')
}
