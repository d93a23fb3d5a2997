//! Resolved output location of a single generation run.

use std::path::{Path, PathBuf};

/// Absolute output path plus its project-root-relative display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTarget {
    path: PathBuf,
    display: String,
}

impl GenerationTarget {
    pub fn new(path: impl Into<PathBuf>, project_root: &Path) -> Self {
        let path = path.into();
        let display = compute_display_path(&path, project_root);
        Self { path, display }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn display_path(&self) -> &str {
        &self.display
    }

    pub fn into_display_path(self) -> String {
        self.display
    }
}

/// Strip `project_root` (and its separator) from `absolute` for display.
///
/// Paths outside the root, and the root itself, are returned unchanged.
/// This is a display convenience, not a security boundary.
pub fn compute_display_path(absolute: &Path, project_root: &Path) -> String {
    match absolute.strip_prefix(project_root) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative.display().to_string(),
        _ => absolute.display().to_string(),
    }
}
