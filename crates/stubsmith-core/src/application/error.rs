//! Application layer errors.
//!
//! These errors represent failures in orchestration, not name validation.
//! Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running a generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A required parent (service) does not exist.
    #[error("{role} '{name}' does not exist at {path}")]
    ContextNotFound {
        role: String,
        name: String,
        path: PathBuf,
    },

    /// Target file exists and overwrite was not requested.
    #[error("{kind} '{name}' already exists in {context} at {path}")]
    AlreadyExists {
        kind: String,
        name: String,
        context: String,
        path: PathBuf,
    },

    /// Bundled template asset is missing.
    #[error("Template '{name}' not found at {path}")]
    TemplateNotFound { name: String, path: PathBuf },

    /// No enclosing host project.
    #[error(
        "Could not find project root (a directory containing {manifest} and {entry_point}) from {start}"
    )]
    ProjectRootNotFound {
        start: PathBuf,
        manifest: String,
        entry_point: String,
    },

    /// Manifest unreadable or has no mapping for the source directory.
    #[error("Could not determine root namespace from {manifest}: {reason}")]
    NamespaceNotFound { manifest: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Artifact kind routed to an operation of the wrong scope.
    #[error("{kind} is a {expected}-scoped artifact, not {given}-scoped")]
    ScopeMismatch {
        kind: String,
        expected: String,
        given: String,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ContextNotFound { role, name, .. } => vec![
                format!("Check the spelling of the {role} name '{name}'"),
                format!("Create it first: stubsmith make {role} {name}"),
            ],
            Self::AlreadyExists { path, .. } => vec![
                format!("File already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different name".into(),
            ],
            Self::TemplateNotFound { path, .. } => vec![
                format!("Expected a template file at {}", path.display()),
                "The installation looks incomplete; reinstall stubsmith".into(),
                "Or point templates.stubs_dir at a directory containing the stubs".into(),
            ],
            Self::ProjectRootNotFound { manifest, entry_point, .. } => vec![
                format!("Run the command inside a project that has {manifest} and {entry_point}"),
                "Or pass the project directory with --cwd".into(),
            ],
            Self::NamespaceNotFound { manifest, .. } => vec![
                format!("Check the autoload.psr-4 section of {}", manifest.display()),
                "Make sure one entry maps a namespace to the source directory".into(),
                "Or set project.source_dir in the configuration".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ScopeMismatch { kind, .. } => vec![
                format!("Run `stubsmith list` to see where {kind} artifacts belong"),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyExists { .. } => ErrorCategory::Validation,
            Self::ContextNotFound { .. } | Self::ProjectRootNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::NamespaceNotFound { .. } => ErrorCategory::Configuration,
            Self::TemplateNotFound { .. }
            | Self::FilesystemError { .. }
            | Self::ScopeMismatch { .. } => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_exists_names_artifact_and_context() {
        let err = ApplicationError::AlreadyExists {
            kind: "operation".into(),
            name: "CreateOrder".into(),
            context: "module 'Checkout' of service 'TestService'".into(),
            path: PathBuf::from("/p/app/Services/TestService/Checkout/Operations/CreateOrder.php"),
        };
        let msg = err.to_string();
        assert!(msg.contains("CreateOrder"));
        assert!(msg.contains("Checkout"));
        assert!(msg.contains("TestService"));
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn context_not_found_suggests_creating_service() {
        let err = ApplicationError::ContextNotFound {
            role: "service".into(),
            name: "Billing".into(),
            path: PathBuf::from("/p/app/Services/Billing"),
        };
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("make service Billing"))
        );
    }

    #[test]
    fn categories() {
        let missing_ns = ApplicationError::NamespaceNotFound {
            manifest: PathBuf::from("composer.json"),
            reason: "no mapping".into(),
        };
        assert_eq!(missing_ns.category(), ErrorCategory::Configuration);

        let fs = ApplicationError::FilesystemError {
            path: PathBuf::from("/x"),
            reason: "denied".into(),
        };
        assert_eq!(fs.category(), ErrorCategory::Internal);
    }
}
