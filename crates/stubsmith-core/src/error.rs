//! Unified error handling for Stubsmith Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Stubsmith Core operations.
///
/// This enum wraps all possible errors that can occur when using stubsmith-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum StubsmithError {
    /// Errors from the domain layer (name validation).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem and template orchestration).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl StubsmithError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// `true` for errors raised before anything touched the filesystem.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type StubsmithResult<T> = Result<T, StubsmithError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IdentifierRejection;
    use std::path::PathBuf;

    #[test]
    fn domain_errors_are_validation() {
        let err: StubsmithError = DomainError::InvalidIdentifier {
            name: "".into(),
            role: "class".into(),
            rejection: IdentifierRejection::Empty,
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.is_input_error());
        assert_eq!(err.to_string(), "invalid class name '': name cannot be empty");
    }

    #[test]
    fn application_errors_keep_their_category() {
        let err: StubsmithError = ApplicationError::TemplateNotFound {
            name: "dto".into(),
            path: PathBuf::from("/opt/stubs/dto.stub"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(!err.is_input_error());
        assert!(!err.suggestions().is_empty());
    }
}
