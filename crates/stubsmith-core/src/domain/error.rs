// ============================================================================
// domain/error.rs - NAME VALIDATION ERRORS
// ============================================================================

use std::fmt;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so callers can keep them while rendering messages)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid {role} name '{name}': {rejection}")]
    InvalidIdentifier {
        name: String,
        role: String,
        rejection: IdentifierRejection,
    },

    #[error("invalid {role} name '{name}': {rejection}")]
    InvalidDirectorySegment {
        name: String,
        role: String,
        rejection: SegmentRejection,
    },
}

/// Which identifier check fired, in the order the checks run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierRejection {
    /// Empty, or nothing but whitespace.
    Empty,
    /// More than the maximum number of characters.
    TooLong { length: usize, max: usize },
    /// Does not match the identifier character class.
    InvalidCharacters,
    /// A backslash-delimited segment is a reserved word.
    ReservedKeyword { keyword: String, role: String },
    /// Leading, trailing or doubled backslash.
    EmptySegment,
}

impl IdentifierRejection {
    pub fn reason(&self) -> String {
        match self {
            Self::Empty => "name cannot be empty".into(),
            Self::TooLong { .. } => "name is too long".into(),
            Self::InvalidCharacters => {
                "invalid characters, use only letters, numbers, underscores, and backslashes"
                    .into()
            }
            Self::ReservedKeyword { role, .. } => {
                format!("reserved keyword, cannot be used as a {role} name")
            }
            Self::EmptySegment => "empty namespace segment".into(),
        }
    }
}

impl fmt::Display for IdentifierRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason())
    }
}

/// Which directory segment check fired.
///
/// The mutation check always runs before the emptiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentRejection {
    ForbiddenCharacters,
    EmptyAfterSanitization,
}

impl SegmentRejection {
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::ForbiddenCharacters => "contains forbidden characters or path traversal attempts",
            Self::EmptyAfterSanitization => "name cannot be empty after sanitization",
        }
    }
}

impl fmt::Display for SegmentRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidIdentifier {
                rejection, role, ..
            } => match rejection {
                IdentifierRejection::Empty => vec![format!("Provide a {role} name")],
                IdentifierRejection::TooLong { length, max } => vec![
                    format!("The name has {length} characters, the limit is {max}"),
                    "Choose a shorter name".into(),
                ],
                IdentifierRejection::InvalidCharacters => vec![
                    "Start with a letter or underscore".into(),
                    "Use only letters, numbers, underscores, and backslashes".into(),
                    "Examples: CreateOrder, Billing\\Invoice, _Internal".into(),
                ],
                IdentifierRejection::ReservedKeyword { keyword, .. } => vec![
                    format!("'{keyword}' is a reserved word in the target language"),
                    format!("Try a more descriptive {role} name, e.g. '{keyword}Item'"),
                ],
                IdentifierRejection::EmptySegment => vec![
                    "Separate namespace segments with a single backslash".into(),
                    "Do not start or end the name with a backslash".into(),
                ],
            },
            Self::InvalidDirectorySegment { role, .. } => vec![
                format!("The {role} name becomes a directory name"),
                "Remove '..', slashes, and any of : * ? \" < > |".into(),
                "Do not start or end the name with dots or spaces".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidIdentifier { .. } | Self::InvalidDirectorySegment { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}
