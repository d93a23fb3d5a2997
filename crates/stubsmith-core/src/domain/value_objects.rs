//! Domain value objects: ArtifactKind, ArtifactScope, Identifier, DirectorySegment.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! `ArtifactKind` holds NO layout logic; directories, templates and suffix
//! rules live in `artifacts.rs`. This file defines the types, their string
//! representations, and their `FromStr` parsers.
//!
//! # Adding New Artifact Kinds
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add an `ArtifactDef` entry in `artifacts.rs`
//! 4. Done - nothing else changes

use crate::domain::error::{DomainError, IdentifierRejection};
use crate::domain::validation::NameValidator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ArtifactKind ─────────────────────────────────────────────────────────────

/// A category of generated source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    Controller,
    Request,
    UseCase,
    Operation,
    Action,
    Dto,
    Enum,
    Event,
    Exception,
    Model,
    Policy,
    Query,
    Service,
    Context,
    Skill,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 15] = [
        Self::Controller,
        Self::Request,
        Self::UseCase,
        Self::Operation,
        Self::Action,
        Self::Dto,
        Self::Enum,
        Self::Event,
        Self::Exception,
        Self::Model,
        Self::Policy,
        Self::Query,
        Self::Service,
        Self::Context,
        Self::Skill,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::Request => "request",
            Self::UseCase => "use-case",
            Self::Operation => "operation",
            Self::Action => "action",
            Self::Dto => "dto",
            Self::Enum => "enum",
            Self::Event => "event",
            Self::Exception => "exception",
            Self::Model => "model",
            Self::Policy => "policy",
            Self::Query => "query",
            Self::Service => "service",
            Self::Context => "context",
            Self::Skill => "skill",
        }
    }

    /// The role label used in validation messages ("controller", "use case").
    pub fn role(&self) -> String {
        self.as_str().replace('-', " ")
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "controller" => Ok(Self::Controller),
            "request" => Ok(Self::Request),
            "use-case" | "usecase" => Ok(Self::UseCase),
            "operation" => Ok(Self::Operation),
            "action" => Ok(Self::Action),
            "dto" | "data" => Ok(Self::Dto),
            "enum" => Ok(Self::Enum),
            "event" => Ok(Self::Event),
            "exception" => Ok(Self::Exception),
            "model" => Ok(Self::Model),
            "policy" => Ok(Self::Policy),
            "query" => Ok(Self::Query),
            "service" => Ok(Self::Service),
            "context" => Ok(Self::Context),
            "skill" => Ok(Self::Skill),
            other => Err(format!("unknown artifact kind '{other}'")),
        }
    }
}

// ── ArtifactScope ────────────────────────────────────────────────────────────

/// Where an artifact kind lives and which context it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactScope {
    /// Under an existing service, inside a module: `(module, service)`.
    Module,
    /// Under a domain, created on demand: `(domain)`.
    Domain,
    /// A service directory of its own.
    Service,
    /// A singleton file published once per project.
    Publish,
}

impl ArtifactScope {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Domain => "domain",
            Self::Service => "service",
            Self::Publish => "publish",
        }
    }
}

impl fmt::Display for ArtifactScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Identifier ───────────────────────────────────────────────────────────────

/// A validated class-like name.
///
/// Invariant: passed [`NameValidator::validate_identifier`] and has no empty
/// backslash-delimited segment. The text is kept exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    value: String,
    role: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Result<Self, DomainError> {
        let value = name.into();
        let role = role.into();
        NameValidator::validate_identifier(&value, &role)?;
        if value.split('\\').any(str::is_empty) {
            return Err(DomainError::InvalidIdentifier {
                name: value,
                role,
                rejection: IdentifierRejection::EmptySegment,
            });
        }
        Ok(Self { value, role })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    /// The last backslash-delimited segment, used as the class name.
    pub fn class_name(&self) -> &str {
        self.value.rsplit('\\').next().unwrap_or(&self.value)
    }

    /// Leading namespace segments (everything before the class name).
    pub fn namespace_segments(&self) -> Vec<&str> {
        let mut segments: Vec<&str> = self.value.split('\\').collect();
        segments.pop();
        segments.retain(|s| !s.is_empty());
        segments
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

// ── DirectorySegment ─────────────────────────────────────────────────────────

/// A validated name destined to become one directory.
///
/// Invariant: passed [`NameValidator::sanitize_directory_segment`], so it has
/// no separators, no `..`, no reserved filesystem characters, and no
/// leading/trailing dots or whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectorySegment(String);

impl DirectorySegment {
    pub fn new(name: impl Into<String>, role: &str) -> Result<Self, DomainError> {
        let value = name.into();
        NameValidator::sanitize_directory_segment(&value, role)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DirectorySegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<std::path::Path> for DirectorySegment {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_aliases() {
        assert_eq!(ArtifactKind::from_str("use_case"), Ok(ArtifactKind::UseCase));
        assert_eq!(ArtifactKind::from_str("UseCase"), Ok(ArtifactKind::UseCase));
        assert_eq!(ArtifactKind::from_str("DTO"), Ok(ArtifactKind::Dto));
        assert!(ArtifactKind::from_str("widget").is_err());
    }

    #[test]
    fn kind_round_trips_through_display() {
        for kind in ArtifactKind::ALL {
            assert_eq!(ArtifactKind::from_str(&kind.to_string()), Ok(kind));
        }
    }

    #[test]
    fn role_uses_spaces() {
        assert_eq!(ArtifactKind::UseCase.role(), "use case");
        assert_eq!(ArtifactKind::Controller.role(), "controller");
    }

    #[test]
    fn identifier_splits_namespace() {
        let id = Identifier::new("Billing\\Invoices\\CreateInvoice", "class").unwrap();
        assert_eq!(id.class_name(), "CreateInvoice");
        assert_eq!(id.namespace_segments(), vec!["Billing", "Invoices"]);

        let plain = Identifier::new("CreateOrder", "class").unwrap();
        assert_eq!(plain.class_name(), "CreateOrder");
        assert!(plain.namespace_segments().is_empty());
    }

    #[test]
    fn identifier_rejects_invalid() {
        assert!(Identifier::new("new", "class").is_err());
        assert!(Identifier::new("", "class").is_err());
    }

    #[test]
    fn identifier_rejects_empty_namespace_segments() {
        for name in ["Invoices\\", "Billing\\\\Invoice"] {
            let err = Identifier::new(name, "action").unwrap_err();
            assert!(
                matches!(
                    err,
                    DomainError::InvalidIdentifier {
                        rejection: IdentifierRejection::EmptySegment,
                        ..
                    }
                ),
                "{name}: {err:?}"
            );
        }
    }

    #[test]
    fn directory_segment_rejects_traversal() {
        assert!(DirectorySegment::new("..", "service").is_err());
        assert_eq!(
            DirectorySegment::new("Checkout", "module").unwrap().as_str(),
            "Checkout"
        );
    }
}
