//! Artifact registry: the single source of truth for per-kind layout rules.
//!
//! # Design
//!
//! Every concrete generator is the same engine with different parameters:
//! which context it needs, which subdirectory it writes to, which template
//! it loads, and which suffix its class names must carry. Those parameters
//! live here as data instead of as one generator type per kind.
//!
//! ```text
//! make controller Order Checkout Storefront
//!        │
//!        ▼  ArtifactDef { scope: Module, directory: "Controllers",
//!                         template: "controller", suffix: Some("Controller") }
//!        ▼
//! app/Services/Storefront/Checkout/Controllers/OrderController.php
//! ```

use crate::domain::value_objects::{ArtifactKind, ArtifactScope};

/// Layout rules for one artifact kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactDef {
    pub kind: ArtifactKind,
    pub scope: ArtifactScope,
    /// Subdirectory under the context directory. Empty for published files.
    pub directory: &'static str,
    /// Logical template name.
    pub template: &'static str,
    /// Mandatory class-name suffix, appended when missing.
    pub suffix: Option<&'static str>,
    /// Default location of published files, relative to the project root.
    pub publish_path: Option<&'static str>,
    pub description: &'static str,
}

impl ArtifactDef {
    /// Apply this kind's suffix rule to a raw name.
    ///
    /// The suffix is appended unless the name already ends with it
    /// (case-sensitive). Runs before identifier validation, so a blank name
    /// or one ending in a separator is left alone for the validator to reject.
    pub fn apply_suffix(&self, name: &str) -> String {
        match self.suffix {
            Some(suffix)
                if !name.trim().is_empty() && !name.ends_with('\\') && !name.ends_with(suffix) =>
            {
                format!("{name}{suffix}")
            }
            _ => name.to_owned(),
        }
    }
}

/// Template used by the resource variant of controllers.
pub const RESOURCE_CONTROLLER_TEMPLATE: &str = "controller.resource";

/// Standard subdirectories created alongside a new service.
pub const SERVICE_SUBDIRECTORIES: &[&str] = &["Providers", "Routes"];

/// Suffix of the provider class written into a new service.
pub const SERVICE_PROVIDER_SUFFIX: &str = "ServiceProvider";

pub static ARTIFACT_REGISTRY: &[ArtifactDef] = &[
    // ── Module scope (service must exist) ───────────────────────────────────
    ArtifactDef {
        kind: ArtifactKind::Controller,
        scope: ArtifactScope::Module,
        directory: "Controllers",
        template: "controller",
        suffix: Some("Controller"),
        publish_path: None,
        description: "HTTP controller for a module",
    },
    ArtifactDef {
        kind: ArtifactKind::Request,
        scope: ArtifactScope::Module,
        directory: "Requests",
        template: "request",
        suffix: Some("Request"),
        publish_path: None,
        description: "Form request with validation rules",
    },
    ArtifactDef {
        kind: ArtifactKind::UseCase,
        scope: ArtifactScope::Module,
        directory: "UseCases",
        template: "use-case",
        suffix: None,
        publish_path: None,
        description: "Use case orchestrating actions for one feature",
    },
    ArtifactDef {
        kind: ArtifactKind::Operation,
        scope: ArtifactScope::Module,
        directory: "Operations",
        template: "operation",
        suffix: None,
        publish_path: None,
        description: "Reusable sequence of actions within a module",
    },
    // ── Domain scope (created on demand) ────────────────────────────────────
    ArtifactDef {
        kind: ArtifactKind::Action,
        scope: ArtifactScope::Domain,
        directory: "Actions",
        template: "action",
        suffix: None,
        publish_path: None,
        description: "Single-purpose business action",
    },
    ArtifactDef {
        kind: ArtifactKind::Dto,
        scope: ArtifactScope::Domain,
        directory: "Data",
        template: "dto",
        suffix: Some("Data"),
        publish_path: None,
        description: "Immutable data transfer object",
    },
    ArtifactDef {
        kind: ArtifactKind::Enum,
        scope: ArtifactScope::Domain,
        directory: "Enums",
        template: "enum",
        suffix: None,
        publish_path: None,
        description: "Backed enumeration",
    },
    ArtifactDef {
        kind: ArtifactKind::Event,
        scope: ArtifactScope::Domain,
        directory: "Events",
        template: "event",
        suffix: None,
        publish_path: None,
        description: "Domain event",
    },
    ArtifactDef {
        kind: ArtifactKind::Exception,
        scope: ArtifactScope::Domain,
        directory: "Exceptions",
        template: "exception",
        suffix: Some("Exception"),
        publish_path: None,
        description: "Domain exception",
    },
    ArtifactDef {
        kind: ArtifactKind::Model,
        scope: ArtifactScope::Domain,
        directory: "Models",
        template: "model",
        suffix: None,
        publish_path: None,
        description: "Persistence model",
    },
    ArtifactDef {
        kind: ArtifactKind::Policy,
        scope: ArtifactScope::Domain,
        directory: "Policies",
        template: "policy",
        suffix: Some("Policy"),
        publish_path: None,
        description: "Authorization policy",
    },
    ArtifactDef {
        kind: ArtifactKind::Query,
        scope: ArtifactScope::Domain,
        directory: "Queries",
        template: "query",
        suffix: Some("Query"),
        publish_path: None,
        description: "Read-side query object",
    },
    // ── Service ─────────────────────────────────────────────────────────────
    ArtifactDef {
        kind: ArtifactKind::Service,
        scope: ArtifactScope::Service,
        directory: "Providers",
        template: "service-provider",
        suffix: None,
        publish_path: None,
        description: "Service directory with its service provider",
    },
    // ── Published singletons ────────────────────────────────────────────────
    ArtifactDef {
        kind: ArtifactKind::Context,
        scope: ArtifactScope::Publish,
        directory: "",
        template: "context",
        suffix: None,
        publish_path: Some("CONTEXT.md"),
        description: "Architecture context document for the project",
    },
    ArtifactDef {
        kind: ArtifactKind::Skill,
        scope: ArtifactScope::Publish,
        directory: "",
        template: "skill",
        suffix: None,
        publish_path: Some(".skills/stubsmith/SKILL.md"),
        description: "Skill file describing how to use the generators",
    },
];

/// Look up the definition of an artifact kind.
pub fn find_artifact(kind: ArtifactKind) -> &'static ArtifactDef {
    ARTIFACT_REGISTRY
        .iter()
        .find(|def| def.kind == kind)
        .unwrap_or_else(|| unreachable!("every ArtifactKind has a registry entry: {kind}"))
}

/// All definitions with the given scope, in registry order.
pub fn artifacts_in_scope(scope: ArtifactScope) -> impl Iterator<Item = &'static ArtifactDef> {
    ARTIFACT_REGISTRY.iter().filter(move |def| def.scope == scope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_kind_is_registered_once() {
        for kind in ArtifactKind::ALL {
            let count = ARTIFACT_REGISTRY.iter().filter(|d| d.kind == kind).count();
            assert_eq!(count, 1, "{kind} registered {count} times");
        }
        assert_eq!(ARTIFACT_REGISTRY.len(), ArtifactKind::ALL.len());
    }

    #[test]
    fn templates_are_unique() {
        let templates: HashSet<_> = ARTIFACT_REGISTRY.iter().map(|d| d.template).collect();
        assert_eq!(templates.len(), ARTIFACT_REGISTRY.len());
        assert!(!templates.contains(RESOURCE_CONTROLLER_TEMPLATE));
    }

    #[test]
    fn publish_entries_have_default_paths() {
        for def in artifacts_in_scope(ArtifactScope::Publish) {
            assert!(def.publish_path.is_some(), "{} has no path", def.kind);
        }
        for def in ARTIFACT_REGISTRY
            .iter()
            .filter(|d| d.scope != ArtifactScope::Publish)
        {
            assert!(def.publish_path.is_none());
            assert!(!def.directory.is_empty());
        }
    }

    #[test]
    fn suffix_is_appended_once() {
        let controller = find_artifact(ArtifactKind::Controller);
        assert_eq!(controller.apply_suffix("Order"), "OrderController");
        assert_eq!(controller.apply_suffix("OrderController"), "OrderController");

        let dto = find_artifact(ArtifactKind::Dto);
        assert_eq!(dto.apply_suffix("Order"), "OrderData");
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        let policy = find_artifact(ArtifactKind::Policy);
        assert_eq!(policy.apply_suffix("Orderpolicy"), "OrderpolicyPolicy");
    }

    #[test]
    fn suffix_skips_blank_and_dangling_names() {
        let controller = find_artifact(ArtifactKind::Controller);
        assert_eq!(controller.apply_suffix(""), "");
        assert_eq!(controller.apply_suffix("Admin\\"), "Admin\\");
    }

    #[test]
    fn kinds_without_suffix_keep_name() {
        let action = find_artifact(ArtifactKind::Action);
        assert_eq!(action.apply_suffix("CreateOrder"), "CreateOrder");
    }

    #[test]
    fn module_scope_contains_controllers() {
        let kinds: Vec<_> = artifacts_in_scope(ArtifactScope::Module)
            .map(|d| d.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                ArtifactKind::Controller,
                ArtifactKind::Request,
                ArtifactKind::UseCase,
                ArtifactKind::Operation
            ]
        );
    }
}
