//! Scaffold Service - the generation engine every artifact kind shares.
//!
//! Each generation follows the same linear protocol:
//! 1. Validate the name (after applying the kind's suffix rule)
//! 2. Check that a required parent context exists
//! 3. Ensure every directory level from parent to leaf
//! 4. Refuse to overwrite an existing file unless forced
//! 5. Load the template, substitute placeholders, write the file
//! 6. Return the project-root-relative display path
//!
//! There is no rollback: directories created in step 3 stay behind when a
//! later step fails.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateStore},
    },
    domain::{
        ARTIFACT_REGISTRY, ArtifactDef, ArtifactKind, ArtifactScope, DirectorySegment,
        GenerationTarget, Identifier, ProjectLayout, ProjectRoot, RESOURCE_CONTROLLER_TEMPLATE,
        RenderContext, SERVICE_PROVIDER_SUFFIX, SERVICE_SUBDIRECTORIES, Template,
        compute_display_path, find_artifact,
    },
    error::StubsmithResult,
};

/// Information about an artifact kind for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactInfo {
    pub kind: String,
    pub scope: String,
    pub directory: String,
    pub template: String,
    pub suffix: Option<String>,
    pub description: String,
}

impl From<&ArtifactDef> for ArtifactInfo {
    fn from(def: &ArtifactDef) -> Self {
        Self {
            kind: def.kind.to_string(),
            scope: def.scope.to_string(),
            directory: def
                .publish_path
                .map_or_else(|| def.directory.to_string(), str::to_string),
            template: def.template.to_string(),
            suffix: def.suffix.map(str::to_string),
            description: def.description.to_string(),
        }
    }
}

/// Parent context of a module- or domain-scoped artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactContext {
    Module { module: String, service: String },
    Domain { domain: String },
}

impl ArtifactContext {
    const fn scope(&self) -> ArtifactScope {
        match self {
            Self::Module { .. } => ArtifactScope::Module,
            Self::Domain { .. } => ArtifactScope::Domain,
        }
    }
}

/// Input for one module- or domain-scoped generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub kind: ArtifactKind,
    pub name: String,
    pub context: ArtifactContext,
    /// Controllers only: use the resource template.
    pub resource: bool,
    pub force: bool,
}

impl GenerateRequest {
    pub fn in_module(
        kind: ArtifactKind,
        name: impl Into<String>,
        module: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            context: ArtifactContext::Module {
                module: module.into(),
                service: service.into(),
            },
            resource: false,
            force: false,
        }
    }

    pub fn in_domain(
        kind: ArtifactKind,
        name: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            context: ArtifactContext::Domain {
                domain: domain.into(),
            },
            resource: false,
            force: false,
        }
    }

    pub fn resource(mut self, resource: bool) -> Self {
        self.resource = resource;
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// Input for publishing a singleton file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    pub kind: ArtifactKind,
    /// Explicit destination; relative paths resolve against the project root.
    pub path: Option<PathBuf>,
    pub force: bool,
}

impl PublishRequest {
    pub fn new(kind: ArtifactKind) -> Self {
        Self {
            kind,
            path: None,
            force: false,
        }
    }

    pub fn path(mut self, path: Option<PathBuf>) -> Self {
        self.path = path;
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// Resolved placement of a module- or domain-scoped artifact.
struct Placement {
    /// Directories to ensure, parent first.
    levels: Vec<PathBuf>,
    /// Namespace segments below the root namespace.
    namespace: Vec<String>,
    /// Human description of the context, for error messages.
    description: String,
    bindings: RenderContext,
}

/// Main generation engine.
///
/// Owns the ports and the layout; the project root is passed into every
/// call so tests can supply synthetic roots.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    templates: Box<dyn TemplateStore>,
    layout: ProjectLayout,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use stubsmith_core::application::{ScaffoldService, ports::*};
    /// use stubsmith_core::domain::ProjectLayout;
    ///
    /// let service = ScaffoldService::new(
    ///     filesystem, // impl Filesystem
    ///     templates,  // impl TemplateStore
    ///     ProjectLayout::default(),
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        templates: Box<dyn TemplateStore>,
        layout: ProjectLayout,
    ) -> Self {
        Self {
            filesystem,
            templates,
            layout,
        }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    // -------------------------------------------------------------------------
    // Use cases
    // -------------------------------------------------------------------------

    /// Generate a module- or domain-scoped artifact.
    #[instrument(
        skip_all,
        fields(kind = %request.kind, name = %request.name, root = %root.path().display())
    )]
    pub fn generate(
        &self,
        root: &ProjectRoot,
        request: &GenerateRequest,
    ) -> StubsmithResult<GenerationTarget> {
        let def = find_artifact(request.kind);
        if def.scope != request.context.scope() {
            return Err(scope_mismatch(def, request.context.scope()));
        }

        // 1. Validate
        let identifier = Identifier::new(def.apply_suffix(&request.name), request.kind.role())?;

        // 2. Parent context
        let placement = self.place(root, def, &request.context, &identifier)?;

        // 3. Directories, parent to leaf
        for level in &placement.levels {
            self.ensure_directory(level)?;
        }

        // 4. Collision check
        let target_dir = placement
            .levels
            .last()
            .cloned()
            .unwrap_or_else(|| root.path().to_path_buf());
        let file = target_dir.join(self.layout.file_name(identifier.class_name()));
        if self.file_exists(&file) && !request.force {
            warn!(path = %file.display(), "Refusing to overwrite existing file");
            return Err(ApplicationError::AlreadyExists {
                kind: request.kind.role(),
                name: identifier.to_string(),
                context: placement.description,
                path: file,
            }
            .into());
        }

        // 5. Render and write
        let template_name = if request.kind == ArtifactKind::Controller && request.resource {
            RESOURCE_CONTROLLER_TEMPLATE
        } else {
            def.template
        };
        let template = self.load_template(template_name)?;

        let mut bindings = placement.bindings;
        bindings.insert(
            "namespace",
            root.namespace_for(placement.namespace.iter().map(String::as_str)),
        );
        bindings.insert("class", identifier.class_name());
        bindings.insert("rootNamespace", root.namespace());

        self.write_file(&file, &template.render(&bindings))?;

        // 6. Report
        let target = GenerationTarget::new(file, root.path());
        info!(path = %target.display_path(), "Generated {}", request.kind);
        Ok(target)
    }

    /// Create a new service directory with its provider.
    #[instrument(skip_all, fields(service = %name, root = %root.path().display()))]
    pub fn create_service(
        &self,
        root: &ProjectRoot,
        name: &str,
        force: bool,
    ) -> StubsmithResult<GenerationTarget> {
        let def = find_artifact(ArtifactKind::Service);

        let identifier = Identifier::new(name, "service")?;
        let segment = DirectorySegment::new(name, "service")?;
        let provider = Identifier::new(format!("{name}{SERVICE_PROVIDER_SUFFIX}"), "class")?;

        let service_dir = self.layout.services_root(root.path()).join(&segment);
        self.ensure_directory(&service_dir)?;
        for sub in SERVICE_SUBDIRECTORIES {
            self.ensure_directory(&service_dir.join(sub))?;
        }

        let file = service_dir
            .join(def.directory)
            .join(self.layout.file_name(provider.as_str()));
        if self.file_exists(&file) && !force {
            warn!(path = %file.display(), "Refusing to overwrite existing file");
            return Err(ApplicationError::AlreadyExists {
                kind: ArtifactKind::Service.role(),
                name: identifier.to_string(),
                context: "the project".into(),
                path: file,
            }
            .into());
        }

        let template = self.load_template(def.template)?;
        let bindings = RenderContext::new()
            .with(
                "namespace",
                root.namespace_for([
                    self.layout.services_dir.as_str(),
                    segment.as_str(),
                    def.directory,
                ]),
            )
            .with("class", provider.as_str())
            .with("service", segment.as_str())
            .with("rootNamespace", root.namespace());

        self.write_file(&file, &template.render(&bindings))?;

        let target = GenerationTarget::new(file, root.path());
        info!(path = %target.display_path(), "Created service {}", identifier);
        Ok(target)
    }

    /// Publish a singleton file (context document, skill file).
    #[instrument(skip_all, fields(kind = %request.kind, root = %root.path().display()))]
    pub fn publish(
        &self,
        root: &ProjectRoot,
        request: &PublishRequest,
    ) -> StubsmithResult<GenerationTarget> {
        let def = find_artifact(request.kind);
        let Some(default_path) = def.publish_path else {
            return Err(scope_mismatch(def, ArtifactScope::Publish));
        };

        let mut file = match &request.path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => root.path().join(path),
            None => root.path().join(default_path),
        };
        if self.filesystem.is_dir(&file) {
            if let Some(file_name) = Path::new(default_path).file_name() {
                file = file.join(file_name);
            }
        }

        if let Some(parent) = file.parent() {
            self.ensure_directory(parent)?;
        }

        if self.file_exists(&file) && !request.force {
            warn!(path = %file.display(), "Refusing to overwrite existing file");
            return Err(ApplicationError::AlreadyExists {
                kind: request.kind.role(),
                name: file
                    .file_name()
                    .map_or_else(|| default_path.to_string(), |n| n.to_string_lossy().into_owned()),
                context: "the project".into(),
                path: file,
            }
            .into());
        }

        let template = self.load_template(def.template)?;
        let bindings = RenderContext::new()
            .with("namespace", root.namespace())
            .with("rootNamespace", root.namespace())
            .with("sourceDir", self.layout.source_dir.as_str())
            .with("servicesDir", self.layout.services_dir.as_str())
            .with("domainDir", self.layout.domain_dir.as_str())
            .with("extension", self.layout.extension.as_str());

        self.write_file(&file, &template.render(&bindings))?;

        let target = GenerationTarget::new(file, root.path());
        info!(path = %target.display_path(), "Published {}", request.kind);
        Ok(target)
    }

    /// List every registered artifact kind.
    pub fn list_artifacts(&self) -> Vec<ArtifactInfo> {
        ARTIFACT_REGISTRY.iter().map(ArtifactInfo::from).collect()
    }

    // -------------------------------------------------------------------------
    // Engine primitives
    // -------------------------------------------------------------------------

    /// Create `path` and any missing ancestors; existing directories are fine.
    pub fn ensure_directory(&self, path: &Path) -> StubsmithResult<()> {
        debug!(path = %path.display(), "Ensuring directory");
        self.filesystem.create_dir_all(path)
    }

    /// Create or truncate `path` with exactly `contents`.
    pub fn write_file(&self, path: &Path, contents: &str) -> StubsmithResult<()> {
        debug!(path = %path.display(), bytes = contents.len(), "Writing file");
        self.filesystem.write_file(path, contents)
    }

    /// Existence check for files and directories alike.
    pub fn file_exists(&self, path: &Path) -> bool {
        self.filesystem.exists(path)
    }

    /// Load a template fresh from the store.
    pub fn load_template(&self, name: &str) -> StubsmithResult<Template> {
        debug!(template = name, location = %self.templates.location(name).display(), "Loading template");
        self.templates.load(name)
    }

    /// Replace `{{key}}` placeholders with bound values.
    pub fn substitute_placeholders(&self, template: &str, bindings: &RenderContext) -> String {
        bindings.render(template)
    }

    /// Path relative to the project root, for display.
    pub fn display_path(&self, absolute: &Path, root: &ProjectRoot) -> String {
        compute_display_path(absolute, root.path())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Validate the context, check required parents, and compute directories.
    fn place(
        &self,
        root: &ProjectRoot,
        def: &ArtifactDef,
        context: &ArtifactContext,
        identifier: &Identifier,
    ) -> StubsmithResult<Placement> {
        let nested: Vec<String> = identifier
            .namespace_segments()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut placement = match context {
            ArtifactContext::Module { module, service } => {
                let service = DirectorySegment::new(service.as_str(), "service")?;
                let module = DirectorySegment::new(module.as_str(), "module")?;

                let service_dir = self.layout.services_root(root.path()).join(&service);
                if !self.file_exists(&service_dir) {
                    return Err(ApplicationError::ContextNotFound {
                        role: "service".into(),
                        name: service.to_string(),
                        path: service_dir,
                    }
                    .into());
                }

                let module_dir = service_dir.join(&module);
                let kind_dir = module_dir.join(def.directory);

                Placement {
                    levels: vec![module_dir, kind_dir],
                    namespace: vec![
                        self.layout.services_dir.clone(),
                        service.to_string(),
                        module.to_string(),
                        def.directory.to_string(),
                    ],
                    description: format!("module '{module}' of service '{service}'"),
                    bindings: RenderContext::new()
                        .with("service", service.as_str())
                        .with("module", module.as_str()),
                }
            }
            ArtifactContext::Domain { domain } => {
                let domain = DirectorySegment::new(domain.as_str(), "domain")?;

                let domain_dir = self.layout.domains_root(root.path()).join(&domain);
                let kind_dir = domain_dir.join(def.directory);

                Placement {
                    levels: vec![domain_dir, kind_dir],
                    namespace: vec![
                        self.layout.domain_dir.clone(),
                        domain.to_string(),
                        def.directory.to_string(),
                    ],
                    description: format!("domain '{domain}'"),
                    bindings: RenderContext::new().with("domain", domain.as_str()),
                }
            }
        };

        for segment in nested {
            let next = placement
                .levels
                .last()
                .map(|dir| dir.join(&segment))
                .unwrap_or_else(|| PathBuf::from(&segment));
            placement.levels.push(next);
            placement.namespace.push(segment);
        }

        Ok(placement)
    }
}

fn scope_mismatch(def: &ArtifactDef, given: ArtifactScope) -> crate::error::StubsmithError {
    ApplicationError::ScopeMismatch {
        kind: def.kind.to_string(),
        expected: def.scope.to_string(),
        given: given.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockTemplateStore};
    use crate::domain::DomainError;
    use crate::error::StubsmithError;

    const ROOT: &str = "/srv/shop";

    fn root() -> ProjectRoot {
        ProjectRoot::new(ROOT, "App")
    }

    fn templates_with(content: &'static str) -> MockTemplateStore {
        let mut templates = MockTemplateStore::new();
        templates
            .expect_location()
            .returning(|name| PathBuf::from(format!("/stubs/{name}.stub")));
        templates
            .expect_load()
            .returning(move |name| Ok(Template::new(name, format!("/stubs/{name}.stub"), content)));
        templates
    }

    fn service(fs: MockFilesystem, templates: MockTemplateStore) -> ScaffoldService {
        ScaffoldService::new(Box::new(fs), Box::new(templates), ProjectLayout::default())
    }

    #[test]
    fn invalid_name_touches_nothing() {
        // No expectations: any filesystem call panics.
        let svc = service(MockFilesystem::new(), MockTemplateStore::new());
        let request = GenerateRequest::in_domain(ArtifactKind::Action, "new", "Billing");

        let err = svc.generate(&root(), &request).unwrap_err();
        assert!(matches!(
            err,
            StubsmithError::Domain(DomainError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn traversal_in_service_touches_nothing() {
        let svc = service(MockFilesystem::new(), MockTemplateStore::new());
        let request =
            GenerateRequest::in_module(ArtifactKind::Controller, "Order", "Checkout", "../etc");

        let err = svc.generate(&root(), &request).unwrap_err();
        assert!(matches!(
            err,
            StubsmithError::Domain(DomainError::InvalidDirectorySegment { .. })
        ));
    }

    #[test]
    fn missing_service_creates_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let svc = service(fs, MockTemplateStore::new());
        let request =
            GenerateRequest::in_module(ArtifactKind::UseCase, "PlaceOrder", "Checkout", "Ghost");

        let err = svc.generate(&root(), &request).unwrap_err();
        match err {
            StubsmithError::Application(ApplicationError::ContextNotFound { name, path, .. }) => {
                assert_eq!(name, "Ghost");
                assert_eq!(path, PathBuf::from("/srv/shop/app/Services/Ghost"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn existing_file_is_not_overwritten() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().never();

        let svc = service(fs, MockTemplateStore::new());
        let request =
            GenerateRequest::in_module(ArtifactKind::Operation, "CreateOrder", "Checkout", "TestService");

        let err = svc.generate(&root(), &request).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("CreateOrder"), "{msg}");
        assert!(msg.contains("TestService"), "{msg}");
    }

    #[test]
    fn force_overwrites_existing_file() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));

        let svc = service(fs, templates_with("class {{class}}"));
        let request = GenerateRequest::in_domain(ArtifactKind::Model, "Order", "Sales").force(true);

        let target = svc.generate(&root(), &request).unwrap();
        assert_eq!(target.display_path(), "app/Domain/Sales/Models/Order.php");
    }

    #[test]
    fn module_artifact_renders_bindings() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|path| path.ends_with("app/Services/Storefront"));
        fs.expect_create_dir_all().times(2).returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                path.ends_with("Storefront/Checkout/Controllers/OrderController.php")
                    && content
                        == "App\\Services\\Storefront\\Checkout\\Controllers OrderController Storefront Checkout App"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let svc = service(
            fs,
            templates_with("{{namespace}} {{class}} {{service}} {{module}} {{rootNamespace}}"),
        );
        let request =
            GenerateRequest::in_module(ArtifactKind::Controller, "Order", "Checkout", "Storefront");

        let target = svc.generate(&root(), &request).unwrap();
        assert_eq!(
            target.display_path(),
            "app/Services/Storefront/Checkout/Controllers/OrderController.php"
        );
        assert_eq!(
            target.path(),
            Path::new("/srv/shop/app/Services/Storefront/Checkout/Controllers/OrderController.php")
        );
    }

    #[test]
    fn resource_flag_selects_resource_template() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|path| path.ends_with("app/Services/Storefront"));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let mut templates = MockTemplateStore::new();
        templates.expect_location().returning(|n| PathBuf::from(n));
        templates
            .expect_load()
            .withf(|name| name == RESOURCE_CONTROLLER_TEMPLATE)
            .times(1)
            .returning(|name| Ok(Template::new(name, name, "resource")));

        let svc = service(fs, templates);
        let request =
            GenerateRequest::in_module(ArtifactKind::Controller, "Order", "Checkout", "Storefront")
                .resource(true);
        svc.generate(&root(), &request).unwrap();
    }

    #[test]
    fn nested_names_become_subdirectories() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().times(3).returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                path.ends_with("Billing/Actions/Invoices/Charge.php")
                    && content == "App\\Domain\\Billing\\Actions\\Invoices Charge"
            })
            .returning(|_, _| Ok(()));

        let svc = service(fs, templates_with("{{namespace}} {{class}}"));
        let request = GenerateRequest::in_domain(ArtifactKind::Action, "Invoices\\Charge", "Billing");
        svc.generate(&root(), &request).unwrap();
    }

    #[test]
    fn missing_template_leaves_directories_behind() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().times(2).returning(|_| Ok(()));
        fs.expect_write_file().never();

        let mut templates = MockTemplateStore::new();
        templates
            .expect_location()
            .returning(|name| PathBuf::from(format!("/stubs/{name}.stub")));
        templates.expect_load().returning(|name| {
            Err(ApplicationError::TemplateNotFound {
                name: name.into(),
                path: PathBuf::from(format!("/stubs/{name}.stub")),
            }
            .into())
        });

        let svc = service(fs, templates);
        let request = GenerateRequest::in_domain(ArtifactKind::Event, "OrderPlaced", "Sales");
        let err = svc.generate(&root(), &request).unwrap_err();
        assert!(matches!(
            err,
            StubsmithError::Application(ApplicationError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn wrong_scope_is_rejected() {
        let svc = service(MockFilesystem::new(), MockTemplateStore::new());
        let request = GenerateRequest::in_domain(ArtifactKind::Controller, "Order", "Sales");
        let err = svc.generate(&root(), &request).unwrap_err();
        assert!(matches!(
            err,
            StubsmithError::Application(ApplicationError::ScopeMismatch { .. })
        ));
    }

    #[test]
    fn service_creation_writes_provider() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().times(3).returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                path.ends_with("app/Services/Billing/Providers/BillingServiceProvider.php")
                    && content == "App\\Services\\Billing\\Providers BillingServiceProvider"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let svc = service(fs, templates_with("{{namespace}} {{class}}"));
        let target = svc.create_service(&root(), "Billing", false).unwrap();
        assert_eq!(
            target.display_path(),
            "app/Services/Billing/Providers/BillingServiceProvider.php"
        );
    }

    #[test]
    fn service_name_must_be_safe_directory() {
        let svc = service(MockFilesystem::new(), MockTemplateStore::new());
        assert!(svc.create_service(&root(), "Bill/ing", false).is_err());
        assert!(svc.create_service(&root(), "class", false).is_err());
    }

    #[test]
    fn publish_defaults_to_registry_path() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| false);
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| path == Path::new("/srv/shop/CONTEXT.md") && content == "App app")
            .times(1)
            .returning(|_, _| Ok(()));

        let svc = service(fs, templates_with("{{rootNamespace}} {{sourceDir}}"));
        let target = svc
            .publish(&root(), &PublishRequest::new(ArtifactKind::Context))
            .unwrap();
        assert_eq!(target.display_path(), "CONTEXT.md");
    }

    #[test]
    fn publish_into_directory_keeps_file_name() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .returning(|path| path == Path::new("/srv/shop/docs"));
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, _| path == Path::new("/srv/shop/docs/SKILL.md"))
            .times(1)
            .returning(|_, _| Ok(()));

        let svc = service(fs, templates_with("skill"));
        let request = PublishRequest::new(ArtifactKind::Skill).path(Some(PathBuf::from("docs")));
        let target = svc.publish(&root(), &request).unwrap();
        assert_eq!(target.display_path(), "docs/SKILL.md");
    }

    #[test]
    fn publish_refuses_existing_without_force() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| false);
        fs.expect_exists().returning(|_| true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().never();

        let svc = service(fs, MockTemplateStore::new());
        let err = svc
            .publish(&root(), &PublishRequest::new(ArtifactKind::Context))
            .unwrap_err();
        assert!(matches!(
            err,
            StubsmithError::Application(ApplicationError::AlreadyExists { .. })
        ));
    }

    #[test]
    fn publish_rejects_non_publish_kinds() {
        let svc = service(MockFilesystem::new(), MockTemplateStore::new());
        assert!(
            svc.publish(&root(), &PublishRequest::new(ArtifactKind::Model))
                .is_err()
        );
    }

    #[test]
    fn primitives_delegate() {
        let svc = service(MockFilesystem::new(), MockTemplateStore::new());
        let ctx = RenderContext::new().with("a", "X").with("b", "Y");
        assert_eq!(svc.substitute_placeholders("{{a}} {{a}} {{b}}", &ctx), "X X Y");
        assert_eq!(
            svc.display_path(Path::new("/srv/shop/app/X.php"), &root()),
            "app/X.php"
        );
    }

    #[test]
    fn lists_whole_registry() {
        let svc = service(MockFilesystem::new(), MockTemplateStore::new());
        let infos = svc.list_artifacts();
        assert_eq!(infos.len(), ARTIFACT_REGISTRY.len());
        let dto = infos.iter().find(|i| i.kind == "dto").unwrap();
        assert_eq!(dto.suffix.as_deref(), Some("Data"));
        assert_eq!(dto.scope, "domain");
    }
}
