//! `stubsmith make` - generate one source file.
//!
//! Responsibility: translate CLI arguments into a core request, call the
//! scaffold service, and display the created path. No business logic lives
//! here.

use serde_json::json;
use stubsmith_core::{
    application::GenerateRequest,
    domain::{ArtifactKind, GenerationTarget},
};
use tracing::{info, instrument};

use crate::{
    cli::{
        DomainArtifactArgs, GlobalArgs, MakeCommands, ModuleArtifactArgs, OutputFormat, ServiceArgs,
    },
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

impl MakeCommands {
    /// The artifact kind this subcommand generates.
    pub fn kind(&self) -> ArtifactKind {
        match self {
            Self::Controller(_) => ArtifactKind::Controller,
            Self::Request(_) => ArtifactKind::Request,
            Self::UseCase(_) => ArtifactKind::UseCase,
            Self::Operation(_) => ArtifactKind::Operation,
            Self::Action(_) => ArtifactKind::Action,
            Self::Dto(_) => ArtifactKind::Dto,
            Self::Enum(_) => ArtifactKind::Enum,
            Self::Event(_) => ArtifactKind::Event,
            Self::Exception(_) => ArtifactKind::Exception,
            Self::Model(_) => ArtifactKind::Model,
            Self::Policy(_) => ArtifactKind::Policy,
            Self::Query(_) => ArtifactKind::Query,
            Self::Service(_) => ArtifactKind::Service,
        }
    }

    /// What the engine has to do for this subcommand.
    pub fn into_plan(self) -> MakePlan {
        let kind = self.kind();
        let request = match self {
            Self::Controller(args) => module_request(kind, args.target).resource(args.resource),
            Self::Request(args) | Self::UseCase(args) | Self::Operation(args) => {
                module_request(kind, args)
            }
            Self::Action(args)
            | Self::Dto(args)
            | Self::Enum(args)
            | Self::Event(args)
            | Self::Exception(args)
            | Self::Model(args)
            | Self::Policy(args)
            | Self::Query(args) => domain_request(kind, args),
            Self::Service(args) => return MakePlan::Service(args),
        };
        MakePlan::Generate(request)
    }
}

/// A module/domain generation, or a new service.
#[derive(Debug)]
pub enum MakePlan {
    Generate(GenerateRequest),
    Service(ServiceArgs),
}

/// Execute `stubsmith make <kind>`.
#[instrument(skip_all, fields(kind = %cmd.kind()))]
pub fn execute(
    cmd: MakeCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = super::discover_project(&global, &config)?;
    let service = super::scaffold_service(&config);
    let kind = cmd.kind();

    let target = match cmd.into_plan() {
        MakePlan::Generate(request) => service.generate(&root, &request)?,
        MakePlan::Service(args) => service.create_service(&root, &args.name, args.force)?,
    };

    info!(path = %target.path().display(), "Created {kind}");
    report_created(kind, &target, &output)
}

/// Print the created path, as JSON when requested.
pub(crate) fn report_created(
    kind: ArtifactKind,
    target: &GenerationTarget,
    output: &OutputManager,
) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(&json!({
            "kind": kind,
            "path": target.display_path(),
            "absolute_path": target.path().display().to_string(),
        }))?;
    } else {
        output.success(&format!("Created {}", target.display_path()))?;
    }
    Ok(())
}

fn module_request(kind: ArtifactKind, args: ModuleArtifactArgs) -> GenerateRequest {
    GenerateRequest::in_module(kind, args.name, args.module, args.service).force(args.force)
}

fn domain_request(kind: ArtifactKind, args: DomainArtifactArgs) -> GenerateRequest {
    GenerateRequest::in_domain(kind, args.name, args.domain).force(args.force)
}
