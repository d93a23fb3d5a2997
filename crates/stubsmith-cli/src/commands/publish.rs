//! `stubsmith publish` - write a project-wide document.

use stubsmith_core::{application::PublishRequest, domain::ArtifactKind};
use tracing::instrument;

use crate::{
    cli::{GlobalArgs, PublishArgs, PublishCommands},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    cmd: PublishCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let (kind, args) = split(cmd);

    let root = super::discover_project(&global, &config)?;
    let service = super::scaffold_service(&config);

    let request = PublishRequest::new(kind).path(args.path).force(args.force);
    let target = service.publish(&root, &request)?;

    super::make::report_created(kind, &target, &output)
}

fn split(cmd: PublishCommands) -> (ArtifactKind, PublishArgs) {
    match cmd {
        PublishCommands::Context(args) => (ArtifactKind::Context, args),
        PublishCommands::Skill(args) => (ArtifactKind::Skill, args),
    }
}
