//! Command handlers.
//!
//! Each handler translates parsed arguments into core calls and reports the
//! result through [`OutputManager`](crate::output::OutputManager).

pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod make;
pub mod publish;

use std::path::PathBuf;

use stubsmith_adapters::{BuiltinTemplateStore, FileTemplateStore, LocalFilesystem};
use stubsmith_core::{
    application::{ProjectLocator, ScaffoldService, TemplateStore},
    domain::ProjectRoot,
};
use tracing::debug;

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
};

/// Wire the production adapters into the engine.
///
/// Templates come from `templates.stubs_dir` when set, otherwise from the
/// copies built into the binary.
pub(crate) fn scaffold_service(config: &AppConfig) -> ScaffoldService {
    let templates: Box<dyn TemplateStore> = match &config.templates.stubs_dir {
        Some(dir) => {
            debug!(stubs = %dir.display(), "Using custom template directory");
            Box::new(FileTemplateStore::new(dir))
        }
        None => Box::new(BuiltinTemplateStore::new()),
    };

    ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        templates,
        config.project.clone(),
    )
}

/// Locate the enclosing project from `--cwd` or the process directory.
pub(crate) fn discover_project(global: &GlobalArgs, config: &AppConfig) -> CliResult<ProjectRoot> {
    let start = match &global.cwd {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().with_cli_context(|| "Failed to read current directory")?,
    };
    let start: PathBuf = std::path::absolute(&start)
        .with_cli_context(|| format!("Failed to resolve {}", start.display()))?;

    let locator = ProjectLocator::new(Box::new(LocalFilesystem::new()), config.project.clone());
    let root = locator.discover(&start)?;
    debug!(root = %root.path().display(), namespace = root.namespace(), "Project located");
    Ok(root)
}
