//! Implementation of the `stubsmith list` command.

use stubsmith_core::application::ArtifactInfo;

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let artifacts = super::scaffold_service(&config).list_artifacts();

    match args.format {
        ListFormat::Table => {
            output.header("Artifact kinds:")?;
            for line in table_rows(&artifacts) {
                output.print(&line)?;
            }
        }
        ListFormat::Json => {
            // JSON must stay parseable even in quiet mode.
            output.json(&artifacts)?;
        }
        ListFormat::List => {
            for a in &artifacts {
                output.print(&a.kind)?;
            }
        }
        ListFormat::Csv => {
            output.print("kind,scope,directory,template,suffix")?;
            for a in &artifacts {
                output.print(&format!(
                    "{},{},{},{},{}",
                    a.kind,
                    a.scope,
                    a.directory,
                    a.template,
                    a.suffix.as_deref().unwrap_or("")
                ))?;
            }
        }
    }

    Ok(())
}

fn table_rows(artifacts: &[ArtifactInfo]) -> Vec<String> {
    let kind_width = artifacts.iter().map(|a| a.kind.len()).max().unwrap_or(0);
    let scope_width = artifacts.iter().map(|a| a.scope.len()).max().unwrap_or(0);
    artifacts
        .iter()
        .map(|a| {
            format!(
                "  {:kind_width$}  {:scope_width$}  {}",
                a.kind, a.scope, a.description
            )
        })
        .collect()
}
