//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stubsmith",
    bin_name = "stubsmith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Boilerplate generator for service/module/domain projects",
    long_about = "Stubsmith generates controllers, requests, use cases, actions, \
                  DTOs and friends into a service/module/domain project layout. \
                  Run it anywhere inside the project.",
    after_help = "EXAMPLES:\n\
        \x20 stubsmith make service Storefront\n\
        \x20 stubsmith make controller Order Checkout Storefront --resource\n\
        \x20 stubsmith make action CreateInvoice Billing\n\
        \x20 stubsmith publish context",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a source file.
    #[command(
        visible_alias = "m",
        about = "Generate a source file",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stubsmith make controller Order Checkout Storefront\n\
            \x20 stubsmith make use-case PlaceOrder Checkout Storefront\n\
            \x20 stubsmith make dto Invoice Billing"
    )]
    Make(MakeCommands),

    /// Publish a project-wide document.
    #[command(
        about = "Publish a project-wide document",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stubsmith publish context\n\
            \x20 stubsmith publish skill --path .claude/skills/stubsmith"
    )]
    Publish(PublishCommands),

    /// List artifact kinds.
    #[command(
        visible_alias = "ls",
        about = "List artifact kinds",
        after_help = "EXAMPLES:\n\
            \x20 stubsmith list\n\
            \x20 stubsmith list --format json"
    )]
    List(ListArgs),

    /// Initialise a Stubsmith configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stubsmith init\n\
            \x20 stubsmith init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stubsmith completions bash > ~/.local/share/bash-completion/completions/stubsmith\n\
            \x20 stubsmith completions zsh  > ~/.zfunc/_stubsmith\n\
            \x20 stubsmith completions fish > ~/.config/fish/completions/stubsmith.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Stubsmith configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stubsmith config get project.source_dir\n\
            \x20 stubsmith config list"
    )]
    Config(ConfigCommands),
}

// ── make ──────────────────────────────────────────────────────────────────────

/// One subcommand per artifact kind.
#[derive(Debug, Subcommand)]
pub enum MakeCommands {
    /// HTTP controller in a module.
    Controller(ControllerArgs),
    /// Form request in a module.
    Request(ModuleArtifactArgs),
    /// Use case in a module.
    UseCase(ModuleArtifactArgs),
    /// Operation in a module.
    Operation(ModuleArtifactArgs),
    /// Single-purpose action in a domain.
    Action(DomainArtifactArgs),
    /// Data transfer object in a domain.
    Dto(DomainArtifactArgs),
    /// Backed enum in a domain.
    Enum(DomainArtifactArgs),
    /// Domain event.
    Event(DomainArtifactArgs),
    /// Domain exception.
    Exception(DomainArtifactArgs),
    /// Persistence model in a domain.
    Model(DomainArtifactArgs),
    /// Authorization policy in a domain.
    Policy(DomainArtifactArgs),
    /// Query object in a domain.
    Query(DomainArtifactArgs),
    /// New service with its provider.
    Service(ServiceArgs),
}

/// Arguments shared by every module-scoped artifact.
#[derive(Debug, Clone, Args)]
pub struct ModuleArtifactArgs {
    /// Class name; `Sub\Name` places the file in a subdirectory.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Module inside the service; created when missing.
    #[arg(value_name = "MODULE")]
    pub module: String,

    /// Existing service.
    #[arg(value_name = "SERVICE")]
    pub service: String,

    /// Overwrite an existing file (destructive).
    #[arg(short = 'f', long = "force", help = "Overwrite existing file")]
    pub force: bool,
}

/// Arguments for `stubsmith make controller`.
#[derive(Debug, Clone, Args)]
pub struct ControllerArgs {
    #[command(flatten)]
    pub target: ModuleArtifactArgs,

    /// Generate a resource controller with CRUD methods.
    #[arg(short = 'r', long = "resource", help = "Generate a resource controller")]
    pub resource: bool,
}

/// Arguments shared by every domain-scoped artifact.
#[derive(Debug, Clone, Args)]
pub struct DomainArtifactArgs {
    /// Class name; `Sub\Name` places the file in a subdirectory.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Domain; created when missing.
    #[arg(value_name = "DOMAIN")]
    pub domain: String,

    /// Overwrite an existing file (destructive).
    #[arg(short = 'f', long = "force", help = "Overwrite existing file")]
    pub force: bool,
}

/// Arguments for `stubsmith make service`.
#[derive(Debug, Clone, Args)]
pub struct ServiceArgs {
    /// Service name.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Overwrite an existing provider (destructive).
    #[arg(short = 'f', long = "force", help = "Overwrite existing provider")]
    pub force: bool,
}

// ── publish ───────────────────────────────────────────────────────────────────

/// Project-wide documents.
#[derive(Debug, Subcommand)]
pub enum PublishCommands {
    /// Architecture context document.
    Context(PublishArgs),
    /// Skill file describing the generators.
    Skill(PublishArgs),
}

/// Arguments for `stubsmith publish`.
#[derive(Debug, Clone, Args)]
pub struct PublishArgs {
    /// Destination file or directory; relative paths resolve against the project root.
    #[arg(short = 'p', long = "path", value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Overwrite an existing file (destructive).
    #[arg(short = 'f', long = "force", help = "Overwrite existing file")]
    pub force: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `stubsmith list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stubsmith init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stubsmith completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stubsmith config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `project.source_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
