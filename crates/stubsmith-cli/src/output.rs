//! Terminal output for command results.
//!
//! Results go to stdout; diagnostics and errors go to stderr through
//! `tracing` and [`CliError`](crate::error::CliError). `--quiet` silences
//! everything here except JSON, which scripts depend on.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Visual treatment of one status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Warning,
    Header,
}

/// Writes command results to stdout.
pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Resolve flags and config into an output policy.
    ///
    /// `--no-color`, `NO_COLOR` and `output.no_color` all disable colour, as
    /// does any format other than human.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color || format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Unadorned line.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.emit(msg.to_owned())
    }

    /// `✓ <msg>` in green.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(self.decorate(Tone::Success, msg))
    }

    /// `⚠ <msg>` in yellow.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.emit(self.decorate(Tone::Warning, msg))
    }

    /// Bold section title.
    pub fn header(&self, text: &str) -> io::Result<()> {
        self.emit(self.decorate(Tone::Header, text))
    }

    /// Pretty JSON, written even in quiet mode.
    pub fn json<T: serde::Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// `true` unless colour was turned off.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved format; never [`OutputFormat::Auto`].
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    fn emit(&self, line: String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&line)
    }

    fn decorate(&self, tone: Tone, msg: &str) -> String {
        let marker = match tone {
            Tone::Success => "\u{2713} ",
            Tone::Warning => "\u{26a0} ",
            Tone::Header => "",
        };
        if self.no_color {
            return format!("{marker}{msg}");
        }
        match tone {
            Tone::Success => format!("{} {}", marker.trim_end().green().bold(), msg.green()),
            Tone::Warning => format!("{} {}", marker.trim_end().yellow().bold(), msg.yellow()),
            Tone::Header => msg.cyan().bold().to_string(),
        }
    }
}
