//! User-facing output.
//!
//! Everything the user is *meant to read* goes through [`OutputManager`] on
//! stdout; diagnostics go through tracing on stderr. The manager resolves
//! the `auto` format once at startup and the rest of the CLI stays
//! format-agnostic.

use std::io::IsTerminal as _;

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    format: OutputFormat,
    use_color: bool,
}

impl OutputManager {
    pub fn new(global: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match global.output_format {
            OutputFormat::Auto => match config.output.format.as_str() {
                "json" => OutputFormat::Json,
                "plain" => OutputFormat::Plain,
                "human" => OutputFormat::Human,
                _ => OutputFormat::Auto,
            },
            other => other,
        };
        let use_color = !global.no_color
            && !config.output.no_color
            && std::io::stdout().is_terminal()
            && !matches!(format, OutputFormat::Plain | OutputFormat::Json);
        Self { format, use_color }
    }

    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    /// A success line, with a checkmark when colors are on.
    pub fn success(&self, message: &str) {
        if self.use_color {
            println!("{} {message}", "✓".green().bold());
        } else {
            println!("{message}");
        }
    }

    /// A secondary detail line.
    pub fn detail(&self, message: &str) {
        if self.use_color {
            println!("  {}", message.dimmed());
        } else {
            println!("  {message}");
        }
    }

    /// Raw text (script contents), never decorated.
    pub fn text(&self, content: &str) {
        print!("{content}");
    }

    /// Serialize a value as pretty JSON on stdout.
    pub fn json<T: Serialize>(&self, value: &T) -> CliResult<()> {
        let rendered = serde_json::to_string_pretty(value).map_err(|e| CliError::InvalidInput {
            message: format!("could not serialize output: {e}"),
        })?;
        println!("{rendered}");
        Ok(())
    }
}
