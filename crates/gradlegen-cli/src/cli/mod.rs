//! Command-line surface: the clap parser tree.

pub mod global;

pub use global::{GlobalArgs, OutputFormat};

use clap::{Parser, Subcommand};

use crate::commands::{
    completions::CompletionsCmd, config::ConfigCmd, dialects::DialectsCmd, generate::GenerateCmd,
};

/// Generate Gradle build scripts from a declarative build manifest.
#[derive(Debug, Parser)]
#[command(
    name = "gradlegen",
    author,
    version,
    about,
    long_about = "gradlegen renders build.gradle / build.gradle.kts (plus the matching settings \
script) from a TOML build manifest, for any registered build-script dialect."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate build scripts from a manifest.
    #[command(visible_alias = "gen")]
    Generate(GenerateCmd),

    /// List the registered build-script dialects.
    Dialects(DialectsCmd),

    /// Generate shell completions.
    Completions(CompletionsCmd),

    /// Inspect or initialise the configuration file.
    Config(ConfigCmd),
}
