//! `gradlegen generate` — render scripts from a manifest.

use std::path::PathBuf;

use clap::Args;
use tracing::{info, instrument};

use gradlegen_adapters::{BuildManifest, LocalSink};
use gradlegen_core::application::GenerationService;

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[derive(Debug, Args)]
pub struct GenerateCmd {
    /// Path to the TOML build manifest.
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Directory to generate into (defaults to ./<project-name>).
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Print the build script to stdout instead of writing files.
    #[arg(long)]
    pub stdout: bool,

    /// Override the manifest's dialect.
    #[arg(short, long)]
    pub dialect: Option<String>,

    /// Override the manifest's project name.
    #[arg(long)]
    pub name: Option<String>,
}

#[instrument(skip_all, fields(manifest = %cmd.manifest.display()))]
pub fn execute(
    cmd: GenerateCmd,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let manifest = BuildManifest::from_path(&cmd.manifest)?;
    let model = manifest.build_model()?;

    // Dialect resolution: flag > manifest > configured default.
    let dialect = cmd
        .dialect
        .as_deref()
        .or_else(|| manifest.dialect())
        .unwrap_or(config.defaults.dialect.as_str());
    let project_name = cmd.name.as_deref().unwrap_or_else(|| manifest.project_name());

    let service = GenerationService::with_defaults();

    if cmd.stdout {
        let project = service.generate(dialect, project_name, &model)?;
        if output.is_json() {
            output.json(&project)?;
        } else {
            output.text(&project.build_script.content);
        }
        return Ok(());
    }

    let root = cmd
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(project_name));
    let project = service.generate_into(dialect, project_name, &model, &LocalSink::new(), &root)?;
    info!(root = %root.display(), "generation complete");

    if output.is_json() {
        output.json(&project)?;
    } else {
        output.success(&format!(
            "Generated {project_name} ({dialect} dialect) at {}",
            root.display()
        ));
        output.detail(&project.build_script.file_name);
        output.detail(&project.settings_script.file_name);
    }
    Ok(())
}
