//! `gradlegen dialects` — list registered build-script dialects.

use clap::Args;
use serde::Serialize;

use gradlegen_core::application::DialectRegistry;

use crate::{cli::GlobalArgs, error::CliResult, output::OutputManager};

#[derive(Debug, Args)]
pub struct DialectsCmd {}

#[derive(Debug, Serialize)]
struct DialectInfo {
    id: &'static str,
    build_file: &'static str,
    settings_file: &'static str,
}

pub fn execute(_cmd: DialectsCmd, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let registry = DialectRegistry::with_defaults();
    let entries: Vec<DialectInfo> = registry
        .dialects()
        .map(|dialect| DialectInfo {
            id: dialect.id(),
            build_file: dialect.build_file_name(),
            settings_file: dialect.settings_file_name(),
        })
        .collect();

    if output.is_json() {
        return output.json(&entries);
    }
    for entry in &entries {
        output.text(&format!(
            "{:<8} {} / {}\n",
            entry.id, entry.build_file, entry.settings_file
        ));
    }
    Ok(())
}
