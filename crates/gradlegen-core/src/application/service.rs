//! Generation service - main application orchestrator.
//!
//! Coordinates one generation: resolve the dialect, render the build and
//! settings scripts, optionally hand them to a [`ScriptSink`]. Each call is
//! independent and stateless; the model is only read.

use std::path::Path;

use serde::Serialize;
use tracing::{info, instrument};

use crate::application::{
    ports::ScriptSink, registry::DialectRegistry, settings_writer::SettingsScriptWriter,
    writer::BuildScriptWriter,
};
use crate::domain::BuildModel;
use crate::error::GeneratorResult;

/// One rendered script, ready to be placed in a project directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedScript {
    pub file_name: String,
    pub content: String,
}

/// The scripts produced by one generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedProject {
    pub build_script: GeneratedScript,
    pub settings_script: GeneratedScript,
}

pub struct GenerationService {
    registry: DialectRegistry,
}

impl GenerationService {
    pub fn new(registry: DialectRegistry) -> Self {
        Self { registry }
    }

    pub fn with_defaults() -> Self {
        Self::new(DialectRegistry::with_defaults())
    }

    pub fn dialect_ids(&self) -> Vec<&'static str> {
        self.registry.ids()
    }

    /// Render the build and settings scripts for `model`.
    #[instrument(skip(self, model), fields(dialect = dialect_id, project = project_name))]
    pub fn generate(
        &self,
        dialect_id: &str,
        project_name: &str,
        model: &BuildModel,
    ) -> GeneratorResult<GeneratedProject> {
        let dialect = self.registry.get(dialect_id)?;
        let build_script = BuildScriptWriter::new(dialect).write(model)?;
        let settings_script = SettingsScriptWriter::new(dialect).write(project_name, model);
        info!("scripts rendered");
        Ok(GeneratedProject {
            build_script: GeneratedScript {
                file_name: dialect.build_file_name().to_string(),
                content: build_script,
            },
            settings_script: GeneratedScript {
                file_name: dialect.settings_file_name().to_string(),
                content: settings_script,
            },
        })
    }

    /// Render and write both scripts under `root` through the sink.
    ///
    /// Rendering happens before anything touches the sink, so a model the
    /// dialect cannot express leaves the sink untouched.
    #[instrument(skip(self, model, sink), fields(dialect = dialect_id, root = %root.display()))]
    pub fn generate_into(
        &self,
        dialect_id: &str,
        project_name: &str,
        model: &BuildModel,
        sink: &dyn ScriptSink,
        root: &Path,
    ) -> GeneratorResult<GeneratedProject> {
        let project = self.generate(dialect_id, project_name, model)?;
        for script in [&project.build_script, &project.settings_script] {
            sink.write_script(&root.join(&script.file_name), &script.content)?;
        }
        info!("scripts written");
        Ok(project)
    }
}
