//! The settings-script writer.
//!
//! Gradle dialects resolve plugins through `pluginManagement` in the
//! settings script, which is why the build-script writer emits nothing for
//! plugin repositories. This writer renders that block, followed by the
//! root project name. It shares the dialect's repository rendering and
//! quoting, so a repository looks the same in both scripts.

use tracing::instrument;

use crate::application::indent::IndentingWriter;
use crate::dialect::Dialect;
use crate::domain::BuildModel;

pub struct SettingsScriptWriter<'a> {
    dialect: &'a dyn Dialect,
}

impl<'a> SettingsScriptWriter<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self { dialect }
    }

    /// Render the settings script for `model`. Infallible: every dialect can
    /// express everything that appears here.
    #[instrument(skip_all, fields(dialect = self.dialect.id()))]
    pub fn write(&self, project_name: &str, model: &BuildModel) -> String {
        let mut sections: Vec<String> = Vec::new();

        let plugin_repositories = model.plugin_repositories();
        if !plugin_repositories.is_empty() {
            let mut writer = IndentingWriter::new();
            writer.block("pluginManagement", |w| {
                w.block("repositories", |w| {
                    for repository in plugin_repositories.items() {
                        w.line(self.dialect.repository(repository));
                    }
                });
            });
            sections.push(writer.finish());
        }

        let mut writer = IndentingWriter::new();
        writer.line(format!(
            "rootProject.name = {}",
            self.dialect.quote(project_name)
        ));
        sections.push(writer.finish());

        sections.join("\n")
    }
}
