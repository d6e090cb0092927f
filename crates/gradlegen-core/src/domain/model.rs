//! The build model aggregate.
//!
//! A [`BuildModel`] is pure data describing one project's build
//! configuration. It carries no cross-field validation: anything can be
//! populated, and the writer is the single place allowed to reject a model
//! (a dialect may be unable to express a populated section). The model is
//! owned by the caller for the duration of one generation; writers only read
//! it and produce an independent text buffer.

use crate::domain::{
    bom::BomContainer, configuration::ConfigurationContainer, dependency::DependencyContainer,
    plugin::PluginContainer, property::PropertyContainer, repository::RepositoryContainer,
    task::TaskContainer,
};

/// Global project metadata. At most one value per attribute; last write wins.
#[derive(Debug, Clone, Default)]
pub struct BuildSettings {
    pub(crate) group: Option<String>,
    pub(crate) version: Option<String>,
    pub(crate) source_compatibility: Option<String>,
}

impl BuildSettings {
    pub fn group(&mut self, group: impl Into<String>) -> &mut Self {
        self.group = Some(group.into());
        self
    }

    pub fn version(&mut self, version: impl Into<String>) -> &mut Self {
        self.version = Some(version.into());
        self
    }

    /// The Java source compatibility level, as the user-facing version
    /// string (`"1.8"`, `"11"`). Dialects decide the rendered form.
    pub fn source_compatibility(&mut self, version: impl Into<String>) -> &mut Self {
        self.source_compatibility = Some(version.into());
        self
    }
}

/// The legacy classpath bootstrap block.
///
/// Some dialects refuse to express this entirely; any non-empty content is
/// then a hard error at write time.
#[derive(Debug, Clone, Default)]
pub struct Buildscript {
    pub(crate) dependencies: Vec<String>,
    pub(crate) ext: Vec<(String, String)>,
}

impl Buildscript {
    /// Add a classpath dependency by its full coordinates.
    pub fn dependency(&mut self, coordinates: impl Into<String>) -> &mut Self {
        self.dependencies.push(coordinates.into());
        self
    }

    /// Add an ext property. The value is a caller-rendered token.
    pub fn ext(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.ext.push((key.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.ext.is_empty()
    }
}

/// One project's complete build configuration.
#[derive(Debug, Clone, Default)]
pub struct BuildModel {
    settings: BuildSettings,
    buildscript: Buildscript,
    plugins: PluginContainer,
    repositories: RepositoryContainer,
    plugin_repositories: RepositoryContainer,
    configurations: ConfigurationContainer,
    properties: PropertyContainer,
    dependencies: DependencyContainer,
    boms: BomContainer,
    tasks: TaskContainer,
}

impl BuildModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> &BuildSettings {
        &self.settings
    }
    pub fn settings_mut(&mut self) -> &mut BuildSettings {
        &mut self.settings
    }

    pub fn buildscript(&self) -> &Buildscript {
        &self.buildscript
    }
    pub fn buildscript_mut(&mut self) -> &mut Buildscript {
        &mut self.buildscript
    }

    pub fn plugins(&self) -> &PluginContainer {
        &self.plugins
    }
    pub fn plugins_mut(&mut self) -> &mut PluginContainer {
        &mut self.plugins
    }

    pub fn repositories(&self) -> &RepositoryContainer {
        &self.repositories
    }
    pub fn repositories_mut(&mut self) -> &mut RepositoryContainer {
        &mut self.repositories
    }

    /// Resolution sources for plugins only. Rendered into a separate target
    /// than the main repositories, when the dialect renders them at all.
    pub fn plugin_repositories(&self) -> &RepositoryContainer {
        &self.plugin_repositories
    }
    pub fn plugin_repositories_mut(&mut self) -> &mut RepositoryContainer {
        &mut self.plugin_repositories
    }

    pub fn configurations(&self) -> &ConfigurationContainer {
        &self.configurations
    }
    pub fn configurations_mut(&mut self) -> &mut ConfigurationContainer {
        &mut self.configurations
    }

    pub fn properties(&self) -> &PropertyContainer {
        &self.properties
    }
    pub fn properties_mut(&mut self) -> &mut PropertyContainer {
        &mut self.properties
    }

    pub fn dependencies(&self) -> &DependencyContainer {
        &self.dependencies
    }
    pub fn dependencies_mut(&mut self) -> &mut DependencyContainer {
        &mut self.dependencies
    }

    pub fn boms(&self) -> &BomContainer {
        &self.boms
    }
    pub fn boms_mut(&mut self) -> &mut BomContainer {
        &mut self.boms
    }

    pub fn tasks(&self) -> &TaskContainer {
        &self.tasks
    }
    pub fn tasks_mut(&mut self) -> &mut TaskContainer {
        &mut self.tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_last_write_wins() {
        let mut model = BuildModel::new();
        model.settings_mut().version("1.0.0").version("1.0.1-SNAPSHOT");
        assert_eq!(model.settings().version.as_deref(), Some("1.0.1-SNAPSHOT"));
    }

    #[test]
    fn buildscript_empty_by_default() {
        let model = BuildModel::new();
        assert!(model.buildscript().is_empty());
    }
}
