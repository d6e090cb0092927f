//! The build-script writer.
//!
//! One orchestration algorithm for every dialect: section order, merge
//! semantics, and import deduplication live here, while each textual form is
//! delegated to the [`Dialect`]. Rendering either fully succeeds or fails
//! with no usable output — legality is checked before a single line is
//! emitted.
//!
//! Section order: buildscript, plugins, legacy apply lines, project
//! settings, repositories, plugin repositories (dialect-conditional), BOM
//! imports, configurations, properties, dependencies, task customizations
//! (imports first). Non-empty sections are separated by a blank line.

use tracing::{debug, instrument};

use crate::application::indent::IndentingWriter;
use crate::dialect::{ConfigurationStyle, Dialect};
use crate::domain::{
    BuildModel, ConfigurationContainer, ConstructKind, Dependency, DomainError, Statement,
    StatementBlock,
};

pub struct BuildScriptWriter<'a> {
    dialect: &'a dyn Dialect,
}

impl<'a> BuildScriptWriter<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self { dialect }
    }

    /// Render `model` to script text.
    #[instrument(skip_all, fields(dialect = self.dialect.id()))]
    pub fn write(&self, model: &BuildModel) -> Result<String, DomainError> {
        self.ensure_expressible(model)?;

        let mut sections: Vec<String> = Vec::new();
        sections.extend(self.buildscript_section(model));
        sections.extend(self.plugins_section(model));
        sections.extend(self.applied_plugins_section(model));
        sections.extend(self.settings_section(model));
        sections.extend(self.repositories_section(model));
        sections.extend(self.plugin_repositories_section(model));
        sections.extend(self.boms_section(model));
        sections.extend(self.configurations_section(model));
        sections.extend(self.properties_section(model));
        sections.extend(self.dependencies_section(model));
        sections.extend(self.imports_section(model));
        for task in model.tasks().by_type() {
            sections.push(
                self.statement_block_section(
                    &self.dialect.task_type_target(task.short_name()),
                    task.block(),
                ),
            );
        }
        for task in model.tasks().by_name() {
            sections.push(
                self.statement_block_section(
                    &self.dialect.task_name_target(task.name()),
                    task.block(),
                ),
            );
        }

        // Every section ends with a newline, so joining on one more yields a
        // blank line between sections.
        let script = sections.join("\n");
        debug!(bytes = script.len(), "build script rendered");
        Ok(script)
    }

    /// Reject every construct the dialect cannot express, before any output
    /// exists.
    fn ensure_expressible(&self, model: &BuildModel) -> Result<(), DomainError> {
        let unsupported = |construct| DomainError::UnsupportedConstruct {
            dialect: self.dialect.id().to_string(),
            construct,
        };
        if !model.buildscript().dependencies.is_empty()
            && !self.dialect.supports(ConstructKind::BuildscriptDependency)
        {
            return Err(unsupported(ConstructKind::BuildscriptDependency));
        }
        if !model.buildscript().ext.is_empty()
            && !self.dialect.supports(ConstructKind::BuildscriptExtProperty)
        {
            return Err(unsupported(ConstructKind::BuildscriptExtProperty));
        }
        if !model.plugins().applied().is_empty()
            && !self.dialect.supports(ConstructKind::AppliedPlugin)
        {
            return Err(unsupported(ConstructKind::AppliedPlugin));
        }
        Ok(())
    }

    // ── Sections ──────────────────────────────────────────────────────────

    fn buildscript_section(&self, model: &BuildModel) -> Option<String> {
        let buildscript = model.buildscript();
        if buildscript.is_empty() {
            return None;
        }
        section(|w| {
            w.block("buildscript", |w| {
                if !buildscript.ext.is_empty() {
                    w.block("ext", |w| {
                        for (key, value) in &buildscript.ext {
                            w.line(format!("{key} = {value}"));
                        }
                    });
                }
                if !buildscript.dependencies.is_empty() {
                    w.block("dependencies", |w| {
                        for coordinates in &buildscript.dependencies {
                            if let Some(line) = self.dialect.buildscript_dependency(coordinates) {
                                w.line(line);
                            }
                        }
                    });
                }
            });
        })
    }

    fn plugins_section(&self, model: &BuildModel) -> Option<String> {
        let plugins = model.plugins().plugins();
        if plugins.is_empty() {
            return None;
        }
        section(|w| {
            w.block("plugins", |w| {
                for plugin in plugins {
                    w.line(self.dialect.plugin(plugin));
                }
            });
        })
    }

    fn applied_plugins_section(&self, model: &BuildModel) -> Option<String> {
        section(|w| {
            for id in model.plugins().applied() {
                if let Some(line) = self.dialect.apply_plugin(id) {
                    w.line(line);
                }
            }
        })
    }

    fn settings_section(&self, model: &BuildModel) -> Option<String> {
        let settings = model.settings();
        section(|w| {
            if let Some(group) = &settings.group {
                w.line(format!("group = {}", self.dialect.quote(group)));
            }
            if let Some(version) = &settings.version {
                w.line(format!("version = {}", self.dialect.quote(version)));
            }
            if let Some(source_compatibility) = &settings.source_compatibility {
                w.line(self.dialect.source_compatibility(source_compatibility));
            }
        })
    }

    fn repositories_section(&self, model: &BuildModel) -> Option<String> {
        let repositories = model.repositories();
        if repositories.is_empty() {
            return None;
        }
        section(|w| {
            w.block("repositories", |w| {
                for repository in repositories.items() {
                    w.line(self.dialect.repository(repository));
                }
            });
        })
    }

    /// Plugin repositories only appear when the dialect exposes a target
    /// block for them in the build script; Gradle dialects keep them in the
    /// settings script instead, so nothing is emitted here.
    fn plugin_repositories_section(&self, model: &BuildModel) -> Option<String> {
        let target = self.dialect.plugin_repositories_target()?;
        let repositories = model.plugin_repositories();
        if repositories.is_empty() {
            return None;
        }
        section(|w| {
            w.block(target, |w| {
                for repository in repositories.items() {
                    w.line(self.dialect.repository(repository));
                }
            });
        })
    }

    fn boms_section(&self, model: &BuildModel) -> Option<String> {
        let boms = model.boms();
        if boms.is_empty() {
            return None;
        }
        section(|w| {
            w.block("dependencyManagement", |w| {
                w.block("imports", |w| {
                    for bom in boms.in_import_order() {
                        let coordinates = format!(
                            "{}:{}:{}",
                            bom.group,
                            bom.artifact,
                            self.dialect.version_reference(&bom.version)
                        );
                        w.line(
                            self.dialect
                                .call("mavenBom", &[self.dialect.quote(&coordinates)]),
                        );
                    }
                });
            });
        })
    }

    fn configurations_section(&self, model: &BuildModel) -> Option<String> {
        let container = model.configurations();
        if container.is_empty() {
            return None;
        }
        section(|w| match self.dialect.configuration_style() {
            ConfigurationStyle::Standalone => {
                for name in container.declared() {
                    w.line(self.dialect.configuration_declaration(name));
                }
                if !container.customizations().is_empty() {
                    w.block("configurations", |w| {
                        self.write_configuration_customizations(w, container);
                    });
                }
            }
            ConfigurationStyle::InBlock => {
                w.block("configurations", |w| {
                    for name in container.declared() {
                        w.line(self.dialect.configuration_declaration(name));
                    }
                    self.write_configuration_customizations(w, container);
                });
            }
        })
    }

    fn write_configuration_customizations(
        &self,
        w: &mut IndentingWriter,
        container: &ConfigurationContainer,
    ) {
        for customization in container.customizations() {
            w.block(customization.name(), |w| {
                // Accumulated extendsFrom targets collapse into one call.
                let references: Vec<String> = customization
                    .extends_from
                    .iter()
                    .map(|name| {
                        self.dialect
                            .configuration_reference(name, container.is_declared(name))
                    })
                    .collect();
                if !references.is_empty() {
                    w.line(self.dialect.call("extendsFrom", &references));
                }
            });
        }
    }

    fn properties_section(&self, model: &BuildModel) -> Option<String> {
        let properties = model.properties();
        if properties.is_empty() {
            return None;
        }
        // Plain properties first, then version properties; both groups
        // sorted by key, the version group by the pre-transform key.
        let mut assignments: Vec<String> = Vec::new();
        for (key, value) in properties.plain_sorted() {
            assignments.push(self.dialect.property_assignment(key, value));
        }
        for (property, value) in properties.versions_sorted() {
            assignments.push(
                self.dialect
                    .property_assignment(&property.script_name(), &self.dialect.property_value(value)),
            );
        }
        section(|w| match self.dialect.property_block() {
            Some(header) => w.block(header, |w| {
                for assignment in &assignments {
                    w.line(assignment);
                }
            }),
            None => {
                for assignment in &assignments {
                    w.line(assignment);
                }
            }
        })
    }

    fn dependencies_section(&self, model: &BuildModel) -> Option<String> {
        let dependencies = model.dependencies();
        if dependencies.is_empty() {
            return None;
        }
        section(|w| {
            w.block("dependencies", |w| {
                for dependency in dependencies.items() {
                    self.write_dependency(w, dependency);
                }
            });
        })
    }

    fn write_dependency(&self, w: &mut IndentingWriter, dependency: &Dependency) {
        let keyword = match (&dependency.configuration, dependency.scope) {
            // A custom configuration always takes precedence over the scope.
            (Some(configuration), _) => configuration.as_str(),
            (None, Some(scope)) => self.dialect.scope_keyword(scope),
            (None, None) => self.dialect.default_scope_keyword(),
        };
        let coordinates = self.dialect.quote(&self.dependency_coordinates(dependency));
        if dependency.exclusions.is_empty() {
            w.line(self.dialect.call(keyword, &[coordinates]));
        } else {
            w.block(
                &self.dialect.call_with_block(keyword, &[coordinates]),
                |w| {
                    for exclusion in &dependency.exclusions {
                        w.line(self.dialect.exclusion(exclusion));
                    }
                },
            );
        }
    }

    fn dependency_coordinates(&self, dependency: &Dependency) -> String {
        let mut coordinates = format!("{}:{}", dependency.group, dependency.artifact);
        if let Some(version) = &dependency.version {
            coordinates.push(':');
            coordinates.push_str(&self.dialect.version_reference(version));
        }
        if let Some(artifact_type) = &dependency.artifact_type {
            coordinates.push('@');
            coordinates.push_str(artifact_type);
        }
        coordinates
    }

    /// One import per distinct fully-qualified by-type target, in first-seen
    /// order. Short type names never import.
    fn imports_section(&self, model: &BuildModel) -> Option<String> {
        let mut imports: Vec<&str> = Vec::new();
        for task in model.tasks().by_type() {
            if let Some(path) = task.import_path() {
                if !imports.contains(&path) {
                    imports.push(path);
                }
            }
        }
        if imports.is_empty() {
            return None;
        }
        section(|w| {
            for path in imports {
                w.line(format!("import {path}"));
            }
        })
    }

    fn statement_block_section(&self, target: &str, block: &StatementBlock) -> String {
        let mut writer = IndentingWriter::new();
        writer.block(target, |w| self.write_statements(w, block.statements()));
        writer.finish()
    }

    fn write_statements(&self, w: &mut IndentingWriter, statements: &[Statement]) {
        for statement in statements {
            match statement {
                Statement::Assignment { target, value } => w.line(format!("{target} = {value}")),
                Statement::Invocation { target, args } => w.line(self.dialect.call(target, args)),
                Statement::Nested(block) => {
                    w.block(block.name(), |w| self.write_statements(w, block.statements()));
                }
            }
        }
    }
}

fn section(body: impl FnOnce(&mut IndentingWriter)) -> Option<String> {
    let mut writer = IndentingWriter::new();
    body(&mut writer);
    if writer.is_empty() {
        None
    } else {
        Some(writer.finish())
    }
}
