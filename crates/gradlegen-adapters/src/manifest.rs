//! TOML build manifests.
//!
//! The declarative on-disk description a [`BuildModel`] is assembled from.
//! This is deliberately thin glue: every semantic decision (ordering,
//! merging, dialect legality) stays in `gradlegen-core`; the manifest layer
//! only maps fields.
//!
//! ```toml
//! name = "demo"
//! dialect = "kotlin"
//!
//! [settings]
//! group = "com.example"
//! version = "0.0.1-SNAPSHOT"
//! source-compatibility = "11"
//!
//! [[plugins]]
//! id = "org.springframework.boot"
//! version = "2.1.0.RELEASE"
//!
//! [[repositories]]
//! id = "maven-central"
//!
//! [[dependencies]]
//! group = "org.springframework.boot"
//! artifact = "spring-boot-starter-web"
//! scope = "compile"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use gradlegen_core::domain::{
    BuildModel, Dependency, DependencyScope, Repository, StatementBlock, VersionProperty,
    VersionReference,
};

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("invalid manifest: {reason}")]
    Invalid { reason: String },
}

/// A parsed build manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BuildManifest {
    name: String,
    /// Target dialect id. Optional: the caller may supply one instead.
    dialect: Option<String>,
    #[serde(default)]
    settings: SettingsSpec,
    #[serde(default)]
    buildscript: BuildscriptSpec,
    #[serde(default)]
    plugins: Vec<PluginSpec>,
    #[serde(default)]
    apply: Vec<String>,
    #[serde(default)]
    repositories: Vec<RepositorySpec>,
    #[serde(default)]
    plugin_repositories: Vec<RepositorySpec>,
    #[serde(default)]
    boms: Vec<BomSpec>,
    #[serde(default)]
    configurations: ConfigurationsSpec,
    #[serde(default)]
    properties: PropertiesSpec,
    #[serde(default)]
    dependencies: Vec<DependencySpec>,
    #[serde(default)]
    tasks: TasksSpec,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct SettingsSpec {
    group: Option<String>,
    version: Option<String>,
    source_compatibility: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct BuildscriptSpec {
    #[serde(default)]
    dependencies: Vec<String>,
    #[serde(default)]
    ext: Vec<ExtSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExtSpec {
    key: String,
    value: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct PluginSpec {
    id: String,
    version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RepositorySpec {
    id: String,
    name: Option<String>,
    url: Option<String>,
    #[serde(default)]
    snapshots: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct BomSpec {
    id: Option<String>,
    group: String,
    artifact: String,
    version: Option<String>,
    version_property: Option<String>,
    #[serde(default)]
    external_property: bool,
    #[serde(default)]
    order: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct ConfigurationsSpec {
    #[serde(default)]
    declare: Vec<String>,
    #[serde(default)]
    extend: Vec<ExtendSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct ExtendSpec {
    target: String,
    extends_from: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PropertiesSpec {
    /// Free-form properties; values are opaque, pre-rendered tokens.
    #[serde(default)]
    plain: BTreeMap<String, String>,
    #[serde(default)]
    versions: Vec<VersionPropertySpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct VersionPropertySpec {
    key: String,
    value: String,
    #[serde(default = "default_internal")]
    internal: bool,
}

fn default_internal() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct DependencySpec {
    id: Option<String>,
    group: String,
    artifact: String,
    version: Option<String>,
    version_property: Option<String>,
    #[serde(default)]
    external_property: bool,
    scope: Option<DependencyScope>,
    configuration: Option<String>,
    #[serde(rename = "type")]
    artifact_type: Option<String>,
    #[serde(default)]
    exclusions: Vec<ExclusionSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExclusionSpec {
    group: String,
    module: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct TasksSpec {
    #[serde(default)]
    with_type: Vec<TypeCustomizationSpec>,
    #[serde(default)]
    with_name: Vec<NameCustomizationSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct TypeCustomizationSpec {
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default)]
    statements: Vec<StatementSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct NameCustomizationSpec {
    name: String,
    #[serde(default)]
    statements: Vec<StatementSpec>,
}

/// One statement in a task customization, in manifest form.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum StatementSpec {
    Assign {
        assign: String,
        value: String,
    },
    Invoke {
        invoke: String,
        #[serde(default)]
        args: Vec<String>,
    },
    Block {
        block: String,
        #[serde(default)]
        statements: Vec<StatementSpec>,
    },
}

impl BuildManifest {
    /// Load and parse a manifest file.
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: Self = toml::from_str(&text).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        debug!(path = %path.display(), name = %manifest.name, "manifest loaded");
        Ok(manifest)
    }

    /// Parse a manifest from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ManifestError> {
        toml::from_str(text).map_err(|source| ManifestError::Invalid {
            reason: source.to_string(),
        })
    }

    pub fn project_name(&self) -> &str {
        &self.name
    }

    pub fn dialect(&self) -> Option<&str> {
        self.dialect.as_deref()
    }

    /// Assemble the build model this manifest describes.
    pub fn build_model(&self) -> Result<BuildModel, ManifestError> {
        let mut model = BuildModel::new();

        if let Some(group) = &self.settings.group {
            model.settings_mut().group(group);
        }
        if let Some(version) = &self.settings.version {
            model.settings_mut().version(version);
        }
        if let Some(source_compatibility) = &self.settings.source_compatibility {
            model.settings_mut().source_compatibility(source_compatibility);
        }

        for coordinates in &self.buildscript.dependencies {
            model.buildscript_mut().dependency(coordinates);
        }
        for ext in &self.buildscript.ext {
            model.buildscript_mut().ext(&ext.key, &ext.value);
        }

        for plugin in &self.plugins {
            match &plugin.version {
                Some(version) => model.plugins_mut().add_with_version(&plugin.id, version),
                None => model.plugins_mut().add(&plugin.id),
            }
        }
        for id in &self.apply {
            model.plugins_mut().apply(id);
        }

        for spec in &self.repositories {
            model.repositories_mut().add(spec.to_repository());
        }
        for spec in &self.plugin_repositories {
            model.plugin_repositories_mut().add(spec.to_repository());
        }

        for bom in &self.boms {
            let version = version_reference(
                bom.version.as_deref(),
                bom.version_property.as_deref(),
                bom.external_property,
            )?
            .ok_or_else(|| ManifestError::Invalid {
                reason: format!("bom {}:{} needs a version", bom.group, bom.artifact),
            })?;
            model.boms_mut().add_ordered(
                bom.id.clone().unwrap_or_else(|| bom.artifact.clone()),
                &bom.group,
                &bom.artifact,
                version,
                bom.order,
            );
        }

        for name in &self.configurations.declare {
            model.configurations_mut().declare(name);
        }
        for extend in &self.configurations.extend {
            model
                .configurations_mut()
                .customize(&extend.target, |configuration| {
                    for name in &extend.extends_from {
                        configuration.extends_from(name);
                    }
                });
        }

        for (key, value) in &self.properties.plain {
            model.properties_mut().property(key, value);
        }
        for version in &self.properties.versions {
            model.properties_mut().version(
                VersionProperty::new(&version.key, version.internal),
                &version.value,
            );
        }

        for spec in &self.dependencies {
            let mut dependency = Dependency::new(&spec.group, &spec.artifact);
            if let Some(version) = version_reference(
                spec.version.as_deref(),
                spec.version_property.as_deref(),
                spec.external_property,
            )? {
                dependency = dependency.version(version);
            }
            if let Some(scope) = spec.scope {
                dependency = dependency.scope(scope);
            }
            if let Some(configuration) = &spec.configuration {
                dependency = dependency.configuration(configuration);
            }
            if let Some(artifact_type) = &spec.artifact_type {
                dependency = dependency.artifact_type(artifact_type);
            }
            for exclusion in &spec.exclusions {
                dependency = dependency.exclusion(&exclusion.group, &exclusion.module);
            }
            model.dependencies_mut().add(
                spec.id.clone().unwrap_or_else(|| spec.artifact.clone()),
                dependency,
            );
        }

        for task in &self.tasks.with_type {
            model
                .tasks_mut()
                .customize_with_type(&task.type_name, |block| {
                    apply_statements(block, &task.statements);
                });
        }
        for task in &self.tasks.with_name {
            model.tasks_mut().customize(&task.name, |block| {
                apply_statements(block, &task.statements);
            });
        }

        Ok(model)
    }
}

impl RepositorySpec {
    fn to_repository(&self) -> Repository {
        let repository = match &self.url {
            Some(url) => Repository::maven(
                &self.id,
                self.name.clone().unwrap_or_else(|| self.id.clone()),
                url,
            ),
            None => Repository::new(&self.id),
        };
        repository.with_snapshots(self.snapshots)
    }
}

fn version_reference(
    version: Option<&str>,
    property: Option<&str>,
    external: bool,
) -> Result<Option<VersionReference>, ManifestError> {
    match (version, property) {
        (Some(_), Some(_)) => Err(ManifestError::Invalid {
            reason: "specify either `version` or `version-property`, not both".into(),
        }),
        (Some(version), None) => Ok(Some(VersionReference::value(version))),
        (None, Some(key)) => Ok(Some(VersionReference::of_property(VersionProperty::new(
            key, !external,
        )))),
        (None, None) => Ok(None),
    }
}

fn apply_statements(block: &mut StatementBlock, statements: &[StatementSpec]) {
    for statement in statements {
        match statement {
            StatementSpec::Assign { assign, value } => {
                block.set(assign, value);
            }
            StatementSpec::Invoke { invoke, args } => {
                block.invoke(invoke, args.iter().cloned());
            }
            StatementSpec::Block {
                block: name,
                statements,
            } => {
                block.nested(name, |nested| apply_statements(nested, statements));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradlegen_core::application::BuildScriptWriter;
    use gradlegen_core::dialect::KotlinDsl;

    const MANIFEST: &str = r#"
name = "demo"
dialect = "kotlin"

[settings]
group = "com.example"
version = "0.0.1-SNAPSHOT"
source-compatibility = "11"

[[plugins]]
id = "org.springframework.boot"
version = "2.1.0.RELEASE"

[[plugins]]
id = "java"

[[repositories]]
id = "maven-central"

[[dependencies]]
group = "org.springframework.boot"
artifact = "spring-boot-starter-web"
scope = "compile"

[[dependencies]]
group = "org.springframework.boot"
artifact = "spring-boot-starter-test"
scope = "test-compile"

[[boms]]
group = "org.springframework.cloud"
artifact = "spring-cloud-dependencies"
version-property = "spring-cloud.version"

[properties]
[[properties.versions]]
key = "spring-cloud.version"
value = "Greenwich.RELEASE"

[tasks]
[[tasks.with-name]]
name = "test"
statements = [{ invoke = "useJUnitPlatform" }]
"#;

    #[test]
    fn manifest_round_trips_into_a_kotlin_script() {
        let manifest = BuildManifest::from_toml(MANIFEST).unwrap();
        assert_eq!(manifest.project_name(), "demo");
        assert_eq!(manifest.dialect(), Some("kotlin"));

        let model = manifest.build_model().unwrap();
        let script = BuildScriptWriter::new(&KotlinDsl).write(&model).unwrap();
        assert!(script.contains("id(\"org.springframework.boot\") version \"2.1.0.RELEASE\""));
        assert!(script.contains("java.sourceCompatibility = JavaVersion.VERSION_11"));
        assert!(script.contains(
            "mavenBom(\"org.springframework.cloud:spring-cloud-dependencies:${property(\"springCloudVersion\")}\")"
        ));
        assert!(script.contains("extra[\"springCloudVersion\"] = \"Greenwich.RELEASE\""));
        assert!(script.contains("tasks.test {"));
        assert!(script.contains("    useJUnitPlatform()"));
    }

    #[test]
    fn nested_statements_deserialize_recursively() {
        let manifest = BuildManifest::from_toml(
            r#"
name = "demo"
dialect = "kotlin"

[[tasks.with-type]]
type = "org.jetbrains.kotlin.gradle.tasks.KotlinCompile"
statements = [
    { block = "kotlinOptions", statements = [{ assign = "jvmTarget", value = '"1.8"' }] },
]
"#,
        )
        .unwrap();
        let model = manifest.build_model().unwrap();
        let script = BuildScriptWriter::new(&KotlinDsl).write(&model).unwrap();
        assert!(script.contains("import org.jetbrains.kotlin.gradle.tasks.KotlinCompile"));
        assert!(script.contains("    kotlinOptions {"));
        assert!(script.contains("        jvmTarget = \"1.8\""));
    }

    #[test]
    fn version_and_property_together_are_rejected() {
        let manifest = BuildManifest::from_toml(
            r#"
name = "demo"
dialect = "groovy"

[[dependencies]]
group = "com.example"
artifact = "acme"
version = "1.0"
version-property = "acme.version"
"#,
        )
        .unwrap();
        assert!(matches!(
            manifest.build_model(),
            Err(ManifestError::Invalid { .. })
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = BuildManifest::from_toml(
            r#"
name = "demo"
dialect = "groovy"
no-such-field = true
"#,
        );
        assert!(result.is_err());
    }
}
