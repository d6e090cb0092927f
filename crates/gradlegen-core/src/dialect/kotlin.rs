//! The Kotlin DSL (`build.gradle.kts`).
//!
//! Stricter than Groovy: double-quoted literals, parenthesized invocations,
//! typed accessors for built-in configurations, and no syntax at all for the
//! legacy buildscript block or `apply plugin:` — those constructs are hard
//! errors rather than silent degradations.

use crate::dialect::{ConfigurationStyle, Dialect};
use crate::domain::{ConstructKind, Exclusion, Plugin, Repository, VersionReference};

/// Plugin ids rendered bare, without `id(...)`.
const CORE_PLUGINS: [&str; 3] = ["java", "war", "groovy"];

/// Plugins under this namespace use the `kotlin("…")` shorthand.
const KOTLIN_PLUGIN_PREFIX: &str = "org.jetbrains.kotlin.";

#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinDsl;

impl Dialect for KotlinDsl {
    fn id(&self) -> &'static str {
        "kotlin"
    }

    fn build_file_name(&self) -> &'static str {
        "build.gradle.kts"
    }

    fn settings_file_name(&self) -> &'static str {
        "settings.gradle.kts"
    }

    fn supports(&self, construct: ConstructKind) -> bool {
        match construct {
            ConstructKind::BuildscriptDependency
            | ConstructKind::BuildscriptExtProperty
            | ConstructKind::AppliedPlugin => false,
        }
    }

    fn quote(&self, value: &str) -> String {
        format!("\"{value}\"")
    }

    fn source_compatibility(&self, version: &str) -> String {
        // Enumerated mapping, not a quoted pass-through: 1.8 → VERSION_1_8.
        format!(
            "java.sourceCompatibility = JavaVersion.VERSION_{}",
            version.replace('.', "_")
        )
    }

    fn plugin(&self, plugin: &Plugin) -> String {
        let mut rendered = if CORE_PLUGINS.contains(&plugin.id()) {
            plugin.id().to_string()
        } else if let Some(short) = plugin.id().strip_prefix(KOTLIN_PLUGIN_PREFIX) {
            format!("kotlin({})", self.quote(short))
        } else {
            format!("id({})", self.quote(plugin.id()))
        };
        if let Some(version) = plugin.version() {
            rendered.push_str(&format!(" version {}", self.quote(version)));
        }
        rendered
    }

    fn repository(&self, repository: &Repository) -> String {
        if repository.id() == Repository::MAVEN_CENTRAL {
            return "mavenCentral()".into();
        }
        format!(
            "maven {{ url = uri({}) }}",
            self.quote(repository.url().unwrap_or_default())
        )
    }

    fn property_block(&self) -> Option<&'static str> {
        None
    }

    fn property_assignment(&self, name: &str, value: &str) -> String {
        format!("extra[{}] = {value}", self.quote(name))
    }

    fn version_reference(&self, reference: &VersionReference) -> String {
        match reference {
            VersionReference::Value(value) => value.clone(),
            VersionReference::Property(property) => {
                format!("${{property({})}}", self.quote(&property.script_name()))
            }
        }
    }

    fn configuration_style(&self) -> ConfigurationStyle {
        ConfigurationStyle::Standalone
    }

    fn configuration_declaration(&self, name: &str) -> String {
        format!("val {name} by configurations.creating")
    }

    fn configuration_reference(&self, name: &str, declared: bool) -> String {
        if declared {
            name.to_string()
        } else {
            format!("configurations.{name}.get()")
        }
    }

    fn call(&self, target: &str, args: &[String]) -> String {
        format!("{target}({})", args.join(", "))
    }

    fn exclusion(&self, exclusion: &Exclusion) -> String {
        format!(
            "exclude(group = {}, module = {})",
            self.quote(&exclusion.group),
            self.quote(&exclusion.module)
        )
    }

    fn task_type_target(&self, short_name: &str) -> String {
        format!("tasks.withType<{short_name}>")
    }

    fn task_name_target(&self, name: &str) -> String {
        format!("tasks.{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VersionProperty;

    #[test]
    fn core_plugins_render_bare() {
        assert_eq!(KotlinDsl.plugin(&Plugin::new("java")), "java");
        assert_eq!(KotlinDsl.plugin(&Plugin::new("war")), "war");
    }

    #[test]
    fn kotlin_namespace_uses_shorthand() {
        let rendered =
            KotlinDsl.plugin(&Plugin::with_version("org.jetbrains.kotlin.jvm", "1.3.21"));
        assert_eq!(rendered, "kotlin(\"jvm\") version \"1.3.21\"");
    }

    #[test]
    fn other_plugins_use_id_call() {
        let rendered = KotlinDsl.plugin(&Plugin::with_version(
            "org.springframework.boot",
            "2.1.0.RELEASE",
        ));
        assert_eq!(rendered, "id(\"org.springframework.boot\") version \"2.1.0.RELEASE\"");
    }

    #[test]
    fn source_compatibility_enumerates_versions() {
        assert_eq!(
            KotlinDsl.source_compatibility("11"),
            "java.sourceCompatibility = JavaVersion.VERSION_11"
        );
        assert_eq!(
            KotlinDsl.source_compatibility("1.8"),
            "java.sourceCompatibility = JavaVersion.VERSION_1_8"
        );
    }

    #[test]
    fn property_references_always_call_property() {
        assert_eq!(
            KotlinDsl.version_reference(&VersionReference::property("kotlin.version")),
            "${property(\"kotlinVersion\")}"
        );
        assert_eq!(
            KotlinDsl.version_reference(&VersionReference::of_property(
                VersionProperty::external("acme.version")
            )),
            "${property(\"acme.version\")}"
        );
    }

    #[test]
    fn legacy_constructs_are_unsupported() {
        assert!(!KotlinDsl.supports(ConstructKind::BuildscriptDependency));
        assert!(!KotlinDsl.supports(ConstructKind::BuildscriptExtProperty));
        assert!(!KotlinDsl.supports(ConstructKind::AppliedPlugin));
        assert_eq!(KotlinDsl.apply_plugin("io.spring.dependency-management"), None);
    }
}
