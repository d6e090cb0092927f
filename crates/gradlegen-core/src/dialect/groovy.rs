//! The Groovy DSL (`build.gradle`).
//!
//! The permissive dialect: single-quoted literals, paren-less invocations,
//! and support for every legacy construct (buildscript classpath, ext
//! properties, `apply plugin:`).

use crate::dialect::{ConfigurationStyle, Dialect};
use crate::domain::{ConstructKind, Exclusion, Plugin, Repository, VersionProperty, VersionReference};

#[derive(Debug, Clone, Copy, Default)]
pub struct GroovyDsl;

impl Dialect for GroovyDsl {
    fn id(&self) -> &'static str {
        "groovy"
    }

    fn build_file_name(&self) -> &'static str {
        "build.gradle"
    }

    fn settings_file_name(&self) -> &'static str {
        "settings.gradle"
    }

    fn supports(&self, _construct: ConstructKind) -> bool {
        true
    }

    fn quote(&self, value: &str) -> String {
        // GStrings only interpolate inside double quotes; everything else is
        // single-quoted.
        if value.contains("${") {
            format!("\"{value}\"")
        } else {
            format!("'{value}'")
        }
    }

    fn property_value(&self, value: &str) -> String {
        format!("\"{value}\"")
    }

    fn source_compatibility(&self, version: &str) -> String {
        format!("sourceCompatibility = {}", self.quote(version))
    }

    fn plugin(&self, plugin: &Plugin) -> String {
        let mut rendered = format!("id {}", self.quote(plugin.id()));
        if let Some(version) = plugin.version() {
            rendered.push_str(&format!(" version {}", self.quote(version)));
        }
        rendered
    }

    fn apply_plugin(&self, id: &str) -> Option<String> {
        Some(format!("apply plugin: {}", self.quote(id)))
    }

    fn buildscript_dependency(&self, coordinates: &str) -> Option<String> {
        Some(self.call("classpath", &[self.quote(coordinates)]))
    }

    fn repository(&self, repository: &Repository) -> String {
        if repository.id() == Repository::MAVEN_CENTRAL {
            return "mavenCentral()".into();
        }
        format!(
            "maven {{ url {} }}",
            self.quote(repository.url().unwrap_or_default())
        )
    }

    fn property_block(&self) -> Option<&'static str> {
        Some("ext")
    }

    fn property_assignment(&self, name: &str, value: &str) -> String {
        format!("set({}, {value})", self.quote(name))
    }

    fn version_reference(&self, reference: &VersionReference) -> String {
        match reference {
            VersionReference::Value(value) => value.clone(),
            // Internal properties become script properties in Groovy and
            // interpolate directly; external ones go through property().
            VersionReference::Property(property) if property.is_internal() => {
                format!("${{{}}}", property.script_name())
            }
            VersionReference::Property(property) => self.external_property_lookup(property),
        }
    }

    fn configuration_style(&self) -> ConfigurationStyle {
        ConfigurationStyle::InBlock
    }

    fn configuration_declaration(&self, name: &str) -> String {
        name.to_string()
    }

    fn configuration_reference(&self, name: &str, _declared: bool) -> String {
        // Groovy resolves both declared and built-in configurations by name.
        name.to_string()
    }

    fn call(&self, target: &str, args: &[String]) -> String {
        if args.is_empty() {
            format!("{target}()")
        } else {
            format!("{target} {}", args.join(", "))
        }
    }

    fn exclusion(&self, exclusion: &Exclusion) -> String {
        format!(
            "exclude group: {}, module: {}",
            self.quote(&exclusion.group),
            self.quote(&exclusion.module)
        )
    }

    fn task_type_target(&self, short_name: &str) -> String {
        format!("tasks.withType({short_name})")
    }

    fn task_name_target(&self, name: &str) -> String {
        name.to_string()
    }
}

impl GroovyDsl {
    fn external_property_lookup(&self, property: &VersionProperty) -> String {
        format!("${{property('{}')}}", property.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_with_version() {
        let rendered = GroovyDsl.plugin(&Plugin::with_version(
            "org.springframework.boot",
            "2.1.0.RELEASE",
        ));
        assert_eq!(rendered, "id 'org.springframework.boot' version '2.1.0.RELEASE'");
    }

    #[test]
    fn maven_central_shorthand_wins_over_url() {
        let repository = Repository::maven(
            Repository::MAVEN_CENTRAL,
            "Central",
            "https://repo1.maven.org/maven2",
        );
        assert_eq!(GroovyDsl.repository(&repository), "mavenCentral()");
    }

    #[test]
    fn internal_property_interpolates_directly() {
        let reference = VersionReference::property("kotlin.version");
        assert_eq!(GroovyDsl.version_reference(&reference), "${kotlinVersion}");
    }

    #[test]
    fn external_property_goes_through_lookup() {
        let reference = VersionReference::of_property(VersionProperty::external("acme.version"));
        assert_eq!(
            GroovyDsl.version_reference(&reference),
            "${property('acme.version')}"
        );
    }

    #[test]
    fn interpolated_literals_switch_to_double_quotes() {
        assert_eq!(
            GroovyDsl.quote("com.example:acme:${acmeVersion}"),
            "\"com.example:acme:${acmeVersion}\""
        );
        assert_eq!(GroovyDsl.quote("com.example:acme:1.0"), "'com.example:acme:1.0'");
    }

    #[test]
    fn property_values_are_double_quoted() {
        assert_eq!(GroovyDsl.property_value("Greenwich.SR1"), "\"Greenwich.SR1\"");
    }

    #[test]
    fn calls_drop_parens_unless_empty() {
        assert_eq!(
            GroovyDsl.call("dependsOn", &["test".to_string()]),
            "dependsOn test"
        );
        assert_eq!(GroovyDsl.call("clean", &[]), "clean()");
    }

    #[test]
    fn everything_is_supported() {
        assert!(GroovyDsl.supports(ConstructKind::BuildscriptDependency));
        assert!(GroovyDsl.supports(ConstructKind::BuildscriptExtProperty));
        assert!(GroovyDsl.supports(ConstructKind::AppliedPlugin));
    }
}
