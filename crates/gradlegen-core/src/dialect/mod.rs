//! Build-script dialects.
//!
//! Everything that differs between Gradle's scripting dialects lives behind
//! the [`Dialect`] trait: keyword tables, literal quoting, plugin-reference
//! syntax, and which constructs the dialect refuses to express. The writers
//! in the application layer hold the single orchestration algorithm and ask
//! the dialect for each textual form, so adding a dialect never duplicates
//! control flow.
//!
//! Literal values flowing through a dialect are opaque tokens: callers
//! supply already-quoted or bare literals and nothing here re-quotes or
//! parses them. Only [`Dialect::quote`] introduces quoting, for values the
//! writer owns (coordinates, urls, version-property values).

mod groovy;
mod kotlin;

pub use groovy::GroovyDsl;
pub use kotlin::KotlinDsl;

use crate::domain::{
    ConstructKind, DependencyScope, Exclusion, Plugin, Repository, VersionReference,
};

/// How declared configurations appear in the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationStyle {
    /// One standalone creation statement per configuration, before the
    /// `configurations` block (Kotlin's `val x by configurations.creating`).
    Standalone,
    /// Declarations are bare entries inside the `configurations` block
    /// itself, ahead of any customizations.
    InBlock,
}

/// Scope keywords shared by every Gradle dialect.
fn gradle_scope_keyword(scope: DependencyScope) -> &'static str {
    match scope {
        DependencyScope::AnnotationProcessor => "annotationProcessor",
        DependencyScope::Compile => "implementation",
        DependencyScope::CompileOnly => "compileOnly",
        DependencyScope::ProvidedRuntime => "providedRuntime",
        DependencyScope::Runtime => "runtimeOnly",
        DependencyScope::TestCompile => "testImplementation",
        DependencyScope::TestRuntime => "testRuntimeOnly",
    }
}

/// A build-script dialect: pure lookup/mapping functions plus a legality
/// predicate per construct kind. Implementations are stateless.
pub trait Dialect: Send + Sync + std::fmt::Debug {
    fn id(&self) -> &'static str;

    /// File name of the generated build script.
    fn build_file_name(&self) -> &'static str;

    /// File name of the generated settings script.
    fn settings_file_name(&self) -> &'static str;

    /// Whether this dialect can express the given construct at all.
    fn supports(&self, construct: ConstructKind) -> bool;

    /// Quote a string literal the way this dialect writes them.
    fn quote(&self, value: &str) -> String;

    /// Quote a version-property value at its declaration site. Groovy
    /// double-quotes these even where plain literals are single-quoted.
    fn property_value(&self, value: &str) -> String {
        self.quote(value)
    }

    fn scope_keyword(&self, scope: DependencyScope) -> &'static str {
        gradle_scope_keyword(scope)
    }

    /// The keyword used when a dependency declares no scope.
    fn default_scope_keyword(&self) -> &'static str {
        self.scope_keyword(DependencyScope::Compile)
    }

    /// The full source-compatibility statement for a version string.
    fn source_compatibility(&self, version: &str) -> String;

    /// The textual form of one entry in the `plugins` block.
    fn plugin(&self, plugin: &Plugin) -> String;

    /// The legacy apply line, for dialects that support it.
    fn apply_plugin(&self, id: &str) -> Option<String> {
        let _ = id;
        None
    }

    /// The buildscript classpath line, for dialects that support it.
    fn buildscript_dependency(&self, coordinates: &str) -> Option<String> {
        let _ = coordinates;
        None
    }

    /// The full line for one repository entry. Well-known ids render via a
    /// fixed shorthand regardless of the other fields.
    fn repository(&self, repository: &Repository) -> String;

    /// Header of the build-script block plugin repositories render into, or
    /// `None` when the dialect keeps them out of the build script entirely
    /// (Gradle dialects put them in the settings script instead).
    fn plugin_repositories_target(&self) -> Option<&'static str> {
        None
    }

    /// Header of the block wrapping property assignments, or `None` when
    /// they live at the top level.
    fn property_block(&self) -> Option<&'static str>;

    /// One property assignment. `name` is the final script name; `value` is
    /// an opaque, already-rendered token.
    fn property_assignment(&self, name: &str, value: &str) -> String;

    /// Render a version for use inside a coordinate string: the literal
    /// value, or the dialect's property interpolation.
    fn version_reference(&self, reference: &VersionReference) -> String;

    fn configuration_style(&self) -> ConfigurationStyle;

    /// The creation statement (or in-block entry) for a declared
    /// configuration.
    fn configuration_declaration(&self, name: &str) -> String;

    /// How a configuration is referenced from a customization: bare when
    /// declared in this build, the dialect accessor form otherwise.
    fn configuration_reference(&self, name: &str, declared: bool) -> String;

    /// An invocation statement. Arguments are opaque tokens.
    fn call(&self, target: &str, args: &[String]) -> String;

    /// An invocation that opens a trailing block; parenthesized in every
    /// Gradle dialect.
    fn call_with_block(&self, target: &str, args: &[String]) -> String {
        format!("{target}({})", args.join(", "))
    }

    fn exclusion(&self, exclusion: &Exclusion) -> String;

    /// Block target for a by-type task customization.
    fn task_type_target(&self, short_name: &str) -> String;

    /// Block target for a by-name task customization.
    fn task_name_target(&self, name: &str) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_keywords_cover_all_scopes() {
        assert_eq!(gradle_scope_keyword(DependencyScope::Compile), "implementation");
        assert_eq!(gradle_scope_keyword(DependencyScope::Runtime), "runtimeOnly");
        assert_eq!(
            gradle_scope_keyword(DependencyScope::AnnotationProcessor),
            "annotationProcessor"
        );
        assert_eq!(
            gradle_scope_keyword(DependencyScope::ProvidedRuntime),
            "providedRuntime"
        );
        assert_eq!(
            gradle_scope_keyword(DependencyScope::TestCompile),
            "testImplementation"
        );
        assert_eq!(
            gradle_scope_keyword(DependencyScope::TestRuntime),
            "testRuntimeOnly"
        );
        assert_eq!(gradle_scope_keyword(DependencyScope::CompileOnly), "compileOnly");
    }
}
