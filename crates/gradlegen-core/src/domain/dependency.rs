//! Build dependencies: coordinates, scopes, exclusions.

use serde::{Deserialize, Serialize};

use crate::domain::version::VersionReference;

/// The intended use of a dependency, mapped to a dialect keyword at write
/// time. A custom configuration on the dependency overrides the scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyScope {
    AnnotationProcessor,
    Compile,
    CompileOnly,
    ProvidedRuntime,
    Runtime,
    TestCompile,
    TestRuntime,
}

/// A transitive-dependency suppression attached to one dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusion {
    pub(crate) group: String,
    pub(crate) module: String,
}

impl Exclusion {
    pub fn new(group: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            module: module.into(),
        }
    }
}

/// One build dependency.
///
/// Built with consuming mutators so call sites read as a declaration:
///
/// ```
/// use gradlegen_core::domain::{Dependency, DependencyScope, VersionReference};
///
/// let dependency = Dependency::new("com.example", "jdbc-driver")
///     .version(VersionReference::value("1.0.0"))
///     .scope(DependencyScope::Runtime);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub(crate) group: String,
    pub(crate) artifact: String,
    pub(crate) version: Option<VersionReference>,
    pub(crate) scope: Option<DependencyScope>,
    pub(crate) configuration: Option<String>,
    pub(crate) exclusions: Vec<Exclusion>,
    pub(crate) artifact_type: Option<String>,
}

impl Dependency {
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: None,
            scope: None,
            configuration: None,
            exclusions: Vec::new(),
            artifact_type: None,
        }
    }

    pub fn version(mut self, version: VersionReference) -> Self {
        self.version = Some(version);
        self
    }

    pub fn scope(mut self, scope: DependencyScope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Resolve through a custom configuration instead of the scope keyword.
    pub fn configuration(mut self, configuration: impl Into<String>) -> Self {
        self.configuration = Some(configuration.into());
        self
    }

    pub fn exclusion(mut self, group: impl Into<String>, module: impl Into<String>) -> Self {
        self.exclusions.push(Exclusion::new(group, module));
        self
    }

    /// Non-default artifact type (`tar.gz`, `zip`, …), appended to the
    /// coordinate string as an `@type` suffix.
    pub fn artifact_type(mut self, artifact_type: impl Into<String>) -> Self {
        self.artifact_type = Some(artifact_type.into());
        self
    }
}

/// Dependencies keyed by caller id; re-adding an id replaces the entry in
/// place, preserving the original position.
#[derive(Debug, Clone, Default)]
pub struct DependencyContainer {
    items: Vec<(String, Dependency)>,
}

impl DependencyContainer {
    pub fn add(&mut self, id: impl Into<String>, dependency: Dependency) {
        let id = id.into();
        match self.items.iter_mut().find(|(existing, _)| *existing == id) {
            Some(slot) => slot.1 = dependency,
            None => self.items.push((id, dependency)),
        }
    }

    /// Shorthand for the common coordinates-plus-scope case.
    pub fn add_scoped(
        &mut self,
        id: impl Into<String>,
        group: impl Into<String>,
        artifact: impl Into<String>,
        scope: DependencyScope,
    ) {
        self.add(id, Dependency::new(group, artifact).scope(scope));
    }

    pub fn items(&self) -> impl Iterator<Item = &Dependency> {
        self.items.iter().map(|(_, dependency)| dependency)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_adding_an_id_replaces_in_place() {
        let mut container = DependencyContainer::default();
        container.add_scoped("web", "com.example", "web-starter", DependencyScope::Compile);
        container.add_scoped("test", "com.example", "test-kit", DependencyScope::TestCompile);
        container.add_scoped("web", "com.example", "web-starter-v2", DependencyScope::Compile);

        let artifacts: Vec<_> = container.items().map(|d| d.artifact.as_str()).collect();
        assert_eq!(artifacts, ["web-starter-v2", "test-kit"]);
    }

    #[test]
    fn exclusions_accumulate() {
        let dependency = Dependency::new("com.example", "test")
            .exclusion("com.example.legacy", "legacy-one")
            .exclusion("com.example.another", "legacy-two");
        assert_eq!(dependency.exclusions.len(), 2);
    }
}
