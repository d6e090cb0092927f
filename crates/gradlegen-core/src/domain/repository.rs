//! Artifact repositories, for both build dependencies and plugin resolution.

/// An artifact source.
///
/// The well-known id [`Repository::MAVEN_CENTRAL`] renders through a fixed
/// shorthand regardless of the other fields. The `snapshots` flag is carried
/// by the model but does not currently affect rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub(crate) id: String,
    pub(crate) name: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) snapshots: bool,
}

impl Repository {
    pub const MAVEN_CENTRAL: &'static str = "maven-central";

    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            url: None,
            snapshots: false,
        }
    }

    /// A maven-style repository with a display name and url.
    pub fn maven(
        id: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            url: Some(url.into()),
            snapshots: false,
        }
    }

    pub fn with_snapshots(mut self, snapshots: bool) -> Self {
        self.snapshots = snapshots;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// Repositories keyed by id; re-adding an id replaces the entry in place.
#[derive(Debug, Clone, Default)]
pub struct RepositoryContainer {
    items: Vec<Repository>,
}

impl RepositoryContainer {
    pub fn add(&mut self, repository: Repository) {
        match self.items.iter_mut().find(|r| r.id == repository.id) {
            Some(slot) => *slot = repository,
            None => self.items.push(repository),
        }
    }

    pub fn items(&self) -> &[Repository] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_adding_keeps_position() {
        let mut container = RepositoryContainer::default();
        container.add(Repository::new(Repository::MAVEN_CENTRAL));
        container.add(Repository::maven("a", "A", "https://a.example.com"));
        container.add(Repository::maven(
            Repository::MAVEN_CENTRAL,
            "Central",
            "https://repo1.maven.org/maven2",
        ));

        assert_eq!(container.items().len(), 2);
        assert_eq!(container.items()[0].id(), Repository::MAVEN_CENTRAL);
        assert!(container.items()[0].url.is_some());
    }
}
