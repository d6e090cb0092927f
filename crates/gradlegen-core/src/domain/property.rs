//! Free-form and version build properties.
//!
//! Plain properties carry caller-rendered values and are emitted before
//! version properties; each group is sorted independently by key, and the
//! version group sorts on the original key, not the camel-cased script name.

use crate::domain::version::VersionProperty;

#[derive(Debug, Clone, Default)]
pub struct PropertyContainer {
    plain: Vec<(String, String)>,
    versions: Vec<(VersionProperty, String)>,
}

impl PropertyContainer {
    /// Set a free-form property. The value is an opaque, caller-rendered
    /// token (already quoted, or a bare expression). Last write wins.
    pub fn property(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.plain.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => self.plain.push((key, value)),
        }
        self
    }

    /// Pin a version as a property. The value is a bare version string; the
    /// writer quotes it per dialect. Last write wins, keyed on the original
    /// property key.
    pub fn version(&mut self, property: VersionProperty, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self
            .versions
            .iter_mut()
            .find(|(existing, _)| existing.key() == property.key())
        {
            Some(slot) => *slot = (property, value),
            None => self.versions.push((property, value)),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.plain.is_empty() && self.versions.is_empty()
    }

    /// Plain properties, sorted by key.
    pub fn plain_sorted(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .plain
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Version properties, sorted by the original (pre-transform) key.
    pub fn versions_sorted(&self) -> Vec<(&VersionProperty, &str)> {
        let mut entries: Vec<(&VersionProperty, &str)> = self
            .versions
            .iter()
            .map(|(property, value)| (property, value.as_str()))
            .collect();
        entries.sort_by(|a, b| a.0.key().cmp(b.0.key()));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_properties_sort_by_key() {
        let mut container = PropertyContainer::default();
        container
            .property("java.version", "\"1.8\"")
            .property("alpha", "file(\"build/example\")");

        let keys: Vec<_> = container.plain_sorted().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["alpha", "java.version"]);
    }

    #[test]
    fn version_sort_uses_original_key() {
        let mut container = PropertyContainer::default();
        // Camel-cased "zeta.version" would sort after "alpha", but the
        // original keys decide.
        container
            .version(VersionProperty::internal("zeta.version"), "1.0")
            .version(VersionProperty::external("alpha-version"), "0.1");

        let keys: Vec<_> = container
            .versions_sorted()
            .iter()
            .map(|(p, _)| p.key())
            .collect();
        assert_eq!(keys, ["alpha-version", "zeta.version"]);
    }

    #[test]
    fn last_write_wins_per_key() {
        let mut container = PropertyContainer::default();
        container.property("myProperty", "41").property("myProperty", "42");
        assert_eq!(container.plain_sorted(), [("myProperty", "42")]);
    }
}
