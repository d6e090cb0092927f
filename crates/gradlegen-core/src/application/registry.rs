//! Dialect lookup by id.

use crate::application::ApplicationError;
use crate::dialect::{Dialect, GroovyDsl, KotlinDsl};

/// Registered dialects, resolvable by id.
///
/// [`DialectRegistry::with_defaults`] knows both Gradle dialects; callers
/// embedding the core may register additional implementations.
pub struct DialectRegistry {
    dialects: Vec<Box<dyn Dialect>>,
}

impl DialectRegistry {
    pub fn empty() -> Self {
        Self {
            dialects: Vec::new(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(GroovyDsl));
        registry.register(Box::new(KotlinDsl));
        registry
    }

    /// Register a dialect. A dialect with the same id replaces the earlier
    /// registration.
    pub fn register(&mut self, dialect: Box<dyn Dialect>) {
        match self
            .dialects
            .iter_mut()
            .find(|existing| existing.id() == dialect.id())
        {
            Some(slot) => *slot = dialect,
            None => self.dialects.push(dialect),
        }
    }

    /// Resolve a dialect id, or fail with the missing-writer error.
    pub fn get(&self, id: &str) -> Result<&dyn Dialect, ApplicationError> {
        self.dialects
            .iter()
            .find(|dialect| dialect.id() == id)
            .map(AsRef::as_ref)
            .ok_or_else(|| ApplicationError::UnknownDialect {
                id: id.to_string(),
                known: self.ids().iter().map(ToString::to_string).collect(),
            })
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.dialects.iter().map(|dialect| dialect.id()).collect()
    }

    pub fn dialects(&self) -> impl Iterator<Item = &dyn Dialect> {
        self.dialects.iter().map(AsRef::as_ref)
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_know_both_gradle_dialects() {
        let registry = DialectRegistry::with_defaults();
        assert!(registry.get("groovy").is_ok());
        assert!(registry.get("kotlin").is_ok());
        assert_eq!(registry.ids(), ["groovy", "kotlin"]);
    }

    #[test]
    fn unknown_dialect_lists_registered_ids() {
        let registry = DialectRegistry::with_defaults();
        let err = registry.get("scala").unwrap_err();
        let ApplicationError::UnknownDialect { id, known } = err else {
            panic!("expected UnknownDialect");
        };
        assert_eq!(id, "scala");
        assert_eq!(known, ["groovy", "kotlin"]);
    }
}
