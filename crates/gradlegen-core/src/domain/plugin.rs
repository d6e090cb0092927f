//! Applied build plugins.

/// One plugin in the `plugins` block. The id is an opaque string; ids under
/// reserved namespaces may get dialect-specific shorthand at write time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugin {
    pub(crate) id: String,
    pub(crate) version: Option<String>,
}

impl Plugin {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: None,
        }
    }

    pub fn with_version(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: Some(version.into()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

/// Plugins applied through the `plugins` block, plus the legacy `apply`
/// mechanism, which some dialects refuse to express.
#[derive(Debug, Clone, Default)]
pub struct PluginContainer {
    plugins: Vec<Plugin>,
    applied: Vec<String>,
}

impl PluginContainer {
    pub fn add(&mut self, id: impl Into<String>) {
        self.upsert(Plugin::new(id));
    }

    pub fn add_with_version(&mut self, id: impl Into<String>, version: impl Into<String>) {
        self.upsert(Plugin::with_version(id, version));
    }

    /// Apply a plugin via the legacy `apply plugin:` mechanism.
    pub fn apply(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.applied.contains(&id) {
            self.applied.push(id);
        }
    }

    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    pub fn applied(&self) -> &[String] {
        &self.applied
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty() && self.applied.is_empty()
    }

    fn upsert(&mut self, plugin: Plugin) {
        match self.plugins.iter_mut().find(|p| p.id == plugin.id) {
            Some(slot) => *slot = plugin,
            None => self.plugins.push(plugin),
        }
    }
}
