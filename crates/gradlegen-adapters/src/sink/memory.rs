//! In-memory script sink for tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use gradlegen_core::application::{ApplicationError, ports::ScriptSink};

/// Collects scripts in memory instead of touching the filesystem.
#[derive(Debug, Default)]
pub struct MemorySink {
    scripts: Mutex<BTreeMap<PathBuf, String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The content written to `path`, if any.
    pub fn content(&self, path: &Path) -> Option<String> {
        self.scripts
            .lock()
            .ok()
            .and_then(|scripts| scripts.get(path).cloned())
    }

    pub fn len(&self) -> usize {
        self.scripts.lock().map(|scripts| scripts.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ScriptSink for MemorySink {
    fn write_script(&self, path: &Path, content: &str) -> Result<(), ApplicationError> {
        let mut scripts = self
            .scripts
            .lock()
            .map_err(|_| ApplicationError::SinkFailed {
                path: path.to_path_buf(),
                reason: "sink lock poisoned".into(),
            })?;
        scripts.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_returns_content() {
        let sink = MemorySink::new();
        sink.write_script(Path::new("demo/build.gradle"), "plugins {\n}\n")
            .unwrap();
        assert_eq!(sink.len(), 1);
        assert_eq!(
            sink.content(Path::new("demo/build.gradle")).as_deref(),
            Some("plugins {\n}\n")
        );
        assert_eq!(sink.content(Path::new("missing")), None);
    }
}
