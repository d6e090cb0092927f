//! Script sink backed by the local filesystem.

use std::path::Path;

use tracing::{debug, instrument};

use gradlegen_core::application::{ApplicationError, ports::ScriptSink};

/// Writes scripts to disk, creating parent directories as needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSink;

impl LocalSink {
    pub fn new() -> Self {
        Self
    }
}

impl ScriptSink for LocalSink {
    #[instrument(skip(self, content), fields(path = %path.display()))]
    fn write_script(&self, path: &Path, content: &str) -> Result<(), ApplicationError> {
        let sink_failed = |source: std::io::Error| ApplicationError::SinkFailed {
            path: path.to_path_buf(),
            reason: source.to_string(),
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(sink_failed)?;
        }
        std::fs::write(path, content).map_err(sink_failed)?;
        debug!(bytes = content.len(), "script written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_through_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo").join("build.gradle");
        LocalSink::new()
            .write_script(&path, "group = 'com.example'\n")
            .unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "group = 'com.example'\n"
        );
    }
}
