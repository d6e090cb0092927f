//! Driven (output) ports - implemented by infrastructure.
//!
//! The core renders scripts into memory; getting them onto disk (or into a
//! test fixture) is the responsibility of a [`ScriptSink`] implementation in
//! `gradlegen-adapters`.

use std::path::Path;

use crate::application::ApplicationError;

#[cfg(test)]
use mockall::automock;

/// Port for persisting a rendered script.
///
/// Implemented by:
/// - `gradlegen_adapters::sink::LocalSink` (production)
/// - `gradlegen_adapters::sink::MemorySink` (testing)
#[cfg_attr(test, automock)]
pub trait ScriptSink: Send + Sync {
    /// Write `content` to `path`, creating parent directories as needed.
    fn write_script(&self, path: &Path, content: &str) -> Result<(), ApplicationError>;
}
