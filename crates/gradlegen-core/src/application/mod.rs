//! Application layer: writers, dialect registry, and the generation service.
//!
//! This is where models become text. The writers hold the one orchestration
//! algorithm shared by every dialect; the registry resolves dialect ids; the
//! service ties both together and talks to output ports.

pub mod error;
pub mod indent;
pub mod ports;
pub mod registry;
pub mod service;
pub mod settings_writer;
pub mod writer;

pub use error::ApplicationError;
pub use indent::IndentingWriter;
pub use registry::DialectRegistry;
pub use service::{GeneratedProject, GeneratedScript, GenerationService};
pub use settings_writer::SettingsScriptWriter;
pub use writer::BuildScriptWriter;
