//! Core domain layer for gradlegen.
//!
//! Pure data describing one project's build configuration, with ZERO
//! external dependencies beyond `thiserror`. No I/O, no async, no
//! rendering — serialization to script text is the application layer's job.
//!
//! Entities are value-like and owned by a single [`BuildModel`]; there are
//! no cyclic references, so plain ownership suffices.

pub mod bom;
pub mod configuration;
pub mod dependency;
pub mod error;
pub mod model;
pub mod plugin;
pub mod property;
pub mod repository;
pub mod statement;
pub mod task;
pub mod version;

// Re-exports for convenience
pub use bom::{Bom, BomContainer};
pub use configuration::{ConfigurationContainer, ConfigurationCustomization};
pub use dependency::{Dependency, DependencyContainer, DependencyScope, Exclusion};
pub use error::{ConstructKind, DomainError, ErrorCategory};
pub use model::{BuildModel, BuildSettings, Buildscript};
pub use plugin::{Plugin, PluginContainer};
pub use property::PropertyContainer;
pub use repository::{Repository, RepositoryContainer};
pub use statement::{Statement, StatementBlock};
pub use task::{TaskContainer, TaskCustomization, TaskTypeCustomization};
pub use version::{VersionProperty, VersionReference};
