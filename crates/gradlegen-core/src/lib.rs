//! gradlegen Core - build model and script writers
//!
//! This crate provides the domain and application layers for the gradlegen
//! build-script generation tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          gradlegen-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          GenerationService              │
//! │   (registry → writers → script sink)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   Dialect strategies + ScriptSink port  │
//! │   (GroovyDsl, KotlinDsl / adapters)     │
//! └──────────────────┬──────────────────────┘
//!                    │ reads
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Domain Layer (BuildModel etc.)     │
//! │          Pure data, no I/O              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use gradlegen_core::{
//!     application::BuildScriptWriter,
//!     dialect::KotlinDsl,
//!     domain::{BuildModel, DependencyScope},
//! };
//!
//! let mut model = BuildModel::new();
//! model.settings_mut().group("com.example").version("0.0.1-SNAPSHOT");
//! model.plugins_mut().add("java");
//! model.dependencies_mut().add_scoped(
//!     "web",
//!     "org.springframework.boot",
//!     "spring-boot-starter-web",
//!     DependencyScope::Compile,
//! );
//!
//! let script = BuildScriptWriter::new(&KotlinDsl).write(&model).unwrap();
//! assert!(script.contains("implementation(\"org.springframework.boot:spring-boot-starter-web\")"));
//! ```

// Domain layer (build model, pure data)
pub mod domain;

// Dialect strategies (everything that differs between script dialects)
pub mod dialect;

// Application layer (writers, registry, service)
pub mod application;

// Root error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BuildScriptWriter, DialectRegistry, GeneratedProject, GeneratedScript, GenerationService,
        SettingsScriptWriter, ports::ScriptSink,
    };
    pub use crate::dialect::{Dialect, GroovyDsl, KotlinDsl};
    pub use crate::domain::{
        BuildModel, Dependency, DependencyScope, Plugin, Repository, VersionProperty,
        VersionReference,
    };
    pub use crate::error::{GeneratorError, GeneratorResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
