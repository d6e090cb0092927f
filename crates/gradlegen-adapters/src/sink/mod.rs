//! [`ScriptSink`](gradlegen_core::application::ports::ScriptSink)
//! implementations.

mod local;
mod memory;

pub use local::LocalSink;
pub use memory::MemorySink;
