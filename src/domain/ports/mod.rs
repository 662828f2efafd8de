//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure and presentation provide concrete implementations.

pub mod model_compiler;
pub mod scaffold_events;

pub use model_compiler::ModelCompiler;
pub use scaffold_events::{NoopEventSink, RecordingEventSink, ScaffoldEvent, ScaffoldEventSink};
