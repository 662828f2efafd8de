//! Scaffold Event Port
//!
//! The scaffolder never prints. Everything a user might want to see is
//! reported as a `ScaffoldEvent` and rendered by the caller.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Event emitted by scaffolding operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    /// The models root directory was created
    RootCreated { path: PathBuf },

    /// A new project was seeded from the template
    ProjectCreated {
        name: String,
        project_dir: PathBuf,
        model_file: PathBuf,
    },

    /// The model file already existed and was left untouched
    ProjectExists { name: String, model_file: PathBuf },

    /// A previous `__compile__` bundle was discarded
    BundleReset { path: PathBuf },

    /// A single entry was moved into the bundle
    ArtifactMoved { from: PathBuf, to: PathBuf },

    /// Packaging finished
    ArtifactsPackaged {
        project_dir: PathBuf,
        bundle_dir: PathBuf,
        moved_count: usize,
    },

    /// External compiler invoked
    CompileStarted { model_file: PathBuf },

    /// External compiler returned successfully
    CompileFinished { model_file: PathBuf },

    /// The bundled template was written to disk
    TemplateInstalled { path: PathBuf },
}

impl ScaffoldEvent {
    /// Per-file events that quiet sinks may skip
    pub fn is_detail(&self) -> bool {
        matches!(
            self,
            ScaffoldEvent::ArtifactMoved { .. } | ScaffoldEvent::BundleReset { .. }
        )
    }
}

/// Trait for receiving scaffold events
///
/// Implementations:
/// - `TextEventSink` / `JsonEventSink` in the CLI
/// - `NoopEventSink`: silent operation
/// - `RecordingEventSink`: collects events for inspection
pub trait ScaffoldEventSink {
    fn on_event(&self, event: ScaffoldEvent);

    /// Whether this sink wants per-file events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ScaffoldEventSink for NoopEventSink {
    fn on_event(&self, _event: ScaffoldEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

/// Event sink that records every event it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingEventSink {
    events: Arc<Mutex<Vec<ScaffoldEvent>>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far
    pub fn events(&self) -> Vec<ScaffoldEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ScaffoldEventSink for RecordingEventSink {
    fn on_event(&self, event: ScaffoldEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingEventSink::new();

        sink.on_event(ScaffoldEvent::RootCreated {
            path: PathBuf::from("models"),
        });
        sink.on_event(ScaffoldEvent::ProjectExists {
            name: "demo".to_string(),
            model_file: PathBuf::from("models/demo/demo.stan"),
        });

        let recorded = sink.events();
        assert_eq!(recorded.len(), 2);
        assert!(matches!(recorded[0], ScaffoldEvent::RootCreated { .. }));
    }

    #[test]
    fn noop_sink_wants_no_details() {
        let sink = NoopEventSink;
        assert!(!sink.wants_detailed_events());
    }

    #[test]
    fn moved_files_are_detail_events() {
        let moved = ScaffoldEvent::ArtifactMoved {
            from: PathBuf::from("a"),
            to: PathBuf::from("b"),
        };
        let done = ScaffoldEvent::ArtifactsPackaged {
            project_dir: PathBuf::from("p"),
            bundle_dir: PathBuf::from("p/__compile__"),
            moved_count: 1,
        };
        assert!(moved.is_detail());
        assert!(!done.is_detail());
    }
}
