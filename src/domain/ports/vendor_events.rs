//! Vendor Event Port
//!
//! Observable progress of a vendor run. Events arrive from worker threads,
//! so sinks must be `Send + Sync` and tolerate interleaving between charts.

use std::path::PathBuf;

/// Event emitted during a vendor run
#[derive(Debug, Clone)]
pub enum VendorEvent {
    /// Run started
    Started {
        charts_root: PathBuf,
        chart_count: usize,
    },

    /// Selected names that match no manifest entry
    UnmatchedSelection { names: Vec<String> },

    /// A chart's fetch task started
    ChartStarted {
        name: String,
        version: String,
        repo_url: String,
    },

    /// A chart was vendored and locked
    ChartVendored {
        name: String,
        version: String,
        path: PathBuf,
        digest: String,
        renamed_from: Option<String>,
    },

    /// A chart failed
    ChartFailed { name: String, error: String },

    /// All tasks joined
    Completed {
        vendored_count: usize,
        failed_count: usize,
    },

    /// Drift check started
    DriftCheckStarted { path: PathBuf },

    /// One offending path found by the drift check
    DriftFound { path: String, untracked: bool },

    /// Drift check finished
    DriftCheckCompleted { clean: bool, offending_count: usize },
}

/// Trait for receiving vendor events
pub trait VendorEventSink: Send + Sync {
    fn on_event(&self, event: VendorEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl VendorEventSink for NoopEventSink {
    fn on_event(&self, _event: VendorEvent) {}
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Test event sink that records all events
    #[derive(Clone, Default)]
    pub struct RecordingEventSink {
        pub events: Arc<Mutex<Vec<VendorEvent>>>,
    }

    impl RecordingEventSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn recorded(&self) -> Vec<VendorEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl VendorEventSink for RecordingEventSink {
        fn on_event(&self, event: VendorEvent) {
            self.events.lock().unwrap().push(event);
        }
    }
}
