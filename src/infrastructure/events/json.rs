//! JSON Event Sink
//!
//! Outputs vendor events as NDJSON for CI/automation consumption.

use crate::domain::ports::{VendorEvent, VendorEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Serializes writes from concurrent chart workers
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn emit(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = write_event(&mut *writer, &event);
            let _ = writer.flush();
        }
    }
}

/// Write a single NDJSON event (one JSON object per line)
pub fn write_event(out: &mut dyn Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")
}

/// JSON payload for an event
pub fn event_json(event: &VendorEvent) -> serde_json::Value {
    match event {
        VendorEvent::Started {
            charts_root,
            chart_count,
        } => serde_json::json!({
            "event": "start",
            "command": "vendor",
            "charts_root": charts_root.display().to_string(),
            "chart_count": chart_count,
        }),

        VendorEvent::UnmatchedSelection { names } => serde_json::json!({
            "event": "unmatched_selection",
            "command": "vendor",
            "names": names,
        }),

        VendorEvent::ChartStarted {
            name,
            version,
            repo_url,
        } => serde_json::json!({
            "event": "chart_start",
            "command": "vendor",
            "chart": name,
            "version": version,
            "repo_url": repo_url,
        }),

        VendorEvent::ChartVendored {
            name,
            version,
            path,
            digest,
            renamed_from,
        } => serde_json::json!({
            "event": "chart_vendored",
            "command": "vendor",
            "chart": name,
            "version": version,
            "path": path.display().to_string(),
            "digest": digest,
            "renamed_from": renamed_from,
        }),

        VendorEvent::ChartFailed { name, error } => serde_json::json!({
            "event": "chart_failed",
            "command": "vendor",
            "chart": name,
            "error": error,
        }),

        VendorEvent::Completed {
            vendored_count,
            failed_count,
        } => {
            let status = if *failed_count == 0 { "success" } else { "failure" };
            serde_json::json!({
                "event": "complete",
                "command": "vendor",
                "status": status,
                "vendored": vendored_count,
                "failed": failed_count,
            })
        }

        VendorEvent::DriftCheckStarted { path } => serde_json::json!({
            "event": "start",
            "command": "check",
            "path": path.display().to_string(),
        }),

        VendorEvent::DriftFound { path, untracked } => serde_json::json!({
            "event": "drift",
            "command": "check",
            "path": path,
            "kind": if *untracked { "untracked" } else { "changed" },
        }),

        VendorEvent::DriftCheckCompleted {
            clean,
            offending_count,
        } => serde_json::json!({
            "event": "complete",
            "command": "check",
            "status": if *clean { "clean" } else { "dirty" },
            "offending": offending_count,
        }),
    }
}

impl VendorEventSink for JsonEventSink {
    fn on_event(&self, event: VendorEvent) {
        self.emit(event_json(&event));
    }
}
