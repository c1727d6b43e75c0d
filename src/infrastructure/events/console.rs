//! Console Event Sink
//!
//! Human-readable progress lines, one per chart outcome.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{VendorEvent, VendorEventSink};

/// Event sink printing progress to stdout
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    unicode: bool,
    verbose: u8,
}

impl ConsoleEventSink {
    pub fn stdout(unicode: bool, verbose: u8) -> Self {
        Self::with_writer(io::stdout(), unicode, verbose)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, unicode: bool, verbose: u8) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            unicode,
            verbose,
        }
    }

    fn icons(&self) -> (&'static str, &'static str, &'static str) {
        if self.unicode {
            ("✓", "✗", "→")
        } else {
            ("[OK]", "[FAIL]", "->")
        }
    }

    fn line(&self, event: &VendorEvent) -> Option<String> {
        let (check, cross, arrow) = self.icons();
        match event {
            VendorEvent::Started {
                charts_root,
                chart_count,
            } => Some(format!(
                "Vendoring {} chart(s) into {}",
                chart_count,
                charts_root.display()
            )),
            VendorEvent::UnmatchedSelection { names } => Some(format!(
                "  No manifest entry for: {}",
                names.join(", ")
            )),
            VendorEvent::ChartStarted {
                name,
                version,
                repo_url,
            } if self.verbose > 0 => Some(format!("  {arrow} {name} {version} from {repo_url}")),
            VendorEvent::ChartStarted { .. } => None,
            VendorEvent::ChartVendored {
                name,
                version,
                path,
                renamed_from,
                ..
            } => {
                let renamed = renamed_from
                    .as_deref()
                    .map(|from| format!(" (from {from})"))
                    .unwrap_or_default();
                Some(format!(
                    "  {check} {name} {version} {arrow} {}{renamed}",
                    path.display()
                ))
            }
            VendorEvent::ChartFailed { name, error } => {
                Some(format!("  {cross} {name}: {error}"))
            }
            VendorEvent::Completed { .. } => None,
            VendorEvent::DriftCheckStarted { path } if self.verbose > 0 => {
                Some(format!("Checking working tree at {}", path.display()))
            }
            VendorEvent::DriftCheckStarted { .. } => None,
            VendorEvent::DriftFound { path, untracked } => {
                let label = if *untracked { "Untracked file" } else { "Changed file" };
                Some(format!("  {cross} {label}: {path}"))
            }
            VendorEvent::DriftCheckCompleted { .. } => None,
        }
    }
}

impl VendorEventSink for ConsoleEventSink {
    fn on_event(&self, event: VendorEvent) {
        if let Some(line) = self.line(&event) {
            if let Ok(mut writer) = self.writer.lock() {
                let _ = writeln!(writer, "{line}");
                let _ = writer.flush();
            }
        }
    }
}
