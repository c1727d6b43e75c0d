//! Output Rendering
//!
//! Final run summary and top-level error reporting. Per-chart progress is
//! rendered by the event sinks in `infrastructure::events`.

use std::io::{self, Write};
use std::path::Path;

use crate::application::VendorReport;
use crate::infrastructure::events::write_event;

use super::terminal::TerminalCapabilities;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// NDJSON for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Everything the summary needs to know about a finished run
#[derive(Debug, Clone, Copy)]
pub struct RunSummary<'a> {
    pub report: &'a VendorReport,
    pub charts_root: &'a Path,
    /// Whether the drift check ran (and passed)
    pub checked: bool,
}

/// Trait for rendering the run summary
pub trait SummaryRenderer {
    fn render(&self, summary: &RunSummary<'_>, out: &mut dyn Write) -> io::Result<()>;
}

/// Text renderer for the run summary
pub struct TextRenderer {
    pub unicode: bool,
}

impl SummaryRenderer for TextRenderer {
    fn render(&self, summary: &RunSummary<'_>, out: &mut dyn Write) -> io::Result<()> {
        let check = if self.unicode { "✓" } else { "[OK]" };
        let count = summary.report.vendored_count();

        if summary.report.is_noop() {
            writeln!(out, "{check} Nothing to vendor")?;
        } else {
            writeln!(
                out,
                "{check} Vendored {count} chart{} into {}",
                if count == 1 { "" } else { "s" },
                summary.charts_root.display()
            )?;
        }
        if !summary.report.unmatched.is_empty() {
            writeln!(
                out,
                "  [!] Not in manifest: {}",
                summary.report.unmatched.join(", ")
            )?;
        }
        if summary.checked {
            writeln!(out, "{check} Working tree clean")?;
        }
        Ok(())
    }
}

/// JSON renderer for the run summary
pub struct JsonRenderer;

impl SummaryRenderer for JsonRenderer {
    fn render(&self, summary: &RunSummary<'_>, out: &mut dyn Write) -> io::Result<()> {
        let charts: Vec<_> = summary
            .report
            .charts
            .iter()
            .map(|c| {
                serde_json::json!({
                    "name": c.name,
                    "version": c.version,
                    "path": c.path.display().to_string(),
                    "digest": c.digest,
                    "dependencies": c.dependency_count,
                    "renamed_from": c.renamed_from,
                })
            })
            .collect();

        let event = serde_json::json!({
            "event": "summary",
            "status": "success",
            "charts_root": summary.charts_root.display().to_string(),
            "charts": charts,
            "unmatched": summary.report.unmatched,
            "checked": summary.checked,
        });
        write_event(out, &event)
    }
}

pub fn create_renderer(format: OutputFormat, unicode: bool) -> Box<dyn SummaryRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { unicode }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    format!("error: {err}")
}

/// Report a fatal error: NDJSON event in `--json` mode, one stderr line otherwise
pub fn print_error(err: &anyhow::Error, json: bool, caps: &TerminalCapabilities) {
    if json {
        let event = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        let _ = write_event(&mut io::stdout().lock(), &event);
        return;
    }

    if caps.github_actions {
        println!("{}", github_actions_annotation(&err.to_string()));
    }
    eprintln!("{}", format_error(err));
}

fn github_actions_annotation(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error title=chart-vendor::{escaped}")
}
