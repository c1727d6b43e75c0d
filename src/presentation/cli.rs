//! CLI Argument Parsing
//!
//! Flags override `CHART_VENDOR_*` environment settings, which override the
//! built-in defaults.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{parse_timeout, Settings, DEFAULT_MANIFEST_FILE};
use crate::error::VendorResult;

/// chart-vendor - vendor Helm charts listed in a manifest into the repository
#[derive(Parser, Debug)]
#[command(name = "chart-vendor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Manifest listing the charts to vendor
    #[arg(long, value_name = "PATH", default_value = DEFAULT_MANIFEST_FILE)]
    pub config_file: PathBuf,

    /// Directory charts are vendored into
    #[arg(long, value_name = "PATH", default_value = "charts")]
    pub charts_root: PathBuf,

    /// Fail if the working tree has uncommitted or untracked files afterwards
    #[arg(long)]
    pub check: bool,

    /// Fail when a named chart is not in the manifest
    #[arg(long)]
    pub strict_selection: bool,

    /// Skip checking archives against the repository index digest
    #[arg(long)]
    pub no_verify_digest: bool,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<String>,

    /// Output NDJSON events for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only vendor these charts (default: all)
    #[arg(value_name = "CHART")]
    pub charts: Vec<String>,
}

impl Cli {
    /// Layer flag values on top of `settings`
    pub fn apply(&self, mut settings: Settings) -> VendorResult<Settings> {
        if let Some(raw) = &self.timeout {
            settings.http.timeout = parse_timeout("--timeout", raw)?;
        }
        if self.no_verify_digest {
            settings.verify_digest = false;
        }
        Ok(settings)
    }
}
