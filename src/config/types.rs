//! Configuration type definitions

use std::time::Duration;

/// Default lock file written into every vendored chart
pub const DEFAULT_LOCK_FILE: &str = "Chart.lock";

/// HTTP transport configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    /// Whole-request timeout (index and archive downloads)
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(120),
            user_agent: format!("chart-vendor/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Runtime settings for a vendor run
///
/// Passed explicitly to the repository client and the fetcher; there is no
/// process-wide settings state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub http: HttpSettings,
    /// Check downloaded archives against the digest published in the index
    pub verify_digest: bool,
    pub lock_file_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            http: HttpSettings::default(),
            verify_digest: true,
            lock_file_name: DEFAULT_LOCK_FILE.to_string(),
        }
    }
}
