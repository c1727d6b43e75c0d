//! Error types for chart-vendor
//!
//! Every failure the pipeline can surface is a variant of [`VendorError`].
//! Per-chart failures are wrapped in [`VendorError::Chart`] so an aggregated
//! run error always names the chart and the step that broke.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for chart-vendor operations
pub type VendorResult<T> = Result<T, VendorError>;

/// Main error type for chart-vendor operations
#[derive(Error, Debug)]
pub enum VendorError {
    /// Malformed manifest file
    #[error("invalid manifest {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// Manifest or selection rejected before any fetch
    #[error("validation failed: {0}")]
    Validation(String),

    /// Invalid settings override
    #[error("invalid setting {key}: {message}")]
    Config { key: String, message: String },

    /// No matching chart or version in the repository index
    #[error("cannot resolve {name}@{version} in {repo_url}: {message}")]
    Resolution {
        repo_url: String,
        name: String,
        version: String,
        message: String,
    },

    /// Transport failure while downloading an archive
    #[error("download {url} failed: {message}")]
    Download { url: String, message: String },

    /// Downloaded archive does not match the digest published in the index
    #[error("download {url} failed: digest mismatch (expected {expected}, got {actual})")]
    DigestMismatch {
        url: String,
        expected: String,
        actual: String,
    },

    /// Corrupt or unsupported archive
    #[error("unpack {archive} failed: {message}")]
    Unpack { archive: PathBuf, message: String },

    /// Remapping the unpacked directory to its logical name failed
    #[error("rename {from} -> {to} failed: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem create/write/delete failure
    #[error("{operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Lock record serialization or write failure
    #[error("write lock {path} failed: {message}")]
    Lock { path: PathBuf, message: String },

    /// Chart metadata (Chart.yaml) could not be read
    #[error("read chart metadata {path} failed: {message}")]
    Metadata { path: PathBuf, message: String },

    /// Per-chart failure, tagged with the step and the chart it belongs to
    #[error("{operation} chart {chart}: {source}")]
    Chart {
        chart: String,
        operation: &'static str,
        #[source]
        source: Box<VendorError>,
    },

    /// A fetch task panicked instead of returning
    #[error("worker for chart {chart} panicked")]
    TaskPanicked { chart: String },

    /// One or more charts failed in a multi-chart run
    #[error("{failed} of {total} charts failed, first: {first}", failed = .causes.len(), first = first_cause(.causes))]
    Aggregate {
        total: usize,
        causes: Vec<VendorError>,
    },

    /// Working tree status query failed
    #[error("working tree status for {path}: {message}")]
    WorkingTree { path: PathBuf, message: String },

    /// Working tree is not clean after vendoring
    #[error("uncommitted changes or untracked files found: {}", .paths.join(", "))]
    DriftDetected { paths: Vec<String> },
}

impl VendorError {
    /// Build an I/O error for the given operation and path
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Attach chart identity and operation name to an error
    pub fn for_chart(self, chart: impl Into<String>, operation: &'static str) -> Self {
        Self::Chart {
            chart: chart.into(),
            operation,
            source: Box::new(self),
        }
    }

    /// The representative cause of an aggregate failure
    ///
    /// For non-aggregate errors this is the error itself.
    pub fn first_cause(&self) -> &VendorError {
        match self {
            Self::Aggregate { causes, .. } => causes.first().unwrap_or(self),
            other => other,
        }
    }

    /// The chart an error is attributed to, if any
    pub fn chart(&self) -> Option<&str> {
        match self {
            Self::Chart { chart, .. } | Self::TaskPanicked { chart } => Some(chart),
            Self::Aggregate { causes, .. } => causes.first().and_then(|c| c.chart()),
            _ => None,
        }
    }
}

fn first_cause(causes: &[VendorError]) -> String {
    causes
        .first()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
