//! chart-vendor - vendor Helm charts into a repository
//!
//! Reads a manifest of charts (`.charts.yml`), downloads each one from its
//! Helm repository, unpacks it under a charts root and writes a reproducible
//! `Chart.lock` next to it. An optional drift check then confirms the result
//! is committed.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    ArchiveFetcher, DriftChecker, DriftStatus, LockWriter, VendorOptions, VendorReport,
    VendorUseCase,
};
pub use config::{load_manifest, load_settings, Settings};
pub use domain::entities::{DependencyRecord, LockRecord, Manifest, ManifestEntry};
pub use error::{VendorError, VendorResult};
