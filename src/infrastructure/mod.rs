//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repository/` - Helm index client (http(s) and file://)
//! - `archive` - `.tgz` extraction
//! - `metadata` - `Chart.yaml` dependency reader
//! - `lock_store` - `Chart.lock` persistence
//! - `git` - working tree status
//! - `events/` - JSON and console event sinks
//! - `fs/` - atomic writes

pub mod archive;
pub mod events;
pub mod fs;
pub mod git;
pub mod lock_store;
pub mod metadata;
pub mod repository;

// Re-export for convenience
pub use archive::TarGzExtractor;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use git::GitWorkingTree;
pub use lock_store::YamlLockStore;
pub use metadata::ChartYamlReader;
pub use repository::IndexChartRepository;
