//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod archive_extractor;
pub mod chart_metadata;
pub mod chart_repository;
pub mod lock_store;
pub mod vendor_events;
pub mod working_tree;

pub use archive_extractor::ArchiveExtractor;
pub use chart_metadata::ChartMetadataReader;
pub use chart_repository::{ChartArchive, ChartRepository, RepositoryError};
pub use lock_store::LockRecordStore;
pub use vendor_events::{NoopEventSink, VendorEvent, VendorEventSink};
pub use working_tree::WorkingTree;
