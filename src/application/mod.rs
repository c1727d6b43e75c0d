//! Application Layer
//!
//! Use cases that orchestrate the vendoring flow.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Does NOT contain I/O details (those are in Infrastructure)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `VendorUseCase` - Validate, select, then fetch and lock every chart concurrently
//! - `ArchiveFetcher` - Resolve, download, unpack and place a single chart
//! - `LockWriter` - Write a chart's `Chart.lock`
//! - `DriftChecker` - Verify the working tree is committed after vendoring

pub mod drift;
pub mod fetch;
pub mod lock;
pub mod vendor;

#[cfg(test)]
pub(crate) mod test_support;

pub use drift::{DriftChecker, DriftStatus, DriftedFile};
pub use fetch::{ArchiveFetcher, FetchOutcome, FetchRequest};
pub use lock::LockWriter;
pub use vendor::{VendorOptions, VendorReport, VendorUseCase, VendoredChart};
