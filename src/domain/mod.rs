//! Domain Layer
//!
//! Pure vendoring logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Manifest, LockRecord, FileChange
//! - `value_objects/` - ChartDir, ContentDigest, FileState
//! - `ports/` - Interface definitions for infrastructure
//!
//! All network, archive, filesystem and git access goes through `ports`.

pub mod entities;
pub mod ports;
pub mod value_objects;
