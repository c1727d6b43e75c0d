//! Domain Entities
//!
//! - `Manifest` - the declared charts
//! - `LockRecord` - digest-stamped dependency snapshot per chart
//! - `FileChange` - one working tree status entry

mod file_change;
mod lock_record;
mod manifest;

pub use file_change::FileChange;
pub use lock_record::{DependencyRecord, LockRecord};
pub use manifest::{Manifest, ManifestEntry, ManifestError, Selection};
