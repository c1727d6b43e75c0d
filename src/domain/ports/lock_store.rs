//! LockRecordStore port - persistence for lock records
//!
//! The domain builds `LockRecord`s; this trait hides the on-disk encoding.

use std::path::Path;

use crate::domain::entities::LockRecord;
use crate::error::VendorResult;

/// Abstract lock record persistence
pub trait LockRecordStore: Send + Sync {
    /// Render the record in its on-disk encoding
    fn encode(&self, record: &LockRecord) -> VendorResult<Vec<u8>>;

    /// Replace whatever is at `path` with `record`, never leaving a partial file
    fn save(&self, record: &LockRecord, path: &Path) -> VendorResult<()>;
}
