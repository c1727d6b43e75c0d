//! Lock writer - stamp a vendored chart with its dependency lock

use std::path::Path;

use tracing::debug;

use crate::domain::entities::{DependencyRecord, LockRecord};
use crate::domain::ports::LockRecordStore;
use crate::error::{VendorError, VendorResult};

/// Writes `Chart.lock` files through a [`LockRecordStore`]
pub struct LockWriter<S: LockRecordStore> {
    store: S,
}

impl<S: LockRecordStore> LockWriter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Build the lock record for `dependencies` and persist it at `path`
    ///
    /// `None` and an empty list produce the same record.
    pub fn write_lock(
        &self,
        path: &Path,
        dependencies: Option<Vec<DependencyRecord>>,
    ) -> VendorResult<LockRecord> {
        let record = LockRecord::new(dependencies).map_err(|e| VendorError::Lock {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        self.store.save(&record, path)?;

        debug!(
            path = %path.display(),
            dependencies = record.dependencies().len(),
            digest = %record.digest(),
            "wrote lock"
        );
        Ok(record)
    }
}
