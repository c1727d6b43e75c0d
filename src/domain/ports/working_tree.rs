//! WorkingTree port - version-control status of a checkout

use std::path::Path;

use crate::domain::entities::FileChange;
use crate::error::VendorResult;

/// Read-only status query over a working tree
pub trait WorkingTree {
    /// Every path whose state differs from the committed baseline,
    /// untracked files included, ignored files excluded
    fn status(&self, path: &Path) -> VendorResult<Vec<FileChange>>;
}
