//! ArchiveExtractor port - unpack a downloaded chart archive

use std::path::Path;

use crate::error::VendorResult;

/// Unpacks an archive file into a directory
pub trait ArchiveExtractor: Send + Sync {
    /// Extract `archive` below `into`; entries must not escape `into`
    fn extract(&self, archive: &Path, into: &Path) -> VendorResult<()>;
}
