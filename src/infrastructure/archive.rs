//! Gzipped tar extraction for `.tgz` chart archives

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::debug;

use crate::domain::ports::ArchiveExtractor;
use crate::error::{VendorError, VendorResult};

/// Extracts `.tgz` archives with the `tar` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct TarGzExtractor;

impl TarGzExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveExtractor for TarGzExtractor {
    fn extract(&self, archive: &Path, into: &Path) -> VendorResult<()> {
        let unpack_err = |message: String| VendorError::Unpack {
            archive: archive.to_path_buf(),
            message,
        };

        let file = File::open(archive).map_err(|e| VendorError::io("open archive", archive, e))?;
        let mut tar = tar::Archive::new(GzDecoder::new(BufReader::new(file)));
        tar.set_preserve_permissions(false);
        tar.set_overwrite(true);

        let mut count = 0usize;
        for entry in tar.entries().map_err(|e| unpack_err(e.to_string()))? {
            let mut entry = entry.map_err(|e| unpack_err(e.to_string()))?;
            let path = entry
                .path()
                .map_err(|e| unpack_err(e.to_string()))?
                .into_owned();

            // unpack_in refuses absolute paths and `..` components
            let unpacked = entry
                .unpack_in(into)
                .map_err(|e| unpack_err(format!("{}: {e}", path.display())))?;
            if !unpacked {
                return Err(unpack_err(format!(
                    "entry {} escapes the extraction directory",
                    path.display()
                )));
            }
            count += 1;
        }

        if count == 0 {
            return Err(unpack_err("archive is empty".to_string()));
        }

        debug!(archive = %archive.display(), entries = count, "unpacked archive");
        Ok(())
    }
}
