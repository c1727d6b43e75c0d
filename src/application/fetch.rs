//! Archive fetcher - resolve, download, unpack and place one chart
//!
//! Download and unpack happen in a private staging directory inside the
//! destination root. Only the final rename touches the logical directory,
//! so concurrent fetches of the same upstream chart never collide.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::ports::{ArchiveExtractor, ChartRepository};
use crate::domain::value_objects::ContentDigest;
use crate::error::{VendorError, VendorResult};
use crate::infrastructure::fs::remove_any;

const STAGING_PREFIX: &str = ".chart-vendor-";

/// One chart to fetch
#[derive(Debug, Clone)]
pub struct FetchRequest<'a> {
    pub repo_url: &'a str,
    pub name: &'a str,
    pub version: &'a str,
    pub destination_root: &'a Path,
    /// Logical directory name under `destination_root`
    pub directory: &'a str,
}

/// Where a fetched chart ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub path: PathBuf,
    /// Version as listed by the repository index
    pub version: String,
    pub url: String,
    /// Upstream directory name, set only when it differs from the logical one
    pub renamed_from: Option<String>,
}

/// Fetches chart archives into a destination root
pub struct ArchiveFetcher<R: ChartRepository, X: ArchiveExtractor> {
    repository: R,
    extractor: X,
    verify_digest: bool,
}

impl<R: ChartRepository, X: ArchiveExtractor> ArchiveFetcher<R, X> {
    pub fn new(repository: R, extractor: X) -> Self {
        Self {
            repository,
            extractor,
            verify_digest: true,
        }
    }

    /// Check downloads against the digest published in the index
    pub fn verify_digest(mut self, enabled: bool) -> Self {
        self.verify_digest = enabled;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn fetch(&self, request: &FetchRequest<'_>) -> VendorResult<FetchOutcome> {
        let FetchRequest {
            repo_url,
            name,
            version,
            destination_root,
            directory,
        } = *request;

        let archive = self
            .repository
            .resolve(repo_url, name, version)
            .map_err(|e| VendorError::Resolution {
                repo_url: repo_url.to_string(),
                name: name.to_string(),
                version: version.to_string(),
                message: e.to_string(),
            })?;
        debug!(chart = %name, url = %archive.url, "resolved archive");

        fs::create_dir_all(destination_root)
            .map_err(|e| VendorError::io("create charts root", destination_root, e))?;
        let staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(destination_root)
            .map_err(|e| VendorError::io("create staging directory", destination_root, e))?;

        let bytes = self
            .repository
            .download(&archive)
            .map_err(|e| VendorError::Download {
                url: archive.url.clone(),
                message: e.to_string(),
            })?;

        if self.verify_digest {
            if let Some(expected) = archive.digest.as_deref() {
                let actual = ContentDigest::from_bytes(&bytes);
                if !actual.matches_str(expected) {
                    return Err(VendorError::DigestMismatch {
                        url: archive.url.clone(),
                        expected: expected.to_string(),
                        actual: actual.hex().to_string(),
                    });
                }
            }
        }

        let mut file_name = archive.file_name();
        if file_name == name {
            file_name.push_str(".tgz");
        }
        let archive_path = staging.path().join(file_name);
        fs::write(&archive_path, &bytes)
            .map_err(|e| VendorError::io("write archive", &archive_path, e))?;

        self.extractor.extract(&archive_path, staging.path())?;
        fs::remove_file(&archive_path)
            .map_err(|e| VendorError::io("remove archive", &archive_path, e))?;

        let unpacked = staging.path().join(name);
        let target = destination_root.join(directory);
        if !unpacked.is_dir() {
            return Err(VendorError::Rename {
                from: unpacked,
                to: target,
                source: io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("archive has no top-level directory {name}"),
                ),
            });
        }

        remove_any(&target).map_err(|e| VendorError::io("remove previous chart", &target, e))?;
        fs::rename(&unpacked, &target).map_err(|source| VendorError::Rename {
            from: unpacked.clone(),
            to: target.clone(),
            source,
        })?;

        let renamed_from = (directory != name).then(|| name.to_string());
        info!(
            chart = %name,
            version = %archive.version,
            path = %target.display(),
            renamed = renamed_from.is_some(),
            "chart unpacked"
        );

        Ok(FetchOutcome {
            path: target,
            version: archive.version,
            url: archive.url,
            renamed_from,
        })
    }
}
