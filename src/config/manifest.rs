//! Manifest file parsing (`.charts.yml`)
//!
//! ```yaml
//! charts:
//!   - name: nginx
//!     version: 1.2.3
//!     repoURL: https://charts.example.com
//!     directory: nginx-public   # optional, defaults to name
//! ```
//!
//! Unknown keys do not fail the parse; they are returned as warnings.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::{Manifest, ManifestEntry};
use crate::error::{VendorError, VendorResult};

/// Default manifest location
pub const DEFAULT_MANIFEST_FILE: &str = ".charts.yml";

/// Non-fatal manifest warning (unknown key)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestWarning {
    /// Dotted path of the ignored key, e.g. `charts.0.repo`
    pub key: String,
    pub file: PathBuf,
}

/// Parse result with collected warnings
#[derive(Debug, Clone)]
pub struct ParsedManifest {
    pub manifest: Manifest,
    pub warnings: Vec<ManifestWarning>,
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    charts: Vec<RawChart>,
}

#[derive(Debug, Deserialize)]
struct RawChart {
    name: String,
    #[serde(default)]
    version: String,
    #[serde(rename = "repoURL")]
    repo_url: String,
    #[serde(default)]
    directory: Option<String>,
}

/// Read and parse the manifest at `path`
pub fn load_manifest(path: &Path) -> VendorResult<ParsedManifest> {
    let bytes = fs::read(path).map_err(|e| VendorError::io("read manifest", path, e))?;
    parse_manifest(&bytes, path)
}

/// Parse manifest bytes; `file` is only used for messages
pub fn parse_manifest(bytes: &[u8], file: &Path) -> VendorResult<ParsedManifest> {
    let mut ignored: Vec<String> = Vec::new();
    let deserializer = serde_yaml_ng::Deserializer::from_slice(bytes);

    let raw: RawManifest = serde_ignored::deserialize(deserializer, |p| {
        ignored.push(p.to_string());
    })
    .map_err(|e| VendorError::Parse {
        file: file.to_path_buf(),
        message: e.to_string(),
    })?;

    let entries = raw
        .charts
        .into_iter()
        .map(|c| {
            let entry = ManifestEntry::new(c.name, c.version, c.repo_url);
            match c.directory.filter(|d| !d.is_empty()) {
                Some(dir) => entry.with_directory(dir),
                None => entry,
            }
        })
        .collect();

    let warnings = ignored
        .into_iter()
        .map(|key| ManifestWarning {
            key,
            file: file.to_path_buf(),
        })
        .collect();

    Ok(ParsedManifest {
        manifest: Manifest::new(entries),
        warnings,
    })
}
