//! Helm repository index (`index.yaml`) model and version lookup

use std::collections::BTreeMap;

use reqwest::Url;
use serde::Deserialize;

use crate::domain::ports::{ChartArchive, RepositoryError};

use super::constraint::{parse_version, VersionConstraint};

/// Index file name below every repository URL
pub const INDEX_FILE: &str = "index.yaml";

/// Parsed `index.yaml`; fields the vendor does not use are ignored
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexFile {
    #[serde(default)]
    pub entries: BTreeMap<String, Vec<IndexEntry>>,
}

/// One published chart version
#[derive(Debug, Clone, Deserialize)]
pub struct IndexEntry {
    #[serde(default)]
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub digest: Option<String>,
}

impl IndexFile {
    pub fn parse(bytes: &[u8]) -> Result<Self, RepositoryError> {
        serde_yaml_ng::from_slice(bytes).map_err(|e| RepositoryError::InvalidIndex(e.to_string()))
    }

    /// Find `name` matching the `version` constraint
    ///
    /// A version string listed verbatim wins. Otherwise the newest entry
    /// satisfying the constraint is returned; an empty version means `*`,
    /// the newest stable release. Unparseable index versions only match
    /// verbatim.
    pub fn find(&self, name: &str, version: &str) -> Result<&IndexEntry, RepositoryError> {
        let versions = self
            .entries
            .get(name)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| RepositoryError::ChartNotFound {
                name: name.to_string(),
            })?;

        if !version.is_empty() {
            if let Some(exact) = versions.iter().find(|e| e.version == version) {
                return Ok(exact);
            }
        }

        let constraint = if version.is_empty() {
            VersionConstraint::any()
        } else {
            VersionConstraint::parse(version).map_err(|e| RepositoryError::InvalidConstraint {
                version: version.to_string(),
                message: e.to_string(),
            })?
        };

        let mut candidates: Vec<_> = versions
            .iter()
            .filter_map(|e| parse_version(&e.version).map(|parsed| (parsed, e)))
            .collect();
        candidates.sort_by(|a, b| b.0.cmp(&a.0));

        candidates
            .into_iter()
            .find(|(parsed, _)| constraint.matches(parsed))
            .map(|(_, entry)| entry)
            .ok_or_else(|| RepositoryError::VersionNotFound {
                name: name.to_string(),
                version: version.to_string(),
            })
    }

    /// Resolve `name@version` to an absolute archive URL
    pub fn resolve(
        &self,
        repo_url: &str,
        name: &str,
        version: &str,
    ) -> Result<ChartArchive, RepositoryError> {
        let entry = self.find(name, version)?;
        let reference = entry.urls.first().ok_or_else(|| {
            RepositoryError::InvalidIndex(format!(
                "chart {name} {} has no download urls",
                entry.version
            ))
        })?;

        Ok(ChartArchive {
            name: name.to_string(),
            version: entry.version.clone(),
            url: resolve_reference(repo_url, reference)?,
            digest: entry.digest.clone().filter(|d| !d.is_empty()),
        })
    }
}

/// URL of the index for a repository
pub fn index_url(repo_url: &str) -> String {
    format!("{}/{}", repo_url.trim_end_matches('/'), INDEX_FILE)
}

/// Resolve an archive reference from the index against the repository URL
///
/// Absolute references are returned as-is; relative ones are joined onto
/// the repository URL treated as a directory.
pub fn resolve_reference(repo_url: &str, reference: &str) -> Result<String, RepositoryError> {
    if let Ok(absolute) = Url::parse(reference) {
        return Ok(absolute.to_string());
    }

    let base = format!("{}/", repo_url.trim_end_matches('/'));
    let base = Url::parse(&base).map_err(|_| RepositoryError::UnsupportedScheme {
        url: repo_url.to_string(),
    })?;
    base.join(reference)
        .map(|u| u.to_string())
        .map_err(|e| RepositoryError::InvalidIndex(format!("bad url '{reference}': {e}")))
}
