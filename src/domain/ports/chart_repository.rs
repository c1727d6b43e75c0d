//! ChartRepository port - resolve and download chart archives
//!
//! Implemented by `infrastructure::repository::IndexChartRepository` for
//! Helm-style repositories that publish an `index.yaml`.

use std::fmt;

/// A concrete, downloadable chart archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartArchive {
    pub name: String,
    pub version: String,
    /// Absolute archive URL
    pub url: String,
    /// `sha256` hex published by the index, if any
    pub digest: Option<String>,
}

impl ChartArchive {
    /// File name for the archive on disk (last URL path segment)
    pub fn file_name(&self) -> String {
        self.url
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .map(|s| s.split(['?', '#']).next().unwrap_or(s).to_string())
            .unwrap_or_else(|| format!("{}-{}.tgz", self.name, self.version))
    }
}

/// Repository operation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Chart is not listed in the index
    ChartNotFound { name: String },
    /// Chart is listed, but not at this version
    VersionNotFound { name: String, version: String },
    /// Version is neither listed verbatim nor a valid constraint
    InvalidConstraint { version: String, message: String },
    /// Repository URL scheme is not supported
    UnsupportedScheme { url: String },
    /// Index could not be parsed
    InvalidIndex(String),
    /// Network or filesystem transport failure
    Transport { url: String, message: String },
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::ChartNotFound { name } => {
                write!(f, "chart {name} not found in repository index")
            }
            RepositoryError::VersionNotFound { name, version } => {
                write!(f, "chart {name} has no version {version}")
            }
            RepositoryError::InvalidConstraint { version, message } => {
                write!(f, "invalid version constraint {version}: {message}")
            }
            RepositoryError::UnsupportedScheme { url } => {
                write!(f, "unsupported repository url {url}")
            }
            RepositoryError::InvalidIndex(msg) => write!(f, "invalid repository index: {msg}"),
            RepositoryError::Transport { url, message } => write!(f, "{url}: {message}"),
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Abstract chart repository
pub trait ChartRepository: Send + Sync {
    /// Find the archive for `name` at `version` (empty = newest stable) in `repo_url`
    fn resolve(
        &self,
        repo_url: &str,
        name: &str,
        version: &str,
    ) -> Result<ChartArchive, RepositoryError>;

    /// Download the archive bytes
    fn download(&self, archive: &ChartArchive) -> Result<Vec<u8>, RepositoryError>;
}
