//! Manifest entity - the declared list of charts to vendor
//!
//! Pure data: parsing lives in `config::manifest`, I/O in the application layer.

use std::collections::HashMap;
use std::fmt;

use crate::domain::value_objects::{ChartDir, ChartDirError};

/// One declared chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    name: String,
    version: String,
    repo_url: String,
    /// Logical directory name, `None` means "same as `name`"
    directory: Option<String>,
}

impl ManifestEntry {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        repo_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            repo_url: repo_url.into(),
            directory: None,
        }
    }

    pub fn with_directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn repo_url(&self) -> &str {
        &self.repo_url
    }

    /// Directory the chart is vendored under
    pub fn directory(&self) -> &str {
        self.directory.as_deref().unwrap_or(&self.name)
    }
}

/// A problem found while validating a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestError {
    /// Required field is empty
    EmptyField { index: usize, field: &'static str },
    /// Logical directory name is not a single path component
    InvalidDirectory {
        chart: String,
        directory: String,
        reason: ChartDirError,
    },
    /// Two entries would be written to the same directory
    DuplicateDirectory {
        directory: String,
        first: String,
        second: String,
    },
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::EmptyField { index, field } => {
                write!(f, "chart #{} has an empty '{}'", index + 1, field)
            }
            ManifestError::InvalidDirectory {
                chart,
                directory,
                reason,
            } => write!(f, "chart {chart}: invalid directory '{directory}': {reason}"),
            ManifestError::DuplicateDirectory {
                directory,
                first,
                second,
            } => write!(
                f,
                "charts {first} and {second} both vendor into directory '{directory}'"
            ),
        }
    }
}

impl std::error::Error for ManifestError {}

/// Ordered list of declared charts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

/// Entries picked by a name selection, plus the names that matched nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    pub entries: Vec<&'a ManifestEntry>,
    pub unmatched: Vec<String>,
}

impl Manifest {
    pub fn new(entries: Vec<ManifestEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check every entry; returns all problems, not just the first
    ///
    /// An empty version is allowed and resolves to the newest stable release.
    ///
    /// Directory collisions are checked on the logical name, so two entries
    /// may share an upstream chart as long as they vendor into different
    /// directories.
    pub fn validate(&self) -> Result<(), Vec<ManifestError>> {
        let mut problems = Vec::new();
        let mut seen: HashMap<&str, &str> = HashMap::new();

        for (index, entry) in self.entries.iter().enumerate() {
            for (field, value) in [("name", entry.name()), ("repoURL", entry.repo_url())] {
                if value.trim().is_empty() {
                    problems.push(ManifestError::EmptyField { index, field });
                }
            }

            if entry.name().trim().is_empty() {
                continue;
            }

            if let Err(reason) = ChartDir::new(entry.directory()) {
                problems.push(ManifestError::InvalidDirectory {
                    chart: entry.name().to_string(),
                    directory: entry.directory().to_string(),
                    reason,
                });
                continue;
            }

            if let Some(first) = seen.insert(entry.directory(), entry.name()) {
                problems.push(ManifestError::DuplicateDirectory {
                    directory: entry.directory().to_string(),
                    first: first.to_string(),
                    second: entry.name().to_string(),
                });
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }

    /// Pick the entries named in `selection`; an empty selection picks all
    ///
    /// Matching is on the chart name. Names that match no entry are returned
    /// in `unmatched` in the order given, without duplicates.
    pub fn select<S: AsRef<str>>(&self, selection: &[S]) -> Selection<'_> {
        if selection.is_empty() {
            return Selection {
                entries: self.entries.iter().collect(),
                unmatched: Vec::new(),
            };
        }

        let entries = self
            .entries
            .iter()
            .filter(|e| selection.iter().any(|s| s.as_ref() == e.name()))
            .collect();

        let mut unmatched: Vec<String> = Vec::new();
        for name in selection.iter().map(AsRef::as_ref) {
            if !self.entries.iter().any(|e| e.name() == name)
                && !unmatched.iter().any(|u| u == name)
            {
                unmatched.push(name.to_string());
            }
        }

        Selection { entries, unmatched }
    }
}
