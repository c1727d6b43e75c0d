//! YAML Lock Record Store
//!
//! Implements the LockRecordStore port with the byte layout Helm writes:
//!
//! ```yaml
//! dependencies:
//! - condition: redis.enabled
//!   name: redis
//!   repository: https://charts.bitnami.com/bitnami
//!   version: 17.0.0
//! digest: sha256:...
//! generated: "0001-01-01T00:00:00Z"
//! ```
//!
//! Keys are sorted at every level and `generated` is always quoted.

use std::path::Path;

use serde::Serialize;

use crate::domain::entities::{DependencyRecord, LockRecord};
use crate::domain::ports::LockRecordStore;
use crate::error::{VendorError, VendorResult};
use crate::infrastructure::fs::atomic_write;

fn is_false(b: &bool) -> bool {
    !*b
}

fn is_empty_slice<T>(s: &&[T]) -> bool {
    s.is_empty()
}

/// Lock file body without `generated`, which is appended pre-quoted
#[derive(Debug, Serialize)]
struct YamlLock<'a> {
    dependencies: Vec<YamlDependency<'a>>,
    digest: &'a str,
}

/// One dependency with its keys in sorted order
#[derive(Debug, Serialize)]
struct YamlDependency<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    alias: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    condition: &'a str,
    #[serde(skip_serializing_if = "is_false")]
    enabled: bool,
    #[serde(rename = "import-values", skip_serializing_if = "is_empty_slice")]
    import_values: &'a [serde_json::Value],
    name: &'a str,
    repository: &'a str,
    #[serde(skip_serializing_if = "is_empty_slice")]
    tags: &'a [String],
    #[serde(skip_serializing_if = "str::is_empty")]
    version: &'a str,
}

impl<'a> From<&'a DependencyRecord> for YamlDependency<'a> {
    fn from(dep: &'a DependencyRecord) -> Self {
        Self {
            alias: &dep.alias,
            condition: &dep.condition,
            enabled: dep.enabled,
            import_values: &dep.import_values,
            name: &dep.name,
            repository: &dep.repo_url,
            tags: &dep.tags,
            version: &dep.version,
        }
    }
}

/// YAML-based lock record store
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlLockStore;

impl YamlLockStore {
    pub fn new() -> Self {
        Self
    }
}

impl LockRecordStore for YamlLockStore {
    fn encode(&self, record: &LockRecord) -> VendorResult<Vec<u8>> {
        let lock = YamlLock {
            dependencies: record.dependencies().iter().map(YamlDependency::from).collect(),
            digest: record.digest().as_str(),
        };
        let mut text = serde_yaml_ng::to_string(&lock).map_err(|e| VendorError::Lock {
            path: Default::default(),
            message: e.to_string(),
        })?;
        text.push_str(&format!("generated: \"{}\"\n", record.generated_rfc3339()));
        Ok(text.into_bytes())
    }

    fn save(&self, record: &LockRecord, path: &Path) -> VendorResult<()> {
        let content = self.encode(record).map_err(|e| match e {
            VendorError::Lock { message, .. } => VendorError::Lock {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;

        atomic_write(path, &content).map_err(|e| VendorError::Lock {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
