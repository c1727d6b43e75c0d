//! Chart.yaml metadata reader

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::domain::entities::DependencyRecord;
use crate::domain::ports::ChartMetadataReader;
use crate::error::{VendorError, VendorResult};

/// Chart metadata file at the root of every chart
pub const CHART_FILE: &str = "Chart.yaml";

/// The part of `Chart.yaml` the vendor needs
#[derive(Debug, Deserialize)]
struct ChartYaml {
    #[serde(default)]
    dependencies: Option<Vec<DependencyRecord>>,
}

/// Reads dependencies from `Chart.yaml`
///
/// A chart without a `Chart.yaml` is treated as declaring no dependencies.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartYamlReader;

impl ChartYamlReader {
    pub fn new() -> Self {
        Self
    }
}

impl ChartMetadataReader for ChartYamlReader {
    fn dependencies(&self, chart_dir: &Path) -> VendorResult<Option<Vec<DependencyRecord>>> {
        let path = chart_dir.join(CHART_FILE);
        let content = match fs::read(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(VendorError::io("read chart metadata", &path, e)),
        };

        let chart: ChartYaml =
            serde_yaml_ng::from_slice(&content).map_err(|e| VendorError::Metadata {
                path: path.clone(),
                message: e.to_string(),
            })?;
        Ok(chart.dependencies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_declared_dependencies() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CHART_FILE),
            r#"apiVersion: v2
name: app
version: 0.1.0
dependencies:
  - name: redis
    version: 17.0.0
    repository: https://charts.bitnami.com/bitnami
    condition: redis.enabled
  - name: common
    version: 2.x.x
    repository: oci://registry-1.docker.io/bitnamicharts
    tags: [shared]
    import-values:
      - child: exports
        parent: common
"#,
        )
        .unwrap();

        let deps = ChartYamlReader::new().dependencies(dir.path()).unwrap().unwrap();
        assert_eq!(deps.len(), 2);
        assert_eq!(deps[0].name, "redis");
        assert_eq!(deps[0].repo_url, "https://charts.bitnami.com/bitnami");
        assert_eq!(deps[0].condition, "redis.enabled");
        assert_eq!(deps[1].tags, vec!["shared".to_string()]);
        assert_eq!(deps[1].import_values.len(), 1);
    }

    #[test]
    fn no_dependencies_key_is_none() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CHART_FILE), "apiVersion: v2\nname: app\nversion: 0.1.0\n")
            .unwrap();

        assert_eq!(ChartYamlReader::new().dependencies(dir.path()).unwrap(), None);
    }

    #[test]
    fn missing_chart_yaml_is_none() {
        let dir = tempdir().unwrap();
        assert_eq!(ChartYamlReader::new().dependencies(dir.path()).unwrap(), None);
    }

    #[test]
    fn malformed_chart_yaml_is_metadata_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CHART_FILE), "dependencies: {not: [a list").unwrap();

        let err = ChartYamlReader::new().dependencies(dir.path()).unwrap_err();
        assert!(matches!(err, VendorError::Metadata { .. }));
    }
}
