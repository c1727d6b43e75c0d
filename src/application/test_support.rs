//! Shared fixtures for application and infrastructure tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::domain::ports::{ChartArchive, ChartRepository, RepositoryError};
use crate::domain::value_objects::ContentDigest;

/// Build a `.tgz` chart archive with a `<name>/` top-level directory
///
/// `dependencies_yaml` is appended verbatim to `Chart.yaml`.
pub fn chart_archive(name: &str, version: &str, dependencies_yaml: &str) -> Vec<u8> {
    let chart_yaml = format!(
        "apiVersion: v2\nname: {name}\nversion: {version}\n{dependencies_yaml}"
    );
    let files = [
        ("Chart.yaml", chart_yaml),
        ("values.yaml", "replicaCount: 1\n".to_string()),
        (
            "templates/deployment.yaml",
            format!("kind: Deployment\nmetadata:\n  name: {name}\n"),
        ),
    ];

    let mut builder = tar::Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
    for (path, content) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, format!("{name}/{path}"), content.as_bytes())
            .unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap()
}

/// In-memory chart repository keyed by `(repo_url, name, version)`
#[derive(Default)]
pub struct FakeRepository {
    charts: Mutex<HashMap<(String, String, String), (Vec<u8>, Option<String>)>>,
    failing_downloads: Mutex<Vec<String>>,
    resolves: AtomicUsize,
    downloads: AtomicUsize,
}

impl FakeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a generated chart archive with its correct digest
    pub fn with_chart(self, repo_url: &str, name: &str, version: &str, deps_yaml: &str) -> Self {
        let bytes = chart_archive(name, version, deps_yaml);
        let digest = ContentDigest::from_bytes(&bytes).hex().to_string();
        self.with_archive(repo_url, name, version, bytes, Some(digest))
    }

    /// Publish arbitrary archive bytes under an optional index digest
    pub fn with_archive(
        self,
        repo_url: &str,
        name: &str,
        version: &str,
        bytes: Vec<u8>,
        digest: Option<String>,
    ) -> Self {
        self.charts.lock().unwrap().insert(
            (repo_url.to_string(), name.to_string(), version.to_string()),
            (bytes, digest),
        );
        self
    }

    /// Make downloads of `name` fail with a transport error
    pub fn failing_download(self, name: &str) -> Self {
        self.failing_downloads.lock().unwrap().push(name.to_string());
        self
    }

    pub fn resolve_count(&self) -> usize {
        self.resolves.load(Ordering::SeqCst)
    }

    pub fn download_count(&self) -> usize {
        self.downloads.load(Ordering::SeqCst)
    }

    fn url(repo_url: &str, name: &str, version: &str) -> String {
        format!("{}/{name}-{version}.tgz", repo_url.trim_end_matches('/'))
    }
}

impl ChartRepository for FakeRepository {
    fn resolve(
        &self,
        repo_url: &str,
        name: &str,
        version: &str,
    ) -> Result<ChartArchive, RepositoryError> {
        self.resolves.fetch_add(1, Ordering::SeqCst);
        let charts = self.charts.lock().unwrap();
        let key = (repo_url.to_string(), name.to_string(), version.to_string());
        match charts.get(&key) {
            Some((_, digest)) => Ok(ChartArchive {
                name: name.to_string(),
                version: version.to_string(),
                url: Self::url(repo_url, name, version),
                digest: digest.clone(),
            }),
            None if charts.keys().any(|(r, n, _)| r == repo_url && n == name) => {
                Err(RepositoryError::VersionNotFound {
                    name: name.to_string(),
                    version: version.to_string(),
                })
            }
            None => Err(RepositoryError::ChartNotFound {
                name: name.to_string(),
            }),
        }
    }

    fn download(&self, archive: &ChartArchive) -> Result<Vec<u8>, RepositoryError> {
        self.downloads.fetch_add(1, Ordering::SeqCst);
        if self
            .failing_downloads
            .lock()
            .unwrap()
            .iter()
            .any(|n| *n == archive.name)
        {
            return Err(RepositoryError::Transport {
                url: archive.url.clone(),
                message: "connection reset".to_string(),
            });
        }
        self.charts
            .lock()
            .unwrap()
            .iter()
            .find(|((r, n, v), _)| {
                *n == archive.name
                    && *v == archive.version
                    && Self::url(r, n, v) == archive.url
            })
            .map(|(_, (bytes, _))| bytes.clone())
            .ok_or_else(|| RepositoryError::Transport {
                url: archive.url.clone(),
                message: "server returned 404 Not Found".to_string(),
            })
    }
}
