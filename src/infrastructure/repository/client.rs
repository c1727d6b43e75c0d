//! Index-based chart repository client
//!
//! `http(s)://` repositories are fetched with a blocking reqwest client,
//! `file://` repositories are read from disk (offline mirrors).

use std::fs;
use std::time::Instant;

use reqwest::blocking::Client;
use reqwest::Url;
use tracing::debug;

use crate::config::HttpSettings;
use crate::domain::ports::{ChartArchive, ChartRepository, RepositoryError};
use crate::error::{VendorError, VendorResult};

use super::index::{index_url, IndexFile};

/// Chart repository backed by a Helm `index.yaml`
#[derive(Debug, Clone)]
pub struct IndexChartRepository {
    client: Client,
}

impl IndexChartRepository {
    pub fn new(settings: &HttpSettings) -> VendorResult<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|e| VendorError::Config {
                key: "http".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { client })
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>, RepositoryError> {
        let transport = |message: String| RepositoryError::Transport {
            url: url.to_string(),
            message,
        };
        let parsed = Url::parse(url).map_err(|_| RepositoryError::UnsupportedScheme {
            url: url.to_string(),
        })?;

        let started = Instant::now();
        let bytes = match parsed.scheme() {
            "http" | "https" => {
                let resp = self
                    .client
                    .get(parsed)
                    .send()
                    .map_err(|e| transport(e.to_string()))?;
                if !resp.status().is_success() {
                    return Err(transport(format!("server returned {}", resp.status())));
                }
                resp.bytes().map_err(|e| transport(e.to_string()))?.to_vec()
            }
            "file" => {
                let path = parsed
                    .to_file_path()
                    .map_err(|_| transport("not a local path".to_string()))?;
                fs::read(&path).map_err(|e| transport(e.to_string()))?
            }
            _ => {
                return Err(RepositoryError::UnsupportedScheme {
                    url: url.to_string(),
                })
            }
        };

        debug!(
            url,
            bytes = bytes.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fetched"
        );
        Ok(bytes)
    }
}

impl ChartRepository for IndexChartRepository {
    fn resolve(
        &self,
        repo_url: &str,
        name: &str,
        version: &str,
    ) -> Result<ChartArchive, RepositoryError> {
        let bytes = self.fetch(&index_url(repo_url))?;
        IndexFile::parse(&bytes)?.resolve(repo_url, name, version)
    }

    fn download(&self, archive: &ChartArchive) -> Result<Vec<u8>, RepositoryError> {
        self.fetch(&archive.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn file_url(path: &std::path::Path) -> String {
        Url::from_directory_path(path).unwrap().to_string()
    }

    #[test]
    fn resolve_and_download_from_file_repo() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("index.yaml"),
            "apiVersion: v1\nentries:\n  nginx:\n    - name: nginx\n      version: 1.2.3\n      urls: [nginx-1.2.3.tgz]\n",
        )
        .unwrap();
        fs::write(dir.path().join("nginx-1.2.3.tgz"), b"archive-bytes").unwrap();

        let repo = IndexChartRepository::new(&HttpSettings::default()).unwrap();
        let archive = repo.resolve(&file_url(dir.path()), "nginx", "1.2.3").unwrap();

        assert!(archive.url.ends_with("/nginx-1.2.3.tgz"));
        assert_eq!(repo.download(&archive).unwrap(), b"archive-bytes");
    }

    #[test]
    fn missing_index_is_transport_error() {
        let dir = tempdir().unwrap();
        let repo = IndexChartRepository::new(&HttpSettings::default()).unwrap();

        let err = repo.resolve(&file_url(dir.path()), "nginx", "1.2.3").unwrap_err();
        assert!(matches!(err, RepositoryError::Transport { .. }));
    }

    #[test]
    fn unsupported_scheme() {
        let repo = IndexChartRepository::new(&HttpSettings::default()).unwrap();
        let err = repo
            .resolve("oci://registry.example.com/charts", "nginx", "1.2.3")
            .unwrap_err();
        assert!(matches!(err, RepositoryError::UnsupportedScheme { .. }));
    }
}
