//! Common test utilities for chart-vendor CLI tests.
//!
//! `TestEnv` owns a temporary working directory with a local `file://`
//! chart repository next to it.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use flate2::write::GzEncoder;
use flate2::Compression;
use sha2::{Digest, Sha256};
use tempfile::TempDir;

pub const REDIS_DEPS: &str = "dependencies:
  - name: redis
    version: 17.0.0
    repository: https://charts.bitnami.com/bitnami
";

/// Build a `.tgz` chart archive with a `<name>/` top-level directory
pub fn chart_archive(name: &str, version: &str, dependencies_yaml: &str) -> Vec<u8> {
    let files = [
        (
            "Chart.yaml".to_string(),
            format!("apiVersion: v2\nname: {name}\nversion: {version}\n{dependencies_yaml}"),
        ),
        ("values.yaml".to_string(), "replicaCount: 1\n".to_string()),
        (
            "templates/service.yaml".to_string(),
            format!("kind: Service\nmetadata:\n  name: {name}\n"),
        ),
    ];

    let mut builder = tar::Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
    for (path, content) in &files {
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

struct PublishedChart {
    name: String,
    version: String,
    file: String,
    digest: String,
}

/// Isolated working directory plus a local chart repository
pub struct TestEnv {
    dir: TempDir,
    published: Vec<PublishedChart>,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("work")).unwrap();
        fs::create_dir_all(dir.path().join("repo")).unwrap();
        Self {
            dir,
            published: Vec::new(),
        }
    }

    /// Directory the binary runs in
    pub fn work(&self) -> PathBuf {
        self.dir.path().join("work")
    }

    pub fn repo_url(&self) -> String {
        reqwest::Url::from_directory_path(self.dir.path().join("repo"))
            .unwrap()
            .to_string()
    }

    /// Publish a chart into the repository and rewrite `index.yaml`
    pub fn publish(&mut self, name: &str, version: &str, dependencies_yaml: &str) -> &mut Self {
        let bytes = chart_archive(name, version, dependencies_yaml);
        self.publish_bytes(name, version, &bytes, &format!("{:x}", Sha256::digest(&bytes)))
    }

    /// Publish raw bytes under an explicit index digest
    pub fn publish_bytes(
        &mut self,
        name: &str,
        version: &str,
        bytes: &[u8],
        digest: &str,
    ) -> &mut Self {
        let file = format!("{name}-{version}.tgz");
        fs::write(self.dir.path().join("repo").join(&file), bytes).unwrap();
        self.published.push(PublishedChart {
            name: name.to_string(),
            version: version.to_string(),
            file,
            digest: digest.to_string(),
        });
        self.write_index();
        self
    }

    fn write_index(&self) {
        let mut index = String::from("apiVersion: v1\nentries:\n");
        let mut names: Vec<&str> = self.published.iter().map(|c| c.name.as_str()).collect();
        names.sort();
        names.dedup();
        for name in names {
            index.push_str(&format!("  {name}:\n"));
            for chart in self.published.iter().filter(|c| c.name == name) {
                index.push_str(&format!(
                    "    - name: {}\n      version: {}\n      digest: {}\n      urls:\n        - {}\n",
                    chart.name, chart.version, chart.digest, chart.file
                ));
            }
        }
        fs::write(self.dir.path().join("repo/index.yaml"), index).unwrap();
    }

    /// Write `.charts.yml` in the working directory
    pub fn write_manifest(&self, content: &str) {
        fs::write(self.work().join(".charts.yml"), content).unwrap();
    }

    /// Manifest entry pointing at the local repository
    pub fn entry(&self, name: &str, version: &str) -> String {
        format!(
            "  - name: {name}\n    version: {version}\n    repoURL: {}\n",
            self.repo_url()
        )
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_chart-vendor"))
            .current_dir(self.work())
            .env_remove("RUST_LOG")
            .env_remove("CHART_VENDOR_TIMEOUT")
            .env_remove("CHART_VENDOR_VERIFY_DIGEST")
            .env_remove("GITHUB_ACTIONS")
            .args(args)
            .output()
            .unwrap()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.work().join(relative)
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Initialize a git repository at `path` and commit everything in it
pub fn git_init_and_commit(path: &Path) -> git2::Repository {
    let repo = git2::Repository::init(path).unwrap();
    commit_all(&repo, "initial");
    repo
}

pub fn commit_all(repo: &git2::Repository, message: &str) {
    let mut index = repo.index().unwrap();
    index
        .add_all(["*"], git2::IndexAddOption::DEFAULT, None)
        .unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = git2::Signature::now("Test", "test@example.com").unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap();
}
