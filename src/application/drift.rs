//! Drift checker - confirm vendoring left the working tree committed
//!
//! Read-only. Any tracked modification or untracked file makes the tree dirty.

use std::path::Path;

use tracing::{debug, warn};

use crate::domain::ports::{VendorEvent, VendorEventSink, WorkingTree};
use crate::error::{VendorError, VendorResult};

/// A path that breaks cleanliness
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriftedFile {
    pub path: String,
    pub untracked: bool,
}

/// Outcome of a drift check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriftStatus {
    Clean,
    /// Offending paths, sorted and without duplicates
    Dirty(Vec<DriftedFile>),
}

impl DriftStatus {
    pub fn is_clean(&self) -> bool {
        matches!(self, DriftStatus::Clean)
    }

    pub fn paths(&self) -> Vec<&str> {
        match self {
            DriftStatus::Clean => Vec::new(),
            DriftStatus::Dirty(files) => files.iter().map(|f| f.path.as_str()).collect(),
        }
    }

    /// `DriftDetected` for a dirty tree
    pub fn into_result(self) -> VendorResult<()> {
        match self {
            DriftStatus::Clean => Ok(()),
            DriftStatus::Dirty(files) => Err(VendorError::DriftDetected {
                paths: files.into_iter().map(|f| f.path).collect(),
            }),
        }
    }
}

pub struct DriftChecker<W: WorkingTree> {
    tree: W,
}

impl<W: WorkingTree> DriftChecker<W> {
    pub fn new(tree: W) -> Self {
        Self { tree }
    }

    pub fn check(&self, path: &Path) -> VendorResult<DriftStatus> {
        let mut drifted: Vec<DriftedFile> = self
            .tree
            .status(path)?
            .into_iter()
            .filter_map(|change| {
                if change.is_untracked() {
                    Some(DriftedFile {
                        path: change.path,
                        untracked: true,
                    })
                } else if change.is_changed() {
                    Some(DriftedFile {
                        path: change.path,
                        untracked: false,
                    })
                } else {
                    None
                }
            })
            .collect();

        drifted.sort_by(|a, b| a.path.cmp(&b.path));
        drifted.dedup_by(|a, b| a.path == b.path);

        debug!(path = %path.display(), offending = drifted.len(), "drift check");
        if drifted.is_empty() {
            Ok(DriftStatus::Clean)
        } else {
            Ok(DriftStatus::Dirty(drifted))
        }
    }

    /// Same as [`check`](Self::check), reporting progress to `events`
    pub fn check_with_events(
        &self,
        path: &Path,
        events: &dyn VendorEventSink,
    ) -> VendorResult<DriftStatus> {
        events.on_event(VendorEvent::DriftCheckStarted {
            path: path.to_path_buf(),
        });

        let status = self.check(path)?;
        if let DriftStatus::Dirty(files) = &status {
            for file in files {
                warn!(path = %file.path, untracked = file.untracked, "working tree drift");
                events.on_event(VendorEvent::DriftFound {
                    path: file.path.clone(),
                    untracked: file.untracked,
                });
            }
        }

        events.on_event(VendorEvent::DriftCheckCompleted {
            clean: status.is_clean(),
            offending_count: status.paths().len(),
        });
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FileChange;
    use crate::domain::ports::vendor_events::recording::RecordingEventSink;
    use crate::domain::value_objects::FileState;

    struct FakeTree(Vec<FileChange>);

    impl WorkingTree for FakeTree {
        fn status(&self, _path: &Path) -> VendorResult<Vec<FileChange>> {
            Ok(self.0.clone())
        }
    }

    struct BrokenTree;

    impl WorkingTree for BrokenTree {
        fn status(&self, path: &Path) -> VendorResult<Vec<FileChange>> {
            Err(VendorError::WorkingTree {
                path: path.to_path_buf(),
                message: "not a git repository".to_string(),
            })
        }
    }

    fn check(changes: Vec<FileChange>) -> DriftStatus {
        DriftChecker::new(FakeTree(changes))
            .check(Path::new("."))
            .unwrap()
    }

    #[test]
    fn empty_status_is_clean() {
        assert_eq!(check(Vec::new()), DriftStatus::Clean);
    }

    #[test]
    fn unmodified_entries_are_clean() {
        let status = check(vec![FileChange::new(
            "charts/nginx/Chart.yaml",
            FileState::Unmodified,
            FileState::Unmodified,
        )]);
        assert!(status.is_clean());
    }

    #[test]
    fn modified_tracked_file_is_dirty() {
        let status = check(vec![FileChange::new(
            "a/b.yaml",
            FileState::Unmodified,
            FileState::Modified,
        )]);
        assert_eq!(status.paths(), vec!["a/b.yaml"]);
    }

    #[test]
    fn untracked_file_is_dirty() {
        let status = check(vec![FileChange::untracked("charts/new/Chart.lock")]);
        assert_eq!(
            status,
            DriftStatus::Dirty(vec![DriftedFile {
                path: "charts/new/Chart.lock".to_string(),
                untracked: true,
            }])
        );
    }

    #[test]
    fn every_offending_path_is_reported_sorted() {
        let status = check(vec![
            FileChange::untracked("z.txt"),
            FileChange::new("m.yaml", FileState::Added, FileState::Unmodified),
            FileChange::new("a.yaml", FileState::Unmodified, FileState::Deleted),
            FileChange::new("ok.yaml", FileState::Unmodified, FileState::Unmodified),
        ]);
        assert_eq!(status.paths(), vec!["a.yaml", "m.yaml", "z.txt"]);
    }

    #[test]
    fn dirty_into_result_is_drift_detected() {
        let err = check(vec![FileChange::untracked("x")])
            .into_result()
            .unwrap_err();
        assert!(matches!(err, VendorError::DriftDetected { ref paths } if paths == &["x"]));
        assert!(check(Vec::new()).into_result().is_ok());
    }

    #[test]
    fn status_failure_propagates() {
        let err = DriftChecker::new(BrokenTree)
            .check(Path::new("/nowhere"))
            .unwrap_err();
        assert!(matches!(err, VendorError::WorkingTree { .. }));
    }

    #[test]
    fn check_with_events_reports_each_path() {
        let sink = RecordingEventSink::new();
        let checker = DriftChecker::new(FakeTree(vec![
            FileChange::untracked("b"),
            FileChange::new("a", FileState::Modified, FileState::Unmodified),
        ]));

        let status = checker.check_with_events(Path::new("."), &sink).unwrap();
        assert!(!status.is_clean());

        let events = sink.recorded();
        assert!(matches!(events[0], VendorEvent::DriftCheckStarted { .. }));
        assert!(matches!(
            events[1],
            VendorEvent::DriftFound { ref path, untracked: false } if path == "a"
        ));
        assert!(matches!(
            events[2],
            VendorEvent::DriftFound { ref path, untracked: true } if path == "b"
        ));
        assert!(matches!(
            events[3],
            VendorEvent::DriftCheckCompleted { clean: false, offending_count: 2 }
        ));
    }
}
