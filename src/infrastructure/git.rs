//! Git working tree status via libgit2

use std::path::Path;

use git2::{Repository, Status, StatusOptions};
use tracing::debug;

use crate::domain::entities::FileChange;
use crate::domain::ports::WorkingTree;
use crate::domain::value_objects::FileState;
use crate::error::{VendorError, VendorResult};

/// Working tree backed by a git repository discovered from a path
#[derive(Debug, Clone, Copy, Default)]
pub struct GitWorkingTree;

impl GitWorkingTree {
    pub fn new() -> Self {
        Self
    }
}

fn index_state(status: Status) -> FileState {
    if status.contains(Status::CONFLICTED) {
        FileState::Conflicted
    } else if status.contains(Status::INDEX_NEW) {
        FileState::Added
    } else if status.contains(Status::INDEX_MODIFIED) {
        FileState::Modified
    } else if status.contains(Status::INDEX_DELETED) {
        FileState::Deleted
    } else if status.contains(Status::INDEX_RENAMED) {
        FileState::Renamed
    } else if status.contains(Status::INDEX_TYPECHANGE) {
        FileState::TypeChanged
    } else {
        FileState::Unmodified
    }
}

fn worktree_state(status: Status) -> FileState {
    if status.contains(Status::CONFLICTED) {
        FileState::Conflicted
    } else if status.contains(Status::WT_NEW) {
        FileState::Untracked
    } else if status.contains(Status::WT_MODIFIED) {
        FileState::Modified
    } else if status.contains(Status::WT_DELETED) {
        FileState::Deleted
    } else if status.contains(Status::WT_RENAMED) {
        FileState::Renamed
    } else if status.contains(Status::WT_TYPECHANGE) {
        FileState::TypeChanged
    } else {
        FileState::Unmodified
    }
}

/// Map a libgit2 status bitset onto a `FileChange`
pub(crate) fn file_change(path: &str, status: Status) -> FileChange {
    FileChange::new(path, index_state(status), worktree_state(status))
}

impl WorkingTree for GitWorkingTree {
    fn status(&self, path: &Path) -> VendorResult<Vec<FileChange>> {
        let tree_err = |e: git2::Error| VendorError::WorkingTree {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        };

        let repo = Repository::discover(path).map_err(tree_err)?;

        let mut options = StatusOptions::new();
        options
            .include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false)
            .include_unmodified(false)
            .renames_head_to_index(true);

        let statuses = repo.statuses(Some(&mut options)).map_err(tree_err)?;
        let changes: Vec<FileChange> = statuses
            .iter()
            .filter(|entry| !entry.status().contains(Status::IGNORED))
            .map(|entry| {
                let path = String::from_utf8_lossy(entry.path_bytes()).into_owned();
                file_change(&path, entry.status())
            })
            .collect();

        debug!(
            workdir = ?repo.workdir(),
            entries = changes.len(),
            "queried working tree status"
        );
        Ok(changes)
    }
}
