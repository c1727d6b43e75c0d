//! File change entity - one entry of a working tree status query

use crate::domain::value_objects::FileState;

/// Status of a single path, relative to the committed baseline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    /// Path relative to the repository root, `/`-separated
    pub path: String,
    /// Staged state (index vs. HEAD)
    pub index: FileState,
    /// Unstaged state (working tree vs. index)
    pub worktree: FileState,
    pub tracked: bool,
}

impl FileChange {
    pub fn new(path: impl Into<String>, index: FileState, worktree: FileState) -> Self {
        Self {
            path: path.into(),
            index,
            worktree,
            tracked: !worktree.is_untracked(),
        }
    }

    pub fn untracked(path: impl Into<String>) -> Self {
        Self::new(path, FileState::Unmodified, FileState::Untracked)
    }

    /// A tracked file with staged or unstaged modifications
    pub fn is_changed(&self) -> bool {
        self.tracked && (self.index.is_changed() || self.worktree.is_changed())
    }

    pub fn is_untracked(&self) -> bool {
        self.worktree.is_untracked()
    }
}
