//! File state value object - the status of a path on one side of the index

/// State of a file in the index or the working tree, relative to HEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FileState {
    #[default]
    Unmodified,
    Modified,
    Added,
    Deleted,
    Renamed,
    TypeChanged,
    /// Present in the working tree but unknown to the index
    Untracked,
    /// Unresolved merge conflict
    Conflicted,
}

impl FileState {
    /// Returns true for anything except `Unmodified`
    pub fn is_changed(&self) -> bool {
        !matches!(self, FileState::Unmodified)
    }

    pub fn is_untracked(&self) -> bool {
        matches!(self, FileState::Untracked)
    }
}

impl std::fmt::Display for FileState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FileState::Unmodified => "unmodified",
            FileState::Modified => "modified",
            FileState::Added => "added",
            FileState::Deleted => "deleted",
            FileState::Renamed => "renamed",
            FileState::TypeChanged => "typechange",
            FileState::Untracked => "untracked",
            FileState::Conflicted => "conflicted",
        };
        f.write_str(s)
    }
}
