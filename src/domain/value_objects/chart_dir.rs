//! Chart Directory Value Object
//!
//! The logical directory name a chart is vendored under. It must be a single
//! normal path component so every chart stays directly below the charts root:
//! - no separators
//! - no `.` or `..`
//! - non-empty

use std::fmt;
use std::path::{Component, Path};

/// Error when a directory name fails validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartDirError {
    /// Name is empty
    Empty,
    /// Name contains a path separator
    ContainsSeparator,
    /// Name is `.` or `..`
    Traversal,
}

impl fmt::Display for ChartDirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartDirError::Empty => write!(f, "directory name is empty"),
            ChartDirError::ContainsSeparator => {
                write!(f, "directory name must not contain path separators")
            }
            ChartDirError::Traversal => write!(f, "directory name must not be '.' or '..'"),
        }
    }
}

impl std::error::Error for ChartDirError {}

/// A validated chart directory name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChartDir(String);

impl ChartDir {
    pub fn new(name: impl Into<String>) -> Result<Self, ChartDirError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ChartDirError::Empty);
        }
        if name.contains('/') || name.contains('\\') {
            return Err(ChartDirError::ContainsSeparator);
        }

        let mut components = Path::new(&name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(Self(name)),
            (Some(Component::CurDir | Component::ParentDir), None) => {
                Err(ChartDirError::Traversal)
            }
            _ => Err(ChartDirError::ContainsSeparator),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChartDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for ChartDir {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl TryFrom<&str> for ChartDir {
    type Error = ChartDirError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_name() {
        let dir = ChartDir::new("nginx-ingress").unwrap();
        assert_eq!(dir.as_str(), "nginx-ingress");
        assert_eq!(dir.as_ref(), Path::new("nginx-ingress"));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(ChartDir::new(""), Err(ChartDirError::Empty));
    }

    #[test]
    fn rejects_separators() {
        assert_eq!(ChartDir::new("a/b"), Err(ChartDirError::ContainsSeparator));
        assert_eq!(ChartDir::new("a\\b"), Err(ChartDirError::ContainsSeparator));
        assert_eq!(ChartDir::new("/etc"), Err(ChartDirError::ContainsSeparator));
    }

    #[test]
    fn rejects_traversal() {
        assert_eq!(ChartDir::new(".."), Err(ChartDirError::Traversal));
        assert_eq!(ChartDir::new("."), Err(ChartDirError::Traversal));
    }
}
