//! Local File System Helpers
//!
//! Atomic file replacement and directory placement used by the fetcher and
//! the lock store.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Write `content` to `path` atomically
///
/// The bytes go to a temporary file in the same directory, which is then
/// renamed over `path`. Readers observe either the old or the new content.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Remove `path` whether it is a file, a directory, or absent
pub fn remove_any(path: &Path) -> io::Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn atomic_write_new_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Chart.lock");

        atomic_write(&path, b"digest: x\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "digest: x\n");
    }

    #[test]
    fn atomic_write_overwrite_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Chart.lock");

        fs::write(&path, "Original").unwrap();
        atomic_write(&path, b"Replaced").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Replaced");
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("Chart.lock")]);
    }

    #[test]
    fn atomic_write_missing_parent_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("Chart.lock");
        assert!(atomic_write(&path, b"x").is_err());
    }

    #[test]
    fn remove_any_handles_all_kinds() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f");
        let sub = dir.path().join("d");
        fs::write(&file, "x").unwrap();
        fs::create_dir_all(sub.join("nested")).unwrap();

        remove_any(&file).unwrap();
        remove_any(&sub).unwrap();
        remove_any(&dir.path().join("absent")).unwrap();

        assert!(!file.exists());
        assert!(!sub.exists());
    }
}
