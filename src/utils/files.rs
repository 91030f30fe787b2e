use crate::catalog::Category;
use crate::error::{Result, SeedError};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Ensure every category directory exists below `root`
pub fn ensure_directories(root: &Path) -> Result<()> {
    for category in Category::all() {
        let dir = category.directory(root);
        if dir.is_dir() {
            continue;
        }

        fs::create_dir_all(&dir).map_err(|source| SeedError::DirectoryCreation {
            path: dir.clone(),
            source,
        })?;
        tracing::debug!(path = %dir.display(), "Created directory");
    }

    Ok(())
}

/// Sibling path the body is staged in before it replaces the destination
pub fn partial_path(destination: &Path) -> PathBuf {
    let mut name = OsString::from(destination.as_os_str());
    name.push(".part");
    PathBuf::from(name)
}

/// Write `bytes` to `destination`, replacing any existing file.
///
/// The content lands in a `.part` sibling first and is renamed into place, so
/// a failed write never leaves a truncated image behind.
pub async fn store_bytes(destination: &Path, bytes: &[u8]) -> io::Result<()> {
    let staging = partial_path(destination);

    let written = match tokio::fs::write(&staging, bytes).await {
        Ok(()) => tokio::fs::rename(&staging, destination).await,
        Err(e) => Err(e),
    };

    if let Err(e) = written {
        // The staging file may not exist if the write itself failed
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_directories_creates_both_categories() {
        let root = tempfile::tempdir().unwrap();

        ensure_directories(root.path()).unwrap();

        assert!(root.path().join("public/images/events").is_dir());
        assert!(root.path().join("public/images/locations").is_dir());
    }

    #[test]
    fn ensure_directories_is_idempotent_and_keeps_files() {
        let root = tempfile::tempdir().unwrap();
        ensure_directories(root.path()).unwrap();

        let existing = root.path().join("public/images/events/event1.jpg");
        fs::write(&existing, b"keep me").unwrap();

        ensure_directories(root.path()).unwrap();

        assert_eq!(fs::read(&existing).unwrap(), b"keep me");
    }

    #[test]
    fn ensure_directories_fails_when_a_file_is_in_the_way() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("public")).unwrap();
        fs::write(root.path().join("public/images"), b"not a directory").unwrap();

        let err = ensure_directories(root.path()).unwrap_err();

        match err {
            SeedError::DirectoryCreation { path, .. } => {
                assert_eq!(path, root.path().join("public/images/events"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn partial_path_appends_suffix() {
        assert_eq!(
            partial_path(Path::new("public/images/events/event1.jpg")),
            Path::new("public/images/events/event1.jpg.part")
        );
    }

    #[tokio::test]
    async fn store_bytes_overwrites_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("location1.jpg");

        store_bytes(&target, b"first").await.unwrap();
        store_bytes(&target, b"second").await.unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"second");
        assert!(!partial_path(&target).exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn store_bytes_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing/event3.jpg");

        let err = store_bytes(&target, b"data").await.unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!target.exists());
    }
}
