use std::path::{Path, PathBuf};
use thiserror::Error;

/// A required input path does not name an existing regular file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("File {} not found!", path.display())]
pub struct FileNotFound {
    pub path: PathBuf,
}

/// Checks that `path` is an existing regular file.
///
/// Loaders call this before any read so that a missing input is reported as such,
/// rather than as whatever the subsequent open or parse would fail with.
pub fn require_file<P: AsRef<Path>>(path: P) -> Result<(), FileNotFound> {
    let path = path.as_ref();
    if path.is_file() {
        Ok(())
    } else {
        Err(FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn require_file_accepts_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("present.txt");
        std::fs::write(&path, "x").unwrap();
        assert!(require_file(&path).is_ok());
    }

    #[test]
    fn require_file_rejects_missing_path_and_directories() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.cube");

        let err = require_file(&missing).unwrap_err();
        assert_eq!(err.path, missing);
        assert_eq!(
            err.to_string(),
            format!("File {} not found!", missing.display())
        );
        assert!(require_file(dir.path()).is_err());
    }
}
