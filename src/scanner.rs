use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::{AppError, AppResult};

/// Collects every regular file reachable under `root`, recursing into
/// subdirectories. No extension filtering; directory entries themselves are
/// excluded. Returns a fresh Vec on every call — nothing is cached between
/// scans. A missing or unreadable root is an error for the caller.
pub fn collect_files(root: &Path) -> AppResult<Vec<PathBuf>> {
    // Canonicalize up front so callers get absolute paths and a missing
    // root fails before the walk starts.
    let root = root.canonicalize()?;

    let mut files = Vec::new();
    for entry in WalkDir::new(&root) {
        let entry = entry.map_err(into_io_error)?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn into_io_error(error: walkdir::Error) -> AppError {
    let message = error.to_string();
    AppError::Io(
        error
            .into_io_error()
            .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;

    #[test]
    fn finds_nested_files_and_ignores_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.jpg"), b"a").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("b.png"), b"b").unwrap();
        fs::create_dir(dir.path().join("sub2")).unwrap();

        let found: HashSet<String> = collect_files(dir.path())
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        let expected: HashSet<String> = ["a.jpg".to_string(), "b.png".to_string()].into();
        assert_eq!(found, expected);
    }

    #[test]
    fn no_extension_filtering() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), b"n").unwrap();
        fs::write(dir.path().join("README"), b"r").unwrap();

        assert_eq!(collect_files(dir.path()).unwrap().len(), 2);
    }

    #[test]
    fn returned_paths_are_absolute() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.jpg"), b"a").unwrap();

        let files = collect_files(dir.path()).unwrap();
        assert!(files.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            collect_files(&missing),
            Err(AppError::Io(_))
        ));
    }
}
