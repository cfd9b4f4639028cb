//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::trace;
use trellis_core::{
    application::{ApplicationError, FsOperation, ports::Filesystem},
    error::TrellisResult,
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> TrellisResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        match std::fs::create_dir_all(path) {
            Ok(()) => Ok(()),
            // Lost a race with another creator; fine as long as it is a directory.
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
            Err(e) => Err(map_io_error(path, &e, FsOperation::CreateDirectory)),
        }
    }

    fn write_file(&self, path: &Path, content: &str) -> TrellisResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, &e, FsOperation::WriteFile))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(
    path: &Path,
    e: &io::Error,
    operation: FsOperation,
) -> trellis_core::error::TrellisError {
    ApplicationError::filesystem(operation, path, e).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use trellis_core::error::TrellisError;

    fn fs_error(err: TrellisError) -> (FsOperation, std::path::PathBuf) {
        match err {
            TrellisError::Application(ApplicationError::FileSystem {
                operation, path, ..
            }) => (operation, path),
            other => panic!("expected filesystem error, got {other:?}"),
        }
    }

    #[test]
    fn create_dir_all_creates_missing_ancestors() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("a").join("b").join("c");

        LocalFilesystem::new().create_dir_all(&target).unwrap();

        assert!(target.is_dir());
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("src");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&target).unwrap();
        fs.create_dir_all(&target).unwrap();

        assert!(target.is_dir());
    }

    #[test]
    fn create_dir_all_fails_when_a_file_is_in_the_way() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("src");
        fs::write(&blocker, "not a directory").unwrap();

        let err = LocalFilesystem::new()
            .create_dir_all(&blocker.join("a"))
            .unwrap_err();

        let (operation, path) = fs_error(err);
        assert_eq!(operation, FsOperation::CreateDirectory);
        assert_eq!(path, blocker.join("a"));
    }

    #[test]
    fn write_file_replaces_previous_content() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("readme.txt");
        fs::write(&file, "a much longer previous body").unwrap();

        LocalFilesystem::new().write_file(&file, "hello").unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "hello");
    }

    #[test]
    fn write_file_does_not_create_parents() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("missing").join("readme.txt");

        let err = LocalFilesystem::new().write_file(&file, "x").unwrap_err();

        let (operation, path) = fs_error(err);
        assert_eq!(operation, FsOperation::WriteFile);
        assert_eq!(path, file);
        assert!(!temp.path().join("missing").exists());
    }

    #[test]
    fn exists_reports_files_and_directories() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        assert!(fs.exists(temp.path()));
        assert!(!fs.exists(&temp.path().join("nope")));
    }
}
