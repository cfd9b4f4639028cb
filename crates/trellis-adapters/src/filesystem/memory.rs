//! In-memory filesystem adapter for testing.
//!
//! Mirrors the failure modes of a real filesystem closely enough to exercise
//! partial generation: files block directories, parents must exist before a
//! write, and [`MemoryFilesystem::deny`] makes a subtree read-only.

use std::{
    collections::{BTreeMap, BTreeSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use trellis_core::{
    application::{ApplicationError, FsOperation, ports::Filesystem},
    error::TrellisResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a `Materializer` and
/// inspect the other.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    denied: Vec<PathBuf>,
    writes: usize,
}

impl MemoryFilesystemInner {
    fn is_denied(&self, path: &Path) -> bool {
        self.denied.iter().any(|d| path.starts_with(d))
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Refuse every create or write at or below `path` with `PermissionDenied`.
    pub fn deny(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.denied.push(path.into());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// List all directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of successful `write_file` calls so far.
    pub fn write_count(&self) -> usize {
        self.inner.read().map(|inner| inner.writes).unwrap_or(0)
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn failure(
    operation: FsOperation,
    path: &Path,
    kind: io::ErrorKind,
    message: &str,
) -> trellis_core::error::TrellisError {
    ApplicationError::filesystem(operation, path, &io::Error::new(kind, message)).into()
}

fn lock_poisoned() -> trellis_core::error::TrellisError {
    ApplicationError::AdapterUnavailable {
        reason: "memory filesystem lock poisoned".into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> TrellisResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned())?;

        let op = FsOperation::CreateDirectory;
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);

            if inner.files.contains_key(&current) {
                let (kind, message) = if current == path {
                    (io::ErrorKind::AlreadyExists, "file exists")
                } else {
                    (io::ErrorKind::NotADirectory, "not a directory")
                };
                return Err(failure(op, path, kind, message));
            }

            if !inner.directories.contains(&current) {
                if inner.is_denied(&current) {
                    return Err(failure(
                        op,
                        path,
                        io::ErrorKind::PermissionDenied,
                        "permission denied",
                    ));
                }
                inner.directories.insert(current.clone());
            }
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> TrellisResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned())?;

        let op = FsOperation::WriteFile;
        if inner.is_denied(path) {
            return Err(failure(
                op,
                path,
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        if inner.directories.contains(path) {
            return Err(failure(
                op,
                path,
                io::ErrorKind::IsADirectory,
                "is a directory",
            ));
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                let (kind, message) = if inner.files.contains_key(parent) {
                    (io::ErrorKind::NotADirectory, "not a directory")
                } else {
                    (io::ErrorKind::NotFound, "parent directory does not exist")
                };
                return Err(failure(op, path, kind, message));
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.writes += 1;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::error::TrellisError;

    fn kind_of(err: TrellisError) -> io::ErrorKind {
        match err {
            TrellisError::Application(ApplicationError::FileSystem { kind, .. }) => kind,
            other => panic!("expected filesystem error, got {other:?}"),
        }
    }

    #[test]
    fn create_dir_all_records_every_ancestor() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/proj/src/a")).unwrap();

        assert!(fs.is_dir(Path::new("/proj")));
        assert!(fs.is_dir(Path::new("/proj/src")));
        assert!(fs.is_dir(Path::new("/proj/src/a")));
    }

    #[test]
    fn write_requires_existing_parent() {
        let fs = MemoryFilesystem::new();
        let err = fs
            .write_file(Path::new("/proj/readme.txt"), "hello")
            .unwrap_err();
        assert_eq!(kind_of(err), io::ErrorKind::NotFound);

        fs.create_dir_all(Path::new("/proj")).unwrap();
        fs.write_file(Path::new("/proj/readme.txt"), "hello").unwrap();
        assert_eq!(
            fs.read_file(Path::new("/proj/readme.txt")).as_deref(),
            Some("hello")
        );
    }

    #[test]
    fn file_blocks_directory_creation() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/proj")).unwrap();
        fs.write_file(Path::new("/proj/src"), "oops").unwrap();

        let err = fs.create_dir_all(Path::new("/proj/src/a")).unwrap_err();
        assert_eq!(kind_of(err), io::ErrorKind::NotADirectory);

        let err = fs.create_dir_all(Path::new("/proj/src")).unwrap_err();
        assert_eq!(kind_of(err), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn directory_blocks_file_write() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/proj/src")).unwrap();

        let err = fs.write_file(Path::new("/proj/src"), "x").unwrap_err();
        assert_eq!(kind_of(err), io::ErrorKind::IsADirectory);
    }

    #[test]
    fn denied_subtree_rejects_new_entries_only() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/proj/src")).unwrap();
        fs.deny("/proj/src");

        // Already present: still fine.
        fs.create_dir_all(Path::new("/proj/src")).unwrap();

        let err = fs.create_dir_all(Path::new("/proj/src/a")).unwrap_err();
        assert_eq!(kind_of(err), io::ErrorKind::PermissionDenied);

        let err = fs
            .write_file(Path::new("/proj/src/main.rs"), "")
            .unwrap_err();
        assert_eq!(kind_of(err), io::ErrorKind::PermissionDenied);
        assert_eq!(fs.write_count(), 0);
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let view = fs.clone();
        fs.create_dir_all(Path::new("/proj")).unwrap();
        fs.write_file(Path::new("/proj/a.txt"), "a").unwrap();

        assert!(view.exists(Path::new("/proj/a.txt")));
        assert_eq!(view.list_files(), vec![PathBuf::from("/proj/a.txt")]);
    }
}
