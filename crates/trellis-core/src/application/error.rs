//! Application layer errors.
//!
//! These errors represent failures while applying a template, not template
//! defects. Template defects are `DomainError` from `crate::domain`.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A directory create or file write failed.
    ///
    /// "Already exists" for a directory never reaches this variant.
    #[error("Failed to {operation} at {path}: {reason}")]
    FileSystem {
        operation: FsOperation,
        path: PathBuf,
        kind: io::ErrorKind,
        reason: String,
    },

    /// Filesystem adapter state is unusable (lock poisoned, etc.).
    #[error("Filesystem adapter unavailable: {reason}")]
    AdapterUnavailable { reason: String },
}

impl ApplicationError {
    /// Wrap an I/O failure with the operation and path it happened on.
    pub fn filesystem(operation: FsOperation, path: &Path, err: &io::Error) -> Self {
        Self::FileSystem {
            operation,
            path: path.to_path_buf(),
            kind: err.kind(),
            reason: err.to_string(),
        }
    }

    /// Path of the failing operation, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::FileSystem { path, .. } => Some(path),
            Self::AdapterUnavailable { .. } => None,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FileSystem {
                operation,
                path,
                kind,
                ..
            } => {
                let mut hints = vec![format!("Could not {operation}: {}", path.display())];
                match kind {
                    io::ErrorKind::PermissionDenied => {
                        hints.push("Check that you have write permissions".into())
                    }
                    io::ErrorKind::NotADirectory | io::ErrorKind::AlreadyExists => hints
                        .push("A file is in the way of a directory; move or remove it".into()),
                    io::ErrorKind::IsADirectory => hints
                        .push("A directory is in the way of a file; move or remove it".into()),
                    io::ErrorKind::StorageFull => hints.push("Free up disk space".into()),
                    _ => {}
                }
                hints.push(
                    "Generation is idempotent: fix the problem and run it again".into(),
                );
                hints
            }
            Self::AdapterUnavailable { .. } => vec![
                "The filesystem adapter is in a bad state".into(),
                "Run generation again in a fresh process".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::FileSystem
    }
}

/// Filesystem operation kinds reported in [`ApplicationError::FileSystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FsOperation {
    CreateDirectory,
    WriteFile,
}

impl fmt::Display for FsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDirectory => write!(f, "create directory"),
            Self::WriteFile => write!(f, "write file"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filesystem_error_keeps_path_kind_and_cause() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = ApplicationError::filesystem(FsOperation::WriteFile, Path::new("/r/a.txt"), &io_err);

        assert_eq!(err.path(), Some(Path::new("/r/a.txt")));
        assert!(matches!(
            &err,
            ApplicationError::FileSystem { kind: io::ErrorKind::PermissionDenied, reason, .. }
                if reason == "denied"
        ));
        assert_eq!(err.to_string(), "Failed to write file at /r/a.txt: denied");
    }

    #[test]
    fn permission_denied_suggests_permissions() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err =
            ApplicationError::filesystem(FsOperation::CreateDirectory, Path::new("x"), &io_err);
        let hints = err.suggestions();
        assert!(hints.iter().any(|s| s.contains("permissions")));
        assert!(hints.iter().any(|s| s.contains("run it again")));
    }
}
