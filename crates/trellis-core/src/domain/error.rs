// ============================================================================
// domain/error.rs - TEMPLATE VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Every variant is a structurally illegal template, detected while the
/// template is being built or loaded. None of them is ever produced by
/// `generate`.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Path Errors
    // ========================================================================
    #[error("Empty {kind} path in template")]
    EmptyPath { kind: PathKind },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project root: {path}")]
    PathEscapesRoot { path: String },

    // ========================================================================
    // Structural Errors
    // ========================================================================
    #[error("Duplicate path in template: {path}")]
    DuplicatePath { path: String },

    #[error("File '{file}' conflicts with '{other}'")]
    PathConflict { file: String, other: String },

    /// Free-form failure while loading a template (manifest, template dir).
    #[error("{0}")]
    InvalidTemplate(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyPath { kind } => vec![
                format!("Every {kind} entry needs a non-empty relative path"),
                "Remove the empty entry from the template".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{path}' must be relative to the project root"),
                format!("Try: {}", path.trim_start_matches(['/', '\\'])),
            ],
            Self::PathEscapesRoot { path } => vec![
                format!("'{path}' contains a '..' segment"),
                "Template paths may not leave the project root".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("'{path}' is declared more than once"),
                "Each file path may appear only once".into(),
            ],
            Self::PathConflict { file, other } => vec![
                format!("'{file}' is a file, so '{other}' cannot be created"),
                "Rename the file or move the conflicting entry".into(),
            ],
            Self::InvalidTemplate(msg) => vec![
                "Check the template manifest and its files".into(),
                format!("Details: {msg}"),
            ],
        }
    }
}

/// Which kind of template entry a path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    Directory,
    File,
}

impl std::fmt::Display for PathKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Directory => write!(f, "directory"),
            Self::File => write!(f, "file"),
        }
    }
}
