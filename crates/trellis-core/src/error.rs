//! Unified error handling for Trellis Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Trellis Core operations.
///
/// `Domain` is the invalid-template family (raised while building or loading
/// a template), `Application` is the filesystem family (raised by `generate`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrellisError {
    /// The template is structurally illegal.
    #[error("Invalid template: {0}")]
    Domain(#[from] DomainError),

    /// A filesystem operation failed during generation.
    #[error("Generation failed: {0}")]
    Application(#[from] ApplicationError),
}

impl TrellisError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::InvalidTemplate,
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidTemplate,
    FileSystem,
}

/// Convenient result type alias.
pub type TrellisResult<T> = Result<T, TrellisError>;
