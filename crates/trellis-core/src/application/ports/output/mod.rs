//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `trellis-adapters` crate provides implementations.

use crate::domain::Template;
use crate::error::TrellisResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `trellis_adapters::filesystem::LocalFilesystem` (production)
/// - `trellis_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Contract
///
/// - `create_dir_all` creates the directory and every missing ancestor. A
///   directory that already exists is success; anything else standing at the
///   path is an error.
/// - `write_file` replaces the whole file (truncate-then-write). It does not
///   create parents.
/// - Failures are reported as `ApplicationError::FileSystem` carrying the
///   operation, the path and the underlying cause.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> TrellisResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> TrellisResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for obtaining the template to materialize.
///
/// Implemented by:
/// - `trellis_adapters::BuiltinTemplate` (the layout compiled into the binary)
/// - `trellis_adapters::ManifestTemplateLoader` (TOML manifest or template dir)
pub trait TemplateSource: Send + Sync {
    /// Produce a validated template.
    ///
    /// Fails with a `DomainError` when the description is illegal; never
    /// touches the generation target.
    fn load(&self) -> TrellisResult<Template>;

    /// Short description of where the template comes from, for display.
    fn describe(&self) -> String;
}
