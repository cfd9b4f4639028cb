//! Infrastructure adapters for Trellis.
//!
//! This crate implements the ports defined in `trellis_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_template;
pub mod filesystem;
pub mod template_loader;

// Re-export commonly used adapters
pub use builtin_template::BuiltinTemplate;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_loader::ManifestTemplateLoader;
