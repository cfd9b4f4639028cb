//! Application layer for Trellis.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (Materializer)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Filesystem failures raised during generation
//!
//! The application layer applies domain values but does not validate them;
//! all template rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{GenerationPhase, GenerationResult, Materializer};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateSource};

pub use error::{ApplicationError, FsOperation};
