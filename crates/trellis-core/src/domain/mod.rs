// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Trellis.
//!
//! This module contains pure data and validation with no I/O. Filesystem
//! access happens only through the ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: A built `Template` is never mutated
//! - **Validated at construction**: An invalid path cannot become a `TemplatePath`
//!
// Public API - what the world sees
pub mod entities;
pub mod error;

// Re-exports for convenience
pub use entities::{
    common::TemplatePath,
    plan::{DirectoryReason, GenerationPlan, PlannedAction, resolve},
    template::{Template, TemplateBuilder, TemplateFile},
};

pub use error::{DomainError, PathKind};
