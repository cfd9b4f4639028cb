//! Trellis Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Trellis
//! scaffolding engine: a declarative template (directories + file contents)
//! and the materializer that turns it into filesystem state.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           trellis-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (Materializer)               │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, TemplateSource)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    trellis-adapters (Infrastructure)    │
//! │ (LocalFilesystem, ManifestTemplateLoader)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Template, TemplatePath, GenerationPlan)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use trellis_core::{application::Materializer, domain::Template};
//!
//! // 1. Describe the tree
//! let template = Template::builder()
//!     .directories(["src/a", "src/b"])
//!     .file("src/a/readme.txt", "hello")
//!     .build()?;
//!
//! // 2. Materialize it (with an injected filesystem adapter)
//! let materializer = Materializer::new(Box::new(filesystem));
//! let result = materializer.generate(&template, "/tmp/proj")?;
//! assert_eq!(result.files_written, 1);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, FsOperation, GenerationResult, Materializer,
        ports::{Filesystem, TemplateSource},
    };
    pub use crate::domain::{
        DomainError, GenerationPlan, PathKind, PlannedAction, Template, TemplateBuilder,
        TemplatePath,
    };
    pub use crate::error::{TrellisError, TrellisResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
