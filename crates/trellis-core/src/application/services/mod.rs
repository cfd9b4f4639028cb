//! Application services - orchestrate use cases.
//!
//! The materializer coordinates the domain layer and the filesystem port to
//! turn a template into real files.

pub mod materializer;

pub use materializer::{GenerationPhase, GenerationResult, Materializer};
