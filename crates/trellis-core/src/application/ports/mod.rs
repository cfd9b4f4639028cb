//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `trellis-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory creation and file writes
//!   - `TemplateSource`: Where the template comes from
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (The CLI calls `Materializer` directly)

pub mod output;

pub use output::{Filesystem, TemplateSource};
