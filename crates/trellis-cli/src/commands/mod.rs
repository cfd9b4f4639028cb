//! Command handlers. Trellis has a single command, so this is one module.

pub mod generate;
