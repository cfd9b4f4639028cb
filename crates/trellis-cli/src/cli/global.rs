//! Arguments that shape how the CLI runs rather than what it generates.
//!
//! Declared here and flattened into [`super::Cli`] so logging, colour and
//! config handling can take them without seeing the generation arguments.

use clap::{Args, builder::FalseyValueParser};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Flags shared by every invocation.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Show more of what generation is doing on stderr (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count, help_heading = "Diagnostics")]
    pub verbose: u8,

    /// Print only errors; the JSON report is still written.
    #[arg(short, long, conflicts_with = "verbose", help_heading = "Diagnostics")]
    pub quiet: bool,

    /// Never emit ANSI colour. Also set by `NO_COLOR` (`NO_COLOR=1`), unless
    /// its value is empty or false-like (`0`, `false`, `off`).
    #[arg(
        long,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help_heading = "Output"
    )]
    pub no_color: bool,

    /// Read settings from FILE instead of the per-user config location.
    #[arg(short, long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<PathBuf>,

    /// Report style; `auto` defers to `output.format`, then to the terminal.
    #[arg(long, value_enum, default_value_t = OutputFormat::Auto, help_heading = "Output")]
    pub output_format: OutputFormat,
}

/// How the CLI should render its output.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Coloured progress lines.
    Human,
    Plain,
    /// One pretty-printed JSON document on stdout.
    Json,
}
