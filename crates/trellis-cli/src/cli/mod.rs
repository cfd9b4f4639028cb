//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "trellis",
    bin_name = "trellis",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Materialize a project skeleton from a declarative template",
    long_about = "Trellis creates every directory and file a template declares \
                  under ROOT. Existing directories are kept, template files are \
                  overwritten, and running it twice gives the same result.",
    after_help = "EXAMPLES:\n\
        \x20 trellis                          # built-in layout into the current directory\n\
        \x20 trellis ./my-app\n\
        \x20 trellis ./my-app -t layout.toml\n\
        \x20 trellis ./my-app -t ./templates/web --dry-run\n\
        \x20 trellis ./my-app --output-format json",
)]
pub struct Cli {
    /// Logging, colour and configuration flags.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to generate and where.
    #[command(flatten)]
    pub generate: GenerateArgs,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for the generation run.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Directory to generate into. Created if missing.
    #[arg(
        value_name = "ROOT",
        help = "Target directory (default: current directory)"
    )]
    pub root: Option<PathBuf>,

    /// Load the template from a manifest file or template directory.
    #[arg(
        short = 't',
        long = "template",
        value_name = "PATH",
        help = "Manifest file or template directory (default: built-in layout)"
    )]
    pub template: Option<PathBuf>,

    /// Print the actions without touching the filesystem.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // clap's internal consistency check: catches conflicts, missing values, etc.
        Cli::command().debug_assert();
    }

    #[test]
    fn root_is_optional() {
        let cli = Cli::parse_from(["trellis"]);
        assert!(cli.generate.root.is_none());
        assert!(cli.generate.template.is_none());
        assert!(!cli.generate.dry_run);
    }

    #[test]
    fn parses_root_template_and_dry_run() {
        let cli = Cli::parse_from([
            "trellis",
            "./proj",
            "--template",
            "layout.toml",
            "--dry-run",
        ]);
        assert_eq!(cli.generate.root, Some(PathBuf::from("./proj")));
        assert_eq!(cli.generate.template, Some(PathBuf::from("layout.toml")));
        assert!(cli.generate.dry_run);
    }

    #[test]
    fn global_flags_mix_with_root() {
        let cli = Cli::parse_from(["trellis", "-vv", "out", "--output-format", "json"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
        assert_eq!(cli.generate.root, Some(PathBuf::from("out")));
    }

    #[test]
    fn only_one_root_is_accepted() {
        assert!(Cli::try_parse_from(["trellis", "a", "b"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["trellis", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }
}
