//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `TRELLIS_` prefix, `__` between sections,
//!    e.g. `TRELLIS_OUTPUT__NO_COLOR=true`, `TRELLIS_TEMPLATE__PATH=./layout.toml`
//! 3. Config file: `--config <FILE>` (must exist) or [`AppConfig::config_path`]
//!    (optional)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::global::OutputFormat;

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "TRELLIS";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub template: TemplateConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is left at `auto`.
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Manifest file or template directory used when `--template` is absent.
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from defaults, file and environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it the default location is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_with_env(config_file, None)
    }

    /// Same as [`load`](Self::load) with an explicit environment map instead
    /// of the process environment (`None` reads the real one).
    pub fn load_with_env(
        config_file: Option<&PathBuf>,
        env: Option<config::Map<String, String>>,
    ) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        let settings = Config::builder()
            .set_default("output.no_color", false)?
            .set_default("output.format", "auto")?
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.trellis.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "trellis", "trellis")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".trellis.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn no_env() -> Option<config::Map<String, String>> {
        Some(config::Map::new())
    }

    fn write_config(temp: &TempDir, body: &str) -> PathBuf {
        let path = temp.path().join("config.toml");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn defaults_are_auto_and_colored() {
        let cfg = AppConfig::default();
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.output.format, OutputFormat::Auto);
        assert!(cfg.template.path.is_none());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        assert!(AppConfig::load_with_env(Some(&missing), no_env()).is_err());
    }

    #[test]
    fn file_values_are_read() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            "[output]\nno_color = true\nformat = \"json\"\n\n[template]\npath = \"layout.toml\"\n",
        );

        let cfg = AppConfig::load_with_env(Some(&path), no_env()).unwrap();

        assert!(cfg.output.no_color);
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert_eq!(cfg.template.path, Some(PathBuf::from("layout.toml")));
    }

    #[test]
    fn environment_overrides_file() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[output]\nno_color = false\n");
        let env = config::Map::from([
            ("TRELLIS_OUTPUT__NO_COLOR".to_string(), "true".to_string()),
            (
                "TRELLIS_TEMPLATE__PATH".to_string(),
                "/srv/layouts/web".to_string(),
            ),
        ]);

        let cfg = AppConfig::load_with_env(Some(&path), Some(env)).unwrap();

        assert!(cfg.output.no_color);
        assert_eq!(cfg.template.path, Some(PathBuf::from("/srv/layouts/web")));
    }

    #[test]
    fn invalid_format_value_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[output]\nformat = \"yaml\"\n");
        assert!(AppConfig::load_with_env(Some(&path), no_env()).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
