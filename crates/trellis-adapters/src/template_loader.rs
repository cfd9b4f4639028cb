//! Filesystem-based template loader.
//!
//! Reads a template description from disk and turns it into a validated
//! domain [`Template`]. Two layouts are accepted.
//!
//! # Manifest file
//!
//! A single TOML file carrying everything inline:
//!
//! ```toml
//! [template]
//! name        = "my-layout"          # optional, defaults to the file stem
//! directories = ["src/a", "src/b"]   # created even when empty
//!
//! [[files]]
//! path    = "src/a/readme.txt"
//! content = "hello"
//! ```
//!
//! # Template directory
//!
//! ```text
//! my-layout/
//! ├── template.toml        ← optional, same format as above
//! ├── package.json         ← file content, copied verbatim
//! ├── docs/                ← empty directory, kept as a directory entry
//! └── src/
//!     └── main.js
//! ```
//!
//! Every regular file under the directory becomes a file entry and every empty
//! directory becomes a directory entry. Non-empty directories need no entry of
//! their own since writing their files creates them.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, instrument};
use walkdir::WalkDir;

use trellis_core::{
    application::ports::TemplateSource,
    domain::{DomainError, Template, TemplateBuilder},
    error::TrellisResult,
};

/// Manifest file name looked up at the root of a template directory.
pub const MANIFEST_FILE_NAME: &str = "template.toml";

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of a manifest.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct TemplateManifest {
    #[serde(default)]
    pub template: TemplateSection,
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

/// `[template]` section.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct TemplateSection {
    pub name: Option<String>,
    /// Directories that must exist even if they contain no files.
    #[serde(default)]
    pub directories: Vec<String>,
}

/// One entry under `[[files]]`.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileEntry {
    /// Relative path from the project root (e.g. `"src/main.rs"`).
    pub path: String,
    #[serde(default)]
    pub content: String,
}

impl TemplateManifest {
    /// Parse manifest text. `origin` only labels error messages.
    pub fn parse(raw: &str, origin: &Path) -> Result<Self, DomainError> {
        toml::from_str(raw).map_err(|e| {
            DomainError::InvalidTemplate(format!("failed to parse '{}': {e}", origin.display()))
        })
    }

    /// Seed a builder with the manifest's directories and files.
    fn apply(self, builder: TemplateBuilder) -> TemplateBuilder {
        let builder = builder.directories(self.template.directories);
        self.files
            .into_iter()
            .fold(builder, |b, entry| b.file(entry.path, entry.content))
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads a [`Template`] from a manifest file or a template directory.
///
/// Nothing is cached: each [`load`](TemplateSource::load) re-reads the disk.
///
/// # Example
///
/// ```no_run
/// use trellis_adapters::ManifestTemplateLoader;
/// use trellis_core::application::ports::TemplateSource;
///
/// let loader = ManifestTemplateLoader::new("./layout.toml");
/// let template = loader.load()?;
/// println!("{} files", template.file_count());
/// # Ok::<(), trellis_core::error::TrellisError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ManifestTemplateLoader {
    source: PathBuf,
}

impl ManifestTemplateLoader {
    /// Create a loader pointed at a manifest file or template directory.
    ///
    /// The path does not need to exist yet; [`load`](TemplateSource::load)
    /// reports it if it is missing when called.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Load the template, dispatching on what `source` points at.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTemplate`] if the source is missing,
    /// unreadable, unparseable or contains a non-UTF-8 file, and any other
    /// [`DomainError`] the template itself violates.
    #[instrument(skip(self), fields(source = %self.source.display()))]
    pub fn load_template(&self) -> Result<Template, DomainError> {
        let template = if self.source.is_dir() {
            self.load_from_dir(&self.source)?
        } else if self.source.is_file() {
            self.load_from_manifest(&self.source)?
        } else {
            return Err(DomainError::InvalidTemplate(format!(
                "template not found: {}",
                self.source.display()
            )));
        };

        debug!(
            name = template.name(),
            directories = template.directory_count(),
            files = template.file_count(),
            "loaded template"
        );
        Ok(template)
    }

    fn load_from_manifest(&self, path: &Path) -> Result<Template, DomainError> {
        let manifest = read_manifest(path)?;
        let builder = Template::builder().name(default_name(manifest.template.name.clone(), path));
        manifest.apply(builder).build()
    }

    /// Walk `dir` and collect files and empty directories.
    ///
    /// Entries are visited in file-name order so the resulting template, and
    /// therefore the generation order, is stable across platforms.
    fn load_from_dir(&self, dir: &Path) -> Result<Template, DomainError> {
        let manifest_path = dir.join(MANIFEST_FILE_NAME);
        let manifest = if manifest_path.is_file() {
            read_manifest(&manifest_path)?
        } else {
            TemplateManifest::default()
        };

        let builder = Template::builder().name(default_name(manifest.template.name.clone(), dir));
        let mut builder = manifest.apply(builder);

        for walk_entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
            let walk_entry = walk_entry
                .map_err(|e| DomainError::InvalidTemplate(format!("directory walk error: {e}")))?;
            let abs_path = walk_entry.path();
            let rel_raw = abs_path.strip_prefix(dir).map_err(|_| {
                DomainError::InvalidTemplate(format!(
                    "failed to relativise '{}' against '{}'",
                    abs_path.display(),
                    dir.display()
                ))
            })?;

            // The manifest is a loader artefact, not a project file.
            if walk_entry.depth() == 1 && rel_raw == Path::new(MANIFEST_FILE_NAME) {
                continue;
            }

            let path_str = normalize_path(&rel_raw.to_string_lossy());

            if walk_entry.file_type().is_dir() {
                if is_empty_dir(abs_path)? {
                    builder = builder.directory(path_str);
                }
                continue;
            }

            if !walk_entry.file_type().is_file() {
                debug!(path = %path_str, "skipping non-regular file");
                continue;
            }

            let content = fs::read_to_string(abs_path).map_err(|e| {
                DomainError::InvalidTemplate(format!("failed to read file '{path_str}': {e}"))
            })?;
            builder = builder.file(path_str, content);
        }

        builder.build()
    }
}

impl TemplateSource for ManifestTemplateLoader {
    fn load(&self) -> TrellisResult<Template> {
        Ok(self.load_template()?)
    }

    fn describe(&self) -> String {
        format!("template '{}'", self.source.display())
    }
}

fn read_manifest(path: &Path) -> Result<TemplateManifest, DomainError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        DomainError::InvalidTemplate(format!("failed to read '{}': {e}", path.display()))
    })?;
    TemplateManifest::parse(&raw, path)
}

fn is_empty_dir(path: &Path) -> Result<bool, DomainError> {
    let mut entries = fs::read_dir(path).map_err(|e| {
        DomainError::InvalidTemplate(format!(
            "failed to read directory '{}': {e}",
            path.display()
        ))
    })?;
    Ok(entries.next().is_none())
}

/// Explicit name, or the source's file stem.
fn default_name(explicit: Option<String>, source: &Path) -> String {
    explicit
        .or_else(|| {
            source
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "template".into())
}

/// Normalise a filesystem path to forward slashes so Windows and Unix paths
/// compare identically throughout the loader.
fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
