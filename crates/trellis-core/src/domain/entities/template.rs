//! Template aggregate: the declarative description of a project tree.
//!
//! A [`Template`] holds two things:
//!
//! - a **directory set**: ordered relative directory paths that must exist
//!   after generation (parents need not be listed), and
//! - a **file map**: relative file path → literal content, in insertion order.
//!
//! ```text
//! Template
//! ├── name
//! ├── directories: Vec<TemplatePath>        (deduplicated, ordered)
//! └── files:       Vec<TemplateFile>        (unique paths, ordered)
//!      └── TemplateFile { path, content }
//! ```
//!
//! Templates are immutable once built. All validation happens in
//! [`TemplateBuilder::build`], so a `Template` value is always safe to hand to
//! the materializer: no empty, absolute, or root-escaping paths, no duplicate
//! files, and no file standing where a directory has to be created.
//!
//! Content is opaque text. No substitution or interpretation happens anywhere
//! in the engine.

use std::collections::HashSet;

use super::common::TemplatePath;
use crate::domain::error::{DomainError, PathKind};

/// One entry of the file map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    path: TemplatePath,
    content: String,
}

impl TemplateFile {
    pub fn path(&self) -> &TemplatePath {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Immutable template aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    directories: Vec<TemplatePath>,
    files: Vec<TemplateFile>,
}

impl Template {
    /// Start building a template.
    pub fn builder() -> TemplateBuilder {
        TemplateBuilder::default()
    }

    /// Human-readable name, used in logs and CLI output.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The directory set, in declaration order.
    pub fn list_directories(&self) -> &[TemplatePath] {
        &self.directories
    }

    /// The file map as `(path, content)` pairs, in declaration order.
    pub fn list_files(&self) -> impl ExactSizeIterator<Item = (&TemplatePath, &str)> {
        self.files.iter().map(|f| (&f.path, f.content.as_str()))
    }

    /// The file map as entries.
    pub fn files(&self) -> &[TemplateFile] {
        &self.files
    }

    /// Parent directories of files that the directory set does not cover.
    ///
    /// A parent is covered when it is declared, or when it is an ancestor of a
    /// declared directory (creating the descendant creates it too). Returned
    /// in first-occurrence order without duplicates.
    pub fn implied_directories(&self) -> Vec<TemplatePath> {
        let mut seen = HashSet::new();
        self.files
            .iter()
            .filter_map(|f| f.path.parent())
            .filter(|parent| !self.directories.iter().any(|d| d.starts_with(parent)))
            .filter(|parent| seen.insert(parent.clone()))
            .collect()
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Total content size in bytes.
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(TemplateFile::size).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }

    /// Structural validation of an assembled template.
    ///
    /// Paths are already individually valid; this checks how they relate to
    /// each other.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut file_paths = HashSet::new();
        for file in &self.files {
            if !file_paths.insert(&file.path) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.to_string(),
                });
            }
        }

        for file in &self.files {
            let blocked = self
                .directories
                .iter()
                .find(|dir| dir.starts_with(&file.path))
                .or_else(|| {
                    self.files
                        .iter()
                        .map(|other| &other.path)
                        .find(|other| file.path.is_ancestor_of(other))
                });

            if let Some(other) = blocked {
                return Err(DomainError::PathConflict {
                    file: file.path.to_string(),
                    other: other.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Builder for [`Template`].
///
/// Paths are collected raw and validated together in [`build`](Self::build),
/// so the first invalid entry is reported with its original spelling.
#[derive(Debug, Default)]
pub struct TemplateBuilder {
    name: Option<String>,
    directories: Vec<String>,
    files: Vec<(String, String)>,
}

impl TemplateBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Declare a directory that must exist after generation.
    pub fn directory(mut self, path: impl Into<String>) -> Self {
        self.directories.push(path.into());
        self
    }

    pub fn directories<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.directories.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Add a file with literal content.
    pub fn file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.push((path.into(), content.into()));
        self
    }

    /// Validate every path and the overall structure.
    ///
    /// Duplicate directory entries collapse onto their first occurrence;
    /// duplicate file entries are an error because their contents would
    /// compete.
    pub fn build(self) -> Result<Template, DomainError> {
        let mut seen = HashSet::new();
        let mut directories = Vec::with_capacity(self.directories.len());
        for raw in &self.directories {
            let path = TemplatePath::parse(raw, PathKind::Directory)?;
            if seen.insert(path.clone()) {
                directories.push(path);
            }
        }

        let files = self
            .files
            .into_iter()
            .map(|(raw, content)| {
                TemplatePath::parse(&raw, PathKind::File).map(|path| TemplateFile { path, content })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let template = Template {
            name: self.name.unwrap_or_else(|| "template".into()),
            directories,
            files,
        };

        template.validate()?;
        Ok(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[TemplatePath]) -> Vec<&str> {
        items.iter().map(TemplatePath::as_str).collect()
    }

    #[test]
    fn builder_preserves_declaration_order() {
        let t = Template::builder()
            .directories(["src/b", "src/a", "docs"])
            .file("z.txt", "z")
            .file("a.txt", "a")
            .build()
            .unwrap();

        assert_eq!(paths(t.list_directories()), ["src/b", "src/a", "docs"]);
        let files: Vec<_> = t.list_files().map(|(p, c)| (p.as_str(), c)).collect();
        assert_eq!(files, [("z.txt", "z"), ("a.txt", "a")]);
    }

    #[test]
    fn duplicate_directories_collapse() {
        let t = Template::builder()
            .directories(["src", "docs", "./src", "src/"])
            .build()
            .unwrap();
        assert_eq!(paths(t.list_directories()), ["src", "docs"]);
    }

    #[test]
    fn duplicate_files_are_rejected() {
        let err = Template::builder()
            .file("README.md", "one")
            .file("./README.md", "two")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::DuplicatePath {
                path: "README.md".into()
            }
        );
    }

    #[test]
    fn escaping_file_path_is_rejected() {
        let err = Template::builder()
            .directory("src")
            .file("../secret", "x")
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::PathEscapesRoot { path } if path == "../secret"));
    }

    #[test]
    fn empty_and_absolute_file_paths_are_rejected() {
        assert!(matches!(
            Template::builder().file("", "x").build(),
            Err(DomainError::EmptyPath {
                kind: PathKind::File
            })
        ));
        assert!(matches!(
            Template::builder().file("/tmp/x", "x").build(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn invalid_directory_is_rejected() {
        assert!(matches!(
            Template::builder().directory("src/../..").build(),
            Err(DomainError::PathEscapesRoot { .. })
        ));
    }

    #[test]
    fn file_shadowing_a_directory_is_a_conflict() {
        let err = Template::builder()
            .directory("src/a")
            .file("src", "not a dir")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::PathConflict {
                file: "src".into(),
                other: "src/a".into()
            }
        );
    }

    #[test]
    fn file_under_a_file_is_a_conflict() {
        let err = Template::builder()
            .file("notes", "x")
            .file("notes/today.md", "y")
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::PathConflict { file, .. } if file == "notes"));
    }

    #[test]
    fn implied_directories_skip_declared_and_covered_parents() {
        let t = Template::builder()
            .directories(["src/a/deep"])
            .file("src/a/readme.txt", "covered by src/a/deep")
            .file("scripts/build.sh", "implied")
            .file("scripts/test.sh", "implied again")
            .file("top.txt", "no parent")
            .file("lib/x/y.rs", "implied")
            .build()
            .unwrap();

        assert_eq!(paths(&t.implied_directories()), ["scripts", "lib/x"]);
    }

    #[test]
    fn counts_and_sizes() {
        let t = Template::builder()
            .name("demo")
            .directories(["a", "b"])
            .file("a/x", "hello")
            .build()
            .unwrap();

        assert_eq!(t.name(), "demo");
        assert_eq!(t.directory_count(), 2);
        assert_eq!(t.file_count(), 1);
        assert_eq!(t.total_bytes(), 5);
        assert!(!t.is_empty());
        assert!(Template::builder().build().unwrap().is_empty());
    }
}
