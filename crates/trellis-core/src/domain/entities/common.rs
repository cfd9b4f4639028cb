use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::error::{DomainError, PathKind};

/// A template path guaranteed to stay inside the project root.
///
/// Invariant: relative, `/`-separated, and free of empty, `.` and `..`
/// segments. Enforced at construction, so a `TemplatePath` can always be
/// joined onto a root without escaping it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TemplatePath(String);

impl TemplatePath {
    /// Validate and normalize a raw path.
    ///
    /// Backslashes are treated as separators, and empty or `.` segments are
    /// dropped (`./src//a` becomes `src/a`).
    ///
    /// # Errors
    /// - [`DomainError::EmptyPath`] if nothing is left after normalizing
    /// - [`DomainError::AbsolutePathNotAllowed`] for rooted or drive paths
    /// - [`DomainError::PathEscapesRoot`] for any `..` segment
    pub fn parse(raw: &str, kind: PathKind) -> Result<Self, DomainError> {
        let normalized = raw.replace('\\', "/");

        if normalized.trim().is_empty() {
            return Err(DomainError::EmptyPath { kind });
        }

        if is_absolute(&normalized) {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: raw.to_string(),
            });
        }

        let mut segments = Vec::new();
        for segment in normalized.split('/') {
            match segment {
                "" | "." => continue,
                ".." => {
                    return Err(DomainError::PathEscapesRoot {
                        path: raw.to_string(),
                    });
                }
                s => segments.push(s),
            }
        }

        if segments.is_empty() {
            return Err(DomainError::EmptyPath { kind });
        }

        Ok(Self(segments.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Platform path for joining onto a root.
    pub fn to_path(&self) -> PathBuf {
        self.0.split('/').collect()
    }

    /// Parent directory, or `None` for a top-level entry.
    pub fn parent(&self) -> Option<TemplatePath> {
        self.0
            .rsplit_once('/')
            .map(|(parent, _)| Self(parent.to_string()))
    }

    /// Segment-wise prefix test (`src/a` starts with `src`, not with `sr`).
    pub fn starts_with(&self, other: &TemplatePath) -> bool {
        self.0 == other.0
            || (self.0.len() > other.0.len()
                && self.0.starts_with(&other.0)
                && self.0.as_bytes()[other.0.len()] == b'/')
    }

    /// `true` if `self` is a strict ancestor of `other`.
    pub fn is_ancestor_of(&self, other: &TemplatePath) -> bool {
        self != other && other.starts_with(self)
    }
}

fn is_absolute(normalized: &str) -> bool {
    if normalized.starts_with('/') || Path::new(normalized).is_absolute() {
        return true;
    }
    // `C:` style drive prefixes are rejected on every platform so a template
    // behaves the same wherever it is generated.
    let bytes = normalized.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

impl AsRef<str> for TemplatePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplatePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(raw: &str) -> Result<TemplatePath, DomainError> {
        TemplatePath::parse(raw, PathKind::File)
    }

    #[test]
    fn plain_relative_path_is_kept() {
        assert_eq!(file("src/a/readme.txt").unwrap().as_str(), "src/a/readme.txt");
    }

    #[test]
    fn normalizes_separators_and_dot_segments() {
        assert_eq!(file("./src//a/./b").unwrap().as_str(), "src/a/b");
        assert_eq!(file("src\\a\\b.txt").unwrap().as_str(), "src/a/b.txt");
    }

    #[test]
    fn empty_paths_are_rejected() {
        for raw in ["", "   ", ".", "./", "//"] {
            // "//" is rooted, so it is reported as absolute instead.
            let err = file(raw).unwrap_err();
            assert!(
                matches!(
                    err,
                    DomainError::EmptyPath { .. } | DomainError::AbsolutePathNotAllowed { .. }
                ),
                "{raw:?} -> {err:?}"
            );
        }
        assert_eq!(
            TemplatePath::parse("", PathKind::Directory).unwrap_err(),
            DomainError::EmptyPath {
                kind: PathKind::Directory
            }
        );
    }

    #[test]
    fn absolute_paths_are_rejected() {
        for raw in ["/etc/passwd", "\\windows", "C:/x", "c:\\x"] {
            assert!(
                matches!(file(raw), Err(DomainError::AbsolutePathNotAllowed { .. })),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn parent_traversal_is_rejected() {
        for raw in ["../secret", "src/../../x", "a/..", "..\\x"] {
            assert!(
                matches!(file(raw), Err(DomainError::PathEscapesRoot { .. })),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn dotted_names_are_not_traversal() {
        assert!(file(".github/workflows/ci.yml").is_ok());
        assert!(file("..hidden").is_ok());
        assert!(file("a/...").is_ok());
    }

    #[test]
    fn parent_walks_up_one_segment() {
        let p = file("src/a/readme.txt").unwrap();
        assert_eq!(p.parent().unwrap().as_str(), "src/a");
        assert_eq!(p.parent().unwrap().parent().unwrap().as_str(), "src");
        assert!(file("readme.txt").unwrap().parent().is_none());
    }

    #[test]
    fn starts_with_is_segment_aware() {
        let src = file("src").unwrap();
        assert!(file("src/a").unwrap().starts_with(&src));
        assert!(src.starts_with(&src));
        assert!(!file("srcs/a").unwrap().starts_with(&src));
        assert!(src.is_ancestor_of(&file("src/a").unwrap()));
        assert!(!src.is_ancestor_of(&src));
    }

    #[test]
    fn to_path_uses_platform_separators() {
        let p = file("src/a/readme.txt").unwrap();
        assert_eq!(
            p.to_path(),
            PathBuf::from("src").join("a").join("readme.txt")
        );
    }
}
