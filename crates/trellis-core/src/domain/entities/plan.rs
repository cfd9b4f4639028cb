use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{common::TemplatePath, template::Template};

/// Ordered list of filesystem actions a generation pass would perform.
///
/// This is the dry-run view of a template: it is computed from the template
/// and root alone and never looks at the filesystem. It contains no business
/// logic, only data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationPlan {
    root: PathBuf,
    actions: Vec<PlannedAction>,
}

/// One step of a [`GenerationPlan`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PlannedAction {
    EnsureDirectory {
        path: PathBuf,
        reason: DirectoryReason,
    },
    WriteFile {
        path: PathBuf,
        bytes: usize,
    },
}

/// Why a directory appears in the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectoryReason {
    /// The generation root itself.
    Root,
    /// Listed in the template's directory set.
    Declared,
    /// Parent of a file, not covered by the directory set.
    Implied,
}

impl GenerationPlan {
    /// Lay out the actions in the same order `generate` performs them:
    /// root, declared directories, then each file preceded by its implied
    /// parent the first time that parent is needed.
    pub fn for_template(template: &Template, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let mut actions = Vec::with_capacity(
            1 + template.directory_count() + 2 * template.file_count(),
        );

        actions.push(PlannedAction::EnsureDirectory {
            path: root.clone(),
            reason: DirectoryReason::Root,
        });

        for dir in template.list_directories() {
            actions.push(PlannedAction::EnsureDirectory {
                path: resolve(&root, dir),
                reason: DirectoryReason::Declared,
            });
        }

        let implied: HashSet<TemplatePath> = template.implied_directories().into_iter().collect();
        let mut announced = HashSet::new();

        for (path, content) in template.list_files() {
            if let Some(parent) = path.parent() {
                if implied.contains(&parent) && announced.insert(parent.clone()) {
                    actions.push(PlannedAction::EnsureDirectory {
                        path: resolve(&root, &parent),
                        reason: DirectoryReason::Implied,
                    });
                }
            }
            actions.push(PlannedAction::WriteFile {
                path: resolve(&root, path),
                bytes: content.len(),
            });
        }

        Self { root, actions }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn actions(&self) -> &[PlannedAction] {
        &self.actions
    }

    /// Directories to ensure, including the root.
    pub fn directory_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| matches!(a, PlannedAction::EnsureDirectory { .. }))
            .count()
    }

    pub fn file_count(&self) -> usize {
        self.actions.len() - self.directory_count()
    }

    pub fn total_bytes(&self) -> usize {
        self.actions
            .iter()
            .map(|a| match a {
                PlannedAction::WriteFile { bytes, .. } => *bytes,
                PlannedAction::EnsureDirectory { .. } => 0,
            })
            .sum()
    }
}

/// Join a template path onto the generation root.
pub fn resolve(root: &Path, path: &TemplatePath) -> PathBuf {
    root.join(path.to_path())
}
