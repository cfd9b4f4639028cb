//! Materializer - applies a template to a filesystem.
//!
//! One `generate` call is a single linear pass:
//!
//! ```text
//! NotStarted ──► DirectoriesEnsured ──► FilesWritten ──► Completed
//!      │                 │
//!      └──── Failed ◄────┘   (first unrecoverable error, nothing rolled back)
//! ```
//!
//! 1. Ensure the root and every declared directory (recursive, idempotent)
//! 2. For each file: ensure its parent chain, then replace its content
//! 3. Report counts
//!
//! Generation is not transactional. A failure leaves whatever was already
//! created in place; running `generate` again after fixing the cause converges
//! to the same end state.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{Span, debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::ports::Filesystem,
    domain::{GenerationPlan, Template, resolve},
    error::{TrellisError, TrellisResult},
};

/// Summary of a successful generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    /// Correlates the log events of one pass.
    pub run_id: Uuid,
    pub root: PathBuf,
    /// Whether the root was already present before the pass.
    pub root_existed: bool,
    /// Declared directories ensured in step 1.
    pub directories_ensured: usize,
    /// File parents outside the directory set, ensured in step 2.
    pub implied_directories: usize,
    pub files_written: usize,
    pub bytes_written: usize,
}

/// Progress of a generation pass, used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    NotStarted,
    DirectoriesEnsured,
    FilesWritten,
    Completed,
    Failed,
}

impl fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "not-started"),
            Self::DirectoriesEnsured => write!(f, "directories-ensured"),
            Self::FilesWritten => write!(f, "files-written"),
            Self::Completed => write!(f, "completed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Main generation service.
///
/// Holds no state between calls; every `generate` is independent.
pub struct Materializer {
    filesystem: Box<dyn Filesystem>,
}

impl Materializer {
    /// Create a new materializer over the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use trellis_core::application::Materializer;
    ///
    /// let materializer = Materializer::new(Box::new(filesystem)); // impl Filesystem
    /// let result = materializer.generate(&template, "./my-project")?;
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Materialize `template` under `root`.
    ///
    /// `root` does not need to exist. Existing directories are kept, existing
    /// files at template paths are overwritten.
    ///
    /// # Errors
    ///
    /// `ApplicationError::FileSystem` for the first directory create or file
    /// write that fails. Everything done before the failure stays on disk.
    #[instrument(
        skip_all,
        fields(
            run_id = tracing::field::Empty,
            template = %template.name(),
            root = %root.as_ref().display()
        )
    )]
    pub fn generate(
        &self,
        template: &Template,
        root: impl AsRef<Path>,
    ) -> TrellisResult<GenerationResult> {
        let root = root.as_ref();
        let run_id = Uuid::new_v4();
        Span::current().record("run_id", tracing::field::display(run_id));

        info!(
            directories = template.directory_count(),
            files = template.file_count(),
            "Generation started"
        );

        let mut phase = GenerationPhase::NotStarted;
        let root_existed = self.filesystem.exists(root);

        // 1. Directories
        let directories_ensured = self
            .ensure_directories(template, root)
            .inspect_err(|e| report_failure(phase, e))?;
        phase = GenerationPhase::DirectoriesEnsured;
        debug!(%phase, directories_ensured, "Directories ensured");

        // 2. Files
        let bytes_written = self
            .write_files(template, root)
            .inspect_err(|e| report_failure(phase, e))?;
        phase = GenerationPhase::FilesWritten;
        debug!(%phase, files = template.file_count(), "Files written");

        // 3. Completion
        phase = GenerationPhase::Completed;
        let result = GenerationResult {
            run_id,
            root: root.to_path_buf(),
            root_existed,
            directories_ensured,
            implied_directories: template.implied_directories().len(),
            files_written: template.file_count(),
            bytes_written,
        };

        info!(
            %phase,
            directories = result.directories_ensured,
            implied = result.implied_directories,
            files = result.files_written,
            bytes = result.bytes_written,
            "Generation completed successfully"
        );
        Ok(result)
    }

    /// Describe what `generate` would do, without touching the filesystem.
    pub fn plan(template: &Template, root: impl AsRef<Path>) -> GenerationPlan {
        GenerationPlan::for_template(template, root.as_ref())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Step 1: the root, then every declared directory.
    fn ensure_directories(&self, template: &Template, root: &Path) -> TrellisResult<usize> {
        self.filesystem.create_dir_all(root)?;

        for dir in template.list_directories() {
            let path = resolve(root, dir);
            debug!(path = %path.display(), "Ensuring directory");
            self.filesystem.create_dir_all(&path)?;
        }

        Ok(template.directory_count())
    }

    /// Step 2: every file, parent chain first. Returns bytes written.
    fn write_files(&self, template: &Template, root: &Path) -> TrellisResult<usize> {
        let mut bytes = 0;

        for (rel, content) in template.list_files() {
            if let Some(parent) = rel.parent() {
                self.filesystem.create_dir_all(&resolve(root, &parent))?;
            }

            let path = resolve(root, rel);
            self.filesystem.write_file(&path, content)?;
            debug!(path = %path.display(), bytes = content.len(), "Wrote file");
            bytes += content.len();
        }

        Ok(bytes)
    }
}

fn report_failure(last_completed: GenerationPhase, error: &TrellisError) {
    warn!(
        phase = %GenerationPhase::Failed,
        %last_completed,
        %error,
        "Generation failed; completed work was left in place"
    );
}
