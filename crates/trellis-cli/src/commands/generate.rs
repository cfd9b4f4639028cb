//! Implementation of the `trellis [ROOT]` command.
//!
//! Responsibility: pick a template source, hand the template to the core
//! materializer, and display results. No business logic lives here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use trellis_adapters::{BuiltinTemplate, LocalFilesystem, ManifestTemplateLoader};
use trellis_core::{
    application::{GenerationResult, Materializer, ports::TemplateSource},
    domain::{GenerationPlan, PlannedAction, Template},
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute a generation run.
///
/// Dispatch sequence:
/// 1. Resolve the root (argument or current directory)
/// 2. Pick the template source (`--template`, then config, then built-in)
/// 3. Load and validate the template; nothing is written if this fails
/// 4. Early-exit with the plan if `--dry-run`
/// 5. Materialize via `Materializer` over the local filesystem
/// 6. Report the result
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Resolve root
    let root = resolve_root(args.root)?;

    // 2. Pick source
    let source = select_source(args.template.or(config.template.path));
    debug!(source = %source.describe(), root = %root.display(), "Source selected");

    // 3. Load
    let template = source.load()?;

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        let plan = Materializer::plan(&template, &root);
        return report_plan(&output, &template, &source.describe(), &plan);
    }

    // 5. Materialize
    let materializer = Materializer::new(Box::new(LocalFilesystem::new()));

    if output.format() != OutputFormat::Json {
        output.header(&format!(
            "Generating '{}' into {}",
            template.name(),
            root.display()
        ))?;
    }
    info!(template = %template.name(), root = %root.display(), "Generation requested");

    let result = materializer.generate(&template, &root)?;

    // 6. Report
    report_result(&output, &template, &source.describe(), &result)
}

// ── Input resolution ──────────────────────────────────────────────────────────

/// Root argument, or the current working directory when absent.
pub fn resolve_root(arg: Option<PathBuf>) -> CliResult<PathBuf> {
    match arg {
        Some(path) if path.as_os_str().is_empty() => Err(CliError::InvalidInput {
            message: "ROOT must not be empty".into(),
            source: None,
        }),
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| CliError::IoError {
            message: "failed to determine the current directory".into(),
            source: e,
        }),
    }
}

/// Manifest loader for an explicit path, otherwise the built-in layout.
pub fn select_source(template: Option<PathBuf>) -> Box<dyn TemplateSource> {
    match template {
        Some(path) => Box::new(ManifestTemplateLoader::new(path)),
        None => Box::new(BuiltinTemplate::new()),
    }
}

// ── Reporting ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct GenerationReport<'a> {
    template: &'a str,
    source: &'a str,
    #[serde(flatten)]
    result: &'a GenerationResult,
}

#[derive(Serialize)]
struct PlanReport<'a> {
    template: &'a str,
    source: &'a str,
    dry_run: bool,
    #[serde(flatten)]
    plan: &'a GenerationPlan,
}

fn report_result(
    output: &OutputManager,
    template: &Template,
    source: &str,
    result: &GenerationResult,
) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(&GenerationReport {
            template: template.name(),
            source,
            result,
        })?;
        return Ok(());
    }

    output.success(&format!(
        "Generated {} directories and {} files in {}",
        result.directories_ensured + result.implied_directories,
        result.files_written,
        result.root.display()
    ))?;
    output.info(&format!(
        "{} bytes written from {source} (run {})",
        result.bytes_written, result.run_id
    ))?;
    Ok(())
}

fn report_plan(
    output: &OutputManager,
    template: &Template,
    source: &str,
    plan: &GenerationPlan,
) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(&PlanReport {
            template: template.name(),
            source,
            dry_run: true,
            plan,
        })?;
        return Ok(());
    }

    output.header(&format!(
        "Dry run: '{}' into {} (nothing will be written)",
        template.name(),
        plan.root().display()
    ))?;
    for action in plan.actions() {
        output.print(&describe_action(action, plan.root()))?;
    }
    output.info(&format!(
        "{} directories, {} files, {} bytes",
        plan.directory_count(),
        plan.file_count(),
        plan.total_bytes()
    ))?;
    Ok(())
}

/// One plan line, with the path shown relative to the root.
fn describe_action(action: &PlannedAction, root: &Path) -> String {
    match action {
        PlannedAction::EnsureDirectory { path, .. } => {
            format!("  mkdir  {}/", relative(path, root))
        }
        PlannedAction::WriteFile { path, bytes } => {
            format!("  write  {} ({bytes} bytes)", relative(path, root))
        }
    }
}

fn relative(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".into(),
        Ok(rel) => rel.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
