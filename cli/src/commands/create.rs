//! # JakeStack Create Command
//!
//! File: cli/src/commands/create.rs
//!
//! ## Overview
//!
//! This module implements project creation, the generator's only command:
//! - Getting a project name (positional argument or interactive prompt)
//! - Validating the name and checking the destination does not exist
//! - Materializing the template into the new directory
//! - Running the dependency installer, downgrading any failure to a warning
//! - Printing the next steps
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Load configuration (`core::config`)
//! 2. Resolve and validate the project name (`core::naming`)
//! 3. Resolve the target path and refuse to continue if it exists
//! 4. Resolve the template root and refuse a target inside it
//! 5. Create the project directory and materialize the template (`core::templating`)
//! 6. Run the installer unless disabled (`common::process`)
//! 7. Print the completion message (`common::ui`)
//!
//! Steps 2–4 happen before anything is written, so a rejected name or an
//! existing destination leaves the filesystem untouched.
//!
//! ## Examples
//!
//! ```bash
//! # Create ./my-app
//! create-jakestack my-app
//!
//! # Prompt for the name, create under ~/projects, skip `bun install`
//! create-jakestack --output ~/projects --skip-install
//! ```
//!
use crate::common::{fs::io, process, ui}; // Shared helpers
use crate::core::config::{self, Config}; // Configuration loading and template lookup
use crate::core::error::{GeneratorError, Result}; // Generator error type and Result alias
use crate::core::naming::ProjectName; // Validated project names
use crate::core::templating::{self, MaterializeReport}; // Template materializer
use anyhow::Context; // For adding context to errors
use clap::Args; // Argument parsing derive
use std::{
    env, // Current working directory
    ffi::OsString, // Path components not yet on disk
    fs, // Path canonicalization
    path::{Path, PathBuf}, // Filesystem path types
};
use tracing::{debug, info, warn}; // Logging utilities

/// # Create Arguments (`CreateArgs`)
///
/// Command-line arguments for creating a project.
#[derive(Args, Debug, Clone, Default)]
pub struct CreateArgs {
    /// Name of the project to create. Prompted for when omitted.
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Parent directory for the new project. Defaults to the current directory.
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Template directory to copy instead of the bundled one.
    #[arg(long, short = 't', value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Do not run the dependency installer after copying the template.
    #[arg(long)]
    pub skip_install: bool,
}

/// Everything resolved before the first write.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePlan {
    pub name: ProjectName,
    pub template_dir: PathBuf,
    pub target_path: PathBuf,
}

/// What happened to the installer step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStep {
    Skipped,
    Completed,
    Failed(process::CommandOutcome),
}

/// # Handle Create Command (`handle_create`)
///
/// Runs the whole flow described in the module docs. Errors are returned for
/// the caller to print; the installer never produces an error.
pub fn handle_create(args: CreateArgs) -> Result<()> {
    // --- Configuration ---
    let cfg = config::load_config().context("Failed to load configuration")?;

    // --- Project Name ---
    // Positional argument wins; otherwise ask on the terminal.
    let raw_name = match &args.project_name {
        Some(name) => name.clone(),
        None => ui::prompts::prompt_project_name()?,
    };

    // --- Preconditions (nothing written yet) ---
    let plan = plan_create(&args, &raw_name, &cfg)?;
    info!(
        "Creating project '{}' at '{}' from '{}'",
        plan.name,
        plan.target_path.display(),
        plan.template_dir.display()
    );

    // --- Generation ---
    ui::print_banner(plan.name.as_str());
    let report = execute_plan(&plan)?;
    debug!("Materialize report: {:?}", report);

    // --- Dependencies ---
    // Never fails the run; the outcome only decides what gets printed.
    let install_step = if args.skip_install || !cfg.install.enabled {
        info!("Skipping dependency installation.");
        InstallStep::Skipped
    } else {
        ui::print_step("Installing dependencies...");
        run_installer(&cfg, &plan.target_path)
    };

    // --- Summary ---
    let install_command = cfg.install.display_command();
    // Listed in the next steps unless it already ran successfully.
    let pending_install = match &install_step {
        InstallStep::Completed => None,
        InstallStep::Skipped => Some(install_command.as_str()),
        InstallStep::Failed(outcome) => {
            debug!("Installer outcome: {:?}", outcome);
            ui::print_install_warning(&install_command);
            Some(install_command.as_str())
        }
    };
    ui::print_completion_message(&plan.target_path, pending_install);
    Ok(())
}

/// # Plan Create (`plan_create`)
///
/// Validates the name, resolves the target and template paths, and checks the
/// target does not exist yet and does not lie inside the template. Writes nothing.
pub fn plan_create(args: &CreateArgs, raw_name: &str, cfg: &Config) -> Result<CreatePlan> {
    // Same rules for positional and prompted names.
    let name = ProjectName::parse(raw_name)?;

    let target_path = resolve_target_path(args.output.as_deref(), &name)?;
    debug!("Resolved target project path: {}", target_path.display());
    // Any existing entry counts, including a plain file.
    if target_path.exists() {
        anyhow::bail!(GeneratorError::DestinationExists {
            name: name.to_string()
        });
    }

    let template_dir = config::resolve_template_dir(args.template_dir.as_deref(), cfg)
        .context("Failed to locate the project template")?;

    // Compare resolved paths so `.`, `..` and symlinks cannot hide the nesting.
    let template_root = fs::canonicalize(&template_dir).with_context(|| {
        format!(
            "Failed to resolve template directory '{}'",
            template_dir.display()
        )
    })?;
    let resolved_target = resolve_missing_path(&target_path)?;
    debug!(
        "Checking '{}' against template root '{}'",
        resolved_target.display(),
        template_root.display()
    );
    if resolved_target.starts_with(&template_root) {
        anyhow::bail!(GeneratorError::DestinationInsideTemplate {
            target: target_path.display().to_string(),
            template: template_dir.display().to_string(),
        });
    }

    Ok(CreatePlan {
        name,
        template_dir,
        target_path,
    })
}

/// Creates the project root and copies the template into it.
pub fn execute_plan(plan: &CreatePlan) -> Result<MaterializeReport> {
    // `--output` may name a directory that does not exist yet.
    if let Some(parent) = plan.target_path.parent() {
        io::ensure_dir_exists(parent)?;
    }
    // Fails if the directory appeared since `plan_create` looked.
    io::create_new_dir(&plan.target_path)?;

    ui::print_step("Copying template files...");
    templating::materialize(&plan.template_dir, &plan.target_path, plan.name.as_str())
        .context("Failed to copy template files")
}

/// Runs the configured installer inside the new project.
fn run_installer(cfg: &Config, target_path: &Path) -> InstallStep {
    let outcome = process::run_in_dir(&cfg.install.program, &cfg.install.args, target_path);
    if outcome.is_success() {
        return InstallStep::Completed;
    }
    warn!(
        "Dependency installation '{}' {}",
        cfg.install.display_command(),
        outcome
    );
    InstallStep::Failed(outcome)
}

/// `<output or cwd>/<name>`, with a relative `--output` resolved against the
/// current directory.
fn resolve_target_path(output: Option<&Path>, name: &ProjectName) -> Result<PathBuf> {
    let base = match output {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => env::current_dir()
            .context("Failed to get current directory")?
            .join(dir),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    Ok(base.join(name.as_str()))
}

/// Canonical form of a path whose tail may not exist yet.
///
/// The deepest existing ancestor is canonicalized and the missing components
/// are appended back unchanged.
fn resolve_missing_path(path: &Path) -> Result<PathBuf> {
    let mut missing: Vec<OsString> = Vec::new();
    let mut current = path;
    loop {
        if current.exists() {
            let mut resolved = fs::canonicalize(current)
                .with_context(|| format!("Failed to resolve path '{}'", current.display()))?;
            // Missing components were collected leaf first.
            for component in missing.iter().rev() {
                resolved.push(component);
            }
            return Ok(resolved);
        }
        match (current.parent(), current.file_name()) {
            (Some(parent), Some(file_name)) => {
                missing.push(file_name.to_os_string());
                current = parent;
            }
            // Nothing on the way up exists (or a `..` under a missing directory).
            _ => return Ok(path.to_path_buf()),
        }
    }
}
