//! # JakeStack Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Runs external commands for the generator, currently only the dependency
//! installer (`bun install` by default) inside the freshly created project.
//!
//! The installer is best effort. Instead of returning an error, [`run_in_dir`]
//! always reports a [`CommandOutcome`], and the caller decides how loudly to
//! complain. The project on disk is never touched by this module.
//!
//! ## Usage
//!
//! ```rust
//! match process::run_in_dir("bun", &["install".into()], &target_path) {
//!     CommandOutcome::Success => {}
//!     other => warn!("Installer did not finish: {}", other),
//! }
//! ```
//!
use std::fmt; // Display for outcomes
use std::path::Path; // Filesystem path type
use std::process::{Command, Stdio}; // Process spawning
use tracing::{debug, info}; // Logging utilities

/// Result of running an external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command ran and exited with status 0.
    Success,
    /// The program could not be found on `PATH`.
    NotFound { program: String },
    /// The command ran but exited unsuccessfully. `code` is `None` when it was
    /// killed by a signal.
    Exited { code: Option<i32> },
    /// The process could not be started.
    Spawn { reason: String },
}

impl CommandOutcome {
    /// True only for a zero exit status.
    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Success)
    }
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutcome::Success => write!(f, "completed successfully"),
            CommandOutcome::NotFound { program } => write!(f, "'{}' was not found on PATH", program),
            CommandOutcome::Exited { code: Some(code) } => write!(f, "exited with status {}", code),
            CommandOutcome::Exited { code: None } => write!(f, "terminated by a signal"),
            CommandOutcome::Spawn { reason } => write!(f, "could not be started: {}", reason),
        }
    }
}

/// # Run In Directory (`run_in_dir`)
///
/// Runs `program` with `args` using `dir` as the working directory. Standard
/// input, output and error are inherited so the user sees the installer's own
/// progress output.
///
/// ## Returns
/// * `CommandOutcome` - never an error; see the variants for what can happen.
pub fn run_in_dir(program: &str, args: &[String], dir: &Path) -> CommandOutcome {
    // --- Locate Program ---
    // Resolve on PATH first so "not installed" is distinguishable from a failed spawn.
    let resolved = match which::which(program) {
        Ok(path) => path,
        Err(e) => {
            debug!("Could not resolve '{}' on PATH: {}", program, e);
            return CommandOutcome::NotFound {
                program: program.to_string(),
            };
        }
    };
    info!(
        "Running '{}' {:?} in '{}'",
        resolved.display(),
        args,
        dir.display()
    );

    // --- Execute ---
    let status = Command::new(&resolved)
        .args(args)
        .current_dir(dir) // Run inside the new project.
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status();

    // --- Classify ---
    match status {
        Ok(status) if status.success() => CommandOutcome::Success,
        Ok(status) => CommandOutcome::Exited {
            code: status.code(),
        },
        Err(e) => CommandOutcome::Spawn {
            reason: e.to_string(),
        },
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_program_is_not_found() {
        let dir = tempdir().unwrap();
        let outcome = run_in_dir("definitely-not-an-installer-8f3a", &[], dir.path());
        assert_eq!(
            outcome,
            CommandOutcome::NotFound {
                program: "definitely-not-an-installer-8f3a".into()
            }
        );
        assert!(!outcome.is_success());
    }

    #[cfg(unix)]
    #[test]
    fn test_success_and_failure_status() {
        let dir = tempdir().unwrap();
        assert_eq!(run_in_dir("true", &[], dir.path()), CommandOutcome::Success);
        assert_eq!(
            run_in_dir("false", &[], dir.path()),
            CommandOutcome::Exited { code: Some(1) }
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_in_given_directory() {
        let dir = tempdir().unwrap();
        let outcome = run_in_dir(
            "sh",
            &["-c".into(), "touch installed.marker".into()],
            dir.path(),
        );
        assert!(outcome.is_success());
        assert!(dir.path().join("installed.marker").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_working_directory_is_spawn_error() {
        let dir = tempdir().unwrap();
        let outcome = run_in_dir("true", &[], &dir.path().join("gone"));
        assert!(matches!(outcome, CommandOutcome::Spawn { .. }));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(
            CommandOutcome::Exited { code: Some(2) }.to_string(),
            "exited with status 2"
        );
        assert_eq!(
            CommandOutcome::NotFound { program: "bun".into() }.to_string(),
            "'bun' was not found on PATH"
        );
    }
}
