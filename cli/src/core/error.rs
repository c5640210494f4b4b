//! # JakeStack Generator Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the generator. Failures
//! fall into three groups:
//! - Precondition failures (invalid or missing project name, destination exists
//!   or nested inside the template), detected before any file is written.
//! - Filesystem failures during materialization, which abort the whole run.
//! - Configuration and prompt failures, reported before generation starts.
//!
//! Installer failures are deliberately absent: they are modelled as an
//! outcome value in `common::process` and only ever produce a warning.
//!
//! ## Architecture
//!
//! - `GeneratorError`: a `thiserror` enum naming each failure kind.
//! - `Result<T>`: an alias for `anyhow::Result<T>` so call sites can attach
//!   path context with `.with_context(...)`.
//!
//! ## Examples
//!
//! ```rust
//! if target.exists() {
//!     anyhow::bail!(GeneratorError::DestinationExists { name: name.to_string() });
//! }
//!
//! let bytes = fs::read(&path)
//!     .with_context(|| format!("Failed to read template file '{}'", path.display()))?;
//! ```
//!
use thiserror::Error; // Derive macro for std::error::Error

/// Custom error type for the generator.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Project name can only contain letters, numbers, dashes, and underscores (got '{name}').")]
    InvalidProjectName { name: String },

    #[error("Project name is required.")]
    MissingProjectName,

    #[error("Directory \"{name}\" already exists.")]
    DestinationExists { name: String },

    #[error("Project directory '{target}' would be created inside the template directory '{template}'.")]
    DestinationInsideTemplate { target: String, template: String },

    #[error("Template directory '{path}' not found.")]
    TemplateNotFound { path: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let exists = GeneratorError::DestinationExists {
            name: "demo".into(),
        };
        assert_eq!(exists.to_string(), "Directory \"demo\" already exists.");

        assert_eq!(
            GeneratorError::MissingProjectName.to_string(),
            "Project name is required."
        );

        let invalid = GeneratorError::InvalidProjectName {
            name: "my app".into(),
        };
        assert!(invalid
            .to_string()
            .starts_with("Project name can only contain letters, numbers, dashes, and underscores"));
        assert!(invalid.to_string().contains("'my app'"));

        let nested = GeneratorError::DestinationInsideTemplate {
            target: "/t/demo".into(),
            template: "/t".into(),
        };
        assert_eq!(
            nested.to_string(),
            "Project directory '/t/demo' would be created inside the template directory '/t'."
        );
    }

    #[test]
    fn test_error_survives_anyhow_downcast() {
        let err: anyhow::Error = GeneratorError::TemplateNotFound {
            path: "/nowhere".into(),
        }
        .into();
        let err = err.context("Failed to resolve template directory");
        assert!(matches!(
            err.downcast_ref::<GeneratorError>(),
            Some(GeneratorError::TemplateNotFound { .. })
        ));
    }
}
