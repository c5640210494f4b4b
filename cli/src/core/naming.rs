//! # JakeStack Project Names
//!
//! File: cli/src/core/naming.rs
//!
//! ## Overview
//!
//! A project name is used twice: as the destination directory name and as the
//! value substituted for `{{PROJECT_NAME}}` in every template file. It is
//! restricted to ASCII letters, digits, dashes and underscores, which keeps it
//! safe as a single path component and as an identifier-ish string inside the
//! generated sources.
//!
//! `ProjectName` can only be built through [`ProjectName::parse`], so any code
//! holding one knows the name was validated.
//!
use crate::core::error::{GeneratorError, Result}; // Generator error type and Result alias
use regex::Regex; // Pattern matching for the allowed character class
use std::fmt; // Display implementation
use std::sync::OnceLock; // Compile the pattern once per process

/// Allowed project name pattern.
pub const PROJECT_NAME_PATTERN: &str = r"^[a-zA-Z0-9\-_]+$";

/// Default suggestion offered by the interactive prompt.
pub const DEFAULT_PROJECT_NAME: &str = "my-jakestack-app";

/// Compiled form of `PROJECT_NAME_PATTERN`.
fn name_regex() -> &'static Regex {
    // The pattern is a constant, so compilation cannot fail at runtime.
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PROJECT_NAME_PATTERN).expect("project name pattern is valid"))
}

/// A validated project name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validates `raw` and wraps it.
    ///
    /// An empty string is reported as `MissingProjectName`; anything else
    /// outside the allowed character class as `InvalidProjectName`. No
    /// trimming is done, so `" demo"` is rejected rather than silently fixed.
    pub fn parse(raw: &str) -> Result<Self> {
        // Nothing given at all (e.g. `create-jakestack ""`).
        if raw.is_empty() {
            anyhow::bail!(GeneratorError::MissingProjectName);
        }
        // Anchored match, so a single bad character anywhere rejects the name.
        if !name_regex().is_match(raw) {
            anyhow::bail!(GeneratorError::InvalidProjectName {
                name: raw.to_string()
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_allowed_characters() {
        for name in ["demo", "x", "my-app", "my_app", "App2", "A-b_C-9", "--", "_"] {
            let parsed = ProjectName::parse(name).unwrap();
            assert_eq!(parsed.as_str(), name);
        }
    }

    #[test]
    fn test_rejects_space() {
        let err = ProjectName::parse("my app").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GeneratorError>(),
            Some(GeneratorError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_as_missing() {
        let err = ProjectName::parse("").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GeneratorError>(),
            Some(GeneratorError::MissingProjectName)
        ));
    }

    #[test]
    fn test_rejects_path_like_and_punctuation() {
        for name in ["../evil", "a/b", "a.b", "name!", "ünïcode", " demo", "demo\n", "{{PROJECT_NAME}}"] {
            assert!(ProjectName::parse(name).is_err(), "accepted {:?}", name);
        }
    }

    #[test]
    fn test_default_name_is_valid() {
        assert!(ProjectName::parse(DEFAULT_PROJECT_NAME).is_ok());
    }
}
