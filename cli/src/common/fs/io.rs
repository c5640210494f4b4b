//! # JakeStack Filesystem I/O Utilities (`common::fs::io`)
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Small filesystem helpers used by the `create` command before the template
//! is materialized:
//! - `ensure_dir_exists`: make sure the output parent directory is there.
//! - `create_new_dir`: create the project root, failing if anything already
//!   occupies the path.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! io::ensure_dir_exists(&output_dir)?;
//! io::create_new_dir(&output_dir.join("my-app"))?;
//! ```
//!
use crate::core::error::{GeneratorError, Result}; // Generator error type and Result alias
use anyhow::Context; // For adding context to errors
use std::fs; // Standard filesystem module
use std::io::ErrorKind; // Distinguishes "already exists" from other failures
use std::path::Path; // Filesystem path type
use tracing::{debug, info}; // Logging utilities

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, it is created along with any missing parents
/// (like `mkdir -p`). If it exists but is not a directory,
/// `GeneratorError::FileSystem` is returned.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    // Check if the path exists in the filesystem.
    if !path.exists() {
        // Path does not exist, create it recursively.
        fs::create_dir_all(path)
            // Add context to any error occurring during directory creation.
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        // Log the successful creation.
        info!("Created directory: {:?}", path);
    }
    // Path exists, check if it's actually a directory.
    else if !path.is_dir() {
        // It exists but is a file (or something else). Return an error.
        anyhow::bail!(GeneratorError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    // Path exists and is already a directory.
    else {
        // Nothing to do (debug level).
        debug!("Directory already exists: {:?}", path);
    }
    // The directory exists (either pre-existing or newly created).
    Ok(())
}

/// Creates exactly one new directory at `path`.
///
/// Fails with `GeneratorError::DestinationExists` if a file or directory is
/// already there, including when it appeared between the caller's own check
/// and this call. The parent must already exist.
pub fn create_new_dir(path: &Path) -> Result<()> {
    // `create_dir` (not `_all`) fails atomically if the path is taken.
    match fs::create_dir(path) {
        Ok(()) => {
            debug!("Created project directory: {:?}", path);
            Ok(())
        }
        // Someone else's file or directory: report it by the project name.
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            anyhow::bail!(GeneratorError::DestinationExists {
                name: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
            })
        }
        // Missing parent, permissions, read-only filesystem...
        Err(e) => Err(e).with_context(|| format!("Failed to create directory {:?}", path)),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Test `ensure_dir_exists` when the directory needs to be created, including parents.
    #[test]
    fn test_ensure_dir_exists_creates_new() -> Result<()> {
        // Setup: Create a temporary base directory.
        let base_dir = tempdir()?;
        // A nested path that does not exist yet.
        let new_dir = base_dir.path().join("new/subdir");
        assert!(!new_dir.exists());
        // Action: Ensure the directory exists.
        ensure_dir_exists(&new_dir)?;
        // Assert: It was created, parents included.
        assert!(new_dir.is_dir());
        Ok(())
    }

    /// Test `ensure_dir_exists` when the directory already exists.
    #[test]
    fn test_ensure_dir_exists_already_exists() -> Result<()> {
        let base_dir = tempdir()?;
        let existing_dir = base_dir.path().join("existing");
        // Manually create the directory beforehand.
        fs::create_dir(&existing_dir)?;
        // Action: Should be a no-op and succeed.
        ensure_dir_exists(&existing_dir)?;
        assert!(existing_dir.is_dir());
        Ok(())
    }

    /// Test `ensure_dir_exists` when the target path exists but is a file.
    #[test]
    fn test_ensure_dir_exists_path_is_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("a_file.txt");
        fs::write(&file_path, "hello")?;
        // Action: A file cannot stand in for a directory.
        let result = ensure_dir_exists(&file_path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Path exists but is not a directory"));
        Ok(())
    }

    /// Test `create_new_dir` on a free path.
    #[test]
    fn test_create_new_dir() -> Result<()> {
        let base_dir = tempdir()?;
        let project = base_dir.path().join("demo");
        create_new_dir(&project)?;
        assert!(project.is_dir());
        Ok(())
    }

    /// Test `create_new_dir` leaves an existing directory and its contents alone.
    #[test]
    fn test_create_new_dir_refuses_existing() -> Result<()> {
        let base_dir = tempdir()?;
        let project = base_dir.path().join("demo");
        fs::create_dir(&project)?;
        fs::write(project.join("keep.txt"), "mine")?;

        let err = create_new_dir(&project).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GeneratorError>(),
            Some(GeneratorError::DestinationExists { name }) if name == "demo"
        ));
        assert_eq!(fs::read_to_string(project.join("keep.txt"))?, "mine");
        Ok(())
    }

    /// Test `create_new_dir` does not create parents.
    #[test]
    fn test_create_new_dir_missing_parent() -> Result<()> {
        let base_dir = tempdir()?;
        let project = base_dir.path().join("missing/demo");
        let err = create_new_dir(&project).unwrap_err();
        assert!(err.to_string().contains("Failed to create directory"));
        Ok(())
    }
}
