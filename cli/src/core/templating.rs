//! # JakeStack Template Materializer
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! This module copies the template tree into a new project directory,
//! replacing every occurrence of `{{PROJECT_NAME}}` with the project name.
//! There is exactly one placeholder and no other templating syntax: no
//! conditionals, loops or filters. Template files (TypeScript, TSX, JSON...)
//! routinely contain `{{` for their own purposes, so a general template engine
//! is not used; the replacement is a literal string substitution.
//!
//! ## Architecture
//!
//! 1. Walk the source directory depth-first (`walkdir`), following symlinks.
//! 2. For each entry, compute its path relative to the source root and join it
//!    onto the destination root.
//! 3. Directories are created (with intermediates). Files are read, the token
//!    replaced, and the result written.
//! 4. Files that are not valid UTF-8 are copied byte-for-byte without
//!    substitution.
//!
//! The first I/O error aborts the walk. Anything already written stays on disk.
//! If the destination lies inside the source tree, the walk skips it so the
//! new project is never copied into itself.
//! Hidden files (`.gitignore`, `.env.example`) are copied like any other file.
//!
//! ## Examples
//!
//! ```rust
//! let report = templating::materialize(&template_dir, &target_dir, project_name.as_str())?;
//! println!("{} files written", report.files_written);
//! ```
//!
use crate::core::error::{GeneratorError, Result}; // Generator error type and Result alias
use anyhow::{anyhow, Context}; // Error construction and path context
use std::fs; // Filesystem reads, writes and directory creation
use std::path::Path; // Filesystem path type
use tracing::{debug, info, trace}; // Logging utilities
use walkdir::{DirEntry, WalkDir}; // Recursive directory traversal

/// The literal placeholder replaced in every template file.
pub const PROJECT_NAME_TOKEN: &str = "{{PROJECT_NAME}}";

/// Counters collected while materializing a template tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Directories created under the destination root (the root itself excluded).
    pub directories_created: usize,
    /// Regular files written, text and binary.
    pub files_written: usize,
    /// Text files that contained at least one token.
    pub files_substituted: usize,
    /// Token occurrences replaced across all files.
    pub substitutions: usize,
    /// Files copied verbatim because they were not valid UTF-8.
    pub binary_files: usize,
}

/// Replaces every occurrence of [`PROJECT_NAME_TOKEN`] in `content`.
///
/// Returns the new text and the number of replacements made.
pub fn substitute_token(content: &str, project_name: &str) -> (String, usize) {
    let count = content.matches(PROJECT_NAME_TOKEN).count();
    if count == 0 {
        return (content.to_string(), 0);
    }
    (content.replace(PROJECT_NAME_TOKEN, project_name), count)
}

/// # Materialize Template (`materialize`)
///
/// Mirrors `source_dir` into `dest_dir`, substituting the project name into
/// every text file.
///
/// `dest_dir` is created if missing (its parent must be writable). The caller
/// is responsible for refusing to run against an existing project; this
/// function will happily overwrite files it finds.
///
/// ## Arguments
/// * `source_dir` - Root of the template tree. Must exist and be a directory.
/// * `dest_dir` - Root of the project to create.
/// * `project_name` - Value substituted for `{{PROJECT_NAME}}`. Not re-validated here.
///
/// ## Returns
/// * `Result<MaterializeReport>` - Counts of what was written, or the first I/O error.
pub fn materialize(
    source_dir: &Path,
    dest_dir: &Path,
    project_name: &str,
) -> Result<MaterializeReport> {
    info!(
        "Materializing template from '{}' to '{}'",
        source_dir.display(),
        dest_dir.display()
    );
    if !source_dir.is_dir() {
        anyhow::bail!(GeneratorError::TemplateNotFound {
            path: source_dir.display().to_string()
        });
    }
    // Create the project root first so it can be resolved below.
    fs::create_dir_all(dest_dir).with_context(|| {
        format!(
            "Failed to create target directory '{}'",
            dest_dir.display()
        )
    })?;
    // Resolved destination, used to keep the walk out of the tree being written.
    let dest_canonical = fs::canonicalize(dest_dir).with_context(|| {
        format!(
            "Failed to resolve target directory '{}'",
            dest_dir.display()
        )
    })?;

    let mut report = MaterializeReport::default();

    let walker = WalkDir::new(source_dir)
        .min_depth(1) // The source root itself maps onto `dest_dir`.
        .follow_links(true) // Copy what symlinks point at.
        .into_iter()
        .filter_entry(|entry| !is_destination(entry, &dest_canonical));

    for entry_result in walker {
        // Unreadable directory, broken symlink or symlink loop.
        let entry = entry_result.with_context(|| {
            format!(
                "Failed to read template directory '{}'",
                source_dir.display()
            )
        })?;
        let src_path = entry.path();
        // Same relative location under the project root.
        let relative_path = src_path.strip_prefix(source_dir).map_err(|_| {
            anyhow!(GeneratorError::FileSystem(format!(
                "'{}' is not inside template root '{}'",
                src_path.display(),
                source_dir.display()
            )))
        })?;
        let target_path = dest_dir.join(relative_path);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            // Mirror directories, including empty ones.
            fs::create_dir_all(&target_path).with_context(|| {
                format!(
                    "Failed to create target subdirectory '{}'",
                    target_path.display()
                )
            })?;
            report.directories_created += 1;
            debug!("Created directory: {}", target_path.display());
        } else if file_type.is_file() {
            // Text gets the token replaced, anything else is copied as-is.
            copy_file_with_substitution(src_path, &target_path, project_name, &mut report)?;
        } else {
            // Sockets, FIFOs, devices: nothing sensible to copy.
            anyhow::bail!(GeneratorError::FileSystem(format!(
                "Unsupported file type in template at '{}'",
                src_path.display()
            )));
        }
    }

    info!(
        "Template materialized: {} directories, {} files ({} tokens replaced in {} files, {} binary)",
        report.directories_created,
        report.files_written,
        report.substitutions,
        report.files_substituted,
        report.binary_files
    );
    Ok(report)
}

/// True when `entry` is the destination directory (or resolves to it).
///
/// Only directories are resolved; files can never be the destination root.
fn is_destination(entry: &DirEntry, dest_canonical: &Path) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    match fs::canonicalize(entry.path()) {
        Ok(resolved) => resolved == dest_canonical,
        // Let the walk itself report the unreadable entry.
        Err(_) => false,
    }
}

/// Copies one template file, substituting the token when the file is UTF-8 text.
fn copy_file_with_substitution(
    src_path: &Path,
    target_path: &Path,
    project_name: &str,
    report: &mut MaterializeReport,
) -> Result<()> {
    let bytes = fs::read(src_path)
        .with_context(|| format!("Failed to read template file '{}'", src_path.display()))?;

    // Decide text vs binary by content, not by extension.
    let output = match String::from_utf8(bytes) {
        Ok(text) => {
            let (rendered, count) = substitute_token(&text, project_name);
            if count > 0 {
                report.files_substituted += 1;
                report.substitutions += count;
                trace!(
                    "Replaced {} token(s) in '{}'",
                    count,
                    src_path.display()
                );
            }
            rendered.into_bytes()
        }
        Err(not_utf8) => {
            // Hand back the original bytes untouched.
            debug!(
                "Copying non-UTF-8 file verbatim: {}",
                src_path.display()
            );
            report.binary_files += 1;
            not_utf8.into_bytes()
        }
    };

    fs::write(target_path, output)
        .with_context(|| format!("Failed to write file '{}'", target_path.display()))?;
    report.files_written += 1;
    debug!(
        "Wrote '{}' to '{}'",
        src_path.display(),
        target_path.display()
    );
    Ok(())
}
