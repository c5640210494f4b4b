//! # JakeStack Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utility modules used by command handlers, kept apart from the
//! generator's core logic (`core::`):
//!
//! - **`fs`**: directory creation helpers run before materialization.
//! - **`process`**: runs the dependency installer and reports its outcome.
//! - **`ui`**: prompts and user-facing output.
//!

/// Utilities for filesystem operations.
pub mod fs;
/// Utilities for executing external processes (the installer).
pub mod process;
/// Prompts and terminal output.
pub mod ui;
