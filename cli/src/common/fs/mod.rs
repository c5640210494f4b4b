//! # JakeStack Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers shared by command handlers. The recursive template copy
//! itself lives in `core::templating`; this module only holds the small
//! directory operations that run before it.
//!
//! - **`io`**: `ensure_dir_exists` and `create_new_dir`.
//!

/// Directory creation helpers (`ensure_dir_exists`, `create_new_dir`).
pub mod io;
