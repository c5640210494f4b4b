//! # JakeStack Commands
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Command handlers invoked from `main.rs`. The generator has a single
//! command, `create`, whose arguments are flattened into the top-level CLI so
//! that `create-jakestack my-app` works without a subcommand.
//!

/// Project creation: name handling, materialization, installer.
pub mod create;
