//! # JakeStack Generator Core
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces used by the `create` command:
//! - `config`: configuration loading and template root resolution
//! - `error`: error types and the crate-wide `Result` alias
//! - `naming`: the validated `ProjectName` type
//! - `templating`: the template materializer (tree copy with token substitution)
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config;
//! use crate::core::error::{GeneratorError, Result};
//! use crate::core::naming::ProjectName;
//! use crate::core::templating;
//! ```
//!
pub mod config; // Config file, environment overrides, template lookup
pub mod error; // GeneratorError and Result
pub mod naming; // ProjectName validation
pub mod templating; // Template tree copy with token substitution
