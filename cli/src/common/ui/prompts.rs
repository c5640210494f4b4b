//! # Interactive Prompts (`common::ui::prompts`)
//!
//! File: cli/src/common/ui/prompts.rs
//!
//! Asks the user for a project name when none was given on the command line.
//! The answer is returned raw; validation happens in `core::naming` so that
//! prompted and positional names go through the same rules.
//!
use crate::core::error::{GeneratorError, Result}; // Generator error type and Result alias
use crate::core::naming::DEFAULT_PROJECT_NAME; // Suggested answer
use anyhow::anyhow; // Wraps the prompt error
use dialoguer::{theme::ColorfulTheme, Input}; // Terminal input widget

/// Prompts for a project name, suggesting `my-jakestack-app`.
///
/// A blank answer accepts the suggestion, so the returned string is never
/// empty. Fails with `GeneratorError::Prompt` when there is no terminal to
/// ask on or the user aborts the prompt.
pub fn prompt_project_name() -> Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("What is your project name?")
        // Pressing enter on an empty line returns this value.
        .default(DEFAULT_PROJECT_NAME.to_string())
        .interact_text()
        // No TTY, or Ctrl-C / Esc.
        .map_err(|e| anyhow!(GeneratorError::Prompt(e.to_string())))
}
