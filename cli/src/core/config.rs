//! # JakeStack Generator Configuration
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the optional generator configuration and resolves the
//! template root directory. Nothing needs configuring for the common case:
//! the bundled template and `bun install` are the defaults.
//!
//! ## Architecture
//!
//! Configuration sources (highest precedence first):
//! 1. Command-line flags (`--template-dir`, `--skip-install`), applied by the caller
//! 2. Environment: `JAKESTACK_TEMPLATE_DIR`, `JAKESTACK_CONFIG`
//! 3. User file `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! The file is TOML:
//!
//! ```toml
//! [template]
//! directory = "~/templates/jakestack"
//!
//! [install]
//! enabled = true
//! program = "bun"
//! args = ["install"]
//! ```
//!
//! Paths are tilde-expanded after loading and the result is validated before use.
//!
use crate::core::error::{GeneratorError, Result}; // Generator error type and Result alias
use anyhow::{anyhow, Context}; // Error construction and context
use directories::ProjectDirs; // Platform-specific config directory
use serde::Deserialize; // TOML deserialization
use std::{
    env, // Environment overrides and executable location
    fs, // Reading the config file
    path::{Path, PathBuf}, // Filesystem path types
};
use tracing::{debug, info, warn}; // Logging utilities

/// Environment variable overriding the template root.
pub const TEMPLATE_DIR_ENV: &str = "JAKESTACK_TEMPLATE_DIR";
/// Environment variable pointing at an explicit config file.
pub const CONFIG_PATH_ENV: &str = "JAKESTACK_CONFIG";

/// Name of the bundled template directory next to the installed binary.
const TEMPLATE_DIR_NAME: &str = "template";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub template: TemplateConfig,
    #[serde(default)]
    pub install: InstallConfig,
}

/// Where the template tree comes from.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TemplateConfig {
    /// Template root override (can use ~). Expanded after loading.
    #[serde(default)]
    pub directory: Option<String>,
}

/// The post-generation dependency installer.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InstallConfig {
    /// Run the installer at all.
    #[serde(default = "default_install_enabled")]
    pub enabled: bool,
    /// Executable name or path.
    #[serde(default = "default_install_program")]
    pub program: String,
    /// Arguments passed to the executable.
    #[serde(default = "default_install_args")]
    pub args: Vec<String>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            enabled: default_install_enabled(),
            program: default_install_program(),
            args: default_install_args(),
        }
    }
}

impl InstallConfig {
    /// The command line as shown to the user, e.g. `bun install`.
    pub fn display_command(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn default_install_enabled() -> bool {
    true
}
fn default_install_program() -> String {
    "bun".to_string()
}
fn default_install_args() -> Vec<String> {
    vec!["install".to_string()]
}

/// Loads the configuration from `JAKESTACK_CONFIG` or the user config file,
/// falling back to defaults when neither exists.
pub fn load_config() -> Result<Config> {
    // An explicit file must exist; the user file is optional.
    let mut config = match env::var_os(CONFIG_PATH_ENV) {
        Some(explicit) => {
            let path = PathBuf::from(explicit);
            info!("Loading configuration from {}: {}", CONFIG_PATH_ENV, path.display());
            load_config_from_path(&path)?
        }
        None => load_user_config()?.unwrap_or_default(),
    };
    // Expand `~` before validation so the real path gets checked.
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

/// Reads `config.toml` from the platform config directory, if present.
fn load_user_config() -> Result<Option<Config>> {
    // e.g. ~/.config/create-jakestack/config.toml on Linux.
    if let Some(proj_dirs) = ProjectDirs::from("com", "JakeStack", "create-jakestack") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

/// Reads and parses one TOML config file.
fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    // Unknown keys are rejected by `deny_unknown_fields`.
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn expand_config_paths(config: &mut Config) {
    if let Some(dir) = config.template.directory.as_mut() {
        *dir = shellexpand::tilde(dir).into_owned();
        debug!("Expanded template directory: {}", dir);
    }
}

/// Rejects settings that can never work.
fn validate_config(config: &Config) -> Result<()> {
    // A missing template dir is reported later, when it is actually needed.
    if let Some(dir) = &config.template.directory {
        let path = Path::new(dir);
        if path.exists() && !path.is_dir() {
            return Err(anyhow!(GeneratorError::Config(format!(
                "Configured template path '{}' exists but is not a directory.",
                path.display()
            ))));
        }
    }
    // An empty program name cannot be resolved on PATH.
    if config.install.program.trim().is_empty() {
        return Err(anyhow!(GeneratorError::Config(
            "Installer program cannot be empty.".to_string()
        )));
    }
    Ok(())
}

/// # Resolve Template Root (`resolve_template_dir`)
///
/// Picks the template root from, in order: the `--template-dir` flag, the
/// `JAKESTACK_TEMPLATE_DIR` environment variable, the config file, a
/// `template/` directory beside the executable (or one level above it), and
/// finally the template bundled in this repository.
///
/// The chosen path must be an existing directory, otherwise
/// `GeneratorError::TemplateNotFound` is returned.
pub fn resolve_template_dir(cli_override: Option<&Path>, config: &Config) -> Result<PathBuf> {
    // An empty variable counts as unset.
    let env_override = env::var_os(TEMPLATE_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(|v| PathBuf::from(shellexpand::tilde(&v.to_string_lossy()).into_owned()));

    // Flag, then environment, then config file.
    let explicit = cli_override
        .map(Path::to_path_buf)
        .or(env_override)
        .or_else(|| config.template.directory.as_ref().map(PathBuf::from));

    let chosen = match explicit {
        Some(path) => path,
        // Nothing explicit: the template that ships with the binary.
        None => installed_template_dir().unwrap_or_else(bundled_template_dir),
    };
    debug!("Resolved template directory: {}", chosen.display());

    if !chosen.is_dir() {
        anyhow::bail!(GeneratorError::TemplateNotFound {
            path: chosen.display().to_string()
        });
    }
    Ok(chosen)
}

/// `template/` beside the running executable, or one directory up from it.
fn installed_template_dir() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    let exe_dir = exe.parent()?;
    [exe_dir.join(TEMPLATE_DIR_NAME), exe_dir.join("..").join(TEMPLATE_DIR_NAME)]
        .into_iter()
        .find(|candidate| candidate.is_dir())
}

/// The template shipped in this repository, located at build time.
fn bundled_template_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(TEMPLATE_DIR_NAME)
}
