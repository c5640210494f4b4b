//! # create-jakestack Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test gets a
//! `Sandbox`: a temporary directory holding a synthetic template tree, an
//! output directory used as the working directory, and a config file that
//! disables the installer. The binary is pointed at them through
//! `--template-dir`, the working directory, and `JAKESTACK_CONFIG`, so no test
//! touches the user's real configuration or runs `bun`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to create an `assert_cmd::Command` for the compiled binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn generator_cmd() -> Command {
    let mut cmd = Command::cargo_bin("create-jakestack")
        .expect("Failed to find create-jakestack binary for testing");
    cmd.env_remove("JAKESTACK_TEMPLATE_DIR")
        .env_remove("JAKESTACK_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("NO_COLOR");
    cmd
}

/// Isolated template, output and config locations for one test.
pub struct Sandbox {
    _root: TempDir,
    pub template: PathBuf,
    pub out: PathBuf,
    pub config: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create sandbox dir");
        let template = root.path().join("template");
        let out = root.path().join("out");
        let config = root.path().join("config.toml");
        fs::create_dir_all(&template).unwrap();
        fs::create_dir_all(&out).unwrap();
        fs::write(&config, "[install]\nenabled = false\n").unwrap();
        Self {
            _root: root,
            template,
            out,
            config,
        }
    }

    /// Adds a file to the template tree, creating parent directories.
    pub fn template_file(&self, relative: &str, content: impl AsRef<[u8]>) -> &Self {
        let path = self.template.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        self
    }

    /// Replaces the config file contents.
    pub fn config(&self, toml: &str) -> &Self {
        fs::write(&self.config, toml).unwrap();
        self
    }

    /// Binary running in `out/` with this sandbox's template and config.
    pub fn cmd(&self) -> Command {
        let mut cmd = generator_cmd();
        cmd.current_dir(&self.out)
            .env("JAKESTACK_CONFIG", &self.config)
            .arg("--template-dir")
            .arg(&self.template);
        cmd
    }

    pub fn project(&self, name: &str) -> PathBuf {
        self.out.join(name)
    }
}

/// Sorted relative paths of every entry below `root`, directories marked with a trailing `/`.
pub fn listing(root: &Path) -> Vec<String> {
    let mut entries: Vec<String> = collect_entries(root, root);
    entries.sort();
    entries
}

fn collect_entries(root: &Path, dir: &Path) -> Vec<String> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();
        let rel = path
            .strip_prefix(root)
            .unwrap()
            .to_string_lossy()
            .replace('\\', "/");
        if path.is_dir() {
            out.push(format!("{}/", rel));
            out.extend(collect_entries(root, &path));
        } else {
            out.push(rel);
        }
    }
    out
}
