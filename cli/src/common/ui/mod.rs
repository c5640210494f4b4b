//! # JakeStack UI Utilities (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Everything the generator prints for the user (as opposed to log output,
//! which goes through `tracing` on stderr) lives here:
//!
//! - **`prompts`**: the interactive project name prompt (`dialoguer`).
//! - Progress lines and the final "next steps" block, printed to stdout.
//!
//! ## Colors
//!
//! Output is colored with `colored`: blue banner, gray progress lines, a
//! yellow installer warning, a green success line, cyan commands and blue
//! URLs. `colored` drops the escape codes when stdout is not a terminal or
//! `NO_COLOR` is set, so piped output stays plain text.
//!
use colored::Colorize; // Terminal colors
use std::env; // Current working directory for the `cd` hint
use std::path::Path; // Filesystem path type

/// Interactive input (`prompt_project_name`).
pub mod prompts;

/// Port the generated server listens on by default.
const DEV_SERVER_URL: &str = "http://localhost:3000";

/// Prints the creation banner.
pub fn print_banner(project_name: &str) {
    println!("{}", banner_text(project_name));
}

/// Banner line with the project name in bold.
fn banner_text(project_name: &str) -> String {
    format!("\n🚀 Creating JakeStack project: {}\n", project_name.bold())
        .blue()
        .to_string()
}

/// Prints an indented progress line such as "Copying template files...".
pub fn print_step(message: &str) {
    println!("{}", format!("  {}", message).bright_black());
}

/// Tells the user the installer did not finish and how to run it themselves.
pub fn print_install_warning(command: &str) {
    println!("{}", install_warning_text(command));
}

fn install_warning_text(command: &str) -> String {
    format!(
        "\n  Warning: Could not run '{}'. Please run it manually.\n",
        command
    )
    .yellow()
    .to_string()
}

/// Path shown in the `cd` hint: relative to the current directory when
/// possible, absolute otherwise.
pub fn display_path_for_cd(target_path: &Path) -> String {
    match env::current_dir() {
        Ok(cwd) => pathdiff::diff_paths(target_path, &cwd)
            // The cwd itself diffs to "", which is no use after `cd`.
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| target_path.display().to_string()),
        Err(_) => target_path.display().to_string(),
    }
}

/// # Print Completion Message (`print_completion_message`)
///
/// Success line, the commands to start developing, and the URLs the
/// generated app serves once running. When the installer was skipped or
/// failed, `install_command` is listed as an extra step.
pub fn print_completion_message(target_path: &Path, install_command: Option<&str>) {
    print!(
        "{}",
        completion_message(&display_path_for_cd(target_path), install_command)
    );
}

/// Builds the completion block printed by `print_completion_message`.
fn completion_message(cd_path: &str, install_command: Option<&str>) -> String {
    // --- Commands ---
    // Padded before coloring so the `#` comments line up.
    let mut commands = vec![format!("    cd {}", cd_path)];
    if let Some(command) = install_command {
        commands.push(format!("    {:<27} # Install dependencies", command));
    }
    commands.push(format!("    {:<27} # Start PostgreSQL", "docker compose up -d"));
    commands.push(format!("    {:<27} # Start dev server", "bun run dev"));

    // --- URLs ---
    let urls = [
        ("    Frontend:      ", DEV_SERVER_URL.to_string()),
        ("    API Docs:      ", format!("{}/api/docs", DEV_SERVER_URL)),
        ("    Health Check:  ", format!("{}/api/health", DEV_SERVER_URL)),
    ];

    let mut out = String::new();
    out.push_str(&format!("{}\n", "\n✅ Project created successfully!\n".green()));
    out.push_str(&format!("{}\n", "  Next steps:\n".white()));
    for line in &commands {
        out.push_str(&format!("{}\n", line.cyan()));
    }
    out.push('\n');
    out.push_str(&format!("{}\n", "  Available URLs:\n".white()));
    for (label, url) in &urls {
        out.push_str(&format!("{}{}\n", label.bright_black(), url.blue()));
    }
    out.push('\n');
    out
}
