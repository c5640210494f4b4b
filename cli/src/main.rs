//! # create-jakestack Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `create-jakestack`
//! generator. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Running the create command
//! - Turning any error into a message on stderr and exit status 1
//!
//! ## Examples
//!
//! ```bash
//! # Create ./my-app from the bundled template and run `bun install`
//! create-jakestack my-app
//!
//! # Prompt for a name, log what is happening
//! create-jakestack -v
//! ```
//!
use clap::Parser; // Derive-based argument parsing
use colored::Colorize; // Red error output
use tracing_subscriber::{fmt, EnvFilter}; // Log formatting and filtering

mod commands; // Command handlers (create)
mod common; // Shared utilities (fs, process, ui)
mod core; // Core infrastructure (errors, config, naming, templating)

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "create-jakestack",
    about = "Scaffold a modern full-stack application",
    long_about = "Create a new JakeStack project: copies the bundled template into a new\n\
                  directory named after the project and installs its dependencies.",
    version
)]
struct Cli {
    #[command(flatten)]
    create: commands::create::CreateArgs,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() {
    // Parse arguments; clap prints help/version/usage errors and exits itself.
    let cli = Cli::parse();

    // --- Logging Setup ---
    // `RUST_LOG` takes precedence over the `-v` count.
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    // Logs go to stderr so stdout only carries the user-facing output.
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    // --- Run ---
    if let Err(e) = commands::create::handle_create(cli.create) {
        tracing::error!("Project generation failed: {:?}", e);
        // `{:#}` includes the context chain on one line.
        eprintln!("{}", format!("\nError: {:#}\n", e).red());
        std::process::exit(1);
    }
}
