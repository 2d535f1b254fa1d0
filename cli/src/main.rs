//! # PhpDev Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: RunOpenCode
//! Repository: https://github.com/runopencode/phpdev
//!
//! ## Overview
//!
//! This file serves as the main entry point for the PhpDev CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on the `--log-level` flag
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! The application follows a modular command structure:
//! - Each command (`up`, `down`, `composer`, `docs`) is a variant in the
//!   `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! Basic PhpDev usage:
//!
//! ```bash
//! # Get help
//! phpdev --help
//!
//! # Start the environment, showing debug diagnostics
//! phpdev --log-level debug up
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on the requested level
//! 3. Route to the appropriate command handler
//! 4. Format and display any errors that occur
//!
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Handles specific command logic (up, down, composer, docs)
mod common; // Contains shared utilities (docker, process, ui, sphinx)
mod core; // Core infrastructure (errors, config)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "phpdev",
    about = "🐘 PhpDev ⚙️: Development Environment Tooling for runopencode/phplib",
    long_about = "Manage the containerized PHP development environment.\n\
                  Start and stop the compose stack, proxy composer into the running\n\
                  container and build the project documentation.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Diagnostic log verbosity, written to stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "u")]
    Up(commands::up::UpArgs),
    #[command(alias = "d")]
    Down(commands::down::DownArgs),
    #[command(alias = "c")]
    Composer(commands::composer::ComposerArgs),
    Docs(commands::docs::DocsArgs),
}

/// Log levels accepted by `--log-level`, lowest to highest verbosity.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The `tracing_subscriber` filter directive for this level.
    fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Use anyhow::Result directly
    let cli = Cli::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.as_filter()));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Up(args) => commands::up::handle_up(args).await,
        Commands::Down(args) => commands::down::handle_down(args).await,
        Commands::Composer(args) => commands::composer::handle_composer(args).await,
        Commands::Docs(args) => commands::docs::handle_docs(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
