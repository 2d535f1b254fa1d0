//! # PhpDev Environment Up Handler
//!
//! File: cli/src/commands/up.rs
//! Author: RunOpenCode
//! Repository: https://github.com/runopencode/phpdev
//!
//! ## Overview
//!
//! This module implements the `phpdev up` command. Its purpose is to bring the
//! project's development environment to life: build and start the compose
//! stack, verify that the PHP service actually came up, and install the
//! project's composer dependencies inside it.
//!
//! ## Architecture
//!
//! The command flow involves these steps:
//! 1. Parse command-line arguments (`UpArgs`) using `clap`, capturing the
//!    `--install/--no-install` and `--verbose/--silent` flag pairs.
//! 2. Load the PhpDev configuration (`core::config`) for the project name,
//!    compose stack settings and composer binary.
//! 3. Run `docker compose up -d --build` via `common::docker::lifecycle`. In
//!    silent mode (the default) docker's build noise is captured; `--verbose`
//!    attaches it to the terminal.
//! 4. Resolve the service container id via `common::docker::state`. A stack
//!    that came up without the PHP service is a start failure.
//! 5. Unless `--no-install` was given, run `composer install` inside the
//!    container. Installation failures are reported but do not fail the
//!    command, the environment itself is up.
//! 6. Report success with a banner.
//!
//! ## Usage
//!
//! ```bash
//! # Start the environment and install dependencies (quiet docker output)
//! phpdev up
//!
//! # Start without installing dependencies
//! phpdev up --no-install
//!
//! # Show the full docker compose build output
//! phpdev up --verbose
//! ```
//!
use crate::{
    common::{
        docker,
        process::{CommandRunner, OutputMode, SystemRunner},
        ui,
    },
    core::{config, error::Result},
};
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, warn};

/// # Environment Up Arguments (`UpArgs`)
///
/// Defines the command-line arguments accepted by the `phpdev up` command.
/// Both flag pairs follow "last one wins" semantics.
#[derive(Parser, Debug)]
#[command(about = "Start the project development environment")]
pub struct UpArgs {
    /// Install project dependencies once the stack is up (default).
    #[arg(long, overrides_with = "no_install")]
    install: bool,

    /// Skip dependency installation.
    #[arg(long, overrides_with = "install")]
    no_install: bool,

    /// Stream docker compose output to the terminal.
    #[arg(long, overrides_with = "silent")]
    verbose: bool,

    /// Keep docker compose output off the terminal (default).
    #[arg(long, overrides_with = "verbose")]
    silent: bool,
}

impl UpArgs {
    /// Whether dependencies should be installed after the stack starts.
    fn install_dependencies(&self) -> bool {
        !self.no_install
    }

    /// Output mode for the stack and installation commands.
    fn output_mode(&self) -> OutputMode {
        if self.verbose {
            OutputMode::Attached
        } else {
            OutputMode::Captured
        }
    }
}

/// # Handle Environment Up Command (`handle_up`)
///
/// The main asynchronous handler function for the `phpdev up` command.
///
/// ## Workflow:
/// 1. Logs the start and parsed arguments.
/// 2. Loads the PhpDev configuration.
/// 3. Delegates to [`run_up`] with the real system command runner.
///
/// ## Arguments
///
/// * `args`: The parsed `UpArgs` struct.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` when the environment is up (even if dependency
///   installation failed), `Err` when the stack or the service failed to start.
pub async fn handle_up(args: UpArgs) -> Result<()> {
    info!("Handling up command...");
    debug!("Up args: {:?}", args);

    // 1. Load configuration - project name, stack and composer settings.
    let cfg = config::load_config().context("Failed to load PhpDev configuration")?;

    // 2. Run against the real system runner.
    run_up(&args, &cfg, &SystemRunner).await
}

/// Drives the up sequence against any command runner.
async fn run_up(
    args: &UpArgs,
    cfg: &config::Config,
    runner: &dyn CommandRunner,
) -> Result<()> {
    let output = args.output_mode();

    ui::heading(&format!(
        "Starting {} development environment...",
        cfg.project.name
    ));

    // 1. Build and start the stack.
    if let Err(e) = docker::lifecycle::compose_up(runner, cfg, output).await {
        ui::error(&format!("ERROR! {} failed to start!", cfg.project.name));
        return Err(e).context("Failed to start the development environment");
    }

    // 2. The stack is up, but the PHP service itself must be running too.
    let container_id = match docker::state::require_service_id(runner, cfg).await {
        Ok(id) => id,
        Err(e) => {
            ui::error(&format!("ERROR! {} failed to start!", cfg.project.name));
            return Err(e).context(format!(
                "Service '{}' did not come up with the stack",
                cfg.stack.service
            ));
        }
    };
    debug!(
        "Service '{}' is running as container {}",
        cfg.stack.service, container_id
    );

    // 3. Install dependencies unless the user opted out.
    if args.install_dependencies() {
        install_project_dependencies(runner, cfg, &container_id, output).await;
    }

    ui::rule();
    ui::success(&format!(
        "🐳 SUCCESS! {} is up and running!",
        cfg.project.name
    ));
    ui::rule();
    Ok(())
}

/// Runs `composer install` inside the service container.
///
/// A failed installation is reported to the user but deliberately does not
/// fail the command: the environment is up and the developer can install
/// manually.
async fn install_project_dependencies(
    runner: &dyn CommandRunner,
    cfg: &config::Config,
    container_id: &str,
    output: OutputMode,
) {
    ui::info("Installing project dependencies...");
    let command = vec![cfg.composer.binary.clone(), "install".to_string()];
    match docker::interaction::exec_in_service(runner, cfg, container_id, &command, output).await {
        Ok(outcome) if outcome.success() => {
            ui::success("Project dependencies successfully installed.");
        }
        Ok(outcome) => {
            warn!(
                "Dependency installation exited with status {}.",
                outcome.status
            );
            debug!(
                "Installation output: {}",
                outcome.combined_output().trim()
            );
            ui::error(
                "It seems that it is impossible to install project dependencies, try installing manually...",
            );
        }
        Err(e) => {
            warn!("Dependency installation could not be executed: {:#}", e);
            ui::error(
                "It seems that it is impossible to install project dependencies, try installing manually...",
            );
        }
    }
}
