//! # PhpDev Composer Proxy Handler
//!
//! File: cli/src/commands/composer.rs
//! Author: RunOpenCode
//! Repository: https://github.com/runopencode/phpdev
//!
//! ## Overview
//!
//! This module implements the `phpdev composer` command. It proxies an
//! arbitrary composer invocation into the running PHP service container, so
//! the host never needs a PHP runtime or a composer installation of its own.
//!
//! ## Architecture
//!
//! The command flow involves these steps:
//! 1. Parse command-line arguments (`ComposerArgs`) using `clap`. Everything
//!    after the subcommand name is captured verbatim, including flags meant
//!    for composer itself (`--dev`, `--no-scripts`, ...).
//! 2. Load the PhpDev configuration (`core::config`).
//! 3. Resolve the service container id via `common::docker::state`. Without a
//!    running service there is nothing to proxy into, and the command tells
//!    the user so.
//! 4. Run `composer <args...>` inside the container with the terminal
//!    attached, so interactive composer prompts keep working.
//! 5. Surface composer's own exit status: a failed composer run fails the
//!    command.
//!
//! ## Usage
//!
//! ```bash
//! # Install dependencies from the lock file
//! phpdev composer install
//!
//! # Add a dev dependency; flags pass straight through
//! phpdev composer require --dev phpunit/phpunit
//!
//! # No arguments shows composer's own help
//! phpdev composer
//! ```
//!
use crate::{
    common::{
        docker,
        process::{CommandRunner, OutputMode, SystemRunner},
        ui,
    },
    core::{
        config,
        error::{PhpdevError, Result},
    },
};
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

/// # Composer Proxy Arguments (`ComposerArgs`)
///
/// Defines the command-line arguments accepted by the `phpdev composer`
/// command. The argument list is deliberately opaque: whatever the user
/// types is handed to composer unchanged and in order.
#[derive(Parser, Debug)]
#[command(about = "Run a composer command inside the PHP service container")]
pub struct ComposerArgs {
    /// Arguments passed through to composer, flags included.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

/// # Handle Composer Proxy Command (`handle_composer`)
///
/// The main asynchronous handler function for the `phpdev composer` command.
///
/// ## Workflow:
/// 1. Logs the start and parsed arguments.
/// 2. Loads the PhpDev configuration.
/// 3. Delegates to [`run_composer`] with the real system command runner.
///
/// ## Arguments
///
/// * `args`: The parsed `ComposerArgs` struct.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` when composer exited successfully, `Err` when the
///   service was not running or composer reported a failure.
pub async fn handle_composer(args: ComposerArgs) -> Result<()> {
    info!("Handling composer command...");
    debug!("Composer args: {:?}", args);

    // 1. Load configuration for the stack and composer settings.
    let cfg = config::load_config().context("Failed to load PhpDev configuration")?;

    // 2. Run against the real system runner.
    run_composer(&args, &cfg, &SystemRunner).await
}

/// Drives the composer proxy against any command runner.
async fn run_composer(
    args: &ComposerArgs,
    cfg: &config::Config,
    runner: &dyn CommandRunner,
) -> Result<()> {
    // 1. Proxying requires a running service container.
    let container_id = match docker::state::require_service_id(runner, cfg).await {
        Ok(id) => id,
        Err(e) => {
            if e.downcast_ref::<PhpdevError>()
                .is_some_and(|err| matches!(err, PhpdevError::ServiceNotRunning { .. }))
            {
                ui::error(&format!(
                    "Service '{}' is not running, have you even started it?",
                    cfg.stack.service
                ));
            }
            return Err(e);
        }
    };
    debug!(
        "Proxying composer into container {} for service '{}'",
        container_id, cfg.stack.service
    );

    // 2. Assemble `composer <args...>` exactly as typed.
    let mut command = Vec::with_capacity(args.args.len() + 1);
    command.push(cfg.composer.binary.clone());
    command.extend(args.args.iter().cloned());

    // 3. Attached output keeps composer's progress bars and prompts usable.
    let outcome = docker::interaction::exec_in_service(
        runner,
        cfg,
        &container_id,
        &command,
        OutputMode::Attached,
    )
    .await?;

    // 4. Composer's failure is the command's failure.
    if !outcome.success() {
        return Err(PhpdevError::ExternalCommand {
            cmd: command.join(" "),
            status: outcome.status.to_string(),
            output: outcome.describe_output(),
        }
        .into());
    }
    Ok(())
}
