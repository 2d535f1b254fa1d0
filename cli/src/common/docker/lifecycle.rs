//! # PhpDev Docker Stack Lifecycle
//!
//! File: cli/src/common/docker/lifecycle.rs
//! Author: RunOpenCode
//! Repository: https://github.com/runopencode/phpdev
//!
//! ## Overview
//!
//! This module contains the functions that change the state of the compose
//! stack: bringing it up and tearing it down. Both map one-to-one onto the
//! compose commands a developer would type by hand:
//!
//! - `compose_up` runs `docker compose -f <file> up -d --build`
//! - `compose_down` runs `docker compose -f <file> down`
//!
//! The caller chooses the [`OutputMode`]: attached invocations stream build
//! and teardown noise to the terminal, captured invocations keep the console
//! clean and only surface the output if the command fails.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::docker::lifecycle;
//! use crate::common::process::{OutputMode, SystemRunner};
//! use crate::core::error::Result;
//! # use crate::core::config;
//!
//! # async fn run_example() -> Result<()> {
//! # let cfg = config::Config::default();
//! // Rebuild and start the stack, showing docker's output.
//! lifecycle::compose_up(&SystemRunner, &cfg, OutputMode::Attached).await?;
//!
//! // Later: tear it down quietly.
//! lifecycle::compose_down(&SystemRunner, &cfg, OutputMode::Captured).await?;
//! # Ok(())
//! # }
//! ```
//!
use crate::common::process::{CommandRunner, OutputMode};
use crate::core::config::Config;
use crate::core::error::{PhpdevError, Result};
use anyhow::{anyhow, Context};
use tracing::{error, info, instrument};

/// Builds (if needed) and starts the compose stack in detached mode.
///
/// ## Workflow:
/// 1. Assemble `docker compose -f <file> up -d --build` from the configuration.
/// 2. Execute it from the working root with the requested output mode.
/// 3. Map a non-zero exit onto [`PhpdevError::ExternalCommand`], carrying the
///    captured output (or a note that the output went to the terminal).
///
/// # Arguments
///
/// * `runner` - Command runner executing the compose command.
/// * `cfg` - Loaded configuration naming the docker binary and compose file.
/// * `output` - Whether docker's output streams to the terminal or is captured.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` once compose reports the stack up.
#[instrument(skip(runner, cfg), fields(compose_file = %cfg.stack.compose_file))]
pub async fn compose_up(
    runner: &dyn CommandRunner,
    cfg: &Config,
    output: OutputMode,
) -> Result<()> {
    let invocation = super::compose_invocation(cfg)
        .arg("up")
        .arg("-d")
        .arg("--build")
        .output(output);
    info!("Starting compose stack: {}", invocation.command_line());

    let outcome = runner
        .run(&invocation)
        .await
        .context("Failed to start the compose stack")?;

    if outcome.success() {
        info!("Compose stack is up.");
        Ok(())
    } else {
        error!(
            "Compose up exited with status {}: {}",
            outcome.status,
            outcome.combined_output().trim()
        );
        Err(anyhow!(PhpdevError::ExternalCommand {
            cmd: invocation.command_line(),
            status: outcome.status.to_string(),
            output: outcome.describe_output(),
        }))
    }
}

/// Stops and removes the compose stack's containers and networks.
///
/// Compose treats a stack that is already down as a successful no-op, so this
/// function is safe to call repeatedly.
///
/// # Arguments
///
/// * `runner` - Command runner executing the compose command.
/// * `cfg` - Loaded configuration naming the docker binary and compose file.
/// * `output` - Whether docker's output streams to the terminal or is captured.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` once compose reports the teardown complete.
#[instrument(skip(runner, cfg), fields(compose_file = %cfg.stack.compose_file))]
pub async fn compose_down(
    runner: &dyn CommandRunner,
    cfg: &Config,
    output: OutputMode,
) -> Result<()> {
    let invocation = super::compose_invocation(cfg).arg("down").output(output);
    info!("Tearing down compose stack: {}", invocation.command_line());

    let outcome = runner
        .run(&invocation)
        .await
        .context("Failed to tear down the compose stack")?;

    if outcome.success() {
        info!("Compose stack is down.");
        Ok(())
    } else {
        error!(
            "Compose down exited with status {}: {}",
            outcome.status,
            outcome.combined_output().trim()
        );
        Err(anyhow!(PhpdevError::ExternalCommand {
            cmd: invocation.command_line(),
            status: outcome.status.to_string(),
            output: outcome.describe_output(),
        }))
    }
}
