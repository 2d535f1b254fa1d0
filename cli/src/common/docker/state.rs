//! # PhpDev Docker State Querying
//!
//! File: cli/src/common/docker/state.rs
//! Author: RunOpenCode
//! Repository: https://github.com/runopencode/phpdev
//!
//! ## Overview
//!
//! This module provides utility functions focused on **querying the state of
//! the compose stack** without causing any modifications. Its central concept
//! is the *service container id*: the id `docker compose ps -q <service>`
//! prints when the configured service has a running container, and an empty
//! string when it does not.
//!
//! Every command that wants to run something inside the container goes through
//! [`require_service_id`] first, so a stopped environment is always reported
//! as a clean "service is not running" error instead of a cryptic `docker
//! exec` failure against an empty container id.
//!
//! ## Architecture
//!
//! - **`query_service_id`**: Runs the `ps -q` probe (always captured) and
//!   normalizes the result: trimmed id, or `None` when the output is empty.
//!   A probe that itself fails (daemon down, unknown service, broken compose
//!   file) is an error, not an empty result.
//! - **`require_service_id`**: Turns the absence of a container into
//!   [`PhpdevError::ServiceNotRunning`], which callers surface to the user.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::docker::state;
//! use crate::common::process::SystemRunner;
//! use crate::core::error::Result;
//! # use crate::core::config;
//!
//! # async fn run_example() -> Result<()> {
//! # let cfg = config::Config::default();
//! // Probe without failing on absence:
//! if let Some(id) = state::query_service_id(&SystemRunner, &cfg).await? {
//!     println!("Service is up as container {}", id);
//! }
//!
//! // Or demand a running container:
//! let id = state::require_service_id(&SystemRunner, &cfg).await?;
//! # Ok(())
//! # }
//! ```
//!
use crate::common::process::{CommandRunner, OutputMode};
use crate::core::config::Config;
use crate::core::error::{PhpdevError, Result};
use anyhow::{anyhow, Context};
use tracing::{debug, error, instrument, warn};

/// Queries the compose stack for the running container of the configured
/// service.
///
/// The probe runs captured, it never touches the terminal. Its stdout is
/// trimmed; an empty result means the service has no running container and is
/// reported as `Ok(None)`, not as an error. Callers must check explicitly.
///
/// # Arguments
///
/// * `runner` - Command runner executing the probe.
/// * `cfg` - Loaded configuration naming the docker binary, compose file and service.
///
/// # Returns
///
/// * `Result<Option<String>>` - `Ok(Some(id))` with the trimmed container id,
///   `Ok(None)` when the service is not running.
///
/// # Errors
///
/// Returns an error when the probe process cannot be spawned, or when the
/// probe itself exits non-zero (docker daemon unreachable, unknown service,
/// unparsable compose file).
#[instrument(skip(runner, cfg), fields(service = %cfg.stack.service))]
pub async fn query_service_id(
    runner: &dyn CommandRunner,
    cfg: &Config,
) -> Result<Option<String>> {
    // Build the probe: `docker compose -f <file> ps -q <service>`.
    let invocation = super::compose_invocation(cfg)
        .arg("ps")
        .arg("-q")
        .arg(&cfg.stack.service)
        .output(OutputMode::Captured);
    debug!("Querying service state: {}", invocation.command_line());

    // Run the probe and propagate spawn failures with context.
    let outcome = runner.run(&invocation).await.with_context(|| {
        format!(
            "Failed to query state of service '{}'",
            cfg.stack.service
        )
    })?;

    // A failing probe is a real error, absence is signaled by empty output.
    if !outcome.success() {
        error!(
            "Service state query exited with status {}: {}",
            outcome.status,
            outcome.combined_output().trim()
        );
        return Err(anyhow!(PhpdevError::ExternalCommand {
            cmd: invocation.command_line(),
            status: outcome.status.to_string(),
            output: outcome.describe_output(),
        }))
        .with_context(|| {
            format!(
                "Failed to query state of service '{}'",
                cfg.stack.service
            )
        });
    }

    // Normalize: trim, then keep the first line. Compose prints one id per
    // replica and `docker exec` can only target a single container.
    let trimmed = outcome.stdout.trim();
    match trimmed.lines().next() {
        Some(id) if !id.trim().is_empty() => {
            let id = id.trim().to_string();
            if trimmed.lines().count() > 1 {
                debug!(
                    "Service '{}' has multiple replicas, using the first: {}",
                    cfg.stack.service, id
                );
            }
            debug!("Service '{}' is running as container {}", cfg.stack.service, id);
            Ok(Some(id))
        }
        _ => {
            debug!("Service '{}' has no running container.", cfg.stack.service);
            Ok(None)
        }
    }
}

/// Resolves the running container id of the configured service, failing when
/// there is none.
///
/// This is the gate in front of every in-container command: when the query
/// comes back empty, the returned [`PhpdevError::ServiceNotRunning`] stops the
/// caller before any `docker exec` is attempted.
///
/// # Arguments
///
/// * `runner` - Command runner executing the probe.
/// * `cfg` - Loaded configuration naming the docker binary, compose file and service.
///
/// # Returns
///
/// * `Result<String>` - The trimmed container id of the running service.
///
/// # Errors
///
/// Returns `PhpdevError::ServiceNotRunning` when the service has no running
/// container, or any error produced by [`query_service_id`].
#[instrument(skip(runner, cfg), fields(service = %cfg.stack.service))]
pub async fn require_service_id(runner: &dyn CommandRunner, cfg: &Config) -> Result<String> {
    match query_service_id(runner, cfg).await? {
        Some(id) => Ok(id),
        None => {
            warn!(
                "Service '{}' has no running container, refusing to continue.",
                cfg.stack.service
            );
            Err(anyhow!(PhpdevError::ServiceNotRunning {
                service: cfg.stack.service.clone(),
            }))
        }
    }
}
