//! # PhpDev Docker Container Interaction
//!
//! File: cli/src/common/docker/interaction.rs
//! Author: RunOpenCode
//! Repository: https://github.com/runopencode/phpdev
//!
//! ## Overview
//!
//! This module provides the one interaction PhpDev needs with a running
//! container: executing a command inside it, scoped to the configured
//! in-container working directory. It backs `phpdev composer` and the
//! dependency-installation step of `phpdev up`.
//!
//! ## Architecture
//!
//! - **`exec_in_service`**: Executes a command vector inside the service
//!   container via `docker exec -w <workdir>`.
//!   - Attached invocations additionally pass `-i -t`, handing the terminal
//!     to the in-container process for interactive sessions (composer asking
//!     for confirmation, progress bars).
//!   - Captured invocations omit both flags; docker refuses to allocate a
//!     pseudo-TTY when stdin is not one.
//!   - The command vector is appended to the invocation verbatim, one
//!     argument per element.
//!
//! The exit status of the in-container command is returned in the
//! [`CommandOutcome`] without interpretation; what a non-zero status means
//! (fatal proxy failure, soft installation warning) is the caller's call.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::docker::interaction;
//! use crate::common::process::{OutputMode, SystemRunner};
//! use crate::core::error::Result;
//! # use crate::core::config;
//!
//! # async fn run_example() -> Result<()> {
//! # let cfg = config::Config::default();
//! # let container_id = "abc123";
//! let command = vec!["composer".to_string(), "update".to_string()];
//! let outcome = interaction::exec_in_service(
//!     &SystemRunner,
//!     &cfg,
//!     container_id,
//!     &command,
//!     OutputMode::Attached,
//! )
//! .await?;
//! println!("composer exited with status {}", outcome.status);
//! # Ok(())
//! # }
//! ```
//!
use crate::common::process::{CommandOutcome, CommandRunner, Invocation, OutputMode};
use crate::core::config::Config;
use crate::core::error::Result;
use anyhow::Context;
use tracing::{debug, info, instrument};

/// Executes a command inside the running service container.
///
/// ## Workflow:
/// 1. Assemble `docker exec -w <workdir> [-i -t] <container> <command...>`.
/// 2. Run it from the working root with the requested output mode.
/// 3. Return the outcome as-is, including non-zero exit statuses.
///
/// # Arguments
///
/// * `runner` - Command runner executing the docker command.
/// * `cfg` - Loaded configuration naming the docker binary and in-container workdir.
/// * `container_id` - Id of the running container, resolved via [`super::state`].
/// * `command` - Command and arguments to execute inside the container.
/// * `output` - `Attached` hands the terminal to the in-container process,
///   `Captured` runs it silently.
///
/// # Returns
///
/// * `Result<CommandOutcome>` - Exit status and any captured output of the
///   in-container command.
///
/// # Errors
///
/// Returns an error only when the docker process itself cannot be executed.
#[instrument(skip(runner, cfg, command), fields(container = %container_id))]
pub async fn exec_in_service(
    runner: &dyn CommandRunner,
    cfg: &Config,
    container_id: &str,
    command: &[String],
    output: OutputMode,
) -> Result<CommandOutcome> {
    let mut invocation = Invocation::new(&cfg.stack.docker_bin)
        .arg("exec")
        .arg("-w")
        .arg(&cfg.stack.workdir);
    if output == OutputMode::Attached {
        invocation = invocation.arg("-i").arg("-t");
    }
    let invocation = invocation
        .arg(container_id)
        .args(command.iter().cloned())
        .current_dir(&cfg.root)
        .output(output);

    info!("Executing in container: {}", invocation.command_line());
    let outcome = runner.run(&invocation).await.with_context(|| {
        format!("Failed to execute command in container '{container_id}'")
    })?;
    debug!(
        "In-container command exited with status {}",
        outcome.status
    );
    Ok(outcome)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::process::testing::FakeRunner;
    use std::path::PathBuf;

    fn test_config() -> Config {
        let mut cfg = Config::default();
        cfg.root = PathBuf::from("/work/phplib");
        cfg
    }

    fn command_of(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_attached_exec_allocates_tty() {
        let runner = FakeRunner::new();
        runner.push_success("");

        let command = command_of(&["composer", "install"]);
        exec_in_service(&runner, &test_config(), "abc123", &command, OutputMode::Attached)
            .await
            .unwrap();

        let recorded = runner.invocations();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].program, "docker");
        assert_eq!(
            recorded[0].args,
            vec![
                "exec",
                "-w",
                "/var/www/html",
                "-i",
                "-t",
                "abc123",
                "composer",
                "install"
            ]
        );
        assert_eq!(recorded[0].output, OutputMode::Attached);
    }

    #[tokio::test]
    async fn test_captured_exec_omits_tty_flags() {
        let runner = FakeRunner::new();
        runner.push_success("");

        let command = command_of(&["composer", "install"]);
        exec_in_service(&runner, &test_config(), "abc123", &command, OutputMode::Captured)
            .await
            .unwrap();

        let recorded = runner.invocations();
        assert_eq!(
            recorded[0].args,
            vec![
                "exec",
                "-w",
                "/var/www/html",
                "abc123",
                "composer",
                "install"
            ]
        );
        assert_eq!(recorded[0].output, OutputMode::Captured);
    }

    #[tokio::test]
    async fn test_arguments_with_spaces_stay_single_elements() {
        let runner = FakeRunner::new();
        runner.push_success("");

        let command = command_of(&["composer", "config", "description", "A PHP library"]);
        exec_in_service(&runner, &test_config(), "abc123", &command, OutputMode::Attached)
            .await
            .unwrap();

        let recorded = runner.invocations();
        assert!(recorded[0]
            .args
            .contains(&"A PHP library".to_string()));
    }

    #[tokio::test]
    async fn test_non_zero_status_is_not_an_error() {
        let runner = FakeRunner::new();
        runner.push_failure(2, "composer failed");

        let command = command_of(&["composer", "install"]);
        let outcome = exec_in_service(
            &runner,
            &test_config(),
            "abc123",
            &command,
            OutputMode::Captured,
        )
        .await
        .unwrap();

        assert_eq!(outcome.status, 2);
        assert!(!outcome.success());
    }

    #[tokio::test]
    async fn test_workdir_override_is_used() {
        let runner = FakeRunner::new();
        runner.push_success("");

        let mut cfg = test_config();
        cfg.stack.workdir = "/srv/app".to_string();
        let command = command_of(&["composer", "status"]);
        exec_in_service(&runner, &cfg, "abc123", &command, OutputMode::Captured)
            .await
            .unwrap();

        let recorded = runner.invocations();
        assert_eq!(recorded[0].args[1], "-w");
        assert_eq!(recorded[0].args[2], "/srv/app");
    }
}
