//! # PhpDev Environment Down Handler
//!
//! File: cli/src/commands/down.rs
//! Author: RunOpenCode
//! Repository: https://github.com/runopencode/phpdev
//!
//! ## Overview
//!
//! This module implements the `phpdev down` command, the counterpart of
//! `phpdev up`. It tears down the project's compose stack, stopping and
//! removing the containers and the default network.
//!
//! ## Architecture
//!
//! The command flow involves these steps:
//! 1. Parse command-line arguments (`DownArgs`) using `clap`.
//! 2. Load the PhpDev configuration (`core::config`).
//! 3. Run `docker compose down` via `common::docker::lifecycle`, attaching
//!    docker's output to the terminal when `--verbose` was given.
//! 4. Report the result.
//!
//! Tearing down an environment that is not running is not an error; compose
//! treats it as a no-op and so does this command.
//!
//! ## Usage
//!
//! ```bash
//! # Tear down the environment
//! phpdev down
//!
//! # Tear down and watch docker do it
//! phpdev down --verbose
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
use tracing::{debug, info};

/// # Environment Down Arguments (`DownArgs`)
///
/// Defines the command-line arguments accepted by the `phpdev down` command.
#[derive(Parser, Debug)]
#[command(about = "Tear down the project development environment")]
pub struct DownArgs {
    /// Stream docker compose output to the terminal.
    #[arg(short, long)]
    verbose: bool,
}

impl DownArgs {
    /// Output mode for the teardown command.
    fn output_mode(&self) -> OutputMode {
        if self.verbose {
            OutputMode::Attached
        } else {
            OutputMode::Captured
        }
    }
}

/// # Handle Environment Down Command (`handle_down`)
///
/// The main asynchronous handler function for the `phpdev down` command.
///
/// ## Workflow:
/// 1. Logs the start and parsed arguments.
/// 2. Loads the PhpDev configuration.
/// 3. Delegates to [`run_down`] with the real system command runner.
///
/// ## Arguments
///
/// * `args`: The parsed `DownArgs` struct.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` when the stack was torn down, `Err` if the
///   teardown command failed.
pub async fn handle_down(args: DownArgs) -> Result<()> {
    info!("Handling down command...");
    debug!("Down args: {:?}", args);

    // 1. Load configuration for the compose file location.
    let cfg = config::load_config().context("Failed to load PhpDev configuration")?;

    // 2. Run against the real system runner.
    run_down(&args, &cfg, &SystemRunner).await
}

/// Drives the teardown sequence against any command runner.
async fn run_down(
    args: &DownArgs,
    cfg: &config::Config,
    runner: &dyn CommandRunner,
) -> Result<()> {
    ui::heading("Tearing down project environment...");

    if let Err(e) = docker::lifecycle::compose_down(runner, cfg, args.output_mode()).await {
        ui::error("ERROR! Unable to teardown containers!");
        return Err(e).context("Failed to tear down the development environment");
    }

    ui::rule();
    ui::success("All containers destroyed.");
    ui::rule();
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::process::testing::FakeRunner;
    use crate::core::config::Config;
    use std::path::PathBuf;

    fn test_config() -> Config {
        let mut cfg = Config::default();
        cfg.root = PathBuf::from("/work/phplib");
        cfg
    }

    /// Test parsing of the verbose flag in both forms.
    #[test]
    fn test_down_args_parsing() {
        let args = DownArgs::try_parse_from(["down"]).expect("Parsing default args failed");
        assert_eq!(args.output_mode(), OutputMode::Captured);

        let args = DownArgs::try_parse_from(["down", "--verbose"])
            .expect("Parsing --verbose failed");
        assert_eq!(args.output_mode(), OutputMode::Attached);

        let args = DownArgs::try_parse_from(["down", "-v"]).expect("Parsing -v failed");
        assert_eq!(args.output_mode(), OutputMode::Attached);
    }

    #[tokio::test]
    async fn test_run_down_issues_compose_down() {
        let runner = FakeRunner::new();
        runner.push_success("");

        run_down(
            &DownArgs { verbose: false },
            &test_config(),
            &runner,
        )
        .await
        .unwrap();

        let recorded = runner.invocations();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].program, "docker");
        assert_eq!(recorded[0].args, vec!["compose", "-f", "compose.yaml", "down"]);
        assert_eq!(recorded[0].output, OutputMode::Captured);
    }

    #[tokio::test]
    async fn test_run_down_verbose_attaches_output() {
        let runner = FakeRunner::new();
        runner.push_success("");

        run_down(&DownArgs { verbose: true }, &test_config(), &runner)
            .await
            .unwrap();

        assert_eq!(runner.invocations()[0].output, OutputMode::Attached);
    }

    #[tokio::test]
    async fn test_run_down_failure_is_reported() {
        let runner = FakeRunner::new();
        runner.push_failure(1, "permission denied");

        let result = run_down(&DownArgs { verbose: false }, &test_config(), &runner).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_run_down_twice_is_repeat_safe() {
        // Compose reports success when there is nothing to remove, so a
        // second teardown behaves exactly like the first.
        let runner = FakeRunner::new();
        runner.push_success("");
        runner.push_success("");

        run_down(&DownArgs { verbose: false }, &test_config(), &runner)
            .await
            .unwrap();
        run_down(&DownArgs { verbose: false }, &test_config(), &runner)
            .await
            .unwrap();

        assert_eq!(runner.invocations().len(), 2);
    }
}
