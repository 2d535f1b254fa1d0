//! # PhpDev Documentation Handler
//!
//! File: cli/src/commands/docs.rs
//! Author: RunOpenCode
//! Repository: https://github.com/runopencode/phpdev
//!
//! ## Overview
//!
//! This module implements the `phpdev docs` command. It builds the project's
//! Sphinx documentation on the host, either as a one-shot build or in watch
//! mode where the generator rebuilds and serves the pages on every source
//! change.
//!
//! ## Architecture
//!
//! The command flow involves these steps:
//! 1. Parse command-line arguments (`DocsArgs`) using `clap`.
//! 2. Load the PhpDev configuration (`core::config`) for the generator
//!    binaries and the source/output directories.
//! 3. Build the generator invocation via `common::sphinx`, selecting
//!    `sphinx-autobuild` for `--watch` and `sphinx-build` otherwise.
//! 4. Run the generator attached to the terminal; its own progress output is
//!    the user interface here. A non-zero generator exit fails the command.
//!
//! ## Usage
//!
//! ```bash
//! # Build the documentation once
//! phpdev docs
//!
//! # Rebuild and serve on every change
//! phpdev docs --watch
//! ```
//!
use crate::{
    common::{
        process::{CommandRunner, SystemRunner},
        sphinx,
    },
    core::{
        config,
        error::{PhpdevError, Result},
    },
};
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

/// # Documentation Arguments (`DocsArgs`)
///
/// Defines the command-line arguments accepted by the `phpdev docs` command.
#[derive(Parser, Debug)]
#[command(about = "Build the project documentation")]
pub struct DocsArgs {
    /// Rebuild and serve the documentation on every source change.
    #[arg(short, long)]
    watch: bool,
}

/// # Handle Documentation Command (`handle_docs`)
///
/// The main asynchronous handler function for the `phpdev docs` command.
///
/// ## Workflow:
/// 1. Logs the start and parsed arguments.
/// 2. Loads the PhpDev configuration.
/// 3. Delegates to [`run_docs`] with the real system command runner.
///
/// ## Arguments
///
/// * `args`: The parsed `DocsArgs` struct.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` when the generator exited successfully, `Err`
///   when it could not be started or reported a failure.
pub async fn handle_docs(args: DocsArgs) -> Result<()> {
    info!("Handling docs command...");
    debug!("Docs args: {:?}", args);

    // 1. Load configuration for the generator settings.
    let cfg = config::load_config().context("Failed to load PhpDev configuration")?;

    // 2. Run against the real system runner.
    run_docs(&args, &cfg, &SystemRunner).await
}

/// Drives the documentation build against any command runner.
async fn run_docs(
    args: &DocsArgs,
    cfg: &config::Config,
    runner: &dyn CommandRunner,
) -> Result<()> {
    let invocation = sphinx::generator_invocation(cfg, args.watch);
    debug!("Documentation generator: {}", invocation.command_line());

    let outcome = runner
        .run(&invocation)
        .await
        .context("Failed to run the documentation generator")?;

    if !outcome.success() {
        return Err(PhpdevError::ExternalCommand {
            cmd: invocation.command_line(),
            status: outcome.status.to_string(),
            output: outcome.describe_output(),
        }
        .into());
    }
    Ok(())
}
