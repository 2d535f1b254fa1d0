//! # PhpDev Docker Module Interface
//!
//! File: cli/src/common/docker/mod.rs
//! Author: RunOpenCode
//! Repository: https://github.com/runopencode/phpdev
//!
//! ## Overview
//!
//! This module serves as the central public interface for interacting with
//! Docker within the PhpDev CLI. It organizes Docker-related functionality into
//! logical submodules and re-exports commonly used functions for convenience.
//!
//! All interaction happens through the `docker` CLI binary (and its `compose`
//! subcommand) driven via [`common::process`](crate::common::process), the same
//! way a developer would type the commands by hand. Which binary, compose file
//! and service are used comes from the loaded [`Config`].
//!
//! ## Architecture
//!
//! The `common::docker` module delegates tasks to the following specialized submodules:
//!
//! - **`state`**: Queries the compose stack for the service container id and
//!   enforces that a running container exists before in-container work starts.
//! - **`lifecycle`**: Brings the compose stack up and tears it down.
//! - **`interaction`**: Executes commands inside the running service container
//!   (`docker exec`), scoped to the configured in-container working directory.
//!
//! ## Usage
//!
//! Command handlers interact with Docker through the submodules:
//!
//! ```rust
//! use crate::common::docker;
//! use crate::common::process::{OutputMode, SystemRunner};
//! use crate::core::error::Result;
//! # use crate::core::config;
//!
//! # async fn run_example() -> Result<()> {
//! # let cfg = config::Config::default();
//! // Bring the stack up, silently.
//! docker::lifecycle::compose_up(&SystemRunner, &cfg, OutputMode::Captured).await?;
//!
//! // Resolve the running service container (fails if it is not running).
//! let container_id = docker::require_service_id(&SystemRunner, &cfg).await?;
//!
//! // Run composer inside it, attached to the terminal.
//! let command = vec!["composer".to_string(), "install".to_string()];
//! docker::interaction::exec_in_service(&SystemRunner, &cfg, &container_id, &command, OutputMode::Attached).await?;
//! # Ok(())
//! # }
//! ```
//!

/// Facilitates interaction with the running service container (executing commands).
pub mod interaction;
/// Contains functions for managing the lifecycle of the compose stack (up, down).
pub mod lifecycle;
/// Offers functions to query the state of the compose stack (service container id).
pub mod state;

// --- Re-exports for easier access from other parts of the application ---
// Makes the handle lookup available as `docker::require_service_id(...)`.
pub use state::query_service_id;
pub use state::require_service_id;

use crate::common::process::Invocation;
use crate::core::config::Config;

/// Base invocation for the configured compose stack: the docker binary, the
/// `compose` subcommand and the `-f` compose file, running from the working
/// root. Callers append the actual compose operation (`up`, `down`, `ps`).
pub fn compose_invocation(cfg: &Config) -> Invocation {
    Invocation::new(&cfg.stack.docker_bin)
        .arg("compose")
        .arg("-f")
        .arg(&cfg.stack.compose_file)
        .current_dir(&cfg.root)
}
