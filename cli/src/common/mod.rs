//! # PhpDev Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: RunOpenCode
//! Repository: https://github.com/runopencode/phpdev
//!
//! ## Overview
//!
//! This module serves as the root and organizational entry point for all shared,
//! common utility modules used throughout the PhpDev CLI application. It
//! aggregates the cross-cutting concerns: executing external processes,
//! driving docker and docker compose, assembling documentation generator
//! invocations, and rendering console output.
//!
//! By centralizing these utilities under the `common::` namespace, PhpDev aims
//! to promote code reuse, maintain consistency, and provide clear separation
//! between command-specific logic (`commands::`) and core infrastructure
//! (`core::`).
//!
//! ## Architecture
//!
//! The `common` module itself primarily consists of declarations (`pub mod`) for its
//! various submodules. Each submodule encapsulates a specific domain of utility functions:
//!
//! - **`process`**: Executes external commands through the `CommandRunner` abstraction,
//!   with attached or captured output.
//! - **`docker`**: Drives the `docker` CLI: compose stack lifecycle, service state
//!   queries and in-container command execution.
//! - **`sphinx`**: Assembles documentation generator invocations (one-shot and watch mode).
//! - **`ui`**: Renders the user-facing console output (banners, rules, colored status lines).
//!
//! ## Usage
//!
//! Command handlers and other parts of the application import specific functionalities
//! directly from the required submodule within `common`.
//!
//! ```rust
//! // Example importing from different common submodules
//! use crate::common::{docker, process, ui};
//! use crate::common::process::{OutputMode, SystemRunner};
//! use crate::core::error::Result;
//! # use crate::core::config;
//!
//! # async fn run_example() -> Result<()> {
//! # let cfg = config::Config::default();
//! ui::heading("Starting runopencode/phplib development environment...");
//!
//! // Use Docker utilities
//! docker::lifecycle::compose_up(&SystemRunner, &cfg, OutputMode::Captured).await?;
//! let container_id = docker::require_service_id(&SystemRunner, &cfg).await?;
//! # Ok(())
//! # }
//! ```
//!
//! This modular approach keeps the utility codebase organized and maintainable.
//!

/// Core utilities for driving the `docker` CLI (stack lifecycle, state, exec).
pub mod docker;
/// Utilities for executing and managing external processes.
pub mod process;
/// Utilities for assembling documentation generator invocations.
pub mod sphinx;
/// Utilities for terminal output (banners, rules, colored status lines).
pub mod ui;
