//! # PhpDev Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: RunOpenCode
//! Repository: https://github.com/runopencode/phpdev
//!
//! ## Overview
//!
//! This module aggregates the top-level commands that comprise the PhpDev CLI.
//! It serves as the central point for importing and re-exporting command
//! modules to make them accessible to the main application entry point
//! (`main.rs`).
//!
//! ## Architecture
//!
//! The CLI surface is deliberately flat: each command lives in its own file
//! and exposes an arguments struct (`clap::Parser`) plus an asynchronous
//! `handle_*` function. The handlers load configuration, then drive the
//! shared plumbing in `common` against the real system command runner.
//!
//! ## Commands
//!
//! - `up`: Build and start the development environment, install dependencies.
//! - `down`: Tear the environment down again.
//! - `composer`: Proxy a composer invocation into the running PHP container.
//! - `docs`: Build the Sphinx documentation, once or in watch mode.
//!

/// Proxies composer invocations into the running PHP service container.
pub mod composer;
/// Builds the project documentation with Sphinx, one-shot or watching.
pub mod docs;
/// Tears down the compose stack.
pub mod down;
/// Builds and starts the compose stack and installs project dependencies.
pub mod up;
