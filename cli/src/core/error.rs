//! # PhpDev Error Types
//!
//! File: cli/src/core/error.rs
//! Author: RunOpenCode
//! Repository: https://github.com/runopencode/phpdev
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used throughout
//! the PhpDev application. It provides a consistent approach to error management
//! with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `PhpdevError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover various domains:
//! - Configuration errors
//! - Development environment state errors (service not running)
//! - External command execution errors (docker, compose, composer, sphinx)
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Return a specific error type
//! if service_id.is_none() {
//!     return Err(PhpdevError::ServiceNotRunning { service: "php.local".into() })?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//!
//! // Pattern matching on error types
//! match result {
//!     Ok(value) => println!("Success: {}", value),
//!     Err(e) if e.downcast_ref::<PhpdevError>().map_or(false, |pe| matches!(pe, PhpdevError::ServiceNotRunning { .. })) => {
//!         println!("Service is down, starting it...");
//!     },
//!     Err(e) => return Err(e),
//! }
//! ```
//!
//! The error system provides detailed error messages to the user and
//! includes context information for debugging.
//!
use thiserror::Error;

/// Custom error type for the PhpDev application.
#[derive(Error, Debug)]
pub enum PhpdevError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Service '{service}' is not running.")]
    ServiceNotRunning { service: String },

    #[error("External command failed: {cmd}, Status: {status}, Output:\n{output}")]
    ExternalCommand {
        cmd: String,
        status: String,
        output: String,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
