//! # PhpDev Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//! Author: RunOpenCode
//! Repository: https://github.com/runopencode/phpdev
//!
//! ## Overview
//!
//! This module provides the machinery for **executing and managing external
//! processes** from within the PhpDev CLI. Every tool PhpDev drives (docker,
//! docker compose, sphinx) runs through here, as a wrapper around
//! `tokio::process::Command`.
//!
//! Commands are described by an [`Invocation`]: a program, its argument
//! vector, an optional working directory, and an [`OutputMode`]. Arguments are
//! always passed as a discrete vector, never flattened into a shell string, so
//! paths and composer arguments containing spaces survive intact.
//!
//! ## Architecture
//!
//! The module consists of:
//!
//! - **`Invocation`:** Builder-style description of one external command.
//! - **`OutputMode`:** Whether the child borrows the invoking terminal
//!   (`Attached`) or runs silently with its output captured (`Captured`).
//! - **`CommandOutcome`:** Exit status plus whatever output was captured.
//! - **`CommandRunner`:** Trait abstracting how invocations are executed.
//!   Production code uses [`SystemRunner`]; tests substitute a scripted
//!   runner that records invocations without spawning real processes.
//! - **`SystemRunner`:** The real implementation, spawning child processes
//!   via tokio and waiting for them to exit.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::process::{CommandRunner, Invocation, OutputMode, SystemRunner};
//!
//! # async fn run_example() -> crate::core::error::Result<()> {
//! let invocation = Invocation::new("docker")
//!     .arg("compose")
//!     .args(["-f", "compose.yaml", "ps", "-q", "php.local"])
//!     .output(OutputMode::Captured);
//!
//! let outcome = SystemRunner.run(&invocation).await?;
//! if outcome.success() {
//!     println!("container id: {}", outcome.stdout.trim());
//! }
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// How a child process relates to the invoking terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// The child inherits stdin/stdout/stderr and owns the terminal until it
    /// exits. Used for interactive or deliberately verbose commands.
    Attached,
    /// The child gets no stdin and its stdout/stderr are captured into the
    /// [`CommandOutcome`]. Nothing reaches the terminal unless a caller
    /// decides to surface it.
    Captured,
}

/// Description of a single external command invocation.
///
/// Built with the builder methods and handed to a [`CommandRunner`]. The
/// argument vector is passed to the OS verbatim; no shell is involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to execute (name resolved via PATH, or an absolute path).
    pub program: String,
    /// Arguments passed to the program, one vector element per argument.
    pub args: Vec<String>,
    /// Working directory for the child. `None` inherits the parent's.
    pub current_dir: Option<PathBuf>,
    /// Terminal relationship of the child.
    pub output: OutputMode,
}

impl Invocation {
    /// Starts describing an invocation of `program`, captured by default.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            output: OutputMode::Captured,
        }
    }

    /// Appends a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Sets the working directory for the child process.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Sets the terminal relationship of the child process.
    pub fn output(mut self, mode: OutputMode) -> Self {
        self.output = mode;
        self
    }

    /// Renders the invocation as a single display string for logs and error
    /// messages. Not suitable for re-execution through a shell.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Result of one executed invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Process exit code. `-1` when the process was terminated by a signal.
    pub status: i32,
    /// Captured standard output. Empty for attached invocations.
    pub stdout: String,
    /// Captured standard error. Empty for attached invocations.
    pub stderr: String,
}

impl CommandOutcome {
    /// True when the process exited with status zero.
    pub fn success(&self) -> bool {
        self.status == 0
    }

    /// Captured stdout followed by captured stderr.
    pub fn combined_output(&self) -> String {
        let mut combined = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !combined.is_empty() && !combined.ends_with('\n') {
                combined.push('\n');
            }
            combined.push_str(&self.stderr);
        }
        combined
    }

    /// Output payload for error reporting. Attached invocations capture
    /// nothing, so they get a note pointing at the terminal instead.
    pub fn describe_output(&self) -> String {
        let combined = self.combined_output();
        if combined.trim().is_empty() {
            "command output was attached to the terminal".to_string()
        } else {
            combined
        }
    }
}

/// Trait abstracting how invocations are executed.
///
/// Production code uses [`SystemRunner`]; tests provide an implementation
/// that records invocations and replays scripted outcomes instead of
/// spawning real processes.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Executes the invocation and waits for the process to exit.
    ///
    /// A non-zero exit is *not* an error at this level; it is reported
    /// through [`CommandOutcome::status`] so callers can decide what a
    /// failure means for them. `Err` is reserved for the process failing to
    /// spawn or being lost while awaited.
    async fn run(&self, invocation: &Invocation) -> Result<CommandOutcome>;
}

/// Real command runner used in production.
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, invocation: &Invocation) -> Result<CommandOutcome> {
        debug!("Running external command: {}", invocation.command_line());
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        if let Some(dir) = &invocation.current_dir {
            cmd.current_dir(dir);
        }
        match invocation.output {
            OutputMode::Attached => {
                cmd.stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit());
                let status = cmd.status().await.with_context(|| {
                    format!("Failed to execute '{}'", invocation.command_line())
                })?;
                let code = status.code().unwrap_or(-1);
                debug!("Attached command exited with status {}", code);
                Ok(CommandOutcome {
                    status: code,
                    stdout: String::new(),
                    stderr: String::new(),
                })
            }
            OutputMode::Captured => {
                let output = cmd.output().await.with_context(|| {
                    format!("Failed to execute '{}'", invocation.command_line())
                })?;
                let code = output.status.code().unwrap_or(-1);
                debug!("Captured command exited with status {}", code);
                Ok(CommandOutcome {
                    status: code,
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                })
            }
        }
    }
}
