//! # PhpDev CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: RunOpenCode
//! Repository: https://github.com/runopencode/phpdev
//!
//! ## Overview
//!
//! This integration test file focuses on verifying the top-level behavior
//! of the `phpdev` command-line interface, such as handling standard flags
//! like `--version` and `--help`, and the `help` subcommand itself.
//!

// Declare and use the common module for helpers like `phpdev_cmd()`
mod common;
use common::*;
use predicates::prelude::*;

/// # Test Help Lists Commands (`test_help_lists_all_commands`)
///
/// The top-level help must mention every command.
#[test]
fn test_help_lists_all_commands() {
    phpdev_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("up"))
        .stdout(predicate::str::contains("down"))
        .stdout(predicate::str::contains("composer"))
        .stdout(predicate::str::contains("docs"));
}

/// # Test Help Subcommand (`test_help_subcommand`)
///
/// `phpdev help` behaves like `--help`.
#[test]
fn test_help_subcommand() {
    phpdev_cmd()
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PhpDev"));
}

/// # Test Version Flag (`test_version_flag`)
///
/// `--version` reports the crate version.
#[test]
fn test_version_flag() {
    phpdev_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// # Test Unknown Command (`test_unknown_command_fails`)
///
/// An unknown command is rejected with usage information.
#[test]
fn test_unknown_command_fails() {
    phpdev_cmd()
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

/// # Test Up Help (`test_up_help_shows_flag_pairs`)
///
/// Command-level help documents the flag pairs.
#[test]
fn test_up_help_shows_flag_pairs() {
    phpdev_cmd()
        .args(["up", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--install"))
        .stdout(predicate::str::contains("--no-install"))
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("--silent"));
}
