//! # PhpDev Documentation Generator Invocations (`common::sphinx`)
//!
//! File: cli/src/common/sphinx.rs
//! Author: RunOpenCode
//! Repository: https://github.com/runopencode/phpdev
//!
//! ## Overview
//!
//! This module assembles the invocations for the Sphinx documentation
//! toolchain used by `phpdev docs`. Two generators exist:
//!
//! - `sphinx-build` for a one-shot build,
//! - `sphinx-autobuild` for watch mode, which rebuilds on source changes and
//!   serves the result until interrupted.
//!
//! Both are invoked identically apart from the program name:
//! `<generator> -M html <source_dir> <output_dir> [--fresh-env]`, run from
//! the working root with the terminal attached. Sphinx output (and the
//! autobuild server address) is meant to be seen.
//!
use crate::common::process::{Invocation, OutputMode};
use crate::core::config::Config;

/// Builds the documentation generator invocation.
///
/// `watch` selects between the one-shot and the watching generator. The
/// `--fresh-env` flag is appended when the configuration asks for a clean
/// environment on every build (the default).
pub fn generator_invocation(cfg: &Config, watch: bool) -> Invocation {
    let program = if watch {
        &cfg.docs.watch_bin
    } else {
        &cfg.docs.build_bin
    };
    let mut invocation = Invocation::new(program)
        .arg("-M")
        .arg("html")
        .arg(&cfg.docs.source_dir)
        .arg(&cfg.docs.output_dir)
        .current_dir(&cfg.root)
        .output(OutputMode::Attached);
    if cfg.docs.fresh_env {
        invocation = invocation.arg("--fresh-env");
    }
    invocation
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_config() -> Config {
        let mut cfg = Config::default();
        cfg.root = PathBuf::from("/work/phplib");
        cfg
    }

    #[test]
    fn test_one_shot_build_invocation() {
        let invocation = generator_invocation(&test_config(), false);
        assert_eq!(invocation.program, "sphinx-build");
        assert_eq!(
            invocation.args,
            vec!["-M", "html", "docs/source", "build/docs", "--fresh-env"]
        );
        assert_eq!(invocation.current_dir, Some(PathBuf::from("/work/phplib")));
        assert_eq!(invocation.output, OutputMode::Attached);
    }

    #[test]
    fn test_watch_mode_selects_autobuild() {
        let invocation = generator_invocation(&test_config(), true);
        assert_eq!(invocation.program, "sphinx-autobuild");
        assert_eq!(
            invocation.args,
            vec!["-M", "html", "docs/source", "build/docs", "--fresh-env"]
        );
    }

    #[test]
    fn test_fresh_env_flag_can_be_disabled() {
        let mut cfg = test_config();
        cfg.docs.fresh_env = false;
        let invocation = generator_invocation(&cfg, false);
        assert_eq!(invocation.args, vec!["-M", "html", "docs/source", "build/docs"]);
    }

    #[test]
    fn test_custom_directories_are_used() {
        let mut cfg = test_config();
        cfg.docs.source_dir = "documentation/src".to_string();
        cfg.docs.output_dir = "var/docs".to_string();
        let invocation = generator_invocation(&cfg, false);
        assert_eq!(
            invocation.args,
            vec!["-M", "html", "documentation/src", "var/docs", "--fresh-env"]
        );
    }
}
