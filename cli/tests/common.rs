//! # PhpDev CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: RunOpenCode
//! Repository: https://github.com/runopencode/phpdev
//!
//! ## Overview
//!
//! This module provides shared utility functions and re-exports common crates
//! used across multiple integration test files (`up.rs`, `down.rs`, etc.).
//! This avoids code duplication in the test suite.
//!
//! Integration tests are located in the `cli/tests/` directory and each `.rs`
//! file in that directory (that isn't a module like this one) is compiled as a
//! separate test crate linked against the main `phpdev` binary crate.
//!
//! The heart of the suite is the [`harness`] module: it builds a throwaway
//! project directory with a `.phpdev.toml` that points every external binary
//! (docker, sphinx-build, sphinx-autobuild) at generated shell scripts. The
//! scripts append each invocation to a log file and exit with scripted
//! behavior, so the tests can drive the real binary end to end without a
//! docker daemon or a Python toolchain on the test machine.
//!

// Allow potentially unused code in this common module, as different test files
// use different helpers.
#![allow(dead_code)]

// Re-export common crates/modules needed by multiple test files
pub use assert_cmd::Command;

/// # Get PhpDev Command (`phpdev_cmd`)
///
/// Helper function to create an `assert_cmd::Command` instance pointing to the
/// compiled `phpdev` binary target for the current test run.
///
/// This ensures tests execute the correct binary being built.
///
/// ## Panics
/// Panics if the `phpdev` binary cannot be found via `Command::cargo_bin`.
///
/// ## Returns
/// * `Command` - An `assert_cmd::Command` ready to have arguments added and assertions run.
pub fn phpdev_cmd() -> Command {
    Command::cargo_bin("phpdev").expect("Failed to find phpdev binary for testing")
}

/// Stub-script test harness. Shell scripts stand in for the external tools,
/// so this only works on unix-like systems.
#[cfg(unix)]
pub mod harness {
    use super::phpdev_cmd;
    use assert_cmd::Command;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Shell fragments run by the docker stub, one per subcommand the CLI
    /// issues. The defaults model a healthy environment with the PHP service
    /// running as container `abc123`.
    pub struct DockerScript {
        pub up: String,
        pub down: String,
        pub ps: String,
        pub exec: String,
    }

    impl Default for DockerScript {
        fn default() -> Self {
            DockerScript {
                up: "exit 0".to_string(),
                down: "exit 0".to_string(),
                ps: "printf 'abc123\\n'".to_string(),
                exec: "exit 0".to_string(),
            }
        }
    }

    /// A disposable project directory wired up to stub external tools.
    ///
    /// Layout:
    /// ```text
    /// <tempdir>/
    ///   project/            <- CLI working directory
    ///     .phpdev.toml      <- points the tool binaries at ../bin
    ///     compose.yaml
    ///   bin/                <- generated stub scripts
    ///   invocations.log     <- one line per stub invocation
    /// ```
    pub struct TestProject {
        dir: TempDir,
        pub root: PathBuf,
        bin: PathBuf,
        log: PathBuf,
    }

    impl TestProject {
        /// Creates the project directory, the compose file and a project
        /// config pointing at the stub locations. The stubs themselves are
        /// installed by the `script_*` methods.
        pub fn new() -> Self {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let root = dir.path().join("project");
            let bin = dir.path().join("bin");
            let log = dir.path().join("invocations.log");
            fs::create_dir_all(&root).expect("Failed to create project dir");
            fs::create_dir_all(&bin).expect("Failed to create stub bin dir");
            fs::write(
                root.join("compose.yaml"),
                "services:\n  php.local:\n    image: php:8.3-fpm\n",
            )
            .expect("Failed to write compose file");

            let project = TestProject { dir, root, bin, log };
            project.write_project_config();
            project
        }

        fn write_project_config(&self) {
            let config = format!(
                "[project]\n\
                 name = \"runopencode/phplib\"\n\
                 \n\
                 [stack]\n\
                 docker_bin = \"{docker}\"\n\
                 \n\
                 [docs]\n\
                 build_bin = \"{build}\"\n\
                 watch_bin = \"{watch}\"\n",
                docker = self.bin.join("docker").display(),
                build = self.bin.join("sphinx-build").display(),
                watch = self.bin.join("sphinx-autobuild").display(),
            );
            fs::write(self.root.join(".phpdev.toml"), config)
                .expect("Failed to write project config");
        }

        /// Installs the docker stub. The script logs every invocation, then
        /// dispatches on the argument shape the CLI produces:
        /// `compose -f <file> <verb> ...` puts the verb at `$4`, and `exec`
        /// is always `$1`.
        pub fn script_docker(&self, script: &DockerScript) {
            let body = format!(
                "#!/bin/sh\n\
                 echo \"$(basename \"$0\") $*\" >> \"{log}\"\n\
                 case \"$1\" in\n\
                 compose)\n\
                 case \"$4\" in\n\
                 up) {up} ;;\n\
                 down) {down} ;;\n\
                 ps) {ps} ;;\n\
                 esac\n\
                 ;;\n\
                 exec) {exec} ;;\n\
                 esac\n\
                 exit 0\n",
                log = self.log.display(),
                up = script.up,
                down = script.down,
                ps = script.ps,
                exec = script.exec,
            );
            self.install_script("docker", &body);
        }

        /// Installs a documentation generator stub under the given name
        /// (`sphinx-build` or `sphinx-autobuild`) with the given shell body.
        pub fn script_sphinx(&self, name: &str, body: &str) {
            let script = format!(
                "#!/bin/sh\n\
                 echo \"$(basename \"$0\") $*\" >> \"{log}\"\n\
                 {body}\n\
                 exit 0\n",
                log = self.log.display(),
                body = body,
            );
            self.install_script(name, &script);
        }

        fn install_script(&self, name: &str, body: &str) {
            let path = self.bin.join(name);
            fs::write(&path, body).expect("Failed to write stub script");
            let mut perms = fs::metadata(&path)
                .expect("Failed to read stub metadata")
                .permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&path, perms).expect("Failed to mark stub executable");
        }

        /// The logged stub invocations, one line each, oldest first.
        pub fn log_lines(&self) -> Vec<String> {
            match fs::read_to_string(&self.log) {
                Ok(contents) => contents.lines().map(str::to_string).collect(),
                Err(_) => Vec::new(),
            }
        }

        /// A `phpdev` command rooted in the project directory with an
        /// isolated environment: the user-level config lookup is pointed at
        /// the temp dir, and log/color overrides from the ambient
        /// environment are cleared so assertions read plain text.
        pub fn cmd(&self) -> Command {
            let mut cmd = phpdev_cmd();
            cmd.current_dir(&self.root)
                .env("HOME", self.dir.path())
                .env("XDG_CONFIG_HOME", self.dir.path().join("xdg-config"))
                .env_remove("RUST_LOG")
                .env_remove("CLICOLOR_FORCE")
                .env_remove("CLICOLOR")
                .env_remove("NO_COLOR");
            cmd
        }
    }
}
