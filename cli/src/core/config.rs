//! # PhpDev Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: RunOpenCode
//! Repository: https://github.com/runopencode/phpdev
//!
//! ## Overview
//!
//! This module implements the configuration system for PhpDev, handling loading,
//! merging, validation, and access to configuration data. It supports a multi-level
//! configuration approach that combines defaults, user settings, and project-specific
//! overrides.
//!
//! ## Architecture
//!
//! The configuration system follows these principles:
//! - Configuration is loaded from multiple sources in order of precedence
//! - Paths are validated and expanded (e.g., `~` to home directory)
//! - Configuration is validated for correctness before use
//! - Structured data models ensure type safety
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.phpdev.toml` in current directory or ancestors
//! 2. User-specific `~/.config/phpdev/config.toml`
//! 3. Default values defined in the code
//!
//! The directory holding the project `.phpdev.toml` becomes the working root:
//! every spawned command runs with that directory as its working directory, so
//! invocations behave the same no matter how deep inside the project tree the
//! user currently is. Without a project file the current directory is the root.
//!
//! ## Examples
//!
//! Loading and using configuration:
//!
//! ```rust
//! let cfg = config::load_config()?;
//!
//! // Access stack settings
//! let service = &cfg.stack.service;
//! let compose_file = &cfg.stack.compose_file;
//!
//! // Resolve the compose file against the working root
//! let compose_path = cfg.compose_path();
//! ```
//!
//! The configuration is loaded once per command execution and passed
//! to the modules that need it.
//!
use crate::core::error::{PhpdevError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub stack: StackConfig,
    #[serde(default)]
    pub composer: ComposerConfig,
    #[serde(default)]
    pub docs: DocsConfig,
    /// Directory all spawned commands run from and relative paths resolve
    /// against. Derived from the location of the project config file (or the
    /// current directory), never read from the TOML itself.
    #[serde(skip)]
    pub root: PathBuf,
}

/// Identity of the project the environment belongs to (used in console output).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Human-readable project name shown in banners and error messages.
    #[serde(default = "default_project_name")]
    pub name: String,
}

/// Configuration for the docker compose stack (`phpdev up` / `phpdev down`).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StackConfig {
    /// Docker binary to invoke (can use ~). Will be expanded.
    #[serde(default = "default_docker_bin")]
    pub docker_bin: String,
    /// Compose file passed via `-f`, relative to the working root (can use ~).
    #[serde(default = "default_compose_file")]
    pub compose_file: String,
    /// Compose service hosting the PHP toolchain.
    #[serde(default = "default_service")]
    pub service: String,
    /// Working directory inside the service container where the project is mounted.
    #[serde(default = "default_workdir")]
    pub workdir: String,
}

/// Configuration for the in-container composer proxy (`phpdev composer ...`).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ComposerConfig {
    /// Composer executable name inside the service container.
    #[serde(default = "default_composer_bin")]
    pub binary: String,
}

/// Configuration for documentation builds (`phpdev docs`).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DocsConfig {
    /// One-shot documentation generator executable (can use ~). Will be expanded.
    #[serde(default = "default_docs_build_bin")]
    pub build_bin: String,
    /// Watching documentation generator executable (can use ~). Will be expanded.
    #[serde(default = "default_docs_watch_bin")]
    pub watch_bin: String,
    /// Documentation sources, relative to the working root (can use ~).
    #[serde(default = "default_docs_source_dir")]
    pub source_dir: String,
    /// Build output directory, relative to the working root (can use ~).
    #[serde(default = "default_docs_output_dir")]
    pub output_dir: String,
    /// Rebuild the documentation environment from scratch on every run.
    #[serde(default = "default_fresh_env")]
    pub fresh_env: bool,
}

// The Default impls must agree with the serde attributes above, so a missing
// config file and an empty config file produce identical settings.
impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_project_name(),
        }
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            docker_bin: default_docker_bin(),
            compose_file: default_compose_file(),
            service: default_service(),
            workdir: default_workdir(),
        }
    }
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            binary: default_composer_bin(),
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            build_bin: default_docs_build_bin(),
            watch_bin: default_docs_watch_bin(),
            source_dir: default_docs_source_dir(),
            output_dir: default_docs_output_dir(),
            fresh_env: default_fresh_env(),
        }
    }
}

impl Config {
    /// Location of the compose file, resolved against the working root.
    pub fn compose_path(&self) -> PathBuf {
        self.root.join(&self.stack.compose_file)
    }
}

// --- Default value functions ---
fn default_project_name() -> String {
    "runopencode/phplib".to_string()
}
fn default_docker_bin() -> String {
    "docker".to_string()
}
fn default_compose_file() -> String {
    "compose.yaml".to_string()
}
fn default_service() -> String {
    "php.local".to_string()
}
fn default_workdir() -> String {
    "/var/www/html".to_string()
}
fn default_composer_bin() -> String {
    "composer".to_string()
}
fn default_docs_build_bin() -> String {
    "sphinx-build".to_string()
}
fn default_docs_watch_bin() -> String {
    "sphinx-autobuild".to_string()
}
fn default_docs_source_dir() -> String {
    "docs/source".to_string()
}
fn default_docs_output_dir() -> String {
    "build/docs".to_string()
}
fn default_fresh_env() -> bool {
    true
}

// --- Configuration Loading Functions ---
const PROJECT_CONFIG_FILENAME: &str = ".phpdev.toml";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let (project_cfg, root) = match project_config {
        Some((cfg, dir)) => (Some(cfg), dir),
        None => (
            None,
            std::env::current_dir().context("Failed to get current directory")?,
        ),
    };
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_cfg);
    merged_config.root = root;
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "RunOpenCode", "phpdev") {
        let config_dir = proj_dirs.config_dir();
        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

/// Loads the project config and reports the directory containing it, which
/// becomes the working root for every spawned command.
fn load_project_config() -> Result<Option<(Config, PathBuf)>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_from(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        let config = load_config_from_path(&project_config_path)?;
        let root = project_config_path
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| {
                anyhow!(PhpdevError::Config(format!(
                    "Project configuration file '{}' has no parent directory.",
                    project_config_path.display()
                )))
            })?;
        Ok(Some((config, root)))
    } else {
        debug!(
            "No project configuration file ({}) found in current directory or ancestors.",
            PROJECT_CONFIG_FILENAME
        );
        Ok(None)
    }
}

/// Walks up from `start` looking for the project config file. The search ends
/// at the first directory containing a `.git` directory, so configs from
/// unrelated projects higher up the tree are never picked up.
fn find_project_config_from(start: &Path) -> Option<PathBuf> {
    let mut path: &Path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        let git_dir = path.join(".git");
        if project_config.exists() && project_config.is_file() {
            return Some(project_config);
        }
        if git_dir.exists() && git_dir.is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    None
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.project.name = if project_cfg.project.name != default_project_name() {
        project_cfg.project.name
    } else {
        user.project.name
    };
    merged.stack.docker_bin = if project_cfg.stack.docker_bin != default_docker_bin() {
        project_cfg.stack.docker_bin
    } else {
        user.stack.docker_bin
    };
    merged.stack.compose_file = if project_cfg.stack.compose_file != default_compose_file() {
        project_cfg.stack.compose_file
    } else {
        user.stack.compose_file
    };
    merged.stack.service = if project_cfg.stack.service != default_service() {
        project_cfg.stack.service
    } else {
        user.stack.service
    };
    merged.stack.workdir = if project_cfg.stack.workdir != default_workdir() {
        project_cfg.stack.workdir
    } else {
        user.stack.workdir
    };
    merged.composer.binary = if project_cfg.composer.binary != default_composer_bin() {
        project_cfg.composer.binary
    } else {
        user.composer.binary
    };
    merged.docs.build_bin = if project_cfg.docs.build_bin != default_docs_build_bin() {
        project_cfg.docs.build_bin
    } else {
        user.docs.build_bin
    };
    merged.docs.watch_bin = if project_cfg.docs.watch_bin != default_docs_watch_bin() {
        project_cfg.docs.watch_bin
    } else {
        user.docs.watch_bin
    };
    merged.docs.source_dir = if project_cfg.docs.source_dir != default_docs_source_dir() {
        project_cfg.docs.source_dir
    } else {
        user.docs.source_dir
    };
    merged.docs.output_dir = if project_cfg.docs.output_dir != default_docs_output_dir() {
        project_cfg.docs.output_dir
    } else {
        user.docs.output_dir
    };
    merged.docs.fresh_env = if project_cfg.docs.fresh_env != default_fresh_env() {
        project_cfg.docs.fresh_env
    } else {
        user.docs.fresh_env
    };
    merged
}

/// Expands `~` in the settings that name host-side executables or paths.
/// The composer binary is deliberately left alone, it resolves inside the
/// service container where host home directories mean nothing.
fn expand_config_paths(config: &mut Config) -> Result<()> {
    debug!("Expanding paths in configuration...");
    config.stack.docker_bin = shellexpand::tilde(&config.stack.docker_bin).into_owned();
    config.stack.compose_file = shellexpand::tilde(&config.stack.compose_file).into_owned();
    config.docs.build_bin = shellexpand::tilde(&config.docs.build_bin).into_owned();
    config.docs.watch_bin = shellexpand::tilde(&config.docs.watch_bin).into_owned();
    config.docs.source_dir = shellexpand::tilde(&config.docs.source_dir).into_owned();
    config.docs.output_dir = shellexpand::tilde(&config.docs.output_dir).into_owned();
    debug!("Expanded docker binary: {}", config.stack.docker_bin);
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    let required = [
        ("project.name", &config.project.name),
        ("stack.docker_bin", &config.stack.docker_bin),
        ("stack.compose_file", &config.stack.compose_file),
        ("stack.service", &config.stack.service),
        ("stack.workdir", &config.stack.workdir),
        ("composer.binary", &config.composer.binary),
        ("docs.build_bin", &config.docs.build_bin),
        ("docs.watch_bin", &config.docs.watch_bin),
        ("docs.source_dir", &config.docs.source_dir),
        ("docs.output_dir", &config.docs.output_dir),
    ];
    for (key, value) in required {
        if value.trim().is_empty() {
            return Err(anyhow!(PhpdevError::Config(format!(
                "Setting '{}' cannot be empty.",
                key
            ))));
        }
    }
    let compose_path = config.compose_path();
    if !compose_path.exists() {
        // Compose reports its own error when the file is required, this
        // warning just surfaces the likely cause earlier.
        warn!("Compose file '{}' does not exist.", compose_path.display());
    } else if !compose_path.is_file() {
        return Err(anyhow!(PhpdevError::Config(format!(
            "Compose path '{}' exists but is not a file.",
            compose_path.display()
        ))));
    }
    info!("Configuration validation successful.");
    Ok(())
}
