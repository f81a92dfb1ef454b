//! Configuration file loading with precedence handling.

use super::TypewriterSettings;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigLoadError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/typewriter/config.toml`:
///
/// ```toml
/// speed = 40.0
/// row_height = 1.0
/// line_height = 1.0
/// font_size = 1.0
/// frame_rate = 60
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Reveal distance per second.
    #[serde(default)]
    pub speed: Option<f64>,

    /// Height of one reveal row.
    #[serde(default)]
    pub row_height: Option<f64>,

    /// Advance of a single-column glyph.
    #[serde(default)]
    pub font_size: Option<f64>,

    /// Height of one text line.
    #[serde(default)]
    pub line_height: Option<f64>,

    /// Host redraw rate in frames per second.
    #[serde(default)]
    pub frame_rate: Option<u32>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Reveal and text settings.
    pub settings: TypewriterSettings,
    /// Host redraw rate in frames per second.
    pub frame_rate: u32,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            settings: TypewriterSettings::terminal(40.0),
            frame_rate: 60,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/typewriter/typewriter.log` on Unix-like systems,
/// or the appropriate platform path elsewhere.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("typewriter").join("typewriter.log")
    } else {
        PathBuf::from("typewriter.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigLoadError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigLoadError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigLoadError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/typewriter/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("typewriter").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TYPEWRITER_CONFIG` environment variable
/// 3. Default path `~/.config/typewriter/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigLoadError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("TYPEWRITER_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let settings = TypewriterSettings {
        speed: config.speed.unwrap_or(defaults.settings.speed),
        row_height: config.row_height.unwrap_or(defaults.settings.row_height),
        font_size: config.font_size.unwrap_or(defaults.settings.font_size),
        line_height: config.line_height.unwrap_or(defaults.settings.line_height),
    };

    ResolvedConfig {
        settings,
        frame_rate: config.frame_rate.unwrap_or(defaults.frame_rate),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TYPEWRITER_SPEED`: Override reveal speed (ignored with a warning if not a number)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var("TYPEWRITER_SPEED") {
        match raw.trim().parse::<f64>() {
            Ok(speed) => config.settings.speed = speed,
            Err(_) => warn!(value = %raw, "ignoring TYPEWRITER_SPEED: not a number"),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    speed_override: Option<f64>,
    frame_rate_override: Option<u32>,
) -> ResolvedConfig {
    if let Some(speed) = speed_override {
        config.settings.speed = speed;
    }

    if let Some(frame_rate) = frame_rate_override {
        config.frame_rate = frame_rate;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
