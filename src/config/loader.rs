//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

use super::{ListConfig, DEFAULT_SCROLL_OFF_MARGIN};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "LISTPORT_CONFIG";

/// Environment variable overriding the global scroll-off margin.
pub const MARGIN_ENV_VAR: &str = "LISTPORT_SCROLL_OFF_MARGIN";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, directory in the way).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
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
/// Corresponds to `~/.config/listport/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Global scroll-off margin.
    #[serde(default)]
    pub scroll_off_margin: Option<usize>,

    /// Global live highlight.
    #[serde(default)]
    pub live_highlight: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Per-list overrides keyed by list name.
    ///
    /// ```toml
    /// [lists.menu]
    /// scroll_off_margin = 0
    /// live_highlight = true
    /// ```
    #[serde(default)]
    pub lists: HashMap<String, ListConfigSection>,
}

/// Overrides for a single named list.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ListConfigSection {
    /// Scroll-off margin for this list.
    #[serde(default)]
    pub scroll_off_margin: Option<usize>,

    /// Live highlight for this list.
    #[serde(default)]
    pub live_highlight: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Global scroll-off margin.
    pub scroll_off_margin: usize,
    /// Global live highlight.
    pub live_highlight: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Per-list overrides from the config file.
    pub lists: HashMap<String, ListConfigSection>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            scroll_off_margin: DEFAULT_SCROLL_OFF_MARGIN,
            live_highlight: false,
            log_file_path: default_log_path(),
            lists: HashMap::new(),
        }
    }
}

impl ResolvedConfig {
    /// Settings for the list called `name`.
    ///
    /// A `[lists.<name>]` section overrides the global values field by field.
    pub fn list_config(&self, name: &str) -> ListConfig {
        let section = self.lists.get(name);
        ListConfig {
            scroll_off_margin: section
                .and_then(|s| s.scroll_off_margin)
                .unwrap_or(self.scroll_off_margin),
            live_highlight: section
                .and_then(|s| s.live_highlight)
                .unwrap_or(self.live_highlight),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/listport/listport.log` on Unix-like systems,
/// or the platform equivalent. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("listport").join("listport.log")
    } else {
        PathBuf::from("listport.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/listport/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if the config directory is unknown.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("listport").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `LISTPORT_CONFIG` environment variable
/// 3. Default path `~/.config/listport/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        scroll_off_margin: config
            .scroll_off_margin
            .unwrap_or(defaults.scroll_off_margin),
        live_highlight: config.live_highlight.unwrap_or(defaults.live_highlight),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        lists: config.lists,
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `LISTPORT_SCROLL_OFF_MARGIN`: override the global margin (ignored when
///   not a non-negative integer)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(MARGIN_ENV_VAR) {
        match raw.trim().parse::<usize>() {
            Ok(margin) => config.scroll_off_margin = margin,
            Err(e) => tracing::warn!(
                value = %raw,
                error = %e,
                "Ignoring unparsable {}",
                MARGIN_ENV_VAR
            ),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user actually set
/// are applied, and a set flag also replaces the matching field of every
/// `[lists.<name>]` section.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    margin_override: Option<usize>,
    live_highlight_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(margin) = margin_override {
        config.scroll_off_margin = margin;
        for section in config.lists.values_mut() {
            section.scroll_off_margin = None;
        }
    }

    if let Some(live_highlight) = live_highlight_override {
        config.live_highlight = live_highlight;
        for section in config.lists.values_mut() {
            section.live_highlight = None;
        }
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
