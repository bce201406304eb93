//! Configuration file loading with precedence handling.

use super::profile::Profile;
use crate::state::{PanelGeometry, StoreProfile};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "PULLUP_CONFIG";
/// Environment variable selecting a profile.
pub const PROFILE_ENV_VAR: &str = "PULLUP_PROFILE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
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

    /// Profile name not recognised.
    #[error("Unknown profile '{0}'")]
    UnknownProfile(String),
}

/// TOML configuration file structure.
///
/// All fields are optional - anything missing falls back to the profile.
/// Corresponds to `~/.config/pullup/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Profile supplying defaults for everything below.
    #[serde(default)]
    pub profile: Option<Profile>,

    /// Maximum number of messages retained.
    #[serde(default)]
    pub capacity: Option<usize>,

    /// Blank placeholder lines seeded at startup.
    #[serde(default)]
    pub padding: Option<usize>,

    /// Grab bar height.
    #[serde(default)]
    pub bar_height: Option<f64>,

    /// Space kept free above a fully open panel.
    #[serde(default)]
    pub top_margin: Option<f64>,

    /// Height of the first tap-open.
    #[serde(default)]
    pub default_open_height: Option<f64>,

    /// Whether messages are recorded at all.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Show message timestamps on startup.
    #[serde(default)]
    pub show_timestamps: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Profile the values were seeded from.
    pub profile: Profile,
    /// Store capacity and padding.
    pub store: StoreProfile,
    /// Panel chrome dimensions.
    pub panel: PanelGeometry,
    /// Whether messages are recorded.
    pub enabled: bool,
    /// Show timestamps on startup.
    pub show_timestamps: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Values set explicitly in the config file, re-applied on a profile switch
    file: ConfigFile,
}

impl ResolvedConfig {
    /// Defaults for a given profile.
    ///
    /// The profile picks the store size. Panel dimensions are always in
    /// terminal rows.
    pub fn for_profile(profile: Profile) -> Self {
        Self {
            profile,
            store: profile.store(),
            panel: PanelGeometry::terminal(),
            enabled: true,
            show_timestamps: false,
            log_file_path: default_log_path(),
            file: ConfigFile::default(),
        }
    }

    /// Layer every value the file sets explicitly over this config.
    fn with_file(self, file: ConfigFile) -> Self {
        Self {
            profile: self.profile,
            store: StoreProfile {
                capacity: file.capacity.unwrap_or(self.store.capacity),
                padding: file.padding.unwrap_or(self.store.padding),
            },
            panel: PanelGeometry {
                bar_height: file.bar_height.unwrap_or(self.panel.bar_height),
                top_margin: file.top_margin.unwrap_or(self.panel.top_margin),
                default_open_height: file
                    .default_open_height
                    .unwrap_or(self.panel.default_open_height),
            },
            enabled: file.enabled.unwrap_or(self.enabled),
            show_timestamps: file.show_timestamps.unwrap_or(self.show_timestamps),
            log_file_path: file.log_file_path.clone().unwrap_or(self.log_file_path),
            file,
        }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self::for_profile(Profile::default())
    }
}

/// Command-line values that override everything else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    /// `--profile`
    pub profile: Option<Profile>,
    /// `--capacity`
    pub capacity: Option<usize>,
    /// `--padding`
    pub padding: Option<usize>,
    /// `--timestamps`
    pub show_timestamps: Option<bool>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/pullup/pullup.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("pullup").join("pullup.log")
    } else {
        PathBuf::from("pullup.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/pullup/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pullup").join("config.toml"))
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

    // Missing file is not an error - use defaults
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

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `PULLUP_CONFIG` environment variable
/// 3. Default path `~/.config/pullup/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
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

/// Merge config file into profile defaults to create resolved config.
///
/// The file's `profile` (if any) picks the base; every other field that is
/// `Some` replaces the corresponding base value.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let Some(config) = config_file else {
        return ResolvedConfig::default();
    };

    ResolvedConfig::for_profile(config.profile.unwrap_or_default()).with_file(config)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `PULLUP_PROFILE`: switch profile; values set in the config file are kept
///
/// # Errors
///
/// Returns [`ConfigError::UnknownProfile`] for an unrecognised profile name.
pub fn apply_env_overrides(config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    match std::env::var(PROFILE_ENV_VAR) {
        Ok(name) => Ok(switch_profile(config, name.parse()?)),
        Err(_) => Ok(config),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. A profile switch is applied first so
/// that explicit `--capacity`/`--padding` still win over it.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(profile) = cli.profile {
        config = switch_profile(config, profile);
    }

    if let Some(capacity) = cli.capacity {
        config.store.capacity = capacity;
    }

    if let Some(padding) = cli.padding {
        config.store.padding = padding;
    }

    if let Some(show) = cli.show_timestamps {
        config.show_timestamps = show;
    }

    config
}

/// Re-base store and panel values on `profile`.
///
/// Values the config file set explicitly still win over the new profile's
/// defaults; everything else is kept.
fn switch_profile(config: ResolvedConfig, profile: Profile) -> ResolvedConfig {
    let rebased = ResolvedConfig::for_profile(profile).with_file(config.file.clone());
    ResolvedConfig {
        profile,
        store: rebased.store,
        panel: rebased.panel,
        ..config
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
