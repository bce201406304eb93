//! Configuration module.
//!
//! Values are resolved in order: profile defaults, config file, environment,
//! command line.

pub mod loader;
pub mod profile;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, CliOverrides, ConfigError,
    ConfigFile, ResolvedConfig,
};
pub use profile::{Profile, PROFILE_PREVIEW_CONSOLE, PROFILE_PREVIEW_LOG, PROFILE_TERMINAL};
