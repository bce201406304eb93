//! Named configuration profiles.
//!
//! A profile picks the store's capacity and padding. The terminal demo always
//! measures the panel in rows, so profiles do not change panel dimensions.
//! A profile only supplies defaults; any individual value can still be
//! overridden by the config file or the command line.

use super::ConfigError;
use crate::state::StoreProfile;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Profile name: large unpadded buffer (default for the binary).
pub const PROFILE_TERMINAL: &str = "terminal";
/// Profile name: large buffer pre-filled with blank lines.
pub const PROFILE_PREVIEW_CONSOLE: &str = "preview-console";
/// Profile name: small unpadded buffer.
pub const PROFILE_PREVIEW_LOG: &str = "preview-log";

/// Built-in configuration profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    /// 4200 messages, no padding.
    #[default]
    Terminal,
    /// 4200 messages behind 42 blank lines.
    PreviewConsole,
    /// 200 messages, no padding.
    PreviewLog,
}

impl Profile {
    /// All profile names, in the order shown by `--help`.
    pub const NAMES: [&'static str; 3] =
        [PROFILE_TERMINAL, PROFILE_PREVIEW_CONSOLE, PROFILE_PREVIEW_LOG];

    /// Name used on the command line and in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Terminal => PROFILE_TERMINAL,
            Profile::PreviewConsole => PROFILE_PREVIEW_CONSOLE,
            Profile::PreviewLog => PROFILE_PREVIEW_LOG,
        }
    }

    /// Store capacity and padding for this profile.
    pub fn store(self) -> StoreProfile {
        match self {
            Profile::Terminal => StoreProfile {
                capacity: StoreProfile::PREVIEW_CONSOLE.capacity,
                padding: 0,
            },
            Profile::PreviewConsole => StoreProfile::PREVIEW_CONSOLE,
            Profile::PreviewLog => StoreProfile::PREVIEW_LOG,
        }
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            PROFILE_TERMINAL => Ok(Profile::Terminal),
            PROFILE_PREVIEW_CONSOLE => Ok(Profile::PreviewConsole),
            PROFILE_PREVIEW_LOG => Ok(Profile::PreviewLog),
            other => Err(ConfigError::UnknownProfile(other.to_string())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
