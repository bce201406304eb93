//! Console color scheme.
//!
//! Severity colors follow the preview console: info indigo, debug green,
//! trace yellow.

use crate::model::Severity;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors switched on or off explicitly.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether styles should carry colors.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ConsoleStyles =====

/// Styles for the console list and the pull-up bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleStyles {
    info: Style,
    debug: Style,
    trace: Style,
    /// Timestamp column
    pub timestamp: Style,
    /// Console background
    pub background: Style,
    /// Grab bar background
    pub bar: Style,
    /// Grab handle glyph
    pub handle: Style,
    /// Unread messages hint
    pub hint: Style,
}

impl ConsoleStyles {
    /// Severity colors, or plain styles when colors are disabled.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                info: Style::default().fg(Color::Indexed(63)),
                debug: Style::default().fg(Color::Green),
                trace: Style::default().fg(Color::Yellow),
                timestamp: Style::default().fg(Color::DarkGray),
                background: Style::default().bg(Color::Black),
                bar: Style::default().bg(Color::Gray).fg(Color::Black),
                handle: Style::default()
                    .bg(Color::Gray)
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
                hint: Style::default()
                    .bg(Color::Gray)
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                info: Style::default(),
                debug: Style::default(),
                trace: Style::default(),
                timestamp: Style::default(),
                background: Style::default(),
                bar: Style::default().add_modifier(Modifier::REVERSED),
                handle: Style::default().add_modifier(Modifier::REVERSED),
                hint: Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
            }
        }
    }

    /// Text style for a message severity.
    pub fn for_severity(&self, severity: Severity) -> Style {
        match severity {
            Severity::Info => self.info,
            Severity::Debug => self.debug,
            Severity::Trace => self.trace,
        }
    }
}

impl Default for ConsoleStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}
