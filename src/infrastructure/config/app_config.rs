//! Application configuration.

use crate::domain::keybinding::Action;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

pub(crate) const APP_NAME: &str = "moskva";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, loaded from `config.toml` and overridden by CLI flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Enable mouse support.
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Keybinding overrides, e.g. `"Ctrl+q" = "Quit"`.
    #[serde(default)]
    pub keybindings: HashMap<String, Action>,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Play a transition when the slide changes.
    #[serde(default = "default_true")]
    pub enable_animations: bool,

    /// Show the key hint line under the progress bar.
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_animations: true,
            show_key_hints: true,
        }
    }
}

/// Theme mode configuration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark mode (default).
    #[default]
    Dark,
    /// Light mode.
    Light,
    /// Detect from the terminal background.
    Auto,
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,

    /// Theme mode (Dark, Light, Auto).
    #[serde(default)]
    pub mode: ThemeMode,
}

fn default_accent_color() -> String {
    "#d8b4fe".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
            mode: ThemeMode::default(),
        }
    }
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(mouse) = args.mouse {
            self.mouse = mouse;
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
        if let Some(mode) = args.theme_mode {
            self.theme.mode = mode;
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("moskva.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            mouse: true,
            keybindings: HashMap::new(),
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_content = r##"
            log_level = "debug"
            mouse = false

            [ui]
            enable_animations = false

            [theme]
            accent_color = "#ff8800"
            mode = "auto"

            [keybindings]
            "Ctrl+q" = "Quit"
            "x" = "NextSlide"
            "F5" = { JumpTo = 4 }
        "##;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(!config.mouse);
        assert!(!config.ui.enable_animations);
        assert!(config.ui.show_key_hints);
        assert_eq!(config.theme.accent_color, "#ff8800");
        assert_eq!(config.theme.mode, ThemeMode::Auto);

        assert_eq!(config.keybindings.len(), 3);
        assert_eq!(config.keybindings.get("Ctrl+q"), Some(&Action::Quit));
        assert_eq!(config.keybindings.get("x"), Some(&Action::NextSlide));
        assert_eq!(config.keybindings.get("F5"), Some(&Action::JumpTo(4)));
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert!(config.mouse);
        assert!(config.keybindings.is_empty());
        assert!(config.ui.enable_animations);
        assert_eq!(config.theme.mode, ThemeMode::Dark);
        assert_eq!(config.theme.accent_color, "#d8b4fe");
    }

    #[test]
    fn test_merge_with_args() {
        let mut config = AppConfig::default();
        let args = CliArgs {
            config: None,
            log_path: Some(PathBuf::from("/tmp/moskva.log")),
            log_level: Some(LogLevel::Trace),
            mouse: Some(false),
            enable_animations: None,
            accent_color: Some("Cyan".to_string()),
            theme_mode: Some(ThemeMode::Light),
        };

        config.merge_with_args(args);

        assert_eq!(config.log_level, LogLevel::Trace);
        assert!(!config.mouse);
        assert!(config.ui.enable_animations);
        assert_eq!(config.theme.accent_color, "Cyan");
        assert_eq!(config.theme.mode, ThemeMode::Light);
        assert_eq!(
            config.effective_log_path(),
            Some(PathBuf::from("/tmp/moskva.log"))
        );
    }
}
