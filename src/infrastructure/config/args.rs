use super::app_config::{LogLevel, ThemeMode};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "moskva",
    version,
    about = "Развитие Москвы: a terminal slideshow from the 19th century to today",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable mouse support.
    #[arg(long)]
    pub mouse: Option<bool>,

    /// Animate slide transitions.
    #[arg(long)]
    pub enable_animations: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Theme mode.
    #[arg(long, value_enum)]
    pub theme_mode: Option<ThemeMode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from([
            "moskva",
            "--mouse",
            "false",
            "--log-level",
            "debug",
            "--theme-mode",
            "auto",
        ]);

        assert_eq!(args.mouse, Some(false));
        assert_eq!(args.log_level, Some(LogLevel::Debug));
        assert_eq!(args.theme_mode, Some(ThemeMode::Auto));
        assert!(args.accent_color.is_none());
    }
}
