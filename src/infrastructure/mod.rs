//! Infrastructure layer with configuration, content and icon adapters.

/// Application configuration.
pub mod config;
/// Built-in slide content.
pub mod content;
/// Icon catalog adapters.
pub mod icons;

pub use config::{
    AppConfig, CliArgs, ConfigError, ConfigOrigin, LogLevel, StorageManager, ThemeMode,
};
pub use content::moscow_catalog;
pub use icons::GlyphCatalog;
