use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Where the loaded configuration came from.
#[derive(Debug)]
pub enum ConfigOrigin {
    /// Parsed from an existing file.
    File(PathBuf),
    /// The file was missing and a default one was written.
    Created(PathBuf),
    /// The file could not be parsed; defaults are in effect.
    Malformed {
        path: PathBuf,
        error: toml::de::Error,
    },
}

impl ConfigOrigin {
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    /// Logs how the configuration was obtained.
    pub fn report(&self) {
        match self {
            Self::File(path) => debug!(path = %path.display(), "Configuration loaded"),
            Self::Created(path) => {
                info!(path = %path.display(), "Config file not found, created default");
            }
            Self::Malformed { path, error } => warn!(
                path = %path.display(),
                error = %error,
                "Failed to parse config file, using defaults"
            ),
        }
    }
}

/// Configuration together with its [`ConfigOrigin`].
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub origin: ConfigOrigin,
}

pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Create a new `StorageManager` rooted at the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Creates a new `StorageManager` with a specific directory (useful for testing).
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Loads the application configuration.
    ///
    /// A missing file is created with defaults; a malformed file is left
    /// untouched and defaults are used. Which case applied is returned as a
    /// [`ConfigOrigin`] for the caller to report.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the default cannot be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
        let path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            std::path::Path::to_path_buf,
        );

        if !path.exists() {
            let config = AppConfig::default();
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            Self::save_to_file(&path, &config)?;
            return Ok(LoadedConfig {
                config,
                origin: ConfigOrigin::Created(path),
            });
        }

        let content = fs::read_to_string(&path)?;
        let loaded = match toml::from_str::<AppConfig>(&content) {
            Ok(config) => LoadedConfig {
                config,
                origin: ConfigOrigin::File(path),
            },
            Err(error) => LoadedConfig {
                config: AppConfig::default(),
                origin: ConfigOrigin::Malformed { path, error },
            },
        };
        Ok(loaded)
    }

    fn save_to_file<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(data)?;

        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("Invalid path"))?;
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_creates_default_if_missing() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().join("moskva"));

        let loaded = manager.load_config(None).unwrap();
        assert!(loaded.config.mouse);

        let config_file = dir.path().join("moskva").join(CONFIG_FILE_NAME);
        assert!(matches!(&loaded.origin, ConfigOrigin::Created(path) if *path == config_file));
        assert!(config_file.exists());

        let written: AppConfig =
            toml::from_str(&fs::read_to_string(&config_file).unwrap()).unwrap();
        assert_eq!(written.theme.accent_color, loaded.config.theme.accent_color);
    }

    #[test]
    fn test_load_config_reports_malformed_file() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        let config_file = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_file, "invalid_toml = [").unwrap();

        let loaded = manager.load_config(None).unwrap();
        assert!(loaded.origin.is_malformed());
        assert!(
            matches!(&loaded.origin, ConfigOrigin::Malformed { path, .. } if *path == config_file)
        );
        assert!(loaded.config.mouse);

        let content = fs::read_to_string(&config_file).unwrap();
        assert_eq!(content, "invalid_toml = [");
    }

    #[test]
    fn test_load_config_from_override_path() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().join("unused"));
        let custom = dir.path().join("custom.toml");

        fs::write(&custom, "mouse = false\n[ui]\nshow_key_hints = false\n").unwrap();

        let loaded = manager.load_config(Some(&custom)).unwrap();
        assert!(matches!(&loaded.origin, ConfigOrigin::File(path) if *path == custom));
        assert!(!loaded.origin.is_malformed());
        assert!(!loaded.config.mouse);
        assert!(!loaded.config.ui.show_key_hints);
    }
}
