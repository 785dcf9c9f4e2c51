//! Loading and saving `~/.totempack/config.ini`.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

pub use super::settings::ConfigFile;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from `~/.totempack/config.ini`.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to `~/.totempack/config.ini`.
    pub fn save(&self) -> Result<(), ConfigFileError> {
        self.save_to(&config_file_path())
    }

    /// Save configuration to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Write the default config file unless one already exists.
    ///
    /// Returns the path and whether a file was created.
    pub fn ensure_exists_at(path: &Path) -> Result<(PathBuf, bool), ConfigFileError> {
        if path.exists() {
            return Ok((path.to_path_buf(), false));
        }
        Self::default().save_to(path)?;
        Ok((path.to_path_buf(), true))
    }

    /// [`ConfigFile::ensure_exists_at`] for the default location.
    pub fn ensure_exists() -> Result<(PathBuf, bool), ConfigFileError> {
        Self::ensure_exists_at(&config_file_path())
    }
}

/// The config directory (`~/.totempack`).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".totempack")
}

/// The config file (`~/.totempack/config.ini`).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::*;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();

        assert_eq!(config.service.skin_url, "https://mineskin.eu");
        assert_eq!(config.assets.location, DEFAULT_ASSETS_DIR);
        assert_eq!(config.output.directory, PathBuf::from("."));
        assert!(config.logging.file.ends_with("logs/totempack.log"));
        assert_eq!(config.preview.debounce_ms, 500);
    }

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.ini");

        let config = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.ini");

        let mut config = ConfigFile::default();
        config.service.skin_url = "http://localhost:8080".to_string();
        config.assets.location = "https://example.com/3dTotem".to_string();
        config.output.directory = PathBuf::from("/tmp/packs");
        config.logging.file = PathBuf::from("/tmp/totempack.log");
        config.preview.debounce_ms = 250;
        config.save_to(&config_path).unwrap();

        let loaded = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ensure_exists_does_not_overwrite() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");

        let (_, created) = ConfigFile::ensure_exists_at(&config_path).unwrap();
        assert!(created);

        std::fs::write(&config_path, "[preview]\ndebounce_ms = 42\n").unwrap();
        let (path, created) = ConfigFile::ensure_exists_at(&config_path).unwrap();
        assert!(!created);
        assert_eq!(path, config_path);
        assert_eq!(
            ConfigFile::load_from(&config_path).unwrap().preview.debounce_ms,
            42
        );
    }

    #[test]
    fn test_config_file_path() {
        assert!(config_file_path().ends_with(".totempack/config.ini"));
    }
}
