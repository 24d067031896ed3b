//! Application configuration.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Environment variable that overrides the configured server URL.
pub const SERVER_URL_ENV: &str = "STATUS_PANEL_URL";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the status server, e.g. `http://localhost:8000`.
    pub server_url: String,
}

impl Config {
    /// Create Config with the given server URL.
    pub fn new(server_url: String) -> Self {
        Config { server_url }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// Path of the config file, `~/.status-panel/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home.join(".status-panel").join("config.json"))
}

/// Picks the server URL: the `--server` flag (or `STATUS_PANEL_URL`, which clap
/// folds into it), then the config file.
pub fn resolve_server_url(requested: Option<String>, config_path: &Path) -> Option<String> {
    requested.filter(|s| !s.trim().is_empty()).or_else(|| {
        Config::load_from_file(config_path)
            .ok()
            .map(|config| config.server_url)
            .filter(|s| !s.trim().is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config::new("http://status.internal:8000".to_string());
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let config = Config::new("http://localhost:8000".to_string());
        let result = config.save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    // Clearing a missing config is a no-op.
    fn test_clear_missing_file_is_ok() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert!(Config::clear(&path).is_ok());

        Config::new("http://localhost:8000".to_string())
            .save(&path)
            .unwrap();
        Config::clear(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    // An explicit URL wins over the file; blank values fall through.
    fn test_resolve_server_url_precedence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::new("http://from-file:8000".to_string())
            .save(&path)
            .unwrap();

        assert_eq!(
            resolve_server_url(Some("http://from-flag".to_string()), &path),
            Some("http://from-flag".to_string())
        );
        assert_eq!(
            resolve_server_url(Some("  ".to_string()), &path),
            Some("http://from-file:8000".to_string())
        );
        assert_eq!(resolve_server_url(None, &path), Some("http://from-file:8000".to_string()));
        assert_eq!(
            resolve_server_url(None, &dir.path().join("missing.json")),
            None
        );
    }
}
