//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including the contact relay endpoint, animation timings and theme preference.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use crate::relay::DEFAULT_RELAY_ENDPOINT;
use crate::state::{StateSettings, DEFAULT_PROBE_DIVISOR};
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/portfolio-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub relay_endpoint: String,
    pub probe_divisor: u32,
    pub theme_name: String,
    pub success_banner_ms: u64,
    pub reveal_duration_ms: u64,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_relay_endpoint")]
    pub relay_endpoint: String,
    #[serde(default = "default_probe_divisor")]
    pub probe_divisor: u32,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_success_banner_ms")]
    pub success_banner_ms: u64,
    #[serde(default = "default_reveal_duration_ms")]
    pub reveal_duration_ms: u64,
}

fn default_relay_endpoint() -> String {
    DEFAULT_RELAY_ENDPOINT.to_string()
}

fn default_probe_divisor() -> u32 {
    DEFAULT_PROBE_DIVISOR
}

fn default_theme_name() -> String {
    "github-dark".to_string()
}

fn default_success_banner_ms() -> u64 {
    3000
}

fn default_reveal_duration_ms() -> u64 {
    600
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding default values.
    ///
    pub fn new() -> Config {
        Config {
            relay_endpoint: default_relay_endpoint(),
            probe_divisor: default_probe_divisor(),
            theme_name: default_theme_name(),
            success_banner_ms: default_success_banner_ms(),
            reveal_duration_ms: default_reveal_duration_ms(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. If no file exists yet, write one holding the
    /// current values so the user has something to edit.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            if data.probe_divisor == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "probe_divisor",
                    message: "must be at least 1".to_string(),
                }
                .into());
            }
            self.relay_endpoint = data.relay_endpoint;
            self.probe_divisor = data.probe_divisor;
            self.theme_name = data.theme_name;
            self.success_banner_ms = data.success_banner_ms;
            self.reveal_duration_ms = data.reveal_duration_ms;
        } else {
            info!("Creating configuration file at {}...", file_path.display());
            self.save()?;
        }

        Ok(())
    }

    /// Serialize the configuration data and write it to the disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            relay_endpoint: self.relay_endpoint.clone(),
            probe_divisor: self.probe_divisor,
            theme_name: self.theme_name.clone(),
            success_banner_ms: self.success_banner_ms,
            reveal_duration_ms: self.reveal_duration_ms,
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Return the state tunables described by this configuration.
    ///
    pub fn state_settings(&self) -> StateSettings {
        StateSettings {
            probe_divisor: self.probe_divisor.max(1),
            reveal_duration: Duration::from_millis(self.reveal_duration_ms),
            success_banner: Duration::from_millis(self.success_banner_ms),
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "portfolio-tui-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.relay_endpoint, "https://formspree.io/f/mojnbgao");
        assert_eq!(config.probe_divisor, 3);
        assert_eq!(config.theme_name, "github-dark");
        let settings = config.state_settings();
        assert_eq!(settings, StateSettings::default());
    }

    #[test]
    fn test_load_creates_missing_file() {
        let dir = scratch_dir("create");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        let path = dir.join(FILE_NAME);
        assert!(path.exists());
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("relay_endpoint"));
        assert!(contents.contains("probe_divisor: 3"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_reads_partial_file() {
        let dir = scratch_dir("partial");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(FILE_NAME),
            "relay_endpoint: http://localhost:8080/f/test\nprobe_divisor: 2\n",
        )
        .unwrap();
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.relay_endpoint, "http://localhost:8080/f/test");
        assert_eq!(config.probe_divisor, 2);
        assert_eq!(config.success_banner_ms, 3000);
        assert_eq!(config.theme_name, "github-dark");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_rejects_zero_divisor() {
        let dir = scratch_dir("zero");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "probe_divisor: 0\n").unwrap();
        let mut config = Config::new();
        let result = config.load(dir.to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::InvalidValue { .. }))
        ));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_rejects_malformed_yaml() {
        let dir = scratch_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "probe_divisor: [oops\n").unwrap();
        let mut config = Config::new();
        assert!(matches!(
            config.load(dir.to_str()),
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_without_path_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }
}
