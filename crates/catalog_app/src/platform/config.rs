use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use catalog_engine::ClientSettings;
use catalog_logging::catalog_info;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "catalog.ron";
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("no API key configured; set TMDB_API_KEY or `api_key` in catalog.ron")]
    MissingApiKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub language: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_to_terminal: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            api_key: None,
            base_url: client.base_url,
            language: client.language,
            connect_timeout_secs: client.connect_timeout.as_secs(),
            request_timeout_secs: client.request_timeout.as_secs(),
            log_level: "info".to_string(),
            log_to_terminal: false,
        }
    }
}

impl AppConfig {
    /// Loads the config file and applies the credential from the environment.
    ///
    /// An explicitly given path must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.with_env_api_key(std::env::var(API_KEY_ENV).ok())
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron_str(&raw)?;
        catalog_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_ron_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(raw)?)
    }

    /// The environment value wins over the file. A blank key counts as missing.
    pub fn with_env_api_key(mut self, env_key: Option<String>) -> Result<Self, ConfigError> {
        if let Some(key) = env_key.filter(|key| !key.trim().is_empty()) {
            self.api_key = Some(key);
        }
        match &self.api_key {
            Some(key) if !key.trim().is_empty() => Ok(self),
            _ => Err(ConfigError::MissingApiKey),
        }
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone().unwrap_or_default(),
            language: self.language.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}
