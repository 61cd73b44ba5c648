use crate::availability::parse_base_url;
use crate::error::config::ConfigError;
use crate::{DEFAULT_MIN_SLUG_LENGTH, SHORTY_BASE_URL_ENV, SHORTY_DEFAULT_BASE_URL};

use common::ErrorLocation;
use models::MessageCatalog;

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_DIR_NAME: &str = "shorty";
const CONFIG_VERSION: u32 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Origin the availability checks are sent to.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlugConfig {
    #[serde(default = "default_min_length")]
    pub min_length: usize,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub slug: SlugConfig,

    #[serde(default)]
    pub messages: MessageCatalog,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            service: ServiceConfig::default(),
            slug: SlugConfig::default(),
            messages: MessageCatalog::default(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_min_length() -> usize {
    DEFAULT_MIN_SLUG_LENGTH
}

// ============================================
// IMPLEMENTATION
// ============================================

impl FormConfig {
    /// `{platform config dir}/shorty`.
    #[track_caller]
    pub fn default_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME))
            .ok_or_else(|| ConfigError::DirectoryNotFound {
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Load config from {config_dir}/config.json.
    ///
    /// # Returns
    ///
    /// Returns `Ok(FormConfig)` if loaded successfully or defaults if file missing.
    /// Returns `Err(ConfigError)` if file exists but is corrupted/invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config = Self::read(config_dir)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse {config_dir}/config.json without validating it.
    ///
    /// For callers that apply overrides first and validate the merged result.
    pub fn read(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: FormConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config JSON: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {config_dir}/config.json using atomic write.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if validation, directory creation, serialization,
    /// the write or the rename fails.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Let `SHORTY_BASE_URL` (process environment or `.env`) override the
    /// configured base URL.
    pub fn apply_env_overrides(&mut self) {
        if dotenvy::dotenv().is_ok() {
            debug!("Loaded .env file");
        }

        match std::env::var(SHORTY_BASE_URL_ENV) {
            Ok(base_url) if !base_url.trim().is_empty() => {
                info!("Base URL overridden by {SHORTY_BASE_URL_ENV}: {base_url}");
                self.service.base_url = Some(base_url);
            }
            _ => {}
        }
    }

    /// Configured base URL, or the local default.
    pub fn base_url(&self) -> &str {
        self.service
            .base_url
            .as_deref()
            .unwrap_or(SHORTY_DEFAULT_BASE_URL)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.service.request_timeout_secs.map(Duration::from_secs)
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        if self.slug.min_length == 0 {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "slug.min_length must be at least 1".to_string(),
            });
        }

        if let Some(secs) = self.service.request_timeout_secs {
            if secs == 0 || secs > MAX_REQUEST_TIMEOUT_SECS {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: format!(
                        "Invalid request timeout: {secs}s (must be 1-{MAX_REQUEST_TIMEOUT_SECS})"
                    ),
                });
            }
        }

        if let Some(ref url) = self.service.base_url {
            let parsed = parse_base_url(url).map_err(|e| ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid base URL {url}: {e}"),
            })?;

            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: format!("Invalid base URL scheme: {url}"),
                });
            }
        }

        Ok(())
    }
}
