//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "*".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

/// Upstream provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL for the Sleeper v1 API
    #[serde(default = "default_provider_base_url")]
    pub base_url: String,

    /// Base URL for the avatar CDN
    #[serde(default = "default_avatar_base_url")]
    pub avatar_base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_provider_timeout")]
    pub timeout_seconds: u64,

    /// User-Agent sent to the provider
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Serve synthetic data when the provider fails
    #[serde(default = "default_fallback_enabled")]
    pub fallback_enabled: bool,
}

fn default_provider_base_url() -> String {
    "https://api.sleeper.app/v1".to_string()
}

fn default_avatar_base_url() -> String {
    "https://sleepercdn.com/avatars/thumbs".to_string()
}

fn default_provider_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("commissioner/{}", env!("CARGO_PKG_VERSION"))
}

fn default_fallback_enabled() -> bool {
    true
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_provider_base_url(),
            avatar_base_url: default_avatar_base_url(),
            timeout_seconds: default_provider_timeout(),
            user_agent: default_user_agent(),
            fallback_enabled: default_fallback_enabled(),
        }
    }
}

/// Dashboard cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// How long a cached dashboard counts as fresh
    #[serde(default = "default_ttl")]
    pub ttl_seconds: u64,

    /// Advertised stale-while-revalidate window in `Cache-Control`
    #[serde(default = "default_stale_while_revalidate")]
    pub stale_while_revalidate_seconds: u64,
}

fn default_ttl() -> u64 {
    60
}

fn default_stale_while_revalidate() -> u64 {
    300
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl(),
            stale_while_revalidate_seconds: default_stale_while_revalidate(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            server: ServerConfig::default(),
            provider: ProviderConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.provider.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "Provider timeout must be greater than 0".to_string(),
            ));
        }

        if self.cache.ttl_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "Cache TTL must be greater than 0".to_string(),
            ));
        }

        if Url::parse(&self.provider.base_url).is_err() {
            return Err(ConfigError::ValidationError(format!(
                "Provider base_url is not a valid URL: {}",
                self.provider.base_url
            )));
        }

        if Url::parse(&self.provider.avatar_base_url).is_err() {
            return Err(ConfigError::ValidationError(format!(
                "Provider avatar_base_url is not a valid URL: {}",
                self.provider.avatar_base_url
            )));
        }

        Ok(())
    }
}
