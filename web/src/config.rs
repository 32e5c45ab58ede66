use std::sync::OnceLock;
use url::Url;

use crate::error::ConfigError;
use crate::server::{DEFAULT_TILE_ATTRIBUTION, DEFAULT_TILE_URL};

pub const DEFAULT_SUGGEST_API_URL: &str = "http://localhost:8080/api/suggest";

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub suggest_endpoint: Url,
    /// Handed to the tile provider as-is; an absent key is not an error.
    pub map_api_key: Option<String>,
    pub tile_url_template: String,
    pub tile_attribution: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup("SUGGEST_API_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SUGGEST_API_URL.to_string());
        let suggest_endpoint =
            Url::parse(endpoint.trim()).map_err(|source| ConfigError::InvalidEndpoint {
                value: endpoint.clone(),
                source,
            })?;
        if !matches!(suggest_endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(
                suggest_endpoint.scheme().to_string(),
            ));
        }

        Ok(Self {
            suggest_endpoint,
            map_api_key: lookup("MAP_API_KEY").filter(|key| !key.is_empty()),
            tile_url_template: lookup("MAP_TILE_URL")
                .unwrap_or_else(|| DEFAULT_TILE_URL.to_string()),
            tile_attribution: lookup("MAP_TILE_ATTRIBUTION")
                .unwrap_or_else(|| DEFAULT_TILE_ATTRIBUTION.to_string()),
        })
    }

    /// Tile URL with `{apikey}` filled in, empty when no key is configured.
    pub fn tile_url(&self) -> String {
        self.tile_url_template
            .replace("{apikey}", self.map_api_key.as_deref().unwrap_or_default())
    }
}

/// Reads the environment once; later calls return the first configuration.
pub fn init_config() -> Result<&'static AppConfig, ConfigError> {
    if let Some(config) = APP_CONFIG.get() {
        return Ok(config);
    }
    let config = AppConfig::from_env()?;
    Ok(APP_CONFIG.get_or_init(|| config))
}

pub fn get_config() -> Option<&'static AppConfig> {
    APP_CONFIG.get()
}
