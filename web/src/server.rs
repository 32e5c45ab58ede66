use leptos::prelude::*;
use leptos::server;
use serde::{Deserialize, Serialize};
use shared_types::{Coordinate, SuggestResponse};

pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Tile layer the browser should draw under the map.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MapSettings {
    pub tile_url: String,
    pub attribution: String,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            tile_url: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
        }
    }
}

#[server]
pub async fn fetch_suggestions(coordinate: Coordinate) -> Result<SuggestResponse, ServerFnError> {
    use crate::services::suggest_client::get_client;

    let client = get_client()
        .ok_or_else(|| ServerFnError::new("Suggestion client not initialized".to_string()))?;

    match client.suggest(coordinate).await {
        Ok(response) => {
            tracing::info!(
                suggestions = response.suggestions.len(),
                has_weather = response.weather.is_some(),
                "Suggestions received"
            );
            Ok(response)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Suggestion request failed");
            Err(ServerFnError::new(format!("Failed to fetch suggestions: {}", e)))
        }
    }
}

#[server]
pub async fn get_map_settings() -> Result<MapSettings, ServerFnError> {
    use crate::config::get_config;

    let config = get_config()
        .ok_or_else(|| ServerFnError::new("Configuration not initialized".to_string()))?;

    Ok(MapSettings {
        tile_url: config.tile_url(),
        attribution: config.tile_attribution.clone(),
    })
}
