use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Body of `POST /api/suggest`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SuggestRequest {
    pub lat: f64,
    pub lng: f64,
}

impl From<Coordinate> for SuggestRequest {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            lat: coordinate.latitude,
            lng: coordinate.longitude,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WeatherSummary {
    #[serde(rename = "main")]
    pub condition_category: String,
    pub description: String,
    #[serde(rename = "temp")]
    pub temperature_celsius: f64,
}

/// Estimated busyness of a spot. Values outside the three known levels keep
/// the service's own text so it can still be shown.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
    Other(String),
}

impl Default for CrowdLevel {
    fn default() -> Self {
        CrowdLevel::Other(String::new())
    }
}

impl From<String> for CrowdLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Low" => CrowdLevel::Low,
            "Medium" => CrowdLevel::Medium,
            "High" => CrowdLevel::High,
            _ => CrowdLevel::Other(value),
        }
    }
}

impl From<CrowdLevel> for String {
    fn from(level: CrowdLevel) -> Self {
        level.to_string()
    }
}

impl fmt::Display for CrowdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrowdLevel::Low => f.write_str("Low"),
            CrowdLevel::Medium => f.write_str("Medium"),
            CrowdLevel::High => f.write_str("High"),
            CrowdLevel::Other(text) => f.write_str(text),
        }
    }
}

/// One point of interest, already ranked by the suggestion service.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SuggestionEntry {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: f64,
    #[serde(rename = "user_ratings_total")]
    pub rating_count: u32,
    #[serde(rename = "types", default, deserialize_with = "null_as_empty")]
    pub category_tags: Vec<String>,
    #[serde(default)]
    pub photo_reference: String,
    #[serde(default)]
    pub crowd_level: CrowdLevel,
    pub weather_suitability: String,
    pub score: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SuggestResponse {
    #[serde(default)]
    pub weather: Option<WeatherSummary>,
    // The service encodes an empty result set as `null`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub suggestions: Vec<SuggestionEntry>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
