use reqwest::{Client, Url};
use shared_types::{Coordinate, SuggestRequest, SuggestResponse};
use std::sync::OnceLock;

use crate::error::SuggestError;

static SUGGEST_CLIENT: OnceLock<SuggestClient> = OnceLock::new();

/// Talks to the external suggestion service. One `POST` per call, no retries.
#[derive(Debug, Clone)]
pub struct SuggestClient {
    http: Client,
    endpoint: Url,
}

impl SuggestClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn suggest(&self, coordinate: Coordinate) -> Result<SuggestResponse, SuggestError> {
        let body = SuggestRequest::from(coordinate);
        tracing::info!(lat = body.lat, lng = body.lng, endpoint = %self.endpoint, "Requesting suggestions");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(SuggestError::Transport)?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Suggestion service responded");
        if !status.is_success() {
            return Err(SuggestError::Status(status.as_u16()));
        }

        response
            .json::<SuggestResponse>()
            .await
            .map_err(SuggestError::Decode)
    }
}

pub fn init_client(endpoint: Url) -> &'static SuggestClient {
    SUGGEST_CLIENT.get_or_init(|| SuggestClient::new(endpoint))
}

pub fn get_client() -> Option<&'static SuggestClient> {
    SUGGEST_CLIENT.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
        routing::post,
        Router,
    };
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    type Received = Arc<Mutex<Vec<(Option<String>, Value)>>>;

    /// Stands up a stub suggestion service on a random port.
    async fn spawn_service(status: StatusCode, reply: String) -> (Url, Received) {
        let received: Received = Arc::new(Mutex::new(Vec::new()));
        let captured = received.clone();

        let app = Router::new().route(
            "/api/suggest",
            post(move |headers: HeaderMap, body: String| {
                let captured = captured.clone();
                let reply = reply.clone();
                async move {
                    let content_type = headers
                        .get(CONTENT_TYPE)
                        .and_then(|value| value.to_str().ok())
                        .map(str::to_string);
                    let payload = serde_json::from_str(&body).unwrap_or(Value::Null);
                    captured.lock().unwrap().push((content_type, payload));
                    (status, [(CONTENT_TYPE, "application/json")], reply)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let endpoint = Url::parse(&format!("http://{}/api/suggest", addr)).unwrap();
        (endpoint, received)
    }

    fn park_reply() -> String {
        json!({
            "weather": { "main": "Clouds", "description": "overcast clouds", "temp": 21.4 },
            "suggestions": [{
                "id": "a", "name": "Park", "rating": 4.5, "user_ratings_total": 120,
                "types": ["park", "tourist_attraction"], "crowd_level": "Low",
                "weather_suitability": "Good for walking", "score": 0.9,
                "latitude": 35.01, "longitude": 139.01, "photo_reference": "x"
            }]
        })
        .to_string()
    }

    #[tokio::test]
    async fn posts_one_json_request_with_exact_coordinate() {
        let (endpoint, received) = spawn_service(StatusCode::OK, park_reply()).await;
        let client = SuggestClient::new(endpoint);
        let coordinate = Coordinate::new(35.689_512_345_678_9, 139.691_798_765_432_1);

        client.suggest(coordinate).await.unwrap();

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        let (content_type, body) = &received[0];
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body["lat"].as_f64(), Some(coordinate.latitude));
        assert_eq!(body["lng"].as_f64(), Some(coordinate.longitude));
    }

    #[tokio::test]
    async fn decodes_successful_reply() {
        let (endpoint, _) = spawn_service(StatusCode::OK, park_reply()).await;
        let response = SuggestClient::new(endpoint)
            .suggest(Coordinate::new(35.0, 139.0))
            .await
            .unwrap();

        assert_eq!(
            response.weather.map(|w| w.condition_category),
            Some("Clouds".to_string())
        );
        assert_eq!(response.suggestions.len(), 1);
        assert_eq!(response.suggestions[0].name, "Park");
    }

    #[tokio::test]
    async fn server_error_is_a_failure() {
        let reply = json!({ "error": "Failed to fetch weather data" }).to_string();
        let (endpoint, received) = spawn_service(StatusCode::INTERNAL_SERVER_ERROR, reply).await;

        let err = SuggestClient::new(endpoint)
            .suggest(Coordinate::new(35.0, 139.0))
            .await
            .unwrap_err();

        assert!(matches!(err, SuggestError::Status(500)));
        assert_eq!(received.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn malformed_reply_is_a_failure() {
        let (endpoint, _) = spawn_service(StatusCode::OK, "not json".to_string()).await;

        let err = SuggestClient::new(endpoint)
            .suggest(Coordinate::new(35.0, 139.0))
            .await
            .unwrap_err();

        assert!(matches!(err, SuggestError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_service_is_a_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let endpoint = Url::parse(&format!("http://{}/api/suggest", addr)).unwrap();
        let err = SuggestClient::new(endpoint)
            .suggest(Coordinate::new(35.0, 139.0))
            .await
            .unwrap_err();

        assert!(matches!(err, SuggestError::Transport(_)));
    }
}
