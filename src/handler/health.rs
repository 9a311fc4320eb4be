use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use super::state::RelayState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub message: &'static str,
    pub has_api_key: bool,
    pub timestamp: String,
}

/// Unauthenticated diagnostic: reports whether the credential is configured
/// and the current server time. Reads nothing but the config, mutates
/// nothing.
pub async fn health(State(state): State<RelayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "relay is up",
        has_api_key: state.config.api_key.is_configured(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_uses_the_wire_field_names() {
        let rendered = serde_json::to_value(HealthResponse {
            message: "relay is up",
            has_api_key: true,
            timestamp: "2025-01-01T00:00:00.000Z".to_string(),
        })
        .unwrap();
        assert_eq!(rendered["hasApiKey"], true);
        assert_eq!(rendered["message"], "relay is up");
        assert!(rendered["timestamp"].is_string());
    }
}
