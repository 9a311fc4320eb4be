use axum::{
    http,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

impl std::fmt::Display for RelayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelayError(error) => write!(f, "{}", error),
        }
    }
}

/// Transport-level and internal failures. Every one of them collapses into
/// the same fixed 500 envelope; downstream HTTP errors never take this path
/// (they pass through with their own status).
pub struct RelayError(pub anyhow::Error);

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (
            http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "relay request failed",
                "details": self.0.to_string(),
            })),
        )
            .into_response()
    }
}

impl<E> From<E> for RelayError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
