//! Cross-origin policy: a configured allow-list, applied service-wide.
//! Requests without an `Origin` header (curl, server-to-server) always
//! pass. Disallowed origins are turned away before any proxying happens,
//! with an empty body.

use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::{self, header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use metrics::counter;
use tower_http::cors::CorsLayer;

use super::state::RelayState;
use crate::metrics::consts::RELAY_CORS_REJECTED;

const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(60 * 60);

/// Emits the CORS response headers (and answers preflights) for origins the
/// guard has already admitted.
pub fn layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
        .max_age(PREFLIGHT_MAX_AGE)
}

/// Outermost middleware: rejects any request whose declared origin is not
/// allow-listed, no body, before the relay does any work.
pub async fn origin_guard(
    State(state): State<RelayState>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(origin) = request.headers().get(http::header::ORIGIN) {
        if !origin_allowed(&state.config.allowed_origins, origin) {
            counter!(RELAY_CORS_REJECTED).increment(1);
            tracing::warn!(?origin, "origin not allow-listed, rejecting");
            return StatusCode::FORBIDDEN.into_response();
        }
    }
    next.run(request).await
}

fn origin_allowed(allowed_origins: &[String], origin: &HeaderValue) -> bool {
    origin
        .to_str()
        .map(|origin| allowed_origins.iter().any(|allowed| allowed == origin))
        .unwrap_or(false)
}
