use super::errors::RelayError;
use super::monkeytype;
use super::state::RelayState;
use crate::metrics::consts as crate_metrics;

use axum::{
    extract::{Json, State},
    http::{self, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tracing::instrument;

fn uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// The only methods the relay forwards. Anything else fails
/// deserialization before the handler runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RelayMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl From<RelayMethod> for http::Method {
    fn from(method: RelayMethod) -> Self {
        match method {
            RelayMethod::Get => http::Method::GET,
            RelayMethod::Post => http::Method::POST,
            RelayMethod::Put => http::Method::PUT,
            RelayMethod::Delete => http::Method::DELETE,
        }
    }
}

/// One desired outbound call, described by the caller.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RelayRequest {
    pub endpoint: String,
    #[serde(default)]
    pub method: RelayMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

#[derive(Serialize)]
struct UpstreamError {
    error: &'static str,
    status: u16,
    details: String,
}

/// Relays one request to the third-party API with the configured credential
/// attached. Exactly one outbound call per invocation; downstream failures
/// pass through with their original status, transport failures collapse to
/// the fixed 500 envelope in [`RelayError`].
#[instrument(skip_all, err, level = tracing::Level::DEBUG, fields(request_id = uuid()))]
pub async fn relay(
    State(state): State<RelayState>,
    Json(request): Json<RelayRequest>,
) -> Result<Response, RelayError> {
    let request_start = Instant::now();

    let method = http::Method::from(request.method);
    tracing::debug!(
        endpoint = %request.endpoint,
        %method,
        has_body = request.body.is_some(),
        "relay request received"
    );

    let mut authorization = HeaderValue::from_str(&format!(
        "{} {}",
        monkeytype::AUTH_SCHEME,
        state.config.api_key.reveal()
    ))?;
    authorization.set_sensitive(true);

    let mut upstream_headers = HeaderMap::new();
    upstream_headers.insert(http::header::AUTHORIZATION, authorization);
    upstream_headers.insert(
        http::header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    tracing::debug!(authorization = monkeytype::AUTH_REDACTED, "forwarding with credential");

    let mut upstream_request = state
        .http_client
        .request(method.clone(), request.endpoint.as_str())
        .headers(upstream_headers);
    // Only POST carries a payload upstream. PUT and DELETE forward without
    // one even when the caller supplied a body.
    if request.method == RelayMethod::Post {
        if let Some(body) = &request.body {
            upstream_request = upstream_request.json(body);
        }
    }

    let upstream_start = Instant::now();
    let upstream_response = upstream_request.send().await?;
    let upstream_duration = upstream_start.elapsed();
    metrics::histogram!(crate_metrics::UPSTREAM_REQUEST_DURATION_SECS)
        .record(upstream_duration.as_secs_f64());

    let upstream_status = upstream_response.status();
    tracing::info!(%upstream_status, %method, endpoint = %request.endpoint);

    let response = if upstream_status.is_success() {
        // A success response that fails to parse as JSON is a transport
        // failure and takes the 500 path via `?`.
        let payload: Value = upstream_response.json().await?;
        (http::StatusCode::OK, Json(payload)).into_response()
    } else {
        let details = upstream_response.text().await?;
        tracing::warn!(%upstream_status, "upstream reported an error");
        (
            upstream_status,
            Json(UpstreamError {
                error: "upstream error",
                status: upstream_status.as_u16(),
                details,
            }),
        )
            .into_response()
    };

    let request_duration = request_start.elapsed();
    let processing_duration = request_duration - upstream_duration;
    metrics::histogram!(crate_metrics::RELAY_PROCESSING_DURATION_SECS)
        .record(processing_duration.as_secs_f64());

    Ok(response)
}
