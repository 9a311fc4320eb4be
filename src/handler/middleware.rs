use crate::metrics::consts::*;
use std::time::Instant;

use axum::{
    extract::Request, http::StatusCode, middleware::Next, response::IntoResponse,
    response::Response,
};
use metrics::{counter, histogram};

use super::monkeytype;

pub async fn metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let (request_parts, request_body) = request.into_parts();
    let request_body_bytes =
        match axum::body::to_bytes(request_body, monkeytype::BODY_SIZE_BYTES_UPPERBOUND).await {
            Ok(bytes) => bytes,
            Err(_) => return StatusCode::PAYLOAD_TOO_LARGE.into_response(),
        };
    histogram!(HTTP_REQUEST_SIZE_BYTES).record(request_body_bytes.len() as f64);

    let request = Request::from_parts(request_parts, request_body_bytes.into());

    let response = next.run(request).await;

    let (response_parts, response_body) = response.into_parts();
    let response_body_bytes =
        match axum::body::to_bytes(response_body, monkeytype::BODY_SIZE_BYTES_UPPERBOUND).await {
            Ok(bytes) => bytes,
            Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        };

    histogram!(HTTP_RESPONSE_SIZE_BYTES).record(response_body_bytes.len() as f64);

    // This could be the upstream API or the relay itself.
    if response_parts.status.is_server_error() {
        counter!(RELAY_HTTP_SERVER_ERROR).increment(1)
    }

    if response_parts.status.is_success() {
        counter!(HTTP_RESPONSE_SUCCESS).increment(1)
    } else {
        counter!(HTTP_RESPONSE_FAILURE).increment(1)
    }

    histogram!(HTTP_REQUEST_DURATION_SECS).record(start.elapsed().as_secs_f64());

    Response::from_parts(response_parts, response_body_bytes.into())
}
