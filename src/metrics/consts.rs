pub const HTTP_REQUEST_DURATION_SECS: &str =
    "http_request_duration_seconds";
pub const HTTP_REQUEST_SIZE_BYTES: &str = "http_request_size_bytes";
pub const HTTP_RESPONSE_SIZE_BYTES: &str = "http_response_size_bytes";
pub const HTTP_RESPONSE_SUCCESS: &str = "http_response_success";
pub const HTTP_RESPONSE_FAILURE: &str = "http_response_failure";
pub const UPSTREAM_REQUEST_DURATION_SECS: &str =
    "monkeytype_request_duration_seconds";
pub const RELAY_PROCESSING_DURATION_SECS: &str =
    "relay_processing_duration_seconds";
pub const RELAY_HTTP_SERVER_ERROR: &str = "relay_http_server_error";
pub const RELAY_CORS_REJECTED: &str = "relay_cors_rejected";
