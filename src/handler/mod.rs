pub mod cors;
pub mod errors;
pub mod health;
pub mod middleware;
pub mod monkeytype;
pub mod relay;
pub mod state;

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};

use state::RelayState;

/// The full HTTP surface: relay and health plus their legacy-path aliases,
/// kept so existing frontends need no changes. Layers run outermost-last:
/// the origin guard sees every request first, so disallowed origins never
/// reach the CORS layer, the metrics middleware, or a handler.
pub fn router(state: RelayState) -> Router {
    let cors = cors::layer(&state.config.allowed_origins);
    Router::new()
        .route("/api/relay", post(relay::relay))
        .route("/api/monkeytype", post(relay::relay))
        .route("/api/health", get(health::health))
        .route("/api/test", get(health::health))
        .layer(from_fn(middleware::metrics))
        .layer(cors)
        .layer(from_fn_with_state(state.clone(), cors::origin_guard))
        .with_state(state)
}
