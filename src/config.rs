use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Result};
use axum::http::HeaderValue;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_METRICS_PORT: u16 = 3002;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// The Monkeytype API key. Lives only inside the relay process; `Debug`
/// output never reveals the inner value.
#[derive(Clone, Default, PartialEq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn is_configured(&self) -> bool {
        !self.0.is_empty()
    }

    /// The raw secret. Used solely to build the outbound Authorization
    /// header, which is marked sensitive before it can reach any log.
    pub fn reveal(&self) -> &str {
        &self.0
    }
}

impl From<String> for ApiKey {
    fn from(raw: String) -> Self {
        ApiKey(raw.trim().to_string())
    }
}

impl From<&str> for ApiKey {
    fn from(raw: &str) -> Self {
        ApiKey::from(raw.to_string())
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.is_configured() {
            true => f.write_str("ApiKey([REDACTED])"),
            false => f.write_str("ApiKey(<unset>)"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RelayConfig {
    pub port: u16,
    pub metrics_port: u16,
    pub api_key: ApiKey,
    pub allowed_origins: Vec<String>,
    pub upstream_timeout: Duration,
}

impl RelayConfig {
    /// Reads the whole configuration from the process environment. Every
    /// variable is optional; a missing credential is reported by the health
    /// endpoint rather than refusing to start.
    pub fn from_env() -> Self {
        let api_key = ApiKey::from(env_or("MONKEYTYPE_API_KEY", String::new()));
        if !api_key.is_configured() {
            warn!("MONKEYTYPE_API_KEY is not set, outbound calls will be unauthenticated");
        }

        let allowed_origins = parse_origins(&env_or("ALLOWED_ORIGINS", String::new()));
        if allowed_origins.is_empty() {
            warn!("ALLOWED_ORIGINS is empty, every browser origin will be rejected");
        }

        RelayConfig {
            port: env_or("PORT", DEFAULT_PORT),
            metrics_port: env_or("METRICS_PORT", DEFAULT_METRICS_PORT),
            api_key,
            allowed_origins,
            upstream_timeout: Duration::from_secs(env_or(
                "UPSTREAM_TIMEOUT_SECS",
                DEFAULT_UPSTREAM_TIMEOUT_SECS,
            )),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == self.metrics_port {
            bail!("PORT and METRICS_PORT are both {}", self.port);
        }
        for origin in &self.allowed_origins {
            if HeaderValue::from_str(origin).is_err() {
                bail!("ALLOWED_ORIGINS entry {origin:?} is not a valid Origin header value");
            }
        }
        Ok(())
    }
}

/// Comma-separated allow-list, e.g. `https://codygeorge315.github.io,http://localhost:8080`.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("ignoring unparseable {key} value {raw:?}");
            default
        }),
        Err(_) => default,
    }
}
