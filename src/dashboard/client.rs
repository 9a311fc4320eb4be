use std::time::Duration;

use anyhow::{ensure, Context, Result};
use serde_json::Value;

use crate::handler::monkeytype;
use crate::handler::relay::{RelayMethod, RelayRequest};

// Generous enough to sit out the relay's own upstream timeout.
const RELAY_TIMEOUT: Duration = Duration::from_secs(15);

pub struct RelayClient {
    http_client: reqwest::Client,
    relay_url: String,
}

impl RelayClient {
    pub fn new(relay_url: &str) -> Result<RelayClient> {
        let http_client = reqwest::Client::builder()
            .timeout(RELAY_TIMEOUT)
            .build()
            .context("failed to build the relay http client")?;
        Ok(RelayClient {
            http_client,
            relay_url: relay_url.trim_end_matches('/').to_string(),
        })
    }

    /// One relay round-trip for one candidate endpoint.
    pub async fn fetch(&self, endpoint: &str) -> Result<Value> {
        let response = self
            .http_client
            .post(format!("{}/api/relay", self.relay_url))
            .json(&RelayRequest {
                endpoint: endpoint.to_string(),
                method: RelayMethod::Get,
                body: None,
            })
            .send()
            .await?;
        ensure!(
            response.status().is_success(),
            "relay answered {}",
            response.status()
        );
        Ok(response.json().await?)
    }

    /// Candidates are tried in order; the first success wins. `None` when
    /// every one of them failed.
    pub async fn first_success(&self, endpoints: &[String]) -> Option<Value> {
        for endpoint in endpoints {
            match self.fetch(endpoint).await {
                Ok(payload) => {
                    tracing::debug!(%endpoint, "candidate endpoint answered");
                    return Some(payload);
                }
                Err(error) => {
                    tracing::debug!(%endpoint, %error, "candidate endpoint failed");
                }
            }
        }
        None
    }
}

/// Probe order: personal bests first, recent results as the last resort.
pub fn default_endpoints() -> Vec<String> {
    vec![
        format!(
            "{}{}?mode=time",
            monkeytype::API_BASE,
            monkeytype::PERSONAL_BESTS_PATH
        ),
        format!(
            "{}{}?mode=words",
            monkeytype::API_BASE,
            monkeytype::PERSONAL_BESTS_PATH
        ),
        format!("{}{}", monkeytype::API_BASE, monkeytype::RESULTS_PATH),
    ]
}
