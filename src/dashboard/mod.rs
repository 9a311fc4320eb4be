//! The terminal counterpart of the portfolio page's stats widget: fetch the
//! numbers through the relay, fold them into a summary, animate them.
//! Failures never surface as errors; the fallback pair is shown instead.

pub mod animation;
pub mod client;

use anyhow::Result;
use tracing::{info, warn};

use crate::stats::{self, StatsSummary};
use client::RelayClient;

pub struct DashboardOptions {
    pub relay_url: String,
    pub endpoints: Vec<String>,
    pub json: bool,
}

pub async fn run(options: DashboardOptions) -> Result<()> {
    let client = RelayClient::new(&options.relay_url)?;
    let endpoints = match options.endpoints.is_empty() {
        true => client::default_endpoints(),
        false => options.endpoints,
    };

    let summary = fetch_summary(&client, &endpoints).await;

    match options.json {
        true => println!("{}", serde_json::to_string_pretty(&summary)?),
        false => animation::render(&summary).await?,
    }
    Ok(())
}

/// Probes the candidates through the relay and reduces the first payload
/// that arrives; the fallback pair stands in when nothing usable came back.
pub async fn fetch_summary(client: &RelayClient, endpoints: &[String]) -> StatsSummary {
    match client.first_success(endpoints).await {
        Some(payload) => stats::extract(&payload).unwrap_or_else(|| {
            info!("payload carried no usable records, showing fallback stats");
            stats::FALLBACK
        }),
        None => {
            warn!("no candidate endpoint answered, showing fallback stats");
            stats::FALLBACK
        }
    }
}
