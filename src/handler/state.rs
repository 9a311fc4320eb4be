use anyhow::Result;

use crate::config::RelayConfig;

#[derive(Clone)]
pub struct RelayState {
    pub config: RelayConfig,
    pub http_client: reqwest::Client,
}

impl RelayState {
    /// Builds the shared outbound client. The timeout bounds every upstream
    /// call so a stalled API cannot hold a browser request open.
    pub fn new(config: RelayConfig) -> Result<RelayState> {
        let http_client = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;
        Ok(RelayState { config, http_client })
    }
}
