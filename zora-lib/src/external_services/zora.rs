use log::debug;
use reqwest::header;
use serde_json::Value;

use crate::{config::zora_api_url, error::ForwardError};

/// Upstream status and JSON body, relayed as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Value,
}

/// ZoraForwarder relays GraphQL bodies to the Zora API server-side.
///
/// Stateless apart from the pooled client, so a single instance is shared by
/// every worker.
#[derive(Debug, Clone)]
pub struct ZoraForwarder {
    client: reqwest::Client,
    url: String,
}

impl ZoraForwarder {
    pub fn new(url: impl Into<String>) -> Result<Self, ForwardError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("zora-lookup/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ForwardError::ClientBuild)?;

        Ok(ZoraForwarder {
            client,
            url: url.into(),
        })
    }

    /// Forwarder pointed at `ZORA_API_URL`, or the public Zora endpoint.
    pub fn from_env() -> Result<Self, ForwardError> {
        Self::new(zora_api_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Parse an incoming raw body and forward it.
    pub async fn forward_raw(&self, raw: &[u8]) -> Result<UpstreamReply, ForwardError> {
        let body: Value = serde_json::from_slice(raw).map_err(ForwardError::RequestBody)?;
        self.forward(&body).await
    }

    /**
     * Send a JSON body to the upstream unchanged
     *
     * # Arguments
     * @param body: &Value - Any JSON document, normally `{query, variables}`
     *
     * # Returns
     * @return Result<UpstreamReply, ForwardError> - Upstream status and parsed body
     */
    pub async fn forward(&self, body: &Value) -> Result<UpstreamReply, ForwardError> {
        let res = self
            .client
            .post(&self.url)
            .header(header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(ForwardError::Request)?;

        let status = res.status().as_u16();
        debug!("Upstream {} answered {}", self.url, status);

        let bytes = res
            .bytes()
            .await
            .map_err(|e| ForwardError::UpstreamBody(e.to_string()))?;
        let body = serde_json::from_slice(&bytes)
            .map_err(|e| ForwardError::UpstreamBody(e.to_string()))?;

        Ok(UpstreamReply { status, body })
    }
}
