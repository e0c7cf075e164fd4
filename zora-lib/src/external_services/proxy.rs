use async_trait::async_trait;
use reqwest::header;
use serde_json::Value;

use crate::{
    error::TransportError,
    external_services::zora::ZoraForwarder,
    models::zora::AllocationQueryRequest,
};

/// What came back from the proxy endpoint. `body` carries the parse error
/// text when the reply was not JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyReply {
    pub status: u16,
    pub body: Result<Value, String>,
}

impl ProxyReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The lookup's only way out to the network.
#[async_trait]
pub trait ProxyTransport: Send + Sync {
    async fn post(&self, request: &AllocationQueryRequest) -> Result<ProxyReply, TransportError>;
}

/// Talks to a running server's `/api/zora` endpoint over HTTP.
pub struct HttpProxyTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpProxyTransport {
    pub fn new(url: impl Into<String>) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;
        Ok(HttpProxyTransport {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ProxyTransport for HttpProxyTransport {
    async fn post(&self, request: &AllocationQueryRequest) -> Result<ProxyReply, TransportError> {
        let res = self
            .client
            .post(&self.url)
            .header(header::ACCEPT, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = res.status().as_u16();
        let bytes = res
            .bytes()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        let body = serde_json::from_slice(&bytes).map_err(|e| e.to_string());

        Ok(ProxyReply { status, body })
    }
}

/// Calls the forwarder in-process, answering exactly what `/api/zora` would.
pub struct ForwarderTransport {
    forwarder: ZoraForwarder,
}

impl ForwarderTransport {
    pub fn new(forwarder: ZoraForwarder) -> Self {
        ForwarderTransport { forwarder }
    }
}

#[async_trait]
impl ProxyTransport for ForwarderTransport {
    async fn post(&self, request: &AllocationQueryRequest) -> Result<ProxyReply, TransportError> {
        let body =
            serde_json::to_value(request).map_err(|e| TransportError::Request(e.to_string()))?;

        match self.forwarder.forward(&body).await {
            Ok(reply) => Ok(ProxyReply {
                status: reply.status,
                body: Ok(reply.body),
            }),
            Err(e) => {
                log::error!("API Route (Proxy) error: {}", e);
                let envelope =
                    serde_json::to_value(e.envelope()).map_err(|e| e.to_string());
                Ok(ProxyReply {
                    status: 500,
                    body: envelope,
                })
            }
        }
    }
}
