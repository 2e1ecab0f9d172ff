//! `HttpSource` backed by `reqwest`.
//!
//! Connection handling, redirects and TLS are all reqwest's business. This
//! adapter only maps its outcomes onto `TransportError` and exposes the body
//! chunk by chunk.

use async_trait::async_trait;
use log::{debug, warn};

use super::source::{BodyStream, HttpSource, TransportError};

pub struct ReqwestSource {
    client: reqwest::Client,
}

impl ReqwestSource {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("adfetch/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });
        Self { client }
    }
}

impl Default for ReqwestSource {
    fn default() -> Self {
        Self::new()
    }
}

struct ReqwestBody {
    response: reqwest::Response,
}

#[async_trait]
impl BodyStream for ReqwestBody {
    async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, TransportError> {
        self.response
            .chunk()
            .await
            .map(|chunk| chunk.map(|bytes| bytes.to_vec()))
            .map_err(|e| TransportError::Network(e.to_string()))
    }
}

#[async_trait]
impl HttpSource for ReqwestSource {
    fn name(&self) -> &str {
        "reqwest"
    }

    async fn get(&self, url: &str) -> Result<Box<dyn BodyStream>, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        debug!("GET {} -> {}", url, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("GET {} failed with HTTP {}", url, status);
            return Err(TransportError::Status { status });
        }

        Ok(Box::new(ReqwestBody { response }))
    }
}
