//! Upstream quote provider.
//!
//! `QuoteSource` is the seam between the HTTP handler and the provider, so the
//! handler can be exercised against a local mock server or a fake. The
//! production `HttpQuoteSource` performs a single GET bounded by one deadline
//! covering connect, response, and body read.
use std::time::Duration;

use async_trait::async_trait;
use fx_quote_common::{Quote, QuoteEnvelope};
use log::{debug, error};
use reqwest::Client;

use crate::error::{ServerError, UpstreamError};

/// Something able to produce the current quote.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch a fresh quote.
    async fn fetch_quote(&self) -> Result<Quote, UpstreamError>;
}

/// Fetches the quote from the upstream HTTP JSON API.
pub struct HttpQuoteSource {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpQuoteSource {
    /// Build a source with its own HTTP client.
    pub fn new(url: &str, timeout: Duration) -> Result<Self, ServerError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, url, timeout))
    }

    /// Build a source around an existing client.
    pub fn with_client(client: Client, url: &str, timeout: Duration) -> Self {
        Self {
            client,
            url: url.to_string(),
            timeout,
        }
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    async fn fetch_quote(&self) -> Result<Quote, UpstreamError> {
        let request = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                error!("Failed to build upstream request for {}: {}", self.url, e);
                UpstreamError::Request(e)
            })?;

        let response = self.client.execute(request).await.map_err(|e| {
            error!("Upstream request to {} failed: {}", self.url, e);
            UpstreamError::Transport(e)
        })?;
        debug!("Upstream responded with {}", response.status());

        let body = response.bytes().await.map_err(|e| {
            error!("Failed to read upstream body: {}", e);
            UpstreamError::Body(e)
        })?;

        let envelope = QuoteEnvelope::from_json_bytes(&body).map_err(|e| {
            error!(
                "Failed to decode upstream quote: {} (body: {})",
                e,
                String::from_utf8_lossy(&body)
            );
            UpstreamError::from(e)
        })?;

        Ok(envelope.into_quote())
    }
}
