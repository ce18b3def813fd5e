//! Fetching the bid from the quote server.
//!
//! `QuoteFetcher` performs exactly one GET. Request construction, the round-trip,
//! and the body read all run under a single deadline supplied by the caller.
use log::debug;
use reqwest::Client;
use tokio::time::{timeout_at, Instant};

use crate::error::ClientError;

/// One-shot HTTP fetcher for the quote endpoint.
pub struct QuoteFetcher {
    client: Client,
    url: String,
}

impl QuoteFetcher {
    /// Build a fetcher with its own HTTP client.
    pub fn new(url: &str) -> Result<Self, ClientError> {
        let client = Client::builder().build().map_err(ClientError::Request)?;
        Ok(Self::with_client(client, url))
    }

    /// Build a fetcher around an existing client.
    pub fn with_client(client: Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }

    /// Fetch the raw response body, giving up at `deadline`.
    pub async fn fetch(&self, deadline: Instant) -> Result<Vec<u8>, ClientError> {
        let started = Instant::now();
        if started >= deadline {
            return Err(ClientError::Deadline);
        }

        timeout_at(deadline, self.request())
            .await
            .map_err(|_| ClientError::Timeout(deadline - started))?
    }

    async fn request(&self) -> Result<Vec<u8>, ClientError> {
        let request = self
            .client
            .get(&self.url)
            .build()
            .map_err(ClientError::Request)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let body = response.bytes().await.map_err(ClientError::Body)?;
        debug!("Received {} bytes from {}", body.len(), self.url);
        Ok(body.to_vec())
    }
}
