//! Error types used across the quote server crate.
//!
//! Each stage of a request has its own error enum so the HTTP layer can pick the
//! status code without inspecting messages:
//! - `UpstreamError` — fetching and decoding the upstream quote.
//! - `StoreError` — persisting a quote into the history table.
//! - `ServerError` — process startup and the listen loop.

use std::io;
use std::time::Duration;

use axum::http::StatusCode;
use fx_quote_common::QuoteError;
use thiserror::Error;

/// Failure while fetching the quote from the upstream provider.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The outbound request could not be built (e.g., invalid URL).
    #[error("Failed to build upstream request: {0}")]
    Request(#[source] reqwest::Error),

    /// Connect/send failure or the deadline expired before a response arrived.
    #[error("Upstream transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be read completely.
    #[error("Failed to read upstream body: {0}")]
    Body(#[source] reqwest::Error),

    /// The body was not a valid quote payload.
    #[error("Failed to decode upstream quote: {0}")]
    Decode(#[from] QuoteError),
}

impl UpstreamError {
    /// Status returned to the caller when this error aborts a request.
    pub fn status_code(&self) -> StatusCode {
        match self {
            UpstreamError::Transport(_) => StatusCode::BAD_REQUEST,
            UpstreamError::Request(_) | UpstreamError::Body(_) | UpstreamError::Decode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Failure while persisting a quote.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The database file could not be opened.
    #[error("Failed to open database: {0}")]
    Connect(#[source] sqlx::Error),

    /// The history table could not be created.
    #[error("Failed to prepare database: {0}")]
    Prepare(#[source] sqlx::Error),

    /// The insert statement failed.
    #[error("Failed to persist quote: {0}")]
    Insert(#[source] sqlx::Error),

    /// The insert did not finish within its deadline.
    #[error("Insert deadline of {0:?} exceeded")]
    Timeout(Duration),
}

/// Failure while starting or running the server process.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Socket bind/accept failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The configured listen address is not a valid socket address.
    #[error("Invalid listen address: {0}")]
    ListenAddr(#[from] std::net::AddrParseError),

    /// The outbound HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
