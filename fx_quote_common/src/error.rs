//! Error types shared between client and server.
//!
//! `QuoteError` covers the failures of the shared helpers, currently decoding
//! the upstream payload.
use thiserror::Error;

/// Unified error type for the shared quote helpers.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Failure while decoding the upstream JSON payload.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
