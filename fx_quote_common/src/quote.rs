//! USD/BRL quote record and its upstream JSON shape.
//!
//! The upstream provider wraps the record under a `USDBRL` key and sends every
//! value as a string. Values are kept as received; nothing is recomputed locally.
use serde::Deserialize;

use crate::result::Result;

/// Exchange-rate record copied verbatim from the upstream payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    /// Base currency code (e.g., `USD`).
    pub code: String,
    /// Quote currency code (e.g., `BRL`).
    pub codein: String,
    /// Display name of the pair.
    pub name: String,
    /// Session high.
    pub high: String,
    /// Session low.
    pub low: String,
    /// Absolute variation of the bid.
    #[serde(rename = "varBid")]
    pub var_bid: String,
    /// Percent change.
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    /// Bid price, the value surfaced to clients.
    pub bid: String,
    /// Ask price.
    pub ask: String,
    /// Upstream Unix timestamp, as sent.
    pub timestamp: String,
    /// Upstream creation date, as sent.
    pub create_date: String,
}

/// Upstream response body: `{"USDBRL": {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteEnvelope {
    /// The USD/BRL record.
    #[serde(rename = "USDBRL")]
    pub usdbrl: Quote,
}

impl QuoteEnvelope {
    /// Decode an upstream response body.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Unwrap the inner record.
    pub fn into_quote(self) -> Quote {
        self.usdbrl
    }
}
