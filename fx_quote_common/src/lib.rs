//!
//! Common types and utilities shared by the quote server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` for the shared helpers.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the USD/BRL `Quote` record and its upstream JSON envelope.
//! - `net` — default addresses, paths, and the output file label.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod quote;
pub mod result;

pub use error::QuoteError;
pub use quote::{Quote, QuoteEnvelope};
pub use result::Result;
