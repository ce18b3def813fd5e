//! Error types used across the quote client.
//!
//! Every variant is terminal for the run: `main` logs it and exits without
//! touching the output file.
use std::io;
use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Unified error type for a client run.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The deadline had already elapsed before the request was started.
    #[error("Execution time exceeded")]
    Deadline,

    /// The deadline elapsed while the request or body read was in flight.
    #[error("Failed to fetch the current quote: deadline of {0:?} exceeded")]
    Timeout(Duration),

    /// The request could not be built (e.g., invalid URL).
    #[error("Failed to build the request: {0}")]
    Request(#[source] reqwest::Error),

    /// The server could not be reached or the connection failed.
    #[error("Failed to fetch the current quote: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Quote server answered {0}")]
    Status(StatusCode),

    /// The response body could not be read.
    #[error("Failed to read the response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The output file could not be written.
    #[error("Failed to write the quote file: {0}")]
    Io(#[from] io::Error),
}
