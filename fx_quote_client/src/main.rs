//! USD/BRL quote client.
//!
//! Asks the quote server for the current bid once and stores it in a local text
//! file as `Dólar: <bid>`, replacing any previous content.
//!
//! Usage example (CLI):
//! ```bash
//! fx_quote_client --server-url http://localhost:8080/cotacao --timeout-ms 300 --output ./cotacao.txt
//! ```
//!
//! The deadline covers the request and the body read but not the file write.
//! Any failure is logged and the run ends without touching the output file.
#![warn(missing_docs)]
mod args;
mod error;
mod fetcher;
mod output;

use crate::args::{Args, ClientConfig};
use crate::error::ClientError;
use crate::fetcher::QuoteFetcher;
use crate::output::write_quote_file;
use clap::Parser;
use log::{error, info};
use tokio::time::Instant;

/// Fetch the bid and write it to the configured file.
async fn run(config: &ClientConfig) -> Result<(), ClientError> {
    let deadline = Instant::now() + config.request_timeout;
    let fetcher = QuoteFetcher::new(&config.server_url)?;
    let body = fetcher.fetch(deadline).await?;
    write_quote_file(&config.output_path, &body).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    init_logger();
    let config = ClientConfig::from(Args::parse());

    match run(&config).await {
        Ok(()) => info!("Quote saved successfully to {}", config.output_path.display()),
        Err(e @ ClientError::Deadline) => println!("{}", e),
        Err(ClientError::Io(_)) => {}
        Err(e) => error!("{}", e),
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
