//! Command-line arguments for the quote client.
//!
//! Without flags the client asks `http://localhost:8080/cotacao` with a 300ms
//! deadline and writes `./cotacao.txt`.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use fx_quote_common::net;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Quote server endpoint.
    #[clap(long, default_value_t = net::server_url())]
    pub server_url: String,

    /// Overall deadline for the request and body read, in milliseconds.
    #[clap(long, default_value_t = net::CLIENT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// File receiving the bid. Overwritten on every successful run.
    #[clap(long, default_value = net::OUTPUT_PATH)]
    pub output: PathBuf,
}

/// Runtime configuration for one client run.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Quote server endpoint.
    pub server_url: String,
    /// Deadline covering request construction, round-trip, and body read.
    pub request_timeout: Duration,
    /// Output file path.
    pub output_path: PathBuf,
}

impl From<Args> for ClientConfig {
    fn from(args: Args) -> Self {
        ClientConfig {
            server_url: args.server_url.trim().replace('"', ""),
            request_timeout: Duration::from_millis(args.timeout_ms),
            output_path: args.output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_values() {
        let config = ClientConfig::from(Args::parse_from(["fx_quote_client"]));

        assert_eq!(config.server_url, "http://localhost:8080/cotacao");
        assert_eq!(config.request_timeout, Duration::from_millis(300));
        assert_eq!(config.output_path, PathBuf::from("./cotacao.txt"));
    }

    #[test]
    fn quoted_url_is_normalised() {
        let args = Args::parse_from([
            "fx_quote_client",
            "--server-url",
            " \"http://10.0.0.5:8080/cotacao\" ",
        ]);
        assert_eq!(ClientConfig::from(args).server_url, "http://10.0.0.5:8080/cotacao");
    }
}
