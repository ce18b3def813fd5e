//! Command-line arguments for the quote server.
//!
//! Every flag defaults to the production value, so running without arguments
//! listens on `0.0.0.0:8080` and queries the public USD/BRL endpoint.
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use fx_quote_common::net;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address to accept HTTP connections on.
    #[clap(long, default_value_t = net::listen_addr())]
    pub listen_addr: String,

    /// Upstream endpoint returning the USD/BRL quote as JSON.
    #[clap(long, default_value = net::UPSTREAM_URL)]
    pub upstream_url: String,

    /// Deadline for the whole upstream call, in milliseconds.
    #[clap(long, default_value_t = net::UPSTREAM_TIMEOUT_MS)]
    pub upstream_timeout_ms: u64,

    /// SQLite file holding the quote history. Created if missing.
    #[clap(long, default_value = net::DATABASE_PATH)]
    pub database_path: PathBuf,

    /// Deadline for the database insert, in milliseconds.
    #[clap(long, default_value_t = net::INSERT_TIMEOUT_MS)]
    pub insert_timeout_ms: u64,
}

/// Runtime configuration handed to the server components at construction.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket the HTTP server binds to.
    pub listen_addr: SocketAddr,
    /// Upstream quote endpoint.
    pub upstream_url: String,
    /// Deadline covering request, response, and body read of the upstream call.
    pub upstream_timeout: Duration,
    /// Database file path.
    pub database_path: PathBuf,
    /// Deadline for a single insert.
    pub insert_timeout: Duration,
}

impl TryFrom<Args> for ServerConfig {
    type Error = std::net::AddrParseError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        Ok(ServerConfig {
            listen_addr: args.listen_addr.trim().parse()?,
            upstream_url: args.upstream_url,
            upstream_timeout: Duration::from_millis(args.upstream_timeout_ms),
            database_path: args.database_path,
            insert_timeout: Duration::from_millis(args.insert_timeout_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_values() {
        let args = Args::parse_from(["fx_quote_server"]);
        let config = ServerConfig::try_from(args).unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.upstream_url, net::UPSTREAM_URL);
        assert_eq!(config.upstream_timeout, Duration::from_millis(200));
        assert_eq!(config.database_path, PathBuf::from("db_cotacao.sqlite3"));
        assert_eq!(config.insert_timeout, Duration::from_millis(10));
    }

    #[test]
    fn overrides_are_applied() {
        let args = Args::parse_from([
            "fx_quote_server",
            "--listen-addr",
            "127.0.0.1:9000",
            "--upstream-timeout-ms",
            "50",
            "--database-path",
            "/tmp/history.sqlite3",
        ]);
        let config = ServerConfig::try_from(args).unwrap();

        assert_eq!(config.listen_addr.port(), 9000);
        assert_eq!(config.upstream_timeout, Duration::from_millis(50));
        assert_eq!(config.database_path, PathBuf::from("/tmp/history.sqlite3"));
    }

    #[test]
    fn rejects_bad_listen_addr() {
        let args = Args::parse_from(["fx_quote_server", "--listen-addr", "localhost"]);
        assert!(ServerConfig::try_from(args).is_err());
    }
}
