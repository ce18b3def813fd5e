//! Shared networking constants and defaults used by client and server.

/// TCP port the quote server listens on.
pub const SERVER_PORT: u16 = 8080;
/// HTTP path serving the current bid.
pub const QUOTE_PATH: &str = "/cotacao";
/// Upstream endpoint returning the latest USD/BRL quote.
pub const UPSTREAM_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";
/// Default SQLite file holding the quote history.
pub const DATABASE_PATH: &str = "db_cotacao.sqlite3";
/// Default file the client writes the bid into.
pub const OUTPUT_PATH: &str = "./cotacao.txt";
/// Label written in front of the bid in the client output file.
pub const OUTPUT_LABEL: &str = "Dólar: ";

/// Server upstream fetch deadline in milliseconds.
pub const UPSTREAM_TIMEOUT_MS: u64 = 200;
/// Server database insert deadline in milliseconds.
pub const INSERT_TIMEOUT_MS: u64 = 10;
/// Client overall request deadline in milliseconds.
pub const CLIENT_TIMEOUT_MS: u64 = 300;

/// Helper to format a host with a port like "host:port".
pub fn addr(host: &str, port: u16) -> String {
    format!("{}:{}", host, port)
}

/// Address the server binds to by default (all interfaces).
pub fn listen_addr() -> String {
    addr("0.0.0.0", SERVER_PORT)
}

/// URL the client requests by default.
pub fn server_url() -> String {
    format!("http://{}{}", addr("localhost", SERVER_PORT), QUOTE_PATH)
}
