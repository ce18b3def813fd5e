//! USD/BRL quote HTTP server.
//!
//! Serves `GET /cotacao`. Each request fetches the latest quote from the upstream
//! provider, appends it to the SQLite history table, and answers with the bid as
//! plain text. The building blocks are:
//!
//! - `HttpQuoteSource` — one outbound GET per request, bounded by the upstream deadline.
//! - `SqliteQuoteStore` — one connection per request; the insert has its own short deadline.
//! - `handler` — the axum router that ties both together and maps failures to status codes.
//!
//! Concurrency: axum serves every connection on its own tokio task. Requests share
//! no in-process mutable state; the database file arbitrates concurrent writers.
//!
//! Defaults: bind `0.0.0.0:8080`, 200ms upstream deadline, 10ms insert deadline,
//! database `db_cotacao.sqlite3`. See `args` for the flags overriding them.
#![warn(missing_docs)]
use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use tokio::net::TcpListener;

use crate::args::{Args, ServerConfig};
use crate::error::ServerError;
use crate::handler::AppState;
use crate::store::SqliteQuoteStore;
use crate::upstream::HttpQuoteSource;

mod args;
mod error;
mod handler;
pub mod model;
mod store;
mod upstream;

async fn run(args: Args) -> Result<(), ServerError> {
    let config = ServerConfig::try_from(args)?;
    let source = HttpQuoteSource::new(&config.upstream_url, config.upstream_timeout)?;
    let store = SqliteQuoteStore::new(&config.database_path, config.insert_timeout);
    let app = handler::router(AppState::new(Arc::new(source), Arc::new(store)));

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!("Starting quote server on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Quote server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C received. Shutting down server..."),
        Err(e) => {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[tokio::main]
async fn main() {
    init_logger();
    if let Err(e) = run(Args::parse()).await {
        error!("{}", e);
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
