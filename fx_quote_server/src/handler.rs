//! HTTP surface of the quote server.
//!
//! A single route, `GET /cotacao`, fetches the current quote, persists it, and
//! answers with the raw bid string. Failures answer with a bare status code and
//! an empty body:
//! - upstream transport failure (including the fetch deadline) — `400`;
//! - any other upstream failure or a persistence failure — `500`.
//!
//! Once a request reaches the handler, fetching and persisting run on their own
//! task and always complete. If the client goes away meanwhile, hyper drops the
//! handler future, nothing is written back, and `RequestGuard` logs the
//! abandoned request; the quote still lands in the history table.
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use fx_quote_common::net::QUOTE_PATH;
use log::{debug, error, warn};

use crate::store::QuoteStore;
use crate::upstream::QuoteSource;

/// Collaborators shared by all requests.
pub struct AppState {
    source: Arc<dyn QuoteSource>,
    store: Arc<dyn QuoteStore>,
}

impl AppState {
    /// Bundle a quote source and a store.
    pub fn new(source: Arc<dyn QuoteSource>, store: Arc<dyn QuoteStore>) -> Self {
        Self { source, store }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(QUOTE_PATH, get(get_quote))
        .with_state(Arc::new(state))
}

/// Logs a request that was dropped before it finished.
struct RequestGuard {
    finished: bool,
}

impl RequestGuard {
    fn new() -> Self {
        Self { finished: false }
    }

    fn finish(mut self) {
        self.finished = true;
    }
}

impl Drop for RequestGuard {
    fn drop(&mut self) {
        if !self.finished {
            warn!("Request cancelled by the client");
        }
    }
}

async fn get_quote(State(state): State<Arc<AppState>>) -> Response {
    let guard = RequestGuard::new();

    let response = match tokio::spawn(fetch_and_store(state)).await {
        Ok(response) => response,
        Err(e) => {
            error!("Quote task failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    };

    guard.finish();
    response
}

async fn fetch_and_store(state: Arc<AppState>) -> Response {
    let quote = match state.source.fetch_quote().await {
        Ok(quote) => quote,
        Err(e) => return e.status_code().into_response(),
    };

    if state.store.save(&quote).await.is_err() {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    debug!("Serving bid {}", quote.bid);
    quote.bid.into_response()
}
