//! Route handlers

pub mod board;
pub mod favicon;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// The full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(favicon::router())
        .merge(board::router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
