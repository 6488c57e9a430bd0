//! Favicon endpoint
//!
//! Browsers ask for it on every page load; answer without touching Trello.

use axum::{routing::any, Router};

use crate::state::AppState;

async fn favicon() {}

pub fn router() -> Router<AppState> {
    Router::new().route("/favicon.ico", any(favicon))
}
