//! Trello board dashboard server
//!
//! Fetches a window of a Trello board's lists and renders them as a
//! read-only HTML page on `0.0.0.0:$PORT`.

mod config;
mod error;
mod render;
mod routes;
mod shutdown;
mod state;

#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;

use tb_core::trello::TrelloClient;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Settings;
use crate::error::StartupError;
use crate::render::TemplateRenderer;
use crate::state::{AppState, ServeMode};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "board_server=info,tb_core=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run().await {
        error!("{}", err);
        std::process::exit(1);
    }

    info!("We're done. Bye bye.");
}

async fn run() -> Result<(), StartupError> {
    let Settings {
        port,
        app_key,
        token,
        api_url,
        template_path,
        mode,
    } = Settings::from_env()?;

    let trello = match api_url {
        Some(api_url) => TrelloClient::with_base_url(app_key, token, api_url),
        None => TrelloClient::new(app_key, token),
    }
    .map_err(StartupError::TrelloClient)?;

    // A static board is looked up once; failing here stops the process
    let mode = ServeMode::resolve(&mode, &trello)
        .await
        .map_err(StartupError::Board)?;

    let renderer = TemplateRenderer::new(template_path);
    info!("Using template {:?}", renderer.path());

    let state = AppState::new(Arc::new(trello), mode, renderer);
    let app = routes::app(state);

    let signal = shutdown::shutdown_signal().map_err(StartupError::Signal)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { port, source })?;

    info!("Up & running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let name = signal.await;
            info!("Received {}, shutting down", name);
        })
        .await
        .map_err(StartupError::Serve)
}
