//! Trello REST API client
//!
//! Authenticates every request with an application key and a user token
//! passed as query parameters, the way Trello's API expects them.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::model::{TrelloBoard, TrelloList};
use crate::error::Error;
use crate::Result;

/// Base URL of Trello's public REST API
pub const DEFAULT_API_URL: &str = "https://api.trello.com/1";

/// Read access to Trello boards
#[async_trait]
pub trait TrelloApi: Send + Sync {
    /// Get a board by ID
    async fn board(&self, board_id: &str) -> Result<TrelloBoard>;

    /// Get all open lists of a board, in board order, each with its open cards
    async fn lists(&self, board: &TrelloBoard) -> Result<Vec<TrelloList>>;
}

/// Authenticated Trello client backed by `reqwest`
#[derive(Debug)]
pub struct TrelloClient {
    http: reqwest::Client,
    base_url: String,
    app_key: SecretString,
    token: SecretString,
}

impl TrelloClient {
    /// Create a client talking to the public Trello API
    pub fn new(app_key: SecretString, token: SecretString) -> Result<Self> {
        Self::with_base_url(app_key, token, DEFAULT_API_URL)
    }

    /// Create a client talking to another API root (e.g. a local fake in tests)
    pub fn with_base_url(
        app_key: SecretString,
        token: SecretString,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        if app_key.expose_secret().trim().is_empty() {
            return Err(Error::MissingCredential("application key"));
        }
        if token.expose_secret().trim().is_empty() {
            return Err(Error::MissingCredential("token"));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("tb-core/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            app_key,
            token,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        debug!("Trello GET {}", path);

        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(&[
                ("key", self.app_key.expose_secret()),
                ("token", self.token.expose_secret()),
            ])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Trello returned {} for {}", status, path);
            return Err(Error::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl TrelloApi for TrelloClient {
    async fn board(&self, board_id: &str) -> Result<TrelloBoard> {
        let path = format!("/boards/{}", urlencoding::encode(board_id));

        match self.get(&path, &[("fields", "id,name,url")]).await {
            // Trello answers 400 for malformed ids and 404 for unknown ones
            Err(Error::Status {
                status: 400 | 404, ..
            }) => Err(Error::BoardNotFound(board_id.to_string())),
            other => other,
        }
    }

    async fn lists(&self, board: &TrelloBoard) -> Result<Vec<TrelloList>> {
        let path = format!("/boards/{}/lists", urlencoding::encode(&board.id));
        self.get(&path, &[("cards", "open"), ("filter", "open")])
            .await
    }
}
