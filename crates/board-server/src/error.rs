//! Error types for the server
//!
//! Request failures become a plain one-line body with a matching status.
//! The underlying cause is logged, not sent to the client.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::config::ConfigError;
use crate::render::RenderError;

/// Failures while handling a board request
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Malformed query string")]
    InvalidQuery(#[source] QueryRejection),

    #[error("trelloBoardId is required")]
    MissingBoardId,

    #[error("Could not get Trello board {board_id}")]
    BoardLookup {
        board_id: String,
        #[source]
        source: tb_core::Error,
    },

    #[error("{0} is required")]
    MissingColumn(&'static str),

    #[error("{param} must be a non-negative integer, got {value:?}")]
    InvalidColumn { param: &'static str, value: String },

    #[error("{0}")]
    ColumnRange(#[source] tb_core::Error),

    #[error("Failed getting Lists for Trello board")]
    ListFetch(#[source] tb_core::Error),

    #[error("Failed parsing template")]
    TemplateParse(#[source] RenderError),

    #[error("Failed applying template")]
    TemplateApply(#[source] RenderError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidQuery(_)
            | AppError::MissingBoardId
            | AppError::BoardLookup { .. }
            | AppError::MissingColumn(_)
            | AppError::InvalidColumn { .. }
            | AppError::ColumnRange(_) => StatusCode::BAD_REQUEST,
            AppError::ListFetch(_) | AppError::TemplateParse(_) | AppError::TemplateApply(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn cause(&self) -> Option<String> {
        std::error::Error::source(self).map(|e| e.to_string())
    }
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::Apply(_) => AppError::TemplateApply(err),
            RenderError::Read { .. } | RenderError::Parse(_) => AppError::TemplateParse(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let cause = self.cause().unwrap_or_default();

        if status.is_server_error() {
            error!("{}: {}", self, cause);
        } else {
            warn!("Rejected request: {} {}", self, cause);
        }

        (status, format!("{} - {}", status.as_u16(), self)).into_response()
    }
}

/// Failures that stop the process before or while serving
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Could not connect to Trello, err: {0}")]
    TrelloClient(#[source] tb_core::Error),

    #[error("Could not get Trello board, err: {0}")]
    Board(#[source] tb_core::Error),

    #[error("Could not install signal handlers: {0}")]
    Signal(#[source] std::io::Error),

    #[error("Could not listen on port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
