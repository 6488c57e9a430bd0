//! Process configuration
//!
//! Everything is read from environment variables once at startup.

use std::path::PathBuf;

use secrecy::SecretString;
use tb_core::board::ColumnRange;
use thiserror::Error;

pub const PORT: &str = "PORT";
pub const TRELLO_APP_KEY: &str = "TRELLO_APP_KEY";
pub const TRELLO_TOKEN: &str = "TRELLO_TOKEN";
pub const TRELLO_BOARD_ID: &str = "TRELLO_BOARD_ID";
pub const TRELLO_START_COLUMN: &str = "TRELLO_START_COLUMN";
pub const TRELLO_STOP_COLUMN: &str = "TRELLO_STOP_COLUMN";
pub const TRELLO_API_URL: &str = "TRELLO_API_URL";
pub const BOARD_TEMPLATE: &str = "BOARD_TEMPLATE";

pub const DEFAULT_TEMPLATE_PATH: &str = "tmpl/board.html";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Please provide a valid port number (e.g. 8080)")]
    InvalidPort,

    #[error("Please provide Trello credentials ({0} is not set)")]
    MissingCredential(&'static str),

    #[error("Please provide a valid Trello {which} column (e.g. {example})")]
    InvalidColumn { which: &'static str, example: u8 },

    #[error("Trello start column {start} must not be after stop column {stop}")]
    ReversedColumns { start: usize, stop: usize },
}

/// Which board and columns a request renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardMode {
    /// Board and column window fixed for the whole process
    Static { board_id: String, range: ColumnRange },
    /// Board and column window taken from each request's query string
    Dynamic,
}

#[derive(Debug)]
pub struct Settings {
    pub port: u16,
    pub app_key: SecretString,
    pub token: SecretString,
    /// Trello API root; the public API when unset
    pub api_url: Option<String>,
    pub template_path: PathBuf,
    pub mode: BoardMode,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = var(PORT)
            .and_then(|v| v.parse::<u16>().ok())
            .filter(|p| *p > 0)
            .ok_or(ConfigError::InvalidPort)?;

        let app_key = var(TRELLO_APP_KEY).ok_or(ConfigError::MissingCredential(TRELLO_APP_KEY))?;
        let token = var(TRELLO_TOKEN).ok_or(ConfigError::MissingCredential(TRELLO_TOKEN))?;

        let mode = match var(TRELLO_BOARD_ID) {
            Some(board_id) => {
                let start = parse_column(var(TRELLO_START_COLUMN), "start", 1)?;
                let stop = parse_column(var(TRELLO_STOP_COLUMN), "stop", 3)?;
                let range = ColumnRange::new(start, stop)
                    .map_err(|_| ConfigError::ReversedColumns { start, stop })?;
                BoardMode::Static { board_id, range }
            }
            None => BoardMode::Dynamic,
        };

        Ok(Self {
            port,
            app_key: SecretString::from(app_key),
            token: SecretString::from(token),
            api_url: var(TRELLO_API_URL),
            template_path: var(BOARD_TEMPLATE)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_PATH)),
            mode,
        })
    }
}

fn parse_column(raw: Option<String>, which: &'static str, example: u8) -> Result<usize, ConfigError> {
    raw.and_then(|v| v.parse::<usize>().ok())
        .ok_or(ConfigError::InvalidColumn { which, example })
}
