//! Board page
//!
//! Renders a window of a Trello board's columns as HTML. Answers every path
//! and method not claimed by another route.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
    routing::any,
    Router,
};
use serde::Deserialize;
use tb_core::board::{BoardView, ColumnRange};
use tb_core::trello::TrelloBoard;
use tracing::info;

use crate::error::AppError;
use crate::state::{AppState, ServeMode};

const START_COLUMN: &str = "trelloStartColumn";
const STOP_COLUMN: &str = "trelloStopColumn";

/// Query parameters used in dynamic mode
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardQuery {
    #[serde(default)]
    pub trello_board_id: Option<String>,
    #[serde(default)]
    pub trello_start_column: Option<String>,
    #[serde(default)]
    pub trello_stop_column: Option<String>,
}

/// ANY / - Render the configured board window
///
/// The query string is only read in dynamic mode; a static board renders the
/// same window whatever the request carries.
async fn show_board(
    State(state): State<AppState>,
    query: Result<Query<BoardQuery>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    info!("Received request");

    let (board, range) = match state.mode() {
        ServeMode::Static { board, range } => (board.clone(), *range),
        ServeMode::Dynamic => {
            let Query(query) = query.map_err(AppError::InvalidQuery)?;
            resolve_from_query(&state, &query).await?
        }
    };

    let lists = state
        .trello()
        .lists(&board)
        .await
        .map_err(AppError::ListFetch)?;

    let view = BoardView::window(board, lists, range).map_err(AppError::ColumnRange)?;
    let html = state.renderer().render(&view).await?;

    Ok(Html(html))
}

async fn resolve_from_query(
    state: &AppState,
    query: &BoardQuery,
) -> Result<(TrelloBoard, ColumnRange), AppError> {
    let board_id = query
        .trello_board_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(AppError::MissingBoardId)?;

    let board = state
        .trello()
        .board(board_id)
        .await
        .map_err(|source| AppError::BoardLookup {
            board_id: board_id.to_string(),
            source,
        })?;

    let start = parse_column(START_COLUMN, query.trello_start_column.as_deref())?;
    let stop = parse_column(STOP_COLUMN, query.trello_stop_column.as_deref())?;
    let range = ColumnRange::new(start, stop).map_err(AppError::ColumnRange)?;

    Ok((board, range))
}

fn parse_column(param: &'static str, raw: Option<&str>) -> Result<usize, AppError> {
    let raw = raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(AppError::MissingColumn(param))?;

    raw.parse().map_err(|_| AppError::InvalidColumn {
        param,
        value: raw.to_string(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", any(show_board))
        .fallback(show_board)
}
