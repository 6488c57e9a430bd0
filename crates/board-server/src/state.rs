//! Application state

use std::sync::Arc;

use tb_core::board::ColumnRange;
use tb_core::trello::{TrelloApi, TrelloBoard};
use tracing::info;

use crate::config::BoardMode;
use crate::render::TemplateRenderer;

/// Board selection once startup is done
#[derive(Debug, Clone, PartialEq)]
pub enum ServeMode {
    /// Board resolved at startup, window fixed
    Static {
        board: TrelloBoard,
        range: ColumnRange,
    },
    /// Board and window come with each request
    Dynamic,
}

impl ServeMode {
    /// Resolve a configured mode, looking up the static board once
    pub async fn resolve(mode: &BoardMode, trello: &dyn TrelloApi) -> tb_core::Result<Self> {
        match mode {
            BoardMode::Static { board_id, range } => {
                let board = trello.board(board_id).await?;
                info!("Serving board {:?} ({}) columns {}", board.name, board.id, range);
                Ok(Self::Static {
                    board,
                    range: *range,
                })
            }
            BoardMode::Dynamic => {
                info!("Serving boards selected by query parameters");
                Ok(Self::Dynamic)
            }
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    trello: Arc<dyn TrelloApi>,
    mode: ServeMode,
    renderer: TemplateRenderer,
}

impl AppState {
    pub fn new(trello: Arc<dyn TrelloApi>, mode: ServeMode, renderer: TemplateRenderer) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                trello,
                mode,
                renderer,
            }),
        }
    }

    pub fn trello(&self) -> &dyn TrelloApi {
        self.inner.trello.as_ref()
    }

    pub fn mode(&self) -> &ServeMode {
        &self.inner.mode
    }

    pub fn renderer(&self) -> &TemplateRenderer {
        &self.inner.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::Ordering;

    use tb_core::Error;

    use crate::test_support::FakeTrello;

    #[tokio::test]
    async fn static_mode_looks_up_the_board_once() {
        let trello = FakeTrello::default();
        let mode = BoardMode::Static {
            board_id: "b1".to_string(),
            range: ColumnRange::new(0, 2).unwrap(),
        };

        let resolved = ServeMode::resolve(&mode, &trello).await.unwrap();

        assert_eq!(
            resolved,
            ServeMode::Static {
                board: TrelloBoard::new("b1", "Team"),
                range: ColumnRange::new(0, 2).unwrap(),
            }
        );
        assert_eq!(trello.board_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn static_mode_fails_on_unknown_board() {
        let trello = FakeTrello::default();
        let mode = BoardMode::Static {
            board_id: "missing".to_string(),
            range: ColumnRange::new(0, 1).unwrap(),
        };

        let err = ServeMode::resolve(&mode, &trello).await.unwrap_err();
        assert!(matches!(err, Error::BoardNotFound(id) if id == "missing"));
    }

    #[tokio::test]
    async fn dynamic_mode_makes_no_calls() {
        let trello = FakeTrello::default();
        let resolved = ServeMode::resolve(&BoardMode::Dynamic, &trello).await.unwrap();

        assert_eq!(resolved, ServeMode::Dynamic);
        assert_eq!(trello.board_calls.load(Ordering::SeqCst), 0);
    }
}
