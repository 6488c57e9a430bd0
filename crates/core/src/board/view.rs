//! Board view model

use serde::Serialize;

use super::range::ColumnRange;
use crate::trello::{Card, TrelloBoard, TrelloList};
use crate::Result;

/// One column as shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView {
    pub name: String,
    pub cards: Vec<Card>,
}

impl From<TrelloList> for ListView {
    fn from(list: TrelloList) -> Self {
        Self {
            name: list.name,
            cards: list.cards,
        }
    }
}

/// Everything the board template renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardView {
    pub board: TrelloBoard,
    pub lists: Vec<ListView>,
}

impl BoardView {
    /// Build the view from a board's full list collection and a column window
    pub fn window(board: TrelloBoard, lists: Vec<TrelloList>, range: ColumnRange) -> Result<Self> {
        let lists = range
            .select(lists)?
            .into_iter()
            .map(ListView::from)
            .collect();

        Ok(Self { board, lists })
    }
}
