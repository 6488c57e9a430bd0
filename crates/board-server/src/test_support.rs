//! Test doubles shared by the server's unit tests

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tb_core::trello::{Card, TrelloApi, TrelloBoard, TrelloList};
use tb_core::Error;

/// In-memory Trello serving board `b1` ("Team") with five lists
pub struct FakeTrello {
    pub lists: Vec<TrelloList>,
    pub fail_lists: bool,
    pub board_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
}

impl Default for FakeTrello {
    fn default() -> Self {
        let lists = ["Backlog", "Todo", "Doing", "Review", "Done"]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                TrelloList::new(format!("l{}", i), *name).with_cards(vec![
                    Card::new(format!("c{}a", i), format!("{} card A", name)),
                    Card::new(format!("c{}b", i), format!("{} card B", name)),
                ])
            })
            .collect();

        Self {
            lists,
            fail_lists: false,
            board_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
        }
    }
}

impl FakeTrello {
    pub fn failing_lists() -> Self {
        Self {
            fail_lists: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.board_calls.load(Ordering::SeqCst) + self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TrelloApi for FakeTrello {
    async fn board(&self, board_id: &str) -> tb_core::Result<TrelloBoard> {
        self.board_calls.fetch_add(1, Ordering::SeqCst);
        if board_id == "b1" {
            Ok(TrelloBoard::new("b1", "Team"))
        } else {
            Err(Error::BoardNotFound(board_id.to_string()))
        }
    }

    async fn lists(&self, board: &TrelloBoard) -> tb_core::Result<Vec<TrelloList>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_lists {
            return Err(Error::Status {
                status: 503,
                path: format!("/boards/{}/lists", board.id),
            });
        }
        Ok(self.lists.clone())
    }
}
