//! Trello model definitions
//!
//! These types mirror the JSON returned by Trello's REST API. Cards are
//! forwarded to templates as-is, so unknown fields are kept rather than
//! dropped.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A Trello board as returned by `GET /boards/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrelloBoard {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl TrelloBoard {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: None,
        }
    }
}

/// A Trello list (a board column) with its cards in board order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrelloList {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub closed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<f64>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl TrelloList {
    /// Create an empty list
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            closed: false,
            pos: None,
            cards: Vec::new(),
        }
    }

    /// Set the cards
    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }
}

/// A card label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A Trello card
///
/// Only the fields a dashboard template typically shows are typed. Every
/// other field in the API response lands in `extra` and is serialized back
/// next to the typed ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Card {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            desc: String::new(),
            short_url: None,
            due: None,
            labels: Vec::new(),
            extra: Map::new(),
        }
    }
}
