//! Core library for the Trello board dashboard
//!
//! This crate contains everything that does not depend on the HTTP server:
//! - Trello data model and REST client
//! - Column range windowing and the board view model

pub mod board;
pub mod error;
pub mod trello;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
