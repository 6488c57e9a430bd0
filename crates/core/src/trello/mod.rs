//! Trello integration
//!
//! This module provides the Trello REST data model and a thin authenticated
//! client for the two calls the dashboard needs: board lookup and the
//! board's lists with their open cards.

mod client;
mod model;

pub use client::*;
pub use model::*;
