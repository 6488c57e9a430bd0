//! Board windowing
//!
//! Selects a half-open range of a board's lists and shapes them into the
//! view model handed to the HTML template.

mod range;
mod view;

pub use range::*;
pub use view::*;
