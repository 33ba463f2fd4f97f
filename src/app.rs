//! Application module: the three pages and which one is showing.
//!
//! The `App` model lives in `app::model`; each page keeps its own controller
//! and the app only decides which one receives input.

mod model;

pub use model::*;
