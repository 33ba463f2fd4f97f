//! Album page: category sidebar, photo grid and lightbox viewer.
//!
//! The `Album` controller owns all page state; photo and description assets
//! are decoded off-thread and fed back through `on_photo_loaded` /
//! `on_description_loaded`.

mod catalog;
mod lightbox;
mod model;

pub use catalog::{Catalog, Category, PhotoSet};
pub use lightbox::Lightbox;
pub use model::*;

#[cfg(test)]
mod tests;
