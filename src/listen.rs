//! Listen page: a plain background-music player.
//!
//! One track list, one transport, a progress bar that can be clicked to seek.

mod model;

pub use model::{Listen, ListenError};

#[cfg(test)]
mod tests;
