//! Audio playback backend.
//!
//! A rodio sink lives on a dedicated thread that receives `AudioCmd`s over a
//! channel and publishes `PlaybackInfo` through a shared handle. Page
//! controllers only ever see the `Transport` trait.

mod player;
mod progress;
mod sink;
mod thread;
mod transport;
mod types;

pub use player::AudioPlayer;
pub use progress::Progress;
pub use transport::Transport;
pub use types::*;

#[cfg(test)]
pub use transport::fake;
