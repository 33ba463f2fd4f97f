//! Track declarations for the two player pages.
//!
//! Listen tracks come from the config file plus an optional directory scan;
//! record tracks come from the config file and pick up their composer and
//! slideshow frame count from a metadata table keyed by track id.

mod display;
mod model;
mod scan;
mod tracks;

pub use model::{ListenTrack, RecordTrack};
pub use scan::scan;
pub use tracks::{listen_tracks, record_tracks};

#[cfg(test)]
mod tests;
