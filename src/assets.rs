//! Off-thread asset loading.
//!
//! Photos, slideshow frames and description sidecars are read on short-lived
//! worker threads; results come back to the UI thread through an
//! `AssetLoader` channel and are drained once per event-loop iteration.

mod error;
mod loader;
mod picture;

pub use error::AssetError;
pub use loader::{AssetLoader, Loaded};
pub use picture::Picture;

use std::path::Path;

/// Read a text asset, returning its trimmed contents.
pub fn read_text(path: &Path) -> Result<String, AssetError> {
    std::fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .map_err(|source| AssetError::Read {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests;
