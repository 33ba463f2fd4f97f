use std::path::PathBuf;
use std::time::Duration;

/// A track on the listen page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListenTrack {
    pub src: PathBuf,
    pub title: String,
    /// Probed from tags when the track came from a directory scan.
    pub duration: Option<Duration>,
}

/// A track in the record cabinet.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordTrack {
    pub id: String,
    pub title: String,
    pub audio: PathBuf,
    pub cg_folder: PathBuf,
    pub composer: Option<String>,
    /// Number of slideshow frames, always >= 1.
    pub cg_count: usize,
}

impl RecordTrack {
    /// Label shown when no composer is known.
    pub const UNKNOWN: &'static str = "--";

    pub fn composer_label(&self) -> &str {
        self.composer.as_deref().unwrap_or(Self::UNKNOWN)
    }
}
