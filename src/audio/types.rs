//! Audio-related small types and handles.
//!
//! This module defines the command set understood by the audio thread, the
//! playback snapshot it publishes and the errors it can hit.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum AudioCmd {
    /// Replace the current source; playback stays paused at 0:00.
    Load(PathBuf),
    /// Start or resume playback of the loaded source.
    Play,
    /// Pause, keeping the position.
    Pause,
    /// Pause and rewind to the start.
    Stop,
    /// Jump to an absolute position.
    SeekTo(Duration),
    /// Playback volume in `0.0..=1.0`.
    SetVolume(f32),
    /// Restart the source natively when it ends instead of reporting the end.
    SetRepeat(bool),
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Runtime playback information shared with the UI.
pub struct PlaybackInfo {
    /// Loaded source, if any.
    pub source: Option<PathBuf>,
    /// Current position in the loaded source.
    pub position: Duration,
    /// Total length, when it could be probed.
    pub duration: Option<Duration>,
    /// Whether playback is currently active.
    pub playing: bool,
    /// Bumped every time a source plays to its end with repeat off.
    pub ended: u64,
    /// Last load/playback failure, cleared by the next successful load.
    pub error: Option<String>,
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("no audio output device: {0}")]
    NoDevice(String),
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}
