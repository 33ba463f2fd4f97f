use std::path::Path;
use std::time::Duration;

use super::types::PlaybackInfo;

/// What a player page needs from an audio backend.
///
/// Commands are fire-and-forget; the backend reports back through `status`.
pub trait Transport {
    /// Replace the source. Playback stays paused at the start.
    fn load(&mut self, src: &Path);
    fn play(&mut self);
    fn pause(&mut self);
    /// Pause and rewind.
    fn stop(&mut self);
    fn seek(&mut self, to: Duration);
    /// `0.0..=1.0`
    fn set_volume(&mut self, volume: f32);
    /// Restart the source natively when it ends.
    fn set_repeat(&mut self, repeat: bool);
    fn status(&self) -> PlaybackInfo;
}
