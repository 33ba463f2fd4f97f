use std::time::Duration;

use crate::audio::{PlaybackInfo, Progress, Transport};
use crate::library::ListenTrack;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListenError {
    #[error("no track is loaded")]
    NothingLoaded,
}

pub struct Listen<T> {
    transport: T,
    tracks: Vec<ListenTrack>,
    loaded: Option<usize>,
    playing: bool,
    cursor: usize,
    progress: Progress,
    last_ended: u64,
    error: Option<String>,
    alert_text: String,
    alert: Option<String>,
}

impl<T: Transport> Listen<T> {
    pub fn new(transport: T, tracks: Vec<ListenTrack>, alert_text: impl Into<String>) -> Self {
        let last_ended = transport.status().ended;
        Self {
            transport,
            tracks,
            loaded: None,
            playing: false,
            cursor: 0,
            progress: Progress::default(),
            last_ended,
            error: None,
            alert_text: alert_text.into(),
            alert: None,
        }
    }

    pub fn tracks(&self) -> &[ListenTrack] {
        &self.tracks
    }

    pub fn loaded(&self) -> Option<usize> {
        self.loaded
    }

    pub fn loaded_track(&self) -> Option<&ListenTrack> {
        self.loaded.and_then(|i| self.tracks.get(i))
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn position(&self) -> Duration {
        self.progress.position()
    }

    pub fn duration(&self) -> Option<Duration> {
        self.progress.duration()
    }

    /// Last failure reported by the audio backend.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Pause when playing, play when paused.
    pub fn toggle_play(&mut self) -> Result<(), ListenError> {
        if self.loaded.is_none() {
            return Err(ListenError::NothingLoaded);
        }
        if self.playing {
            self.transport.pause();
            self.playing = false;
        } else {
            self.transport.play();
            self.playing = true;
        }
        Ok(())
    }

    /// The play/pause button: like `toggle_play`, raising the alert popup
    /// when there is nothing to play.
    pub fn press_play_pause(&mut self) {
        if let Err(e) = self.toggle_play() {
            tracing::debug!("listen play/pause ignored: {e}");
            self.alert = Some(self.alert_text.clone());
        }
    }

    /// Clicking a track. The loaded track while it plays is paused instead
    /// of restarted.
    pub fn select_track(&mut self, index: usize) {
        let Some(track) = self.tracks.get(index) else {
            return;
        };
        self.cursor = index;
        if self.loaded == Some(index) && self.playing {
            self.transport.pause();
            self.playing = false;
            return;
        }

        tracing::info!("listen: {}", track.title);
        self.transport.load(&track.src);
        self.transport.play();
        self.loaded = Some(index);
        self.playing = true;
        self.progress.restart(track.duration);
        self.error = None;
    }

    pub fn activate_cursor(&mut self) {
        self.select_track(self.cursor);
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.tracks.is_empty() {
            return;
        }
        let last = self.tracks.len() as isize - 1;
        self.cursor = (self.cursor as isize + delta).clamp(0, last) as usize;
    }

    pub fn on_progress(&mut self, position: Duration, duration: Option<Duration>) {
        self.progress.update(position, duration);
    }

    pub fn fill_ratio(&self) -> f64 {
        self.progress.fill_ratio()
    }

    /// Seek to `p` of the way through the loaded track.
    pub fn seek_fraction(&mut self, p: f64) {
        if self.loaded.is_none() {
            return;
        }
        if let Some(to) = self.progress.fraction_target(p) {
            self.seek_to(to);
        }
    }

    /// Scrub by `secs` seconds, clamped to the track.
    pub fn seek_by(&mut self, secs: i64) {
        if self.loaded.is_some() {
            self.seek_to(self.progress.scrub_target(secs));
        }
    }

    fn seek_to(&mut self, to: Duration) {
        self.transport.seek(to);
        self.progress.jump_to(to);
    }

    /// Adopt what the backend reports: play/pause changes, time, natural end.
    pub fn sync(&mut self, status: &PlaybackInfo) {
        if self.loaded.is_none() {
            self.last_ended = status.ended;
            return;
        }
        self.playing = status.playing;
        let duration = status.duration.or(self.progress.duration());
        self.on_progress(status.position, duration);
        if status.ended != self.last_ended {
            self.last_ended = status.ended;
            self.playing = false;
        }
        if status.error != self.error {
            self.error = status.error.clone();
        }
    }

    pub fn sync_from_transport(&mut self) {
        let status = self.transport.status();
        self.sync(&status);
    }

    /// Leaving the page: stop and forget the loaded track.
    pub fn unload(&mut self) {
        if self.loaded.is_some() {
            self.transport.stop();
        }
        self.loaded = None;
        self.playing = false;
        self.progress.restart(None);
        self.alert = None;
        self.error = None;
    }
}
