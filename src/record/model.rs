use std::ops::Range;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::assets::{AssetLoader, Picture};
use crate::audio::{PlaybackInfo, Progress, Transport};
use crate::config::RecordSettings;
use crate::library::RecordTrack;
use crate::timer::Timers;

use super::idle::IdleUi;
use super::pager::Pager;
use super::slideshow::{FrameRequest, Slideshow};

/// Everything the record page schedules.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RecordTimer {
    /// Repeating: move the slideshow to its next frame.
    SlideAdvance,
    /// One-shot: swap the faded-out background to `frame`.
    FadeSwap { frame: usize },
    /// One-shot: hide the controls.
    IdleHide,
}

/// The record cabinet: transport controls, a paged track list and a
/// background slideshow synchronised to the playing track.
pub struct Record<T> {
    transport: T,
    tracks: Vec<RecordTrack>,
    current: Option<usize>,
    playing: bool,
    looping: bool,
    shuffling: bool,
    volume: u8,
    volume_step: u8,
    progress: Progress,
    last_ended: u64,
    error: Option<String>,
    cursor: usize,
    pager: Pager,

    timers: Timers<RecordTimer>,
    slideshow: Slideshow,
    idle: IdleUi,
    frames: AssetLoader<u64, Picture>,
    rng: StdRng,
}

impl<T: Transport> Record<T> {
    pub fn new(mut transport: T, tracks: Vec<RecordTrack>, settings: &RecordSettings) -> Self {
        let volume = settings.initial_volume.min(100);
        transport.set_volume(f32::from(volume) / 100.0);
        let last_ended = transport.status().ended;
        Self {
            transport,
            tracks,
            current: None,
            playing: false,
            looping: false,
            shuffling: false,
            volume,
            volume_step: settings.volume_step,
            progress: Progress::default(),
            last_ended,
            error: None,
            cursor: 0,
            pager: Pager::new(settings.page_size),
            timers: Timers::new(),
            slideshow: Slideshow::new(settings),
            idle: IdleUi::new(Duration::from_millis(settings.idle_hide_ms)),
            frames: AssetLoader::new(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Replace the shuffle source, e.g. with a seeded one.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    // ---- read access ----

    pub fn tracks(&self) -> &[RecordTrack] {
        &self.tracks
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn current_track(&self) -> Option<&RecordTrack> {
        self.current.and_then(|i| self.tracks.get(i))
    }

    /// Title line, `--` when nothing is current.
    pub fn title_label(&self) -> &str {
        self.current_track()
            .map(|t| t.title.as_str())
            .unwrap_or(RecordTrack::UNKNOWN)
    }

    pub fn composer_label(&self) -> &str {
        self.current_track()
            .map(RecordTrack::composer_label)
            .unwrap_or(RecordTrack::UNKNOWN)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.shuffling
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn position(&self) -> Duration {
        self.progress.position()
    }

    pub fn duration(&self) -> Option<Duration> {
        self.progress.duration()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn slideshow(&self) -> &Slideshow {
        &self.slideshow
    }

    pub fn is_ui_hidden(&self) -> bool {
        self.idle.is_hidden()
    }

    pub fn is_idle_waiting(&self) -> bool {
        self.idle.is_waiting()
    }

    pub fn timers(&self) -> &Timers<RecordTimer> {
        &self.timers
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    // ---- transport ----

    /// Load and play track `index` and restart the slideshow on its frames.
    pub fn play_track(&mut self, index: usize, now: Instant) {
        let Some(track) = self.tracks.get(index) else {
            return;
        };
        tracing::info!("record: {} ({})", track.title, track.composer_label());

        self.transport.load(&track.audio);
        self.transport.play();
        self.current = Some(index);
        self.cursor = index;
        self.pager.switch_page(self.pager.page_of(index), self.tracks.len());
        self.playing = true;
        self.progress.restart(None);
        self.error = None;

        let folder = track.cg_folder.clone();
        let count = track.cg_count;
        self.slideshow.start(&mut self.timers, &folder, count, now);
    }

    /// Pause or resume. Does nothing until a track has been picked.
    pub fn toggle_play(&mut self) {
        if self.current.is_none() {
            return;
        }
        if self.playing {
            self.transport.pause();
        } else {
            self.transport.play();
        }
        self.playing = !self.playing;
    }

    /// Stop, rewind and clear everything the playing track put on screen.
    pub fn stop(&mut self) {
        self.transport.stop();
        self.playing = false;
        self.slideshow.stop(&mut self.timers);
        self.current = None;
        self.progress.restart(None);
    }

    pub fn prev(&mut self, now: Instant) {
        if self.tracks.is_empty() {
            return;
        }
        let index = match self.current {
            Some(i) if i > 0 => i - 1,
            _ => self.tracks.len() - 1,
        };
        self.play_track(index, now);
    }

    pub fn next(&mut self, now: Instant) {
        if self.tracks.is_empty() {
            return;
        }
        let len = self.tracks.len();
        let index = if self.shuffling {
            self.rng.random_range(0..len)
        } else {
            match self.current {
                Some(i) if i + 1 < len => i + 1,
                _ => 0,
            }
        };
        self.play_track(index, now);
    }

    pub fn toggle_loop(&mut self) {
        self.looping = !self.looping;
        self.transport.set_repeat(self.looping);
    }

    pub fn toggle_shuffle(&mut self) {
        self.shuffling = !self.shuffling;
    }

    /// The current track played to its end.
    pub fn on_ended(&mut self, now: Instant) {
        if !self.looping {
            self.next(now);
        }
    }

    /// `0..=100`, applied to playback as `value / 100`.
    pub fn set_volume(&mut self, value: u8) {
        self.volume = value.min(100);
        self.transport.set_volume(f32::from(self.volume) / 100.0);
    }

    pub fn volume_up(&mut self) {
        self.set_volume(self.volume.saturating_add(self.volume_step));
    }

    pub fn volume_down(&mut self) {
        self.set_volume(self.volume.saturating_sub(self.volume_step));
    }

    pub fn on_progress(&mut self, position: Duration, duration: Option<Duration>) {
        self.progress.update(position, duration);
    }

    pub fn fill_ratio(&self) -> f64 {
        self.progress.fill_ratio()
    }

    pub fn seek_fraction(&mut self, p: f64) {
        if self.current.is_none() {
            return;
        }
        if let Some(to) = self.progress.fraction_target(p) {
            self.seek_to(to);
        }
    }

    pub fn seek_by(&mut self, secs: i64) {
        if self.current.is_some() {
            self.seek_to(self.progress.scrub_target(secs));
        }
    }

    fn seek_to(&mut self, to: Duration) {
        self.transport.seek(to);
        self.progress.jump_to(to);
    }

    /// Adopt backend state. A natural end moves on unless looping.
    pub fn sync(&mut self, status: &PlaybackInfo, now: Instant) {
        if self.current.is_none() {
            self.last_ended = status.ended;
            return;
        }
        self.playing = status.playing;
        self.on_progress(status.position, status.duration.or(self.progress.duration()));
        if status.error != self.error {
            self.error = status.error.clone();
        }
        if status.ended != self.last_ended {
            self.last_ended = status.ended;
            self.on_ended(now);
        }
    }

    pub fn sync_from_transport(&mut self, now: Instant) {
        let status = self.transport.status();
        self.sync(&status, now);
    }

    // ---- track list ----

    pub fn page(&self) -> usize {
        self.pager.page()
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.tracks.len())
    }

    /// Rows shown on the current page.
    pub fn visible_rows(&self) -> Range<usize> {
        self.pager.visible_range(self.tracks.len())
    }

    /// 1-based, clamped.
    pub fn switch_page(&mut self, page: usize) {
        self.pager.switch_page(page, self.tracks.len());
        let rows = self.visible_rows();
        if !rows.contains(&self.cursor) && !rows.is_empty() {
            self.cursor = rows.start;
        }
    }

    pub fn next_page(&mut self) {
        self.switch_page(self.page() + 1);
    }

    pub fn prev_page(&mut self) {
        self.switch_page(self.page().saturating_sub(1));
    }

    /// Move the row cursor, flipping pages when it leaves the current one.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.tracks.is_empty() {
            return;
        }
        let last = self.tracks.len() as isize - 1;
        self.cursor = (self.cursor as isize + delta).clamp(0, last) as usize;
        let page = self.pager.page_of(self.cursor);
        self.pager.switch_page(page, self.tracks.len());
    }

    pub fn activate_cursor(&mut self, now: Instant) {
        self.play_track(self.cursor, now);
    }

    // ---- timers, activity, assets ----

    /// Mouse motion or key press.
    pub fn on_activity(&mut self, now: Instant) {
        self.idle.on_activity(&mut self.timers, now);
    }

    /// Run every task due at `now`.
    pub fn tick(&mut self, now: Instant) {
        while let Some(fired) = self.timers.pop_due(now) {
            match fired.kind {
                RecordTimer::IdleHide => {
                    let playing = self.playing && self.current.is_some();
                    self.idle.on_timer(&fired, playing);
                }
                RecordTimer::SlideAdvance | RecordTimer::FadeSwap { .. } => {
                    if let Some(req) = self.slideshow.on_timer(&mut self.timers, &fired) {
                        self.request_frame(req);
                    }
                }
            }
        }
    }

    fn request_frame(&self, req: FrameRequest) {
        let FrameRequest { id, path } = req;
        tracing::debug!("slideshow frame {}", path.display());
        self.frames.request(id, move || Picture::decode(&path));
    }

    /// Apply decoded slideshow frames.
    pub fn poll_frames(&mut self) {
        for loaded in self.frames.drain() {
            self.slideshow.on_frame_loaded(loaded.key, loaded.result);
        }
    }

    pub fn on_frame_loaded(&mut self, id: u64, result: Result<Picture, crate::assets::AssetError>) {
        self.slideshow.on_frame_loaded(id, result);
    }

    /// Earliest pending deadline, for sizing the event poll.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Leaving the page.
    pub fn unload(&mut self) {
        self.stop();
        self.idle.reset(&mut self.timers);
    }
}
