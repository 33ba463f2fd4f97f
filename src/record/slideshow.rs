use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::assets::{AssetError, Picture};
use crate::config::RecordSettings;
use crate::timer::{Fired, TimerSlot, Timers};

use super::model::RecordTimer;

/// A frame the slideshow wants decoded. `id` tags the result so a stale
/// decode can't overwrite a newer frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRequest {
    pub id: u64,
    pub path: PathBuf,
}

/// Background illustrations for the playing track.
///
/// Frames are `<folder>/1.<ext>`, `<folder>/2.<ext>`, ... Every frame change
/// fades out, swaps the source after the cross-fade delay and fades back in
/// once the new picture has been decoded.
pub struct Slideshow {
    extension: String,
    interval: Duration,
    crossfade: Duration,

    folder: Option<PathBuf>,
    count: usize,
    frame: usize,
    source: Option<PathBuf>,
    picture: Option<Picture>,
    visible: bool,
    request: u64,

    advance: TimerSlot,
    swap: TimerSlot,
}

impl Slideshow {
    pub fn new(settings: &RecordSettings) -> Self {
        Self {
            extension: settings.frame_extension.trim_start_matches('.').to_string(),
            interval: Duration::from_millis(settings.slideshow_interval_ms),
            crossfade: Duration::from_millis(settings.crossfade_delay_ms),
            folder: None,
            count: 1,
            frame: 0,
            source: None,
            picture: None,
            visible: false,
            request: 0,
            advance: TimerSlot::default(),
            swap: TimerSlot::default(),
        }
    }

    /// Zero-based index of the current frame.
    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Path the background currently shows (or is fading in).
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// The picture to draw, `None` while faded out.
    pub fn visible_picture(&self) -> Option<&Picture> {
        self.picture.as_ref().filter(|_| self.visible)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Id of the newest frame request; older results are ignored.
    pub fn request_id(&self) -> u64 {
        self.request
    }

    pub fn is_running(&self) -> bool {
        self.advance.is_armed()
    }

    pub fn frame_path(&self, frame: usize) -> Option<PathBuf> {
        let folder = self.folder.as_ref()?;
        Some(folder.join(format!("{}.{}", frame + 1, self.extension)))
    }

    /// Restart from the first frame of `folder`. A single-frame track gets no
    /// advance timer.
    pub fn start(
        &mut self,
        timers: &mut Timers<RecordTimer>,
        folder: &Path,
        count: usize,
        now: Instant,
    ) {
        self.advance.clear(timers);
        self.swap.clear(timers);

        self.folder = Some(folder.to_path_buf());
        self.count = count.max(1);
        self.frame = 0;
        self.show_current(timers, now);

        if self.count > 1 {
            let h = timers.schedule_repeating(RecordTimer::SlideAdvance, now, self.interval);
            self.advance.replace(timers, h);
        }
    }

    /// Cancel both timers and clear the background.
    pub fn stop(&mut self, timers: &mut Timers<RecordTimer>) {
        self.advance.clear(timers);
        self.swap.clear(timers);
        self.folder = None;
        self.count = 1;
        self.frame = 0;
        self.source = None;
        self.picture = None;
        self.visible = false;
        // Anything still decoding belongs to the old track.
        self.request += 1;
    }

    fn show_current(&mut self, timers: &mut Timers<RecordTimer>, now: Instant) {
        self.visible = false;
        let h = timers.schedule_once(
            RecordTimer::FadeSwap { frame: self.frame },
            now,
            self.crossfade,
        );
        self.swap.replace(timers, h);
    }

    /// React to a fired timer. Returns the frame to decode when the
    /// cross-fade delay ran out.
    pub fn on_timer(
        &mut self,
        timers: &mut Timers<RecordTimer>,
        fired: &Fired<RecordTimer>,
    ) -> Option<FrameRequest> {
        match fired.kind {
            RecordTimer::SlideAdvance if self.advance.holds(fired.handle) => {
                self.frame = (self.frame + 1) % self.count;
                self.show_current(timers, fired.due);
                None
            }
            RecordTimer::FadeSwap { frame } if self.swap.holds(fired.handle) => {
                self.swap.release(fired.handle);
                let path = self.frame_path(frame)?;
                self.request += 1;
                self.source = Some(path.clone());
                Some(FrameRequest {
                    id: self.request,
                    path,
                })
            }
            _ => None,
        }
    }

    pub fn on_frame_loaded(&mut self, id: u64, result: Result<Picture, AssetError>) {
        if id != self.request {
            tracing::trace!("dropping stale slideshow frame {id}");
            return;
        }
        match result {
            Ok(picture) => {
                self.picture = Some(picture);
                self.visible = true;
            }
            Err(e) => {
                tracing::warn!("slideshow frame hidden: {e}");
                self.picture = None;
                self.visible = false;
            }
        }
    }
}
