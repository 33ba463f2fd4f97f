use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use super::sink::{clamp_seek, create_sink_at, probe_duration};
use super::types::{AudioCmd, AudioError, PlaybackHandle};

const TICK: Duration = Duration::from_millis(100);

pub(super) fn spawn_audio_thread(rx: Receiver<AudioCmd>, playback_info: PlaybackHandle) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(s) => s,
            Err(e) => {
                let err = AudioError::NoDevice(e.to_string());
                tracing::warn!("{err}");
                if let Ok(mut info) = playback_info.lock() {
                    info.error = Some(err.to_string());
                }
                // Keep draining so senders never see a closed channel.
                for cmd in rx.iter() {
                    if matches!(cmd, AudioCmd::Quit { .. }) {
                        break;
                    }
                }
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        stream.log_on_drop(false);

        let mut deck = Deck::new(&stream, playback_info);

        loop {
            match rx.recv_timeout(TICK) {
                Ok(AudioCmd::Quit { fade_out_ms }) => {
                    deck.quit(fade_out_ms);
                    break;
                }
                Ok(cmd) => deck.apply(cmd),
                Err(RecvTimeoutError::Timeout) => deck.tick(),
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}

/// Everything the audio thread knows about the loaded source.
struct Deck<'a> {
    stream: &'a OutputStream,
    info: PlaybackHandle,
    source: Option<PathBuf>,
    duration: Option<Duration>,
    sink: Option<Sink>,
    paused: bool,
    // Track start time and accumulated elapsed when paused.
    started_at: Option<Instant>,
    accumulated: Duration,
    volume: f32,
    repeat: bool,
}

impl<'a> Deck<'a> {
    fn new(stream: &'a OutputStream, info: PlaybackHandle) -> Self {
        Self {
            stream,
            info,
            source: None,
            duration: None,
            sink: None,
            paused: true,
            started_at: None,
            accumulated: Duration::ZERO,
            volume: 1.0,
            repeat: false,
        }
    }

    fn apply(&mut self, cmd: AudioCmd) {
        match cmd {
            AudioCmd::Load(path) => self.load(path),
            AudioCmd::Play => self.play(),
            AudioCmd::Pause => self.pause(),
            AudioCmd::Stop => self.stop(),
            AudioCmd::SeekTo(to) => self.seek_to(to),
            AudioCmd::SetVolume(v) => {
                self.volume = v.clamp(0.0, 1.0);
                if let Some(s) = self.sink.as_ref() {
                    s.set_volume(self.volume);
                }
            }
            AudioCmd::SetRepeat(on) => self.repeat = on,
            AudioCmd::Quit { .. } => {}
        }
    }

    fn elapsed(&self) -> Duration {
        self.accumulated + self.started_at.map_or(Duration::ZERO, |st| st.elapsed())
    }

    fn publish(&self) {
        let position = clamp_seek(self.elapsed(), self.duration);
        if let Ok(mut info) = self.info.lock() {
            info.position = position;
            info.playing = !self.paused;
        }
    }

    fn fail(&mut self, err: AudioError) {
        tracing::warn!("{err}");
        self.sink = None;
        self.paused = true;
        self.started_at = None;
        if let Ok(mut info) = self.info.lock() {
            info.playing = false;
            info.error = Some(err.to_string());
        }
    }

    /// Rebuild the sink at `at`, keeping the current paused/playing state.
    fn rebuild_at(&mut self, at: Duration) {
        let Some(path) = self.source.clone() else {
            return;
        };
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        match create_sink_at(self.stream, &path, at, self.volume) {
            Ok(sink) => {
                self.accumulated = at;
                if self.paused {
                    self.started_at = None;
                } else {
                    sink.play();
                    self.started_at = Some(Instant::now());
                }
                self.sink = Some(sink);
            }
            Err(e) => self.fail(e),
        }
    }

    fn load(&mut self, path: PathBuf) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        tracing::info!("loading {}", path.display());
        self.duration = probe_duration(&path);
        self.source = Some(path.clone());
        self.paused = true;
        self.started_at = None;
        self.accumulated = Duration::ZERO;
        if let Ok(mut info) = self.info.lock() {
            info.source = Some(path);
            info.duration = self.duration;
            info.position = Duration::ZERO;
            info.playing = false;
            info.error = None;
        }
        self.rebuild_at(Duration::ZERO);
    }

    fn play(&mut self) {
        if self.source.is_none() || !self.paused {
            return;
        }
        if self.sink.is_none() {
            // Ended or failed earlier: start over from the kept position.
            self.rebuild_at(self.accumulated);
        }
        if let Some(s) = self.sink.as_ref() {
            s.play();
            self.paused = false;
            self.started_at = Some(Instant::now());
        }
        self.publish();
    }

    fn pause(&mut self) {
        if self.paused {
            return;
        }
        if let Some(st) = self.started_at.take() {
            self.accumulated += st.elapsed();
        }
        if let Some(s) = self.sink.as_ref() {
            s.pause();
        }
        self.paused = true;
        self.publish();
    }

    fn stop(&mut self) {
        self.pause();
        self.rebuild_at(Duration::ZERO);
        self.publish();
    }

    fn seek_to(&mut self, to: Duration) {
        if self.source.is_none() {
            return;
        }
        // Scrubbing: rebuild the current sink and skip into the file.
        self.rebuild_at(clamp_seek(to, self.duration));
        self.publish();
    }

    /// Periodic position update plus end-of-source handling.
    fn tick(&mut self) {
        let finished = !self.paused && self.sink.as_ref().is_some_and(|s| s.empty());
        if !finished {
            if !self.paused {
                self.publish();
            }
            return;
        }

        if self.repeat {
            self.rebuild_at(Duration::ZERO);
            self.publish();
            return;
        }

        self.sink = None;
        self.paused = true;
        self.started_at = None;
        self.accumulated = Duration::ZERO;
        if let Ok(mut info) = self.info.lock() {
            info.playing = false;
            info.position = self.duration.unwrap_or(info.position);
            info.ended += 1;
        }
    }

    fn quit(&mut self, fade_out_ms: u64) {
        if let Some(ref s) = self.sink {
            if !self.paused {
                // Fade out gently before stopping.
                fade_out_sink(s, fade_out_ms, self.volume);
            }
            s.stop();
        }
        // Update shared state so the UI doesn't keep showing Playing.
        if let Ok(mut info) = self.info.lock() {
            info.playing = false;
        }
    }
}

fn fade_out_sink(sink: &Sink, fade_out_ms: u64, from: f32) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(from * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}
