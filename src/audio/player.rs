use std::path::Path;
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use super::thread::spawn_audio_thread;
use super::transport::Transport;
use super::types::{AudioCmd, PlaybackHandle, PlaybackInfo};

/// Handle to one audio thread. Each player page owns its own.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    playback: PlaybackHandle,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let playback_info: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo::default()));

        let audio_handle = spawn_audio_thread(rx, playback_info.clone());

        Self {
            tx,
            playback: playback_info,
            join: Mutex::new(Some(audio_handle)),
        }
    }

    pub fn playback_handle(&self) -> PlaybackHandle {
        self.playback.clone()
    }

    pub fn send(&self, cmd: AudioCmd) -> Result<(), mpsc::SendError<AudioCmd>> {
        self.tx.send(cmd)
    }

    fn send_logged(&self, cmd: AudioCmd) {
        if let Err(e) = self.send(cmd) {
            tracing::warn!("audio thread is gone, dropped {:?}", e.0);
        }
    }

    /// Ask the audio thread to fade out and exit, then wait for it.
    pub fn quit_softly(&self, fade_out: Duration) {
        let _ = self.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

impl Default for AudioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for AudioPlayer {
    fn load(&mut self, src: &Path) {
        self.send_logged(AudioCmd::Load(src.to_path_buf()));
    }

    fn play(&mut self) {
        self.send_logged(AudioCmd::Play);
    }

    fn pause(&mut self) {
        self.send_logged(AudioCmd::Pause);
    }

    fn stop(&mut self) {
        self.send_logged(AudioCmd::Stop);
    }

    fn seek(&mut self, to: Duration) {
        self.send_logged(AudioCmd::SeekTo(to));
    }

    fn set_volume(&mut self, volume: f32) {
        self.send_logged(AudioCmd::SetVolume(volume));
    }

    fn set_repeat(&mut self, repeat: bool) {
        self.send_logged(AudioCmd::SetRepeat(repeat));
    }

    fn status(&self) -> PlaybackInfo {
        self.playback
            .lock()
            .map(|info| info.clone())
            .unwrap_or_default()
    }
}
