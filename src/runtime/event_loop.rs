use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::assets::{AssetLoader, Picture};
use crate::audio::{AudioPlayer, Transport};
use crate::config;
use crate::ui;

use super::input;

/// Longest wait for input before the next redraw.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Album photos by master index.
    pub photos: AssetLoader<usize, Picture>,
    /// Album description sidecars by master index.
    pub texts: AssetLoader<usize, String>,
    /// Frame area of the last draw, for mouse hit-testing.
    area: Rect,
}

impl EventLoopState {
    pub fn new() -> Self {
        Self {
            photos: AssetLoader::new(),
            texts: AssetLoader::new(),
            area: Rect::default(),
        }
    }

    /// Apply every finished album load.
    fn drain_album<T: Transport>(&self, app: &mut App<T>) {
        for loaded in self.photos.drain() {
            app.album.on_photo_loaded(loaded.key, loaded.result);
        }
        for loaded in self.texts.drain() {
            app.album.on_description_loaded(loaded.key, loaded.result);
        }
    }
}

/// Main terminal event loop: applies background results, syncs with the
/// audio threads, runs due timers, draws and handles input. Returns `Ok(())`
/// when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<AudioPlayer>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        state.drain_album(app);
        app.record.poll_frames();

        let now = Instant::now();
        app.listen.sync_from_transport();
        app.record.sync_from_transport(now);
        app.record.tick(now);

        let completed = terminal.draw(|f| ui::draw(f, app, settings))?;
        state.area = completed.area;

        // Wake up early for the next timer so slides change on time.
        let timeout = app
            .record
            .next_deadline()
            .map(|d| d.saturating_duration_since(Instant::now()).min(POLL_INTERVAL))
            .unwrap_or(POLL_INTERVAL);

        if !event::poll(timeout)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if input::handle_key(app, key, state.area, &settings.controls, Instant::now()) {
                    break;
                }
            }
            Event::Mouse(mouse) => input::handle_mouse(app, mouse, state.area, Instant::now()),
            _ => {}
        }
    }

    tracing::info!("shutting down");
    let fade_out = Duration::from_millis(settings.audio.quit_fade_out_ms);
    app.listen.transport().quit_softly(fade_out);
    app.record.transport().quit_softly(fade_out);
    Ok(())
}
