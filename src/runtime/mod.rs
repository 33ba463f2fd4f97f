use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::album::Album;
use crate::app::App;
use crate::audio::AudioPlayer;
use crate::config;
use crate::library::{listen_tracks, record_tracks};
use crate::listen::Listen;
use crate::record::Record;

mod cli;
mod event_loop;
mod input;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::Cli::parse();
    let config_path = cli.config.clone().or_else(config::resolve_config_path);
    let (settings, problem) = settings::load_settings(config_path.as_deref());

    if cli.dump_config {
        print!("{}", toml::to_string_pretty(&settings)?);
        return Ok(());
    }

    if let Some(problem) = &problem {
        // Still on the plain terminal, so the user sees this before the UI.
        eprintln!("souvenir: {problem}");
    }
    if let Err(e) = logging::init(&settings.logging) {
        eprintln!("souvenir: logging disabled: {e}");
    }
    if let Some(problem) = problem {
        tracing::warn!("{problem}");
    }
    tracing::info!(
        "config: {}",
        config_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<defaults>".to_string())
    );

    let album = Album::new(&settings.album);
    let listen = Listen::new(
        AudioPlayer::new(),
        listen_tracks(&settings.listen),
        settings.listen.no_track_alert.clone(),
    );
    let record = Record::new(AudioPlayer::new(), record_tracks(&settings.record), &settings.record);
    tracing::info!(
        "{} photos, {} listen tracks, {} records",
        album.catalog().master().len(),
        listen.tracks().len(),
        record.tracks().len()
    );
    let mut app = App::new(album, listen, record, cli.page);

    let mut state = event_loop::EventLoopState::new();
    app.album.request_assets(&state.photos, &state.texts);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &mut state);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &run_result {
        tracing::error!("event loop failed: {e}");
    }
    run_result
}
