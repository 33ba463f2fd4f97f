use std::fs::File;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use crate::config::LoggingSettings;

/// Install the file logger. The terminal belongs to the UI, so nothing is
/// written to stdout or stderr; without a configured file, logging is off.
pub fn init(settings: &LoggingSettings) -> std::io::Result<()> {
    let Some(path) = &settings.file else {
        return Ok(());
    };

    let log_file = File::create(path)?;
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(
            EnvFilter::try_from_env("SOUVENIR_LOG")
                .unwrap_or_else(|_| EnvFilter::new(&settings.filter)),
        )
        .init();
    Ok(())
}
