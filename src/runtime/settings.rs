use std::path::Path;

use crate::config;

/// Load and validate settings from `path`.
///
/// Config is optional: any failure falls back to defaults. The second value
/// describes what went wrong so it can be logged once logging is up.
pub fn load_settings(path: Option<&Path>) -> (config::Settings, Option<String>) {
    match config::Settings::load_from(path) {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(msg) => (
                config::Settings::default(),
                Some(format!("invalid config, using defaults: {msg}")),
            ),
        },
        Err(e) => (
            config::Settings::default(),
            Some(format!("failed to load config, using defaults: {e}")),
        ),
    }
}
