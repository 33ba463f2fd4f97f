use std::collections::HashSet;
use std::{env, path::Path, path::PathBuf};

use super::schema::Settings;

/// Problems `Settings::validate` rejects.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("record.page_size must be >= 1")]
    ZeroPageSize,
    #[error("record.slideshow_interval_ms must be >= 1")]
    ZeroSlideshowInterval,
    #[error("record.initial_volume must be <= 100 (got {0})")]
    VolumeOutOfRange(u8),
    #[error("record track id {0:?} is declared more than once")]
    DuplicateTrackId(String),
    #[error("album category {category:?}: photos must be a list or \"all\" (got {keyword:?})")]
    UnknownPhotoKeyword { category: String, keyword: String },
}

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then environment variables
/// (prefix `SOUVENIR__`), and falls back to struct defaults.
impl Settings {
    /// Load settings from the resolved config path and the environment.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        Self::load_from(resolve_config_path().as_deref())
    }

    /// Load settings from `path` (if any) and the environment.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("SOUVENIR")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let record = &self.record;
        if record.page_size == 0 {
            return Err(SettingsError::ZeroPageSize);
        }
        if record.slideshow_interval_ms == 0 {
            return Err(SettingsError::ZeroSlideshowInterval);
        }
        if record.initial_volume > 100 {
            return Err(SettingsError::VolumeOutOfRange(record.initial_volume));
        }

        let mut seen = HashSet::new();
        for track in &record.tracks {
            if !seen.insert(track.id.to_lowercase()) {
                return Err(SettingsError::DuplicateTrackId(track.id.clone()));
            }
        }

        for cat in &self.album.categories {
            if let super::PhotoSetting::Keyword(k) = &cat.photos {
                if !cat.photos.is_all() {
                    return Err(SettingsError::UnknownPhotoKeyword {
                        category: cat.name.clone(),
                        keyword: k.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Resolve the config path from `SOUVENIR_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("SOUVENIR_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/souvenir/config.toml`
/// or `~/.config/souvenir/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("souvenir").join("config.toml"))
}
