use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/souvenir/config.toml` or `~/.config/souvenir/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SOUVENIR__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub album: AlbumSettings,
    pub listen: ListenSettings,
    pub record: RecordSettings,
    pub audio: AudioSettings,
    pub controls: ControlsSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AlbumSettings {
    /// Folder the photo filenames are relative to.
    pub photo_folder: PathBuf,
    /// Folder holding `<photo stem>.txt` description sidecars.
    pub description_folder: PathBuf,
    /// Shown when a photo has no (or an empty) description.
    pub description_placeholder: String,
    /// Shown while a description is still being read.
    pub loading_text: String,
    /// Sidebar categories, in display order. The first one starts active.
    pub categories: Vec<CategorySettings>,
}

impl Default for AlbumSettings {
    fn default() -> Self {
        let cat = |name: &str, photos: &[&str]| CategorySettings {
            name: name.to_string(),
            photos: PhotoSetting::List(photos.iter().map(|p| p.to_string()).collect()),
        };
        Self {
            photo_folder: PathBuf::from("photos"),
            description_folder: PathBuf::from("descriptions"),
            description_placeholder: "暂无描述".to_string(),
            loading_text: "加载中...".to_string(),
            categories: vec![
                CategorySettings {
                    name: "全部照片".to_string(),
                    photos: PhotoSetting::Keyword("all".to_string()),
                },
                cat("德国", &["1.jpg", "2.jpg", "3.jpg"]),
                cat("俄罗斯", &["4.jpg", "5.jpg", "6.jpg"]),
                cat("法国", &["7.jpg", "8.jpg"]),
                cat("波兰", &["9.jpg", "10.jpg"]),
                cat("奥地利", &["1.jpg", "10.jpg"]),
            ],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategorySettings {
    pub name: String,
    /// Either the keyword `"all"` or an explicit list of photo filenames.
    pub photos: PhotoSetting,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PhotoSetting {
    Keyword(String),
    List(Vec<String>),
}

impl PhotoSetting {
    pub const ALL_KEYWORD: &'static str = "all";

    pub fn is_all(&self) -> bool {
        matches!(self, Self::Keyword(k) if k.trim().eq_ignore_ascii_case(Self::ALL_KEYWORD))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenSettings {
    /// Explicitly declared tracks, shown first.
    pub tracks: Vec<ListenTrackSettings>,
    /// Optional directory scanned for more tracks.
    pub music_dir: Option<PathBuf>,
    /// Scanner options for `music_dir`.
    pub library: LibrarySettings,
    /// Alert text when play/pause is pressed with nothing loaded.
    pub no_track_alert: String,
}

impl Default for ListenSettings {
    fn default() -> Self {
        Self {
            tracks: Vec::new(),
            music_dir: None,
            library: LibrarySettings::default(),
            no_track_alert: "请先选择一首音乐！".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenTrackSettings {
    pub src: PathBuf,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RecordSettings {
    pub tracks: Vec<RecordTrackSettings>,
    /// Composer and slideshow frame count per track id.
    pub track_meta: BTreeMap<String, TrackMetaSettings>,
    /// Track rows per page.
    pub page_size: usize,
    /// Time between slideshow frames (milliseconds).
    pub slideshow_interval_ms: u64,
    /// Fade-out time before the background source is swapped (milliseconds).
    pub crossfade_delay_ms: u64,
    /// Mouse idle time before the controls hide (milliseconds).
    pub idle_hide_ms: u64,
    /// Extension of the numbered slideshow frames (`1.jpg`, `2.jpg`, ...).
    pub frame_extension: String,
    /// Starting volume, 0-100.
    pub initial_volume: u8,
    /// Volume change per key press.
    pub volume_step: u8,
}

impl Default for RecordSettings {
    fn default() -> Self {
        Self {
            tracks: Vec::new(),
            track_meta: BTreeMap::new(),
            page_size: 24,
            slideshow_interval_ms: 5000,
            crossfade_delay_ms: 500,
            idle_hide_ms: 3000,
            frame_extension: "jpg".to_string(),
            initial_volume: 80,
            volume_step: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordTrackSettings {
    /// Stable key into `track_meta`.
    pub id: String,
    pub title: String,
    pub audio: PathBuf,
    /// Folder holding the numbered slideshow frames.
    pub cg_folder: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackMetaSettings {
    pub composer: Option<String>,
    pub cg_count: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            quit_fade_out_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to scrub when pressing `H` / `L`.
    pub scrub_seconds: u64,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self { scrub_seconds: 5 }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,

    /// Which time fields to show next to the progress bars, and in what order.
    ///
    /// Example: ["elapsed", "total", "remaining"]
    pub time_fields: Vec<TimeField>,

    /// Separator used to join `time_fields`.
    pub time_separator: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ souvenir ~ ".to_string(),
            time_fields: vec![TimeField::Elapsed, TimeField::Total],
            time_separator: " / ".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeField {
    Elapsed,
    Total,
    Remaining,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackDisplayField {
    Title,
    Artist,
    Album,
    Filename,
    Path,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,

    /// Which fields build a scanned track's title.
    ///
    /// Example: ["artist", "title"] -> "Artist - Title"
    pub display_fields: Vec<TrackDisplayField>,
    /// Separator used to join `display_fields`.
    pub display_separator: String,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: false,
            recursive: true,
            max_depth: None,
            display_fields: vec![TrackDisplayField::Artist, TrackDisplayField::Title],
            display_separator: " - ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log file, recreated on every start. Set to nothing to turn logging
    /// off.
    pub file: Option<PathBuf>,
    /// `tracing` filter directive, overridden by `SOUVENIR_LOG`.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: Some(PathBuf::from("souvenir.log")),
            filter: "souvenir=info".to_string(),
        }
    }
}
