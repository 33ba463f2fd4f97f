use std::collections::HashSet;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::config::LibrarySettings;

use super::display::TagInfo;
use super::model::ListenTrack;

/// Lowercased extensions (without the dot) that count as audio.
pub(super) struct AudioExtensions(HashSet<String>);

impl AudioExtensions {
    pub(super) fn new(settings: &LibrarySettings) -> Self {
        Self(
            settings
                .extensions
                .iter()
                .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
        )
    }

    pub(super) fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| self.0.contains(&ext.to_ascii_lowercase()))
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn walker(dir: &Path, settings: &LibrarySettings) -> WalkDir {
    let walker = WalkDir::new(dir).follow_links(settings.follow_links);
    // Depth 0 is `dir` itself, so non-recursive means depth 1.
    match (settings.recursive, settings.max_depth) {
        (false, _) => walker.max_depth(1),
        (true, Some(d)) => walker.max_depth(d),
        (true, None) => walker,
    }
}

/// Walk `dir` for audio files and build listen tracks from their tags,
/// sorted by title (case-insensitive).
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<ListenTrack> {
    let audio = AudioExtensions::new(settings);

    let mut tracks: Vec<ListenTrack> = walker(dir, settings)
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e))
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file() && audio.matches(e.path()))
        .map(|e| {
            let path = e.path();
            let tags = TagInfo::read(path);
            ListenTrack {
                src: path.to_path_buf(),
                title: tags.label(path, &settings.display_fields, &settings.display_separator),
                duration: tags.duration,
            }
        })
        .collect();

    tracks.sort_by_key(|t| t.title.to_lowercase());
    tracing::info!("scanned {} tracks under {}", tracks.len(), dir.display());
    tracks
}
