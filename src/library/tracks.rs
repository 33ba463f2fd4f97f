use std::collections::HashSet;

use crate::config::{ListenSettings, RecordSettings};

use super::model::{ListenTrack, RecordTrack};
use super::scan::scan;

/// Configured listen tracks followed by whatever `music_dir` scanning finds.
///
/// A scanned file that is already declared in the config is not listed twice.
pub fn listen_tracks(settings: &ListenSettings) -> Vec<ListenTrack> {
    let mut tracks: Vec<ListenTrack> = settings
        .tracks
        .iter()
        .map(|t| ListenTrack {
            src: t.src.clone(),
            title: t.title.clone(),
            duration: None,
        })
        .collect();

    if let Some(dir) = &settings.music_dir {
        let declared: HashSet<_> = tracks.iter().map(|t| t.src.clone()).collect();
        tracks.extend(
            scan(dir, &settings.library)
                .into_iter()
                .filter(|t| !declared.contains(&t.src)),
        );
    }
    tracks
}

/// Resolve record tracks against the id-keyed metadata table.
///
/// Ids are matched case-insensitively since config keys may be normalised to
/// lowercase. Missing metadata means composer `--` and a single frame.
pub fn record_tracks(settings: &RecordSettings) -> Vec<RecordTrack> {
    let tracks: Vec<RecordTrack> = settings
        .tracks
        .iter()
        .map(|t| {
            let meta = settings
                .track_meta
                .iter()
                .find(|(id, _)| id.eq_ignore_ascii_case(&t.id))
                .map(|(_, m)| m);
            if meta.is_none() {
                tracing::debug!("record track {:?} has no metadata entry", t.id);
            }
            RecordTrack {
                id: t.id.clone(),
                title: t.title.clone(),
                audio: t.audio.clone(),
                cg_folder: t.cg_folder.clone(),
                composer: meta
                    .and_then(|m| m.composer.clone())
                    .filter(|c| !c.trim().is_empty()),
                cg_count: meta.and_then(|m| m.cg_count).unwrap_or(1).max(1),
            }
        })
        .collect();

    for id in settings.track_meta.keys() {
        if !tracks.iter().any(|t| t.id.eq_ignore_ascii_case(id)) {
            tracing::warn!("metadata for unknown record track id {id:?} is ignored");
        }
    }
    tracks
}
