use std::path::Path;
use std::time::Duration;

use lofty::prelude::*;

use crate::config::TrackDisplayField;

/// What the tags of a scanned file tell us. Every field is optional since
/// plenty of files carry no tags at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagInfo {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub duration: Option<Duration>,
}

fn non_blank(v: Option<&str>) -> Option<String> {
    v.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

impl TagInfo {
    /// Read tags and properties from `path`. Unreadable files give empty info.
    pub fn read(path: &Path) -> Self {
        let tagged = match lofty::read_from_path(path) {
            Ok(t) => t,
            Err(e) => {
                tracing::debug!("no tags for {}: {e}", path.display());
                return Self::default();
            }
        };
        let duration = Some(tagged.properties().duration()).filter(|d| !d.is_zero());
        let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) else {
            return Self {
                duration,
                ..Self::default()
            };
        };
        Self {
            title: non_blank(tag.title().as_deref()),
            artist: non_blank(tag.artist().as_deref()),
            album: non_blank(tag.album().as_deref()),
            duration,
        }
    }

    /// Join the configured `fields` with `sep`. Falls back to the tag title,
    /// then the file stem, when none of the fields has a value.
    pub fn label(&self, path: &Path, fields: &[TrackDisplayField], sep: &str) -> String {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let parts: Vec<String> = fields
            .iter()
            .filter_map(|f| match f {
                TrackDisplayField::Title => self.title.clone().or_else(|| stem.map(str::to_string)),
                TrackDisplayField::Artist => self.artist.clone(),
                TrackDisplayField::Album => self.album.clone(),
                TrackDisplayField::Filename => stem.map(str::to_string),
                TrackDisplayField::Path => Some(path.display().to_string()),
            })
            .collect();

        if !parts.is_empty() {
            return parts.join(sep);
        }
        self.title
            .clone()
            .or_else(|| stem.map(str::to_string))
            .unwrap_or_else(|| "UNKNOWN".to_string())
    }
}
