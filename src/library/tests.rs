use super::display::TagInfo;
use super::scan::AudioExtensions;
use super::*;
use crate::config::{
    ListenSettings, ListenTrackSettings, RecordSettings, RecordTrackSettings, TrackDisplayField,
    LibrarySettings, TrackMetaSettings,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn record_track(id: &str) -> RecordTrackSettings {
    RecordTrackSettings {
        id: id.into(),
        title: format!("Track {id}"),
        audio: PathBuf::from(format!("music/{id}.mp3")),
        cg_folder: PathBuf::from(format!("cg/{id}")),
    }
}

fn by_filename() -> LibrarySettings {
    LibrarySettings {
        display_fields: vec![TrackDisplayField::Filename],
        ..LibrarySettings::default()
    }
}

fn titles(tracks: &[ListenTrack]) -> Vec<&str> {
    tracks.iter().map(|t| t.title.as_str()).collect()
}

#[test]
fn labels_join_configured_fields_and_fall_back_to_the_stem() {
    let p = Path::new("/tmp/Song.mp3");
    let fields = [TrackDisplayField::Artist, TrackDisplayField::Title];
    let tags = TagInfo {
        title: Some("Song".into()),
        artist: Some("Artist".into()),
        ..TagInfo::default()
    };
    assert_eq!(tags.label(p, &fields, " - "), "Artist - Song");

    let untagged = TagInfo::default();
    assert_eq!(untagged.label(p, &fields, " - "), "Song");
    assert_eq!(untagged.label(p, &[TrackDisplayField::Album], " - "), "Song");
    assert_eq!(
        untagged.label(p, &[TrackDisplayField::Path], " - "),
        "/tmp/Song.mp3"
    );
}

#[test]
fn audio_extensions_match_case_insensitively() {
    let audio = AudioExtensions::new(&LibrarySettings {
        extensions: vec![".MP3".into(), "flac".into(), " ".into()],
        ..LibrarySettings::default()
    });
    assert!(audio.matches(Path::new("a.mp3")));
    assert!(audio.matches(Path::new("a.Mp3")));
    assert!(audio.matches(Path::new("a.flac")));
    assert!(!audio.matches(Path::new("a.ogg")));
    assert!(!audio.matches(Path::new("a")));
}

#[test]
fn scan_keeps_audio_files_sorted_by_title() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.MP3"), b"not a real mp3").unwrap();
    fs::write(dir.path().join("A.ogg"), b"not a real ogg").unwrap();
    fs::write(dir.path().join("c.txt"), b"ignore me").unwrap();

    let tracks = scan(dir.path(), &by_filename());
    assert_eq!(titles(&tracks), vec!["A", "b"]);
    assert_eq!(tracks[1].src, dir.path().join("b.MP3"));
    assert_eq!(tracks[1].duration, None);
}

#[test]
fn scan_skips_hidden_files_unless_asked() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".hidden.mp3"), b"not real").unwrap();
    fs::write(dir.path().join("visible.mp3"), b"not real").unwrap();

    assert_eq!(titles(&scan(dir.path(), &by_filename())), vec!["visible"]);

    let settings = LibrarySettings {
        include_hidden: true,
        ..by_filename()
    };
    assert_eq!(scan(dir.path(), &settings).len(), 2);
}

#[test]
fn scan_depth_follows_recursive_and_max_depth() {
    let dir = tempdir().unwrap();
    let d1 = dir.path().join("d1");
    let d2 = d1.join("d2");
    fs::create_dir_all(&d2).unwrap();
    fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
    fs::write(d1.join("one.mp3"), b"not real").unwrap();
    fs::write(d2.join("two.mp3"), b"not real").unwrap();

    let flat = LibrarySettings {
        recursive: false,
        ..by_filename()
    };
    assert_eq!(titles(&scan(dir.path(), &flat)), vec!["root"]);

    let capped = LibrarySettings {
        max_depth: Some(2),
        ..by_filename()
    };
    assert_eq!(titles(&scan(dir.path(), &capped)), vec!["one", "root"]);

    assert_eq!(scan(dir.path(), &by_filename()).len(), 3);
}

#[test]
fn record_metadata_is_keyed_by_id_not_position() {
    let mut settings = RecordSettings::default();
    settings.tracks = vec![record_track("spring"), record_track("moonlight")];
    settings.track_meta.insert(
        "moonlight".into(),
        TrackMetaSettings {
            composer: Some("贝多芬".into()),
            cg_count: Some(3),
        },
    );
    settings.track_meta.insert(
        "spring".into(),
        TrackMetaSettings {
            composer: Some("维瓦尔第".into()),
            cg_count: Some(2),
        },
    );

    let tracks = record_tracks(&settings);
    assert_eq!(tracks[0].id, "spring");
    assert_eq!(tracks[0].composer_label(), "维瓦尔第");
    assert_eq!(tracks[0].cg_count, 2);
    assert_eq!(tracks[1].composer_label(), "贝多芬");
    assert_eq!(tracks[1].cg_count, 3);

    // Reordering the declarations does not misalign the metadata.
    settings.tracks.reverse();
    let tracks = record_tracks(&settings);
    assert_eq!(tracks[0].id, "moonlight");
    assert_eq!(tracks[0].composer_label(), "贝多芬");
}

#[test]
fn missing_metadata_falls_back_to_placeholder_and_one_frame() {
    let mut settings = RecordSettings::default();
    settings.tracks = vec![record_track("Nocturne")];
    settings.track_meta.insert(
        "other".into(),
        TrackMetaSettings {
            composer: Some("x".into()),
            cg_count: Some(0),
        },
    );

    let tracks = record_tracks(&settings);
    assert_eq!(tracks[0].composer, None);
    assert_eq!(tracks[0].composer_label(), "--");
    assert_eq!(tracks[0].cg_count, 1);
}

#[test]
fn metadata_ids_match_case_insensitively_and_zero_frames_clamp_to_one() {
    let mut settings = RecordSettings::default();
    settings.tracks = vec![record_track("Nocturne")];
    settings.track_meta.insert(
        "nocturne".into(),
        TrackMetaSettings {
            composer: Some("肖邦".into()),
            cg_count: Some(0),
        },
    );
    let tracks = record_tracks(&settings);
    assert_eq!(tracks[0].composer_label(), "肖邦");
    assert_eq!(tracks[0].cg_count, 1);
}

#[test]
fn listen_tracks_keep_declared_first_and_skip_scanned_duplicates() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.mp3"), b"not real").unwrap();
    fs::write(dir.path().join("b.mp3"), b"not real").unwrap();

    let mut settings = ListenSettings::default();
    settings.tracks = vec![ListenTrackSettings {
        src: dir.path().join("b.mp3"),
        title: "Declared B".into(),
    }];
    settings.music_dir = Some(dir.path().to_path_buf());
    settings.library.display_fields = vec![TrackDisplayField::Filename];

    let tracks = listen_tracks(&settings);
    assert_eq!(titles(&tracks), vec!["Declared B", "a"]);
}
