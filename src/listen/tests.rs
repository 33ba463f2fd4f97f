use super::*;
use crate::audio::fake::{Call, FakeTransport};
use crate::library::ListenTrack;
use std::path::PathBuf;
use std::time::Duration;

fn track(name: &str) -> ListenTrack {
    ListenTrack {
        src: PathBuf::from(format!("music/{name}.mp3")),
        title: name.to_string(),
        duration: None,
    }
}

fn listen() -> Listen<FakeTransport> {
    let transport = FakeTransport::default().with_duration(Duration::from_secs(200));
    Listen::new(transport, vec![track("a"), track("b")], "请先选择一首音乐！")
}

#[test]
fn toggle_with_nothing_loaded_is_an_error_and_raises_the_alert() {
    let mut l = listen();
    assert_eq!(l.toggle_play(), Err(ListenError::NothingLoaded));
    assert!(l.transport().calls.is_empty());

    l.press_play_pause();
    assert_eq!(l.alert(), Some("请先选择一首音乐！"));
    l.dismiss_alert();
    assert_eq!(l.alert(), None);
}

#[test]
fn selecting_a_track_loads_and_plays_it() {
    let mut l = listen();
    l.select_track(1);
    assert_eq!(l.loaded(), Some(1));
    assert!(l.is_playing());
    assert_eq!(
        l.transport().calls,
        vec![Call::Load(PathBuf::from("music/b.mp3")), Call::Play]
    );
}

#[test]
fn selecting_the_playing_track_pauses_instead_of_restarting() {
    let mut l = listen();
    l.select_track(0);
    l.select_track(0);
    assert!(!l.is_playing());
    assert_eq!(l.transport().last(), Some(&Call::Pause));

    // Paused: clicking it again reloads and plays.
    l.select_track(0);
    assert!(l.is_playing());
    assert_eq!(l.transport().calls.iter().filter(|c| matches!(c, Call::Load(_))).count(), 2);
}

#[test]
fn toggle_alternates_between_pause_and_play() {
    let mut l = listen();
    l.select_track(0);
    assert_eq!(l.toggle_play(), Ok(()));
    assert!(!l.is_playing());
    assert_eq!(l.toggle_play(), Ok(()));
    assert!(l.is_playing());
    assert_eq!(l.transport().last(), Some(&Call::Play));
}

#[test]
fn progress_is_ignored_until_the_length_is_known() {
    let mut l = listen();
    l.select_track(0);
    l.on_progress(Duration::from_secs(10), None);
    assert_eq!(l.fill_ratio(), 0.0);
    l.on_progress(Duration::from_secs(10), Some(Duration::ZERO));
    assert_eq!(l.fill_ratio(), 0.0);

    l.on_progress(Duration::from_secs(50), Some(Duration::from_secs(200)));
    assert!((l.fill_ratio() - 0.25).abs() < 1e-9);
}

#[test]
fn seek_fraction_sets_proportional_position() {
    let mut l = listen();
    l.select_track(0);
    l.sync_from_transport();

    l.seek_fraction(0.5);
    assert_eq!(l.transport().last(), Some(&Call::Seek(Duration::from_secs(100))));
    l.seek_fraction(3.0);
    assert_eq!(l.transport().last(), Some(&Call::Seek(Duration::from_secs(200))));
    l.seek_fraction(-1.0);
    assert_eq!(l.transport().last(), Some(&Call::Seek(Duration::ZERO)));
}

#[test]
fn seek_without_a_length_does_nothing() {
    let transport = FakeTransport::default();
    let mut l = Listen::new(transport, vec![track("a")], "");
    l.select_track(0);
    l.sync_from_transport();
    l.seek_fraction(0.5);
    assert!(!l.transport().calls.iter().any(|c| matches!(c, Call::Seek(_))));
}

#[test]
fn scrubbing_is_clamped_to_the_track() {
    let mut l = listen();
    l.select_track(0);
    l.sync_from_transport();
    l.seek_by(-5);
    assert_eq!(l.position(), Duration::ZERO);
    l.seek_by(500);
    assert_eq!(l.position(), Duration::from_secs(200));
}

#[test]
fn natural_end_is_picked_up_by_sync() {
    let mut l = listen();
    l.select_track(0);
    l.transport_mut().finish();
    l.sync_from_transport();
    assert!(!l.is_playing());
    assert_eq!(l.loaded(), Some(0));
}

#[test]
fn unload_stops_and_forgets_the_track() {
    let mut l = listen();
    l.select_track(1);
    l.unload();
    assert_eq!(l.loaded(), None);
    assert!(!l.is_playing());
    assert_eq!(l.transport().last(), Some(&Call::Stop));
    assert_eq!(l.toggle_play(), Err(ListenError::NothingLoaded));
}

#[test]
fn cursor_moves_within_the_list() {
    let mut l = listen();
    l.move_cursor(-1);
    assert_eq!(l.cursor(), 0);
    l.move_cursor(10);
    assert_eq!(l.cursor(), 1);
    l.activate_cursor();
    assert_eq!(l.loaded(), Some(1));
}
