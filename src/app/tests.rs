use super::*;
use crate::player::{Event, Progress, SongInfo};
use crate::playlist::{Playlist, Track};
use std::sync::Arc;

fn app(titles: &[&str]) -> App {
    let playlist = titles
        .iter()
        .fold(Playlist::new(), |p, t| p.add(Track::new(format!("{t}.mp3"), *t)));
    App::new(Arc::new(playlist))
}

fn info(track: usize, title: &str) -> SongInfo {
    SongInfo {
        title: title.into(),
        track,
        duration: 0.0,
        position: 0.0,
        art: None,
    }
}

#[test]
fn change_sets_now_playing_and_follows_cursor() {
    let mut app = app(&["A", "B", "C"]);
    app.apply(&Event::Change(info(2, "C")));

    assert_eq!(app.current_track(), Some(2));
    assert_eq!(app.selected, 2);
    assert_eq!(app.now_playing.as_ref().unwrap().title, "C");
}

#[test]
fn change_leaves_cursor_alone_without_follow() {
    let mut app = app(&["A", "B", "C"]);
    app.follow_playback = false;
    app.selected = 1;
    app.apply(&Event::Change(info(2, "C")));

    assert_eq!(app.selected, 1);
    assert_eq!(app.current_track(), Some(2));
}

#[test]
fn load_and_update_fill_in_duration_and_position() {
    let mut app = app(&["A"]);
    app.apply(&Event::Change(info(0, "A")));

    let mut loaded = info(0, "A");
    loaded.duration = 120.0;
    app.apply(&Event::Load(loaded));
    assert_eq!(app.now_playing.as_ref().unwrap().duration, 120.0);

    app.apply(&Event::Update(Progress {
        position: 30.0,
        duration: 120.0,
    }));
    assert_eq!(app.now_playing.as_ref().unwrap().position, 30.0);
    assert_eq!(app.progress_ratio(), 0.25);
}

#[test]
fn update_before_any_change_is_ignored() {
    let mut app = app(&["A"]);
    app.apply(&Event::Update(Progress {
        position: 3.0,
        duration: 10.0,
    }));
    assert!(app.now_playing.is_none());
    assert_eq!(app.progress_ratio(), 0.0);
}

#[test]
fn play_and_pause_toggle_playback_state() {
    let mut app = app(&["A"]);
    assert_eq!(app.playback, PlaybackState::Stopped);

    app.apply(&Event::Play);
    assert!(app.is_playing());

    app.apply(&Event::Pause);
    assert_eq!(app.playback, PlaybackState::Paused);
}

#[test]
fn cursor_movement_wraps() {
    let mut app = app(&["A", "B", "C"]);
    app.previous();
    assert_eq!(app.selected, 2);
    app.next();
    assert_eq!(app.selected, 0);
    app.select_last();
    assert_eq!(app.selected, 2);
    app.select_first();
    assert_eq!(app.selected, 0);
}

#[test]
fn set_selected_clamps_to_playlist() {
    let mut app = app(&["A", "B"]);
    app.set_selected(10);
    assert_eq!(app.selected, 1);
}
