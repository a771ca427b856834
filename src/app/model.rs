//! Overlay view state.
//!
//! The [`App`] is what the terminal overlay renders. It never asks the player
//! for anything: it is updated only through [`App::apply`] with the events the
//! player broadcasts, plus cursor movement from the keyboard.

use std::sync::Arc;

use crate::player::{Event, SongInfo};
use crate::playlist::Playlist;

/// The playback state as last announced by the player.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// The overlay model.
pub struct App {
    pub playlist: Arc<Playlist>,
    /// Cursor position in the playlist view.
    pub selected: usize,
    pub playback: PlaybackState,
    /// Now-playing info assembled from `Change`, `Load` and `Update` events.
    pub now_playing: Option<SongInfo>,
    pub volume: f32,
    pub follow_playback: bool,
}

impl App {
    pub fn new(playlist: Arc<Playlist>) -> Self {
        Self {
            playlist,
            selected: 0,
            playback: PlaybackState::Stopped,
            now_playing: None,
            volume: 1.0,
            follow_playback: true,
        }
    }

    /// Fold one player event into the view state.
    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::Change(info) => {
                if self.follow_playback {
                    self.set_selected(info.track);
                }
                self.now_playing = Some(info.clone());
            }
            Event::Load(info) => {
                if self.current_track() == Some(info.track) {
                    if let Some(current) = self.now_playing.as_mut() {
                        current.duration = info.duration;
                        current.art = info.art.clone();
                    }
                } else {
                    self.now_playing = Some(info.clone());
                }
            }
            Event::Update(progress) => {
                if let Some(current) = self.now_playing.as_mut() {
                    current.position = progress.position;
                    current.duration = progress.duration;
                }
            }
            Event::Play => self.playback = PlaybackState::Playing,
            Event::Pause => self.playback = PlaybackState::Paused,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playback == PlaybackState::Playing
    }

    /// Index of the track currently announced by the player.
    pub fn current_track(&self) -> Option<usize> {
        self.now_playing.as_ref().map(|info| info.track)
    }

    /// Fraction of the current track played, in `0.0..=1.0`.
    pub fn progress_ratio(&self) -> f64 {
        match self.now_playing.as_ref() {
            Some(info) if info.duration > 0.0 => (info.position / info.duration).clamp(0.0, 1.0),
            _ => 0.0,
        }
    }

    pub fn has_tracks(&self) -> bool {
        !self.playlist.is_empty()
    }

    /// Set the selected index, clamped to the playlist.
    pub fn set_selected(&mut self, idx: usize) {
        if self.playlist.is_empty() {
            self.selected = 0;
        } else {
            self.selected = idx.min(self.playlist.len() - 1);
        }
    }

    /// Move selection down by one, wrapping to the top.
    pub fn next(&mut self) {
        if self.has_tracks() {
            self.selected = (self.selected + 1) % self.playlist.len();
        }
    }

    /// Move selection up by one, wrapping to the bottom.
    pub fn previous(&mut self) {
        if self.has_tracks() {
            let len = self.playlist.len();
            self.selected = (self.selected + len - 1) % len;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.set_selected(self.playlist.len().saturating_sub(1));
    }
}
