use std::sync::Arc;
use std::time::{Duration, Instant};

use super::events::{Event, EventKind, Listeners, Progress, SongInfo};
use super::media::{MediaFacility, MediaResource, MediaSignal};
use crate::error::PlayerError;
use crate::playlist::{Playlist, ResolvedTrack};

/// Default minimum spacing between two `Update` events.
pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_secs(1);

/// Coarse transport state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlayerState {
    /// Constructed, no track bound yet.
    Idle,
    Paused,
    Playing,
}

/// Playback state machine over a shared [`Playlist`].
///
/// The player drives a single media resource obtained from its facility and
/// reports every transition to the listeners registered with
/// [`Player::add_listener`]. It never looks at who is listening.
pub struct Player<F: MediaFacility> {
    playlist: Arc<Playlist>,
    facility: F,
    track_num: usize,
    resource: Option<F::Resource>,
    /// Bumped on every track load so signals from a released resource are
    /// never applied to its successor.
    generation: u64,
    loaded: bool,
    is_playing: bool,
    pending_play: bool,
    position: f64,
    duration: Option<f64>,
    volume: f32,
    update_interval: Duration,
    last_update: Option<Instant>,
    listeners: Listeners,
}

impl<F: MediaFacility> Player<F> {
    /// Create an idle player positioned on the first track.
    pub fn new(playlist: Arc<Playlist>, facility: F) -> Result<Self, PlayerError> {
        if playlist.is_empty() {
            return Err(PlayerError::EmptyPlaylist);
        }

        Ok(Self {
            playlist,
            facility,
            track_num: 0,
            resource: None,
            generation: 0,
            loaded: false,
            is_playing: false,
            pending_play: false,
            position: 0.0,
            duration: None,
            volume: 1.0,
            update_interval: DEFAULT_UPDATE_INTERVAL,
            last_update: None,
            listeners: Listeners::default(),
        })
    }

    /// Choose the track the player starts on. Out-of-range values are ignored.
    pub fn with_track_num(mut self, track_num: usize) -> Self {
        if track_num < self.playlist.len() {
            self.track_num = track_num;
        } else {
            tracing::warn!(track_num, len = self.playlist.len(), "ignoring initial track");
        }
        self
    }

    /// Start on a uniformly random track.
    pub fn with_random_track(self) -> Self {
        let n = rand::random_range(0..self.playlist.len());
        self.with_track_num(n)
    }

    /// Set the minimum wall-clock spacing between `Update` events. Zero
    /// forwards every position tick.
    pub fn with_update_interval(mut self, interval: Duration) -> Self {
        self.update_interval = interval;
        self
    }

    /// Set the initial volume. Values outside `0.0..=1.0` are ignored.
    pub fn with_volume(mut self, volume: f32) -> Self {
        if (0.0..=1.0).contains(&volume) {
            self.volume = volume;
        }
        self
    }

    /// Bind the current track to a media resource.
    ///
    /// If `play` was already requested while idle, playback begins as soon
    /// as the resource is ready.
    pub fn start(&mut self, auto_play: bool) {
        if self.loaded {
            tracing::warn!("player already started");
            return;
        }

        let resume = self.is_playing;
        self.load_track(self.track_num, auto_play && !resume);
        if resume {
            self.request_playback();
        }
    }

    pub fn add_listener(&mut self, kind: EventKind, listener: impl FnMut(&Event) + 'static) {
        self.listeners.add(kind, Box::new(listener));
    }

    /// Register a listener by event name (`"change"`, `"play"`, `"pause"`,
    /// `"update"` or `"load"`, case-insensitive).
    pub fn add_listener_named(
        &mut self,
        kind: &str,
        listener: impl FnMut(&Event) + 'static,
    ) -> Result<(), PlayerError> {
        let kind = kind.parse::<EventKind>().inspect_err(|e| {
            tracing::error!(error = %e, "listener registration rejected");
        })?;
        self.add_listener(kind, listener);
        Ok(())
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.count(kind)
    }

    pub fn play(&mut self) {
        if self.is_playing {
            return;
        }

        self.request_playback();
        self.is_playing = true;
        self.listeners.notify(&Event::Play);
    }

    pub fn pause(&mut self) {
        if !self.is_playing {
            return;
        }

        self.pending_play = false;
        if let Some(resource) = self.resource.as_mut() {
            resource.pause();
        }
        self.is_playing = false;
        self.listeners.notify(&Event::Pause);
    }

    /// Advance one track, wrapping to the first after the last.
    pub fn next(&mut self) {
        let next = (self.track_num + 1) % self.playlist.len();
        self.change_track(next);
    }

    /// Go back one track, wrapping to the last before the first.
    pub fn prev(&mut self) {
        let len = self.playlist.len();
        let prev = (self.track_num + len - 1) % len;
        self.change_track(prev);
    }

    /// Jump to `track_num`, keeping the current transport state. Values
    /// outside the playlist are ignored.
    pub fn set_track_num(&mut self, track_num: usize) {
        if track_num >= self.playlist.len() {
            tracing::debug!(track_num, len = self.playlist.len(), "ignoring track change");
            return;
        }
        self.change_track(track_num);
    }

    /// Jump to a uniformly random track.
    pub fn random(&mut self) {
        let n = rand::random_range(0..self.playlist.len());
        self.set_track_num(n);
    }

    /// Seek the current resource. Clamping is left to the resource.
    ///
    /// The next reported position is always forwarded as an `Update`, even
    /// inside the coalescing interval.
    pub fn set_position(&mut self, seconds: f64) {
        match self.resource.as_mut() {
            Some(resource) => {
                resource.seek(seconds);
                self.last_update = None;
            }
            None => tracing::debug!(seconds, "no resource to seek"),
        }
    }

    /// Set the volume. Values outside `0.0..=1.0` are ignored.
    pub fn set_volume(&mut self, volume: f32) {
        if !(0.0..=1.0).contains(&volume) {
            tracing::debug!(volume, "ignoring volume");
            return;
        }

        self.volume = volume;
        if let Some(resource) = self.resource.as_mut() {
            resource.set_volume(volume);
        }
    }

    /// Pause the resource without touching the transport state or emitting
    /// events. Pairs with [`Player::unsilence`] around a seek gesture.
    pub fn silence(&mut self) {
        if let Some(resource) = self.resource.as_mut() {
            resource.pause();
        }
    }

    /// Resume the resource after [`Player::silence`]. Does nothing while the
    /// transport is paused.
    pub fn unsilence(&mut self) {
        if self.is_playing {
            self.request_playback();
        }
    }

    pub fn song_info(&self) -> SongInfo {
        let track = self.current_track();
        SongInfo {
            title: track.title,
            track: self.track_num,
            duration: self.current_duration(),
            position: self.position,
            art: track.art,
        }
    }

    pub fn playlist(&self) -> &Arc<Playlist> {
        &self.playlist
    }

    pub fn track_num(&self) -> usize {
        self.track_num
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn state(&self) -> PlayerState {
        match (self.loaded, self.is_playing) {
            (false, _) => PlayerState::Idle,
            (true, true) => PlayerState::Playing,
            (true, false) => PlayerState::Paused,
        }
    }

    /// Drain the current resource's signals and react to each.
    pub fn pump(&mut self) {
        let Some(resource) = self.resource.as_mut() else {
            return;
        };

        let generation = self.generation;
        for signal in resource.poll_signals() {
            // An `Ended` may have swapped the resource mid-batch.
            if self.generation != generation {
                break;
            }
            self.handle_signal(signal);
        }
    }

    /// React to one signal from the current resource.
    pub fn handle_signal(&mut self, signal: MediaSignal) {
        match signal {
            MediaSignal::Ready => {
                if self.pending_play {
                    self.request_playback();
                }
            }
            MediaSignal::DurationKnown(duration) => {
                self.duration = Some(duration);
                let info = self.song_info();
                tracing::debug!(track = info.track, duration, "track loaded");
                self.listeners.notify(&Event::Load(info));
            }
            MediaSignal::PositionChanged(position) => {
                self.position = position;
                if self.update_due(Instant::now()) {
                    let progress = Progress {
                        position,
                        duration: self.current_duration(),
                    };
                    self.listeners.notify(&Event::Update(progress));
                }
            }
            MediaSignal::Ended => {
                tracing::debug!(track = self.track_num, "track ended");
                self.next();
            }
        }
    }

    fn change_track(&mut self, track_num: usize) {
        let was_playing = self.is_playing;
        self.pause();
        self.load_track(track_num, was_playing);
    }

    fn load_track(&mut self, track_num: usize, auto_play: bool) {
        self.position = 0.0;
        self.duration = None;
        self.last_update = None;
        self.pending_play = false;
        self.generation = self.generation.wrapping_add(1);

        // Release the old resource before the new one exists.
        drop(self.resource.take());

        self.track_num = track_num;
        self.loaded = true;
        let track = self.current_track();

        match self.facility.load(&track.file) {
            Ok(mut resource) => {
                resource.set_volume(self.volume);
                self.resource = Some(resource);
            }
            Err(e) => {
                tracing::error!(error = %e, file = %track.file, "failed to load track");
            }
        }

        if auto_play {
            self.play();
        }

        tracing::info!(track = track_num, title = %track.title, "track changed");
        self.listeners.notify(&Event::Change(SongInfo {
            title: track.title,
            track: track_num,
            duration: 0.0,
            position: 0.0,
            art: track.art,
        }));
    }

    /// Play now if the resource is ready, otherwise on its `Ready` signal.
    fn request_playback(&mut self) {
        match self.resource.as_mut() {
            Some(resource) if resource.is_ready() => {
                resource.play();
                self.pending_play = false;
            }
            _ => self.pending_play = true,
        }
    }

    fn update_due(&mut self, now: Instant) -> bool {
        match self.last_update {
            Some(last) if now.duration_since(last) < self.update_interval => false,
            _ => {
                self.last_update = Some(now);
                true
            }
        }
    }

    fn current_duration(&self) -> f64 {
        self.duration
            .or_else(|| self.resource.as_ref().and_then(|r| r.duration()))
            .unwrap_or(0.0)
    }

    fn current_track(&self) -> ResolvedTrack {
        // `track_num` is kept within the playlist, so this never falls back.
        self.playlist.get(self.track_num).unwrap_or_default()
    }
}
