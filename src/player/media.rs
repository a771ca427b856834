//! The seam between the player and whatever actually produces sound.
//!
//! A [`MediaFacility`] binds a resolved track location to a fresh
//! [`MediaResource`]. The player owns at most one resource at a time and drops
//! the previous one before asking the facility for the next, so a resource
//! implementation should stop its output when dropped.

use crate::error::MediaError;

/// Something the media resource reports back to the player.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MediaSignal {
    /// The resource can accept a play request.
    Ready,
    /// The resource learned its total duration (seconds).
    DurationKnown(f64),
    /// Playback advanced to the given offset (seconds).
    PositionChanged(f64),
    /// Playback reached the end of the media.
    Ended,
}

pub trait MediaFacility {
    type Resource: MediaResource;

    /// Create a resource for `url`. The resource starts paused.
    fn load(&mut self, url: &str) -> Result<Self::Resource, MediaError>;
}

pub trait MediaResource {
    fn play(&mut self);
    fn pause(&mut self);
    /// Seek to `seconds`. Out-of-range values are the resource's to clamp.
    fn seek(&mut self, seconds: f64);
    /// `volume` is within `0.0..=1.0`.
    fn set_volume(&mut self, volume: f32);
    fn is_ready(&self) -> bool;
    /// Total duration in seconds, once known.
    fn duration(&self) -> Option<f64>;
    /// Drain the signals raised since the last call, oldest first.
    fn poll_signals(&mut self) -> Vec<MediaSignal>;
}
