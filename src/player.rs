//! Playback state machine.
//!
//! [`Player`] owns the current track index, the single live media resource and
//! the transport flag, and broadcasts every transition as an [`Event`]. The
//! media backend sits behind [`MediaFacility`]/[`MediaResource`]; the
//! presentation layer only calls player operations and listens for events.

mod events;
mod machine;
mod media;

pub use events::{Event, EventKind, Listener, Progress, SongInfo};
pub use machine::{DEFAULT_UPDATE_INTERVAL, Player, PlayerState};
pub use media::{MediaFacility, MediaResource, MediaSignal};
