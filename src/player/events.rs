//! Player events and the listener registry.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::PlayerError;

/// The kinds of event a [`super::Player`] emits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The current track changed.
    Change,
    /// Playback was requested.
    Play,
    /// Playback was paused.
    Pause,
    /// The playback position moved.
    Update,
    /// The current track's duration became known.
    Load,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::Change,
        EventKind::Play,
        EventKind::Pause,
        EventKind::Update,
        EventKind::Load,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EventKind::Change => "change",
            EventKind::Play => "play",
            EventKind::Pause => "pause",
            EventKind::Update => "update",
            EventKind::Load => "load",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventKind {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PlayerError::InvalidEventKind(s.to_string()))
    }
}

/// Point-in-time summary of the current track.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SongInfo {
    pub title: String,
    pub track: usize,
    /// Seconds; 0 until the media reports its duration.
    pub duration: f64,
    /// Seconds.
    pub position: f64,
    pub art: Option<String>,
}

/// Payload of an `Update` event.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Progress {
    pub position: f64,
    pub duration: f64,
}

/// An event together with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Change(SongInfo),
    Play,
    Pause,
    Update(Progress),
    Load(SongInfo),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Change(_) => EventKind::Change,
            Event::Play => EventKind::Play,
            Event::Pause => EventKind::Pause,
            Event::Update(_) => EventKind::Update,
            Event::Load(_) => EventKind::Load,
        }
    }
}

pub type Listener = Box<dyn FnMut(&Event)>;

/// Ordered callbacks per event kind. Append-only.
#[derive(Default)]
pub(crate) struct Listeners {
    by_kind: HashMap<EventKind, Vec<Listener>>,
}

impl Listeners {
    pub(crate) fn add(&mut self, kind: EventKind, listener: Listener) {
        self.by_kind.entry(kind).or_default().push(listener);
    }

    /// Invoke every listener registered for the event's kind, in registration
    /// order. A panicking listener unwinds through here and the remaining
    /// listeners for this event are not called.
    pub(crate) fn notify(&mut self, event: &Event) {
        let kind = event.kind();
        tracing::trace!(%kind, "notify");
        if let Some(listeners) = self.by_kind.get_mut(&kind) {
            for listener in listeners.iter_mut() {
                listener(event);
            }
        }
    }

    pub(crate) fn count(&self, kind: EventKind) -> usize {
        self.by_kind.get(&kind).map_or(0, Vec::len)
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for kind in EventKind::ALL {
            map.entry(&kind, &self.count(kind));
        }
        map.finish()
    }
}
