//! Error types shared by the playlist, the player and the media backend.

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by [`crate::playlist::Playlist`].
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// `get` was called with an index outside `0..len`.
    #[error("track index {index} is out of range (playlist has {len} tracks)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("failed to read playlist {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse playlist {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Failures raised by [`crate::player::Player`].
#[derive(Debug, Error)]
pub enum PlayerError {
    /// A player needs at least one track to keep its current index valid.
    #[error("cannot create a player for an empty playlist")]
    EmptyPlaylist,

    /// A listener was registered under a name that is not an event kind.
    #[error("invalid event kind: {0:?}")]
    InvalidEventKind(String),
}

/// Failures raised by a media facility while binding a resource.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("failed to open {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path:?}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    /// The audio output device could not be opened.
    #[error("audio output unavailable: {0}")]
    Output(String),
}
