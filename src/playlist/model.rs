use serde::Deserialize;

use crate::error::PlaylistError;

/// Static metadata for one playable item, as configured.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Track {
    /// Resource identifier relative to the playlist prefix.
    pub file: String,
    pub title: String,
    /// Informational duration label (e.g. `"3:36"`). The loaded media is
    /// authoritative for the real duration.
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub art: Option<String>,
}

impl Track {
    pub fn new(file: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            title: title.into(),
            duration: None,
            art: None,
        }
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn with_art(mut self, art: impl Into<String>) -> Self {
        self.art = Some(art.into());
        self
    }
}

/// A track with the playlist prefix and default art applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTrack {
    pub file: String,
    pub title: String,
    pub duration: Option<String>,
    pub art: Option<String>,
}

/// Ordered collection of tracks, built once and read-only afterwards.
///
/// ```
/// use cadenza::playlist::{Playlist, Track};
///
/// let playlist = Playlist::new()
///     .add(Track::new("etude.mp3", "Etude"))
///     .prefix("music/")
///     .default_art("img/classical.jpg");
///
/// let track = playlist.get(0).unwrap();
/// assert_eq!(track.file, "music/etude.mp3");
/// assert_eq!(track.art.as_deref(), Some("img/classical.jpg"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    tracks: Vec<Track>,
    prefix: String,
    default_art: Option<String>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix prepended to every track's `file` on read.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the artwork used by tracks that do not carry their own.
    pub fn default_art(mut self, art: impl Into<String>) -> Self {
        self.default_art = Some(art.into());
        self
    }

    /// Append a track.
    pub fn add(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    /// Resolve the track at `index`.
    pub fn get(&self, index: usize) -> Result<ResolvedTrack, PlaylistError> {
        let track = self
            .tracks
            .get(index)
            .ok_or(PlaylistError::IndexOutOfRange {
                index,
                len: self.tracks.len(),
            })?;
        Ok(self.resolve(track))
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Iterate over all tracks, resolved, in playlist order.
    pub fn iter(&self) -> impl Iterator<Item = ResolvedTrack> + '_ {
        self.tracks.iter().map(|t| self.resolve(t))
    }

    fn resolve(&self, track: &Track) -> ResolvedTrack {
        ResolvedTrack {
            file: format!("{}{}", self.prefix, track.file),
            title: track.title.clone(),
            duration: track.duration.clone(),
            art: track.art.clone().or_else(|| self.default_art.clone()),
        }
    }
}
