use std::path::Path;

use serde::Deserialize;

use super::model::{Playlist, Track};
use crate::error::PlaylistError;

/// On-disk playlist description.
///
/// Used both for standalone playlist files and for the `[playlist]` section
/// of the settings file:
///
/// ```toml
/// prefix = "music/"
/// default_art = "img/classical.jpg"
///
/// [[tracks]]
/// file = "chopin-op-25.mp3"
/// title = "Etude, Op. 25 no. 2"
/// duration = "2:03"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaylistFile {
    pub prefix: String,
    pub default_art: Option<String>,
    pub tracks: Vec<Track>,
}

impl From<PlaylistFile> for Playlist {
    fn from(file: PlaylistFile) -> Self {
        let mut playlist = Playlist::new().prefix(file.prefix);
        if let Some(art) = file.default_art {
            playlist = playlist.default_art(art);
        }
        file.tracks
            .into_iter()
            .fold(playlist, |playlist, track| playlist.add(track))
    }
}

impl Playlist {
    /// Read a playlist from a TOML file.
    pub fn load(path: &Path) -> Result<Self, PlaylistError> {
        let text = std::fs::read_to_string(path).map_err(|source| PlaylistError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: PlaylistFile = toml::from_str(&text).map_err(|source| PlaylistError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), tracks = file.tracks.len(), "loaded playlist");
        Ok(file.into())
    }
}
