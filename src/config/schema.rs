use std::path::PathBuf;

use serde::Deserialize;

use crate::playlist::PlaylistFile;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/cadenza/config.toml` or `~/.config/cadenza/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `CADENZA__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerSettings,
    pub ui: UiSettings,
    pub controls: ControlsSettings,
    pub logging: LoggingSettings,
    /// Playlist used when none is given on the command line.
    pub playlist: PlaylistFile,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Start playing as soon as the first track is bound.
    pub autoplay: bool,
    /// Track to start on. Ignored when out of range or when `random_start` is set.
    pub start_track: usize,
    /// Start on a random track.
    pub random_start: bool,
    /// Initial volume in `0.0..=1.0`.
    pub volume: f32,
    /// Minimum spacing between two position updates (milliseconds).
    /// Set to 0 to forward every tick.
    pub update_interval_ms: u64,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            autoplay: true,
            start_track: 0,
            random_start: false,
            volume: 1.0,
            update_interval_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Whether the playlist cursor jumps to the track that starts playing.
    pub follow_playback: bool,
    /// Show the artwork identifier of the current track.
    pub show_art: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ cadenza ~ ".to_string(),
            follow_playback: true,
            show_art: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to scrub when pressing `H` / `L`.
    pub scrub_seconds: u64,
    /// Volume change applied by `+` / `-`.
    pub volume_step: f32,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            scrub_seconds: 5,
            volume_step: 0.1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log file. Nothing is logged when unset, since the terminal belongs to
    /// the overlay.
    pub file: Option<PathBuf>,
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: None,
            filter: "info".to_string(),
        }
    }
}
