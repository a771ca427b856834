use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::time::Duration;

use crate::config::{PlayerSettings, Settings};
use crate::error::{PlayerError, PlaylistError};
use crate::player::{Event, EventKind, MediaFacility, Player};
use crate::playlist::Playlist;

/// Pick the playlist: a file given on the command line wins over the
/// `[playlist]` settings section.
pub fn load_playlist(arg: Option<&str>, settings: &Settings) -> Result<Arc<Playlist>, PlaylistError> {
    let playlist = match arg {
        Some(path) => Playlist::load(Path::new(path))?,
        None => Playlist::from(settings.playlist.clone()),
    };
    tracing::info!(tracks = playlist.len(), "playlist ready");
    Ok(Arc::new(playlist))
}

/// Construct a player configured from `[player]` settings.
pub fn build_player<F: MediaFacility>(
    playlist: Arc<Playlist>,
    facility: F,
    settings: &PlayerSettings,
) -> Result<Player<F>, PlayerError> {
    let player = Player::new(playlist, facility)?
        .with_update_interval(Duration::from_millis(settings.update_interval_ms))
        .with_volume(settings.volume);

    Ok(if settings.random_start {
        player.with_random_track()
    } else {
        player.with_track_num(settings.start_track)
    })
}

/// Forward every player event into `tx` for the overlay to pick up.
pub fn forward_events<F: MediaFacility>(player: &mut Player<F>, tx: Sender<Event>) {
    for kind in EventKind::ALL {
        let tx = tx.clone();
        player.add_listener(kind, move |event| {
            // The receiver only goes away on shutdown.
            let _ = tx.send(event.clone());
        });
    }
}
