use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config;
use crate::player::{Event, MediaFacility, Player};
use crate::ui;

/// Main terminal event loop: feeds media signals to the player, folds player
/// events into the overlay, draws, and handles input. Returns `Ok(())` when
/// shutdown is requested.
pub fn run<F: MediaFacility>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    player: &mut Player<F>,
    events: &mpsc::Receiver<Event>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        player.pump();
        while let Ok(event) = events.try_recv() {
            app.apply(&event);
        }

        terminal.draw(|f| ui::draw(f, app, &settings.ui, &settings.controls))?;

        if event::poll(Duration::from_millis(50))? {
            if let TermEvent::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, player) {
                    break;
                }
            }
        }
    }

    player.pause();
    Ok(())
}

/// Apply one key press. Returns `true` when the user asked to quit.
pub(super) fn handle_key_event<F: MediaFacility>(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    player: &mut Player<F>,
) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,

        KeyCode::Char(' ') | KeyCode::Char('p') => {
            if player.is_playing() {
                player.pause();
            } else {
                player.play();
            }
        }
        KeyCode::Char('l') | KeyCode::Char('n') => player.next(),
        KeyCode::Char('h') | KeyCode::Char('b') => player.prev(),
        KeyCode::Char('r') => player.random(),
        KeyCode::Enter => {
            player.set_track_num(app.selected);
            player.play();
        }

        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.previous(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),

        KeyCode::Char('H') => scrub(player, -(settings.controls.scrub_seconds as f64)),
        KeyCode::Char('L') => scrub(player, settings.controls.scrub_seconds as f64),
        KeyCode::Char(c @ '0'..='9') => {
            let tenths = f64::from(c.to_digit(10).unwrap_or(0));
            jump_to_fraction(player, tenths / 10.0);
        }

        KeyCode::Char('+') | KeyCode::Char('=') => {
            let step = settings.controls.volume_step;
            player.set_volume((player.volume() + step).min(1.0));
            app.volume = player.volume();
        }
        KeyCode::Char('-') => {
            let step = settings.controls.volume_step;
            player.set_volume((player.volume() - step).max(0.0));
            app.volume = player.volume();
        }

        _ => {}
    }

    false
}

/// Move the playhead by `delta` seconds without flickering the transport.
fn scrub<F: MediaFacility>(player: &mut Player<F>, delta: f64) {
    let target = (player.song_info().position + delta).max(0.0);
    seek_silently(player, target);
}

/// Jump to `fraction` of the current track, once its duration is known.
fn jump_to_fraction<F: MediaFacility>(player: &mut Player<F>, fraction: f64) {
    let duration = player.song_info().duration;
    if duration > 0.0 {
        seek_silently(player, duration * fraction);
    }
}

/// Seek, then pump so the new position is cached before the next key.
fn seek_silently<F: MediaFacility>(player: &mut Player<F>, seconds: f64) {
    player.silence();
    player.set_position(seconds);
    player.unsilence();
    player.pump();
}
