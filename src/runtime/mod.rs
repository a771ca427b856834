//! Binary runtime: wires settings, logging, the playlist, the rodio backend,
//! the player and the terminal overlay together, then runs the event loop.

use std::env;
use std::sync::mpsc;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::RodioFacility;
use crate::player::Event;

mod event_loop;
mod logging;
mod settings;
mod startup;


pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, warning) = settings::load_settings();
    logging::init_logging(&settings.logging)?;
    if let Some(msg) = warning {
        tracing::warn!("{msg}");
        eprintln!("cadenza: {msg}");
    }

    let playlist_arg = env::args().nth(1);
    let playlist = startup::load_playlist(playlist_arg.as_deref(), &settings)?;

    let facility = RodioFacility::open_default()?;
    let mut player = startup::build_player(playlist.clone(), facility, &settings.player)?;

    let (event_tx, event_rx) = mpsc::channel::<Event>();
    startup::forward_events(&mut player, event_tx);

    let mut app = App::new(playlist);
    app.follow_playback = settings.ui.follow_playback;
    app.volume = player.volume();

    player.start(settings.player.autoplay);

    let _restore = enter_terminal()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &mut player, &event_rx);
    if let Err(e) = terminal.show_cursor() {
        tracing::warn!(error = %e, "failed to show cursor");
    }

    if let Err(e) = &run_result {
        tracing::error!(error = %e, "event loop failed");
    }
    run_result
}

fn enter_terminal() -> std::io::Result<TerminalGuard<impl FnMut()>> {
    TerminalGuard::enter(
        enable_raw_mode,
        || execute!(std::io::stdout(), EnterAlternateScreen),
        || {
            if let Err(e) = disable_raw_mode() {
                tracing::warn!(error = %e, "failed to leave raw mode");
            }
            if let Err(e) = execute!(std::io::stdout(), LeaveAlternateScreen) {
                tracing::warn!(error = %e, "failed to leave alternate screen");
            }
        },
    )
}

/// Runs `restore` on drop once the terminal has been switched to raw mode,
/// including when a later setup step fails.
struct TerminalGuard<R: FnMut()> {
    restore: R,
}

impl<R: FnMut()> TerminalGuard<R> {
    fn enter(
        raw_mode: impl FnOnce() -> std::io::Result<()>,
        alternate_screen: impl FnOnce() -> std::io::Result<()>,
        restore: R,
    ) -> std::io::Result<Self> {
        raw_mode()?;
        let guard = Self { restore };
        alternate_screen()?;
        Ok(guard)
    }
}

impl<R: FnMut()> Drop for TerminalGuard<R> {
    fn drop(&mut self) {
        (self.restore)();
    }
}
