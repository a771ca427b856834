//! Application module: exposes the overlay model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the playlist view, the
//! cursor and the now-playing state mirrored from player events.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
