//! An audio player built around an event-driven playback core.
//!
//! The [`player::Player`] state machine moves through a [`playlist::Playlist`],
//! drives one media resource at a time and announces every transition to its
//! listeners. The terminal overlay in [`ui`] and the `rodio` backend in
//! [`audio`] plug in from the outside: the overlay listens, the backend sits
//! behind [`player::MediaFacility`].

pub mod app;
pub mod audio;
pub mod config;
pub mod error;
pub mod player;
pub mod playlist;
pub mod runtime;
pub mod ui;
