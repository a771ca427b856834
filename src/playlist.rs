//! Playlist model and loaders.
//!
//! A [`Playlist`] is an ordered list of [`Track`] descriptors sharing a path
//! prefix and a fallback artwork. Descriptors are resolved only when read, so
//! the order in which the prefix, default art and tracks are configured does
//! not matter.

mod load;
mod model;

pub use load::PlaylistFile;
pub use model::*;

#[cfg(test)]
mod tests;
