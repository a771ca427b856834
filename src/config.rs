//! Settings for the player, the overlay, key controls and logging.
//!
//! Values come from a TOML file with `CADENZA__` environment overrides; an
//! embedded `[playlist]` section is used when no playlist file is given.

mod load;
mod schema;

pub use schema::*;
