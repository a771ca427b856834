//! `rodio`-backed media facility.
//!
//! [`RodioFacility`] owns the output stream; every loaded track becomes a
//! [`RodioResource`] wrapping its own `Sink`. Signals are produced when the
//! resource is polled, so the player sees them on its own thread.

mod output;
mod sink;

pub use output::RodioFacility;
pub use sink::RodioResource;
