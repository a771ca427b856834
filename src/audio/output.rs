use std::path::Path;

use rodio::{OutputStream, OutputStreamBuilder};

use super::sink::RodioResource;
use crate::error::MediaError;
use crate::player::MediaFacility;

/// Media facility playing local files through the default output device.
pub struct RodioFacility {
    stream: OutputStream,
}

impl RodioFacility {
    /// Open the default audio output device.
    pub fn open_default() -> Result<Self, MediaError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| MediaError::Output(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped, which would land
        // on top of the overlay.
        stream.log_on_drop(false);
        Ok(Self { stream })
    }
}

impl MediaFacility for RodioFacility {
    type Resource = RodioResource;

    fn load(&mut self, url: &str) -> Result<RodioResource, MediaError> {
        RodioResource::open(&self.stream, Path::new(url))
    }
}
