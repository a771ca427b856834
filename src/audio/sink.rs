//! One decoded track bound to a `rodio` sink.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use crate::error::MediaError;
use crate::player::{MediaResource, MediaSignal};

/// A paused sink for one track plus the signals it has yet to report.
pub struct RodioResource {
    sink: Sink,
    duration: Option<f64>,
    pending: Vec<MediaSignal>,
    last_position: Option<f64>,
    ended: bool,
}

impl RodioResource {
    /// Decode `path` into a new paused sink on `stream`.
    pub(super) fn open(stream: &OutputStream, path: &Path) -> Result<Self, MediaError> {
        let file = File::open(path).map_err(|source| MediaError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|source| MediaError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let duration = source.total_duration().map(|d| d.as_secs_f64());

        let sink = Sink::connect_new(stream.mixer());
        sink.append(source);
        sink.pause();

        tracing::debug!(path = %path.display(), ?duration, "opened track");
        Ok(Self::with_sink(sink, duration))
    }

    pub(super) fn with_sink(sink: Sink, duration: Option<f64>) -> Self {
        // Local files are fully opened by the decoder, so the resource is
        // ready as soon as it exists.
        let mut pending = vec![MediaSignal::Ready];
        if let Some(d) = duration {
            pending.push(MediaSignal::DurationKnown(d));
        }

        Self {
            sink,
            duration,
            pending,
            last_position: None,
            ended: false,
        }
    }

    /// Report a completed seek even while paused, when the sink itself
    /// produces no position ticks.
    pub(super) fn record_seek(&mut self, seconds: f64) {
        self.last_position = Some(seconds);
        self.pending.push(MediaSignal::PositionChanged(seconds));
    }
}

/// Clamp a seek target into the playable range.
pub(super) fn seek_target(seconds: f64, duration: Option<f64>) -> Option<Duration> {
    if !seconds.is_finite() {
        return None;
    }
    let upper = duration.unwrap_or(f64::MAX).max(0.0);
    Duration::try_from_secs_f64(seconds.clamp(0.0, upper)).ok()
}

impl MediaResource for RodioResource {
    fn play(&mut self) {
        self.sink.play();
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn seek(&mut self, seconds: f64) {
        let Some(target) = seek_target(seconds, self.duration) else {
            tracing::debug!(seconds, "ignoring seek");
            return;
        };
        match self.sink.try_seek(target) {
            Ok(()) => self.record_seek(target.as_secs_f64()),
            Err(e) => tracing::warn!(error = %e, ?target, "seek failed"),
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.sink.set_volume(volume);
    }

    fn is_ready(&self) -> bool {
        true
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn poll_signals(&mut self) -> Vec<MediaSignal> {
        let mut signals = std::mem::take(&mut self.pending);
        if self.ended {
            return signals;
        }

        if self.sink.empty() {
            self.ended = true;
            signals.push(MediaSignal::Ended);
            return signals;
        }

        if !self.sink.is_paused() {
            let position = self.sink.get_pos().as_secs_f64();
            if self.last_position != Some(position) {
                self.last_position = Some(position);
                signals.push(MediaSignal::PositionChanged(position));
            }
        }

        signals
    }
}

impl Drop for RodioResource {
    fn drop(&mut self) {
        self.sink.stop();
    }
}
