use std::time::Duration;

use lofty::file::AudioFile;
use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::library::Track;

use super::adapter::PlaybackAdapter;
use super::sink::create_paused_sink;

/// `PlaybackAdapter` that plays through the default `rodio` output device.
pub struct RodioPlayback {
    stream: OutputStream,
    sink: Option<Sink>,
    volume: f32,
}

impl RodioPlayback {
    /// Open the default output device.
    pub fn new() -> Result<Self> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| Error::playback(format!("no audio output device: {e}")))?;
        // rodio logs to stderr when the stream is dropped; keep the shell clean.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            volume: 1.0,
        })
    }
}

impl PlaybackAdapter for RodioPlayback {
    fn load(&mut self, track: &Track) -> Result<()> {
        let sink = create_paused_sink(&self.stream, track)?;
        sink.set_volume(self.volume);

        if let Some(old) = self.sink.replace(sink) {
            old.stop();
        }
        debug!(target: "audio", track = %track, "loaded");
        Ok(())
    }

    fn play(&mut self) {
        if let Some(sink) = &self.sink {
            sink.play();
        }
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    fn unpause(&mut self) {
        self.play();
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    fn set_volume(&mut self, level: f32) {
        self.volume = level;
        if let Some(sink) = &self.sink {
            sink.set_volume(level);
        }
    }

    fn seek(&mut self, offset: Duration) -> Result<()> {
        let Some(sink) = &self.sink else {
            return Err(Error::playback("nothing loaded to seek"));
        };
        sink.try_seek(offset)
            .map_err(|e| Error::playback(format!("seek failed: {e}")))
    }

    fn is_playing(&self) -> bool {
        self.sink
            .as_ref()
            .map(|s| !s.is_paused() && !s.empty())
            .unwrap_or(false)
    }

    fn elapsed(&self) -> Duration {
        self.sink
            .as_ref()
            .map(Sink::get_pos)
            .unwrap_or(Duration::ZERO)
    }

    fn length(&self, track: &Track) -> Option<Duration> {
        match lofty::read_from_path(track.path()) {
            Ok(tagged) => Some(tagged.properties().duration()),
            Err(e) => {
                warn!(target: "audio", track = %track, "cannot determine length: {e}");
                None
            }
        }
    }
}
