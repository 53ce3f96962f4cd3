use std::time::Duration;

use crate::error::{Error, Result};
use crate::library::Track;

use super::adapter::PlaybackAdapter;

const NO_DEVICE: &str = "no audio output device";

/// Stand-in used when no output device could be opened.
///
/// Nothing ever loads, so the controller never leaves `Stopped` and every
/// playback command reports `Error::Playback`. Calendar features are unaffected.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentPlayback;

impl PlaybackAdapter for SilentPlayback {
    fn load(&mut self, _track: &Track) -> Result<()> {
        Err(Error::playback(NO_DEVICE))
    }

    fn play(&mut self) {}

    fn pause(&mut self) {}

    fn unpause(&mut self) {}

    fn stop(&mut self) {}

    fn set_volume(&mut self, _level: f32) {}

    fn seek(&mut self, _offset: Duration) -> Result<()> {
        Err(Error::playback(NO_DEVICE))
    }

    fn is_playing(&self) -> bool {
        false
    }

    fn elapsed(&self) -> Duration {
        Duration::ZERO
    }

    fn length(&self, _track: &Track) -> Option<Duration> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlist::{PlaybackState, PlaylistController};

    #[test]
    fn every_load_reports_missing_device() {
        let mut pl = PlaylistController::new(SilentPlayback);
        pl.add(Track::new("/music/a.mp3"));

        let err = pl.toggle().unwrap_err();
        assert_eq!(err.to_string(), "playback error: no audio output device");
        assert_eq!(pl.state(), PlaybackState::Stopped);
        assert_eq!(pl.current_index(), None);
        assert!(!pl.playback().is_playing());
    }
}
