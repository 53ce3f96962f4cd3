use std::time::Duration;

use crate::error::Result;
use crate::library::Track;

/// Primitive playback operations over a single loaded audio resource.
///
/// Only one track is loaded at a time; `load` replaces whatever was loaded
/// before and leaves the new track paused at its start.
pub trait PlaybackAdapter {
    /// Decode `track` and make it the active resource, paused at zero.
    fn load(&mut self, track: &Track) -> Result<()>;

    /// Start the loaded resource from its current position.
    fn play(&mut self);

    fn pause(&mut self);

    fn unpause(&mut self);

    /// Stop output and release the loaded resource.
    fn stop(&mut self);

    /// `level` is already validated to lie in `0.0..=1.0`.
    fn set_volume(&mut self, level: f32);

    /// Jump to `offset` from the start of the loaded resource.
    fn seek(&mut self, offset: Duration) -> Result<()>;

    fn is_playing(&self) -> bool;

    /// Position within the loaded resource; may lag by one refresh.
    fn elapsed(&self) -> Duration;

    /// Total length of `track`, when it can be determined.
    fn length(&self, track: &Track) -> Option<Duration>;
}

/// Lets the runtime pick an adapter at startup and hand it around boxed.
impl<P: PlaybackAdapter + ?Sized> PlaybackAdapter for Box<P> {
    fn load(&mut self, track: &Track) -> Result<()> {
        (**self).load(track)
    }

    fn play(&mut self) {
        (**self).play()
    }

    fn pause(&mut self) {
        (**self).pause()
    }

    fn unpause(&mut self) {
        (**self).unpause()
    }

    fn stop(&mut self) {
        (**self).stop()
    }

    fn set_volume(&mut self, level: f32) {
        (**self).set_volume(level)
    }

    fn seek(&mut self, offset: Duration) -> Result<()> {
        (**self).seek(offset)
    }

    fn is_playing(&self) -> bool {
        (**self).is_playing()
    }

    fn elapsed(&self) -> Duration {
        (**self).elapsed()
    }

    fn length(&self, track: &Track) -> Option<Duration> {
        (**self).length(track)
    }
}
