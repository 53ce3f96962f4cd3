use std::time::Duration;

use tracing::{debug, info};

use crate::audio::PlaybackAdapter;
use crate::error::{Error, Result};
use crate::library::Track;

/// The playback state of the playlist as a whole.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Position within the current track, for progress displays.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Progress {
    pub elapsed: Duration,
    pub total: Option<Duration>,
    /// The adapter is producing sound; false once a track runs out.
    pub active: bool,
}

/// Ordered tracks, a cursor and the playback state machine.
///
/// Invariant: `current` is `None` or a valid index into `tracks`.
pub struct PlaylistController<P> {
    tracks: Vec<Track>,
    current: Option<usize>,
    state: PlaybackState,
    volume: f32,
    playback: P,
}

impl<P: PlaybackAdapter> PlaylistController<P> {
    pub fn new(playback: P) -> Self {
        Self {
            tracks: Vec::new(),
            current: None,
            state: PlaybackState::Stopped,
            volume: 1.0,
            playback,
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|i| self.tracks.get(i))
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Borrow the playback collaborator (display queries, tests).
    pub fn playback(&self) -> &P {
        &self.playback
    }

    pub fn playback_mut(&mut self) -> &mut P {
        &mut self.playback
    }

    /// Append a track. Never selects or starts it.
    pub fn add(&mut self, track: Track) {
        debug!(target: "playlist", track = %track, index = self.tracks.len(), "added");
        self.tracks.push(track);
    }

    /// Remove the track at `index`, keeping the cursor on the same logical track.
    pub fn remove(&mut self, index: usize) -> Result<Track> {
        if index >= self.tracks.len() {
            return Err(Error::out_of_range("track index", index));
        }

        let removed = self.tracks.remove(index);
        match self.current {
            Some(cur) if cur == index => {
                self.current = None;
                if self.state != PlaybackState::Stopped {
                    self.playback.stop();
                    self.state = PlaybackState::Stopped;
                }
                info!(target: "playlist", track = %removed, "removed current track, stopped");
            }
            Some(cur) if index < cur => self.current = Some(cur - 1),
            _ => {}
        }
        debug!(target: "playlist", track = %removed, index, "removed");
        Ok(removed)
    }

    /// Play/pause entry point.
    pub fn toggle(&mut self) -> Result<PlaybackState> {
        match self.state {
            PlaybackState::Playing => {
                self.playback.pause();
                self.state = PlaybackState::Paused;
            }
            PlaybackState::Paused => {
                self.playback.unpause();
                self.state = PlaybackState::Playing;
            }
            PlaybackState::Stopped => {
                if self.tracks.is_empty() {
                    return Err(Error::EmptyPlaylist);
                }
                self.start(self.current.unwrap_or(0))?;
            }
        }
        debug!(target: "playlist", state = ?self.state, "toggled");
        Ok(self.state)
    }

    /// Stop playback. The cursor stays put so the next toggle replays it.
    pub fn stop(&mut self) {
        self.playback.stop();
        self.state = PlaybackState::Stopped;
        debug!(target: "playlist", "stopped");
    }

    /// Make `index` current and play it from the start.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.tracks.len() {
            return Err(Error::out_of_range("track index", index));
        }
        self.start(index)
    }

    /// Advance to the next track, wrapping from the last to the first.
    pub fn next(&mut self) -> Result<()> {
        if self.tracks.is_empty() {
            return Err(Error::EmptyPlaylist);
        }
        let target = match self.current {
            Some(cur) if cur + 1 < self.tracks.len() => cur + 1,
            _ => 0,
        };
        self.start(target)
    }

    /// Step back one track. At the first track, restart it instead of wrapping.
    pub fn previous(&mut self) -> Result<()> {
        if self.tracks.is_empty() {
            return Err(Error::EmptyPlaylist);
        }
        match self.current {
            Some(cur) if cur > 0 => self.start(cur - 1),
            Some(_) if self.state != PlaybackState::Stopped => {
                self.playback.seek(Duration::ZERO)?;
                if self.state == PlaybackState::Paused {
                    self.playback.unpause();
                    self.state = PlaybackState::Playing;
                }
                debug!(target: "playlist", "restarted first track");
                Ok(())
            }
            // Nothing loaded to rewind: start the first track afresh.
            _ => self.start(0),
        }
    }

    pub fn set_volume(&mut self, level: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&level) {
            return Err(Error::out_of_range("volume", level));
        }
        self.playback.set_volume(level);
        self.volume = level;
        Ok(())
    }

    /// Seek to `fraction` of the current track's length, returning the offset.
    ///
    /// Only a Playing or Paused track can be sought; after `stop` nothing is
    /// loaded until the next toggle.
    pub fn seek(&mut self, fraction: f64) -> Result<Duration> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(Error::out_of_range("seek fraction", fraction));
        }
        let Some(track) = self.current_track() else {
            return Err(Error::out_of_range("seek target", "no current track"));
        };
        if self.state == PlaybackState::Stopped {
            return Err(Error::out_of_range("seek target", "playback stopped"));
        }
        let Some(total) = self.playback.length(track) else {
            return Err(Error::metadata(track.path(), "unknown track length"));
        };

        let offset = total.mul_f64(fraction);
        self.playback.seek(offset)?;
        debug!(target: "playlist", ?offset, "seeked");
        Ok(offset)
    }

    /// Elapsed and total time for the current track, if any.
    pub fn progress(&self) -> Option<Progress> {
        let track = self.current_track()?;
        Some(Progress {
            elapsed: self.playback.elapsed(),
            total: self.playback.length(track),
            active: self.playback.is_playing(),
        })
    }

    /// Numbered track names, starting at 1.
    pub fn listing(&self) -> Vec<String> {
        self.tracks
            .iter()
            .enumerate()
            .map(|(i, t)| format!("{}. {}", i + 1, t.name()))
            .collect()
    }

    pub fn listing_text(&self) -> String {
        if self.tracks.is_empty() {
            "Playlist is empty.".to_string()
        } else {
            self.listing().join("\n")
        }
    }

    /// Load and play `index`. State is only updated once loading succeeds.
    fn start(&mut self, index: usize) -> Result<()> {
        let track = &self.tracks[index];
        self.playback.load(track)?;
        self.playback.play();
        self.current = Some(index);
        self.state = PlaybackState::Playing;
        info!(target: "playlist", track = %track, index, "playing");
        Ok(())
    }
}
