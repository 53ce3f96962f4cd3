//! Test doubles for the playback and metadata seams.
//!
//! `RecordingPlayback` logs every adapter call so tests can assert the exact
//! load/play/seek sequence a controller issued.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::audio::PlaybackAdapter;
use crate::error::{Error, Result};
use crate::library::Track;
use crate::metadata::{MetadataReader, TrackMetadata};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Load(Track),
    Play,
    Pause,
    Unpause,
    Stop,
    SetVolume(f32),
    Seek(Duration),
}

#[derive(Debug, Default)]
pub struct RecordingPlayback {
    pub calls: Vec<Call>,
    /// Length reported for every track.
    pub length: Option<Duration>,
    /// Tracks whose `load` fails.
    pub broken: Vec<Track>,
    playing: bool,
}

impl RecordingPlayback {
    pub fn new() -> Self {
        Self {
            length: Some(Duration::from_secs(200)),
            ..Self::default()
        }
    }

    /// Drain the recorded calls.
    pub fn take_calls(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }
}

impl PlaybackAdapter for RecordingPlayback {
    fn load(&mut self, track: &Track) -> Result<()> {
        if self.broken.contains(track) {
            return Err(Error::playback(format!("cannot decode {track}")));
        }
        self.calls.push(Call::Load(track.clone()));
        self.playing = false;
        Ok(())
    }

    fn play(&mut self) {
        self.calls.push(Call::Play);
        self.playing = true;
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
        self.playing = false;
    }

    fn unpause(&mut self) {
        self.calls.push(Call::Unpause);
        self.playing = true;
    }

    fn stop(&mut self) {
        self.calls.push(Call::Stop);
        self.playing = false;
    }

    fn set_volume(&mut self, level: f32) {
        self.calls.push(Call::SetVolume(level));
    }

    fn seek(&mut self, offset: Duration) -> Result<()> {
        self.calls.push(Call::Seek(offset));
        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn elapsed(&self) -> Duration {
        Duration::from_secs(5)
    }

    fn length(&self, _track: &Track) -> Option<Duration> {
        self.length
    }
}

/// Serves canned metadata keyed by path; unknown paths are unavailable.
#[derive(Debug, Default)]
pub struct StaticMetadata {
    pub entries: HashMap<PathBuf, TrackMetadata>,
}

impl StaticMetadata {
    pub fn with(mut self, track: &Track, meta: TrackMetadata) -> Self {
        self.entries.insert(track.path().to_path_buf(), meta);
        self
    }
}

impl MetadataReader for StaticMetadata {
    fn read(&self, track: &Track) -> Result<TrackMetadata> {
        self.entries
            .get(track.path())
            .cloned()
            .ok_or_else(|| Error::metadata(track.path(), "no tags"))
    }
}

pub fn track(name: &str) -> Track {
    Track::new(format!("/music/{name}.mp3"))
}

pub fn mock_track_metadata() -> TrackMetadata {
    TrackMetadata {
        title: "Test Track".to_string(),
        artist: "Test Artist".to_string(),
        album: "Test Album".to_string(),
        duration: Duration::from_secs(180),
    }
}
