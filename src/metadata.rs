//! Track metadata for the now-playing panel.
//!
//! `MetadataReader` is the seam the session reads through; `LoftyMetadata`
//! is the production implementation backed by `lofty`.

use std::time::Duration;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::Accessor;
use tracing::debug;

use crate::error::{Error, Result};
use crate::library::Track;

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

#[derive(Debug, Clone, PartialEq)]
pub struct TrackMetadata {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration: Duration,
}

impl TrackMetadata {
    /// Duration in seconds, rounded to two decimals.
    pub fn duration_secs(&self) -> f64 {
        (self.duration.as_secs_f64() * 100.0).round() / 100.0
    }
}

/// Reads display metadata for a track.
pub trait MetadataReader {
    /// Returns `Error::MetadataUnavailable` when the file cannot be read.
    fn read(&self, track: &Track) -> Result<TrackMetadata>;
}

/// `MetadataReader` backed by `lofty` tag parsing.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyMetadata;

fn non_blank(value: Option<std::borrow::Cow<'_, str>>, fallback: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

impl MetadataReader for LoftyMetadata {
    fn read(&self, track: &Track) -> Result<TrackMetadata> {
        let tagged = lofty::read_from_path(track.path())
            .map_err(|e| Error::metadata(track.path(), e.to_string()))?;

        let tag = tagged.primary_tag().or_else(|| tagged.first_tag());
        let meta = TrackMetadata {
            title: non_blank(tag.and_then(|t| t.title()), UNKNOWN_TITLE),
            artist: non_blank(tag.and_then(|t| t.artist()), UNKNOWN_ARTIST),
            album: non_blank(tag.and_then(|t| t.album()), UNKNOWN_ALBUM),
            duration: tagged.properties().duration(),
        };

        debug!(target: "metadata", track = %track, title = %meta.title, "read metadata");
        Ok(meta)
    }
}
