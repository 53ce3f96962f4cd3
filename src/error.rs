//! Crate-wide error type.
//!
//! Every failure the core reports is recoverable: the caller shows it to the
//! user and keeps going. Controller state is left untouched whenever an
//! operation returns `Err`.

use std::path::PathBuf;

use chrono::NaiveDate;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An index, volume level or seek fraction outside its valid range.
    #[error("{what} out of range: {value}")]
    OutOfRange { what: &'static str, value: String },

    /// A playback operation was attempted with no tracks loaded.
    #[error("playlist is empty")]
    EmptyPlaylist,

    /// The note to remove does not exist for that date.
    #[error("no note {text:?} on {date}")]
    NotFound { date: NaiveDate, text: String },

    /// Track metadata could not be read.
    #[error("metadata unavailable for {path}: {message}")]
    MetadataUnavailable { path: PathBuf, message: String },

    /// A note operation was attempted before any calendar date was chosen.
    #[error("no calendar date selected")]
    NoDateSelected,

    /// Note text was blank and the store does not accept blank notes.
    #[error("note text is empty")]
    EmptyNote,

    /// The audio engine failed (decode, output device, seek).
    #[error("playback error: {0}")]
    Playback(String),

    #[error("configuration error: {0}")]
    Config(String),

    /// Writing to the shell's output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn out_of_range(what: &'static str, value: impl ToString) -> Self {
        Self::OutOfRange {
            what,
            value: value.to_string(),
        }
    }

    pub fn metadata(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::MetadataUnavailable {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn playback(message: impl Into<String>) -> Self {
        Self::Playback(message.into())
    }
}
