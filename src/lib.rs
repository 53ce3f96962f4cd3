//! # harmony
//!
//! The core of a small desktop "integrated app": a music playlist with
//! play/pause/stop/seek and volume, and a calendar that keeps per-day notes
//! and renders them as cell labels.
//!
//! Both state managers are plain objects with injected collaborators, so the
//! whole state machine runs without a window or an audio device:
//!
//! * [`playlist::PlaylistController`] drives a [`audio::PlaybackAdapter`].
//! * [`calendar::AppointmentStore`] maps dates to ordered notes.
//! * [`app::Session`] composes them with a [`metadata::MetadataReader`].

pub mod app;
pub mod audio;
pub mod calendar;
pub mod config;
pub mod error;
pub mod library;
pub mod metadata;
pub mod playlist;
pub mod runtime;
#[cfg(test)]
pub mod test_utils;

pub use error::{Error, Result};
