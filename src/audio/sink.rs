//! Utilities for creating `rodio` sinks from `Track` values.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused `Sink` at its start.

use std::fs::File;
use std::io::BufReader;

use rodio::{Decoder, OutputStream, Sink};

use crate::error::{Error, Result};
use crate::library::Track;

/// Create a paused `Sink` holding the decoded `track`.
pub(super) fn create_paused_sink(stream: &OutputStream, track: &Track) -> Result<Sink> {
    let file = File::open(track.path())
        .map_err(|e| Error::playback(format!("failed to open {}: {e}", track.path().display())))?;

    let source = Decoder::new(BufReader::new(file)).map_err(|e| {
        Error::playback(format!("failed to decode {}: {e}", track.path().display()))
    })?;

    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}
