//! Audio file references and directory scanning.
//!
//! A `Track` is an opaque handle to one audio file. `scan` stands in for a
//! file picker: it collects the audio files below a directory, filtered by
//! the configured extensions.

mod model;
mod scan;

pub use model::Track;
pub use scan::{is_audio_file, scan};
