//! Playlist state: ordered tracks, a cursor and the play/pause/stop machine.
//!
//! The controller owns its playback collaborator and issues load/play/pause
//! calls on it as the state machine moves:
//!
//! ```text
//! Stopped --toggle (non-empty)--> Playing --toggle--> Paused --toggle--> Playing
//! Playing | Paused --stop / remove(current)--> Stopped
//! ```
//!
//! `seek` keeps the state and is refused while Stopped.

mod controller;

pub use controller::{PlaybackState, PlaylistController, Progress};
