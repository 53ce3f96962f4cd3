//! Audio playback seam.
//!
//! The playlist controller drives playback through the `PlaybackAdapter`
//! trait. `RodioPlayback` is the production adapter and `SilentPlayback`
//! takes its place when no output device is available; tests substitute a
//! recording double.

mod adapter;
mod backend;
mod silent;
mod sink;

pub use adapter::PlaybackAdapter;
pub use backend::RodioPlayback;
pub use silent::SilentPlayback;
