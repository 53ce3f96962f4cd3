use std::path::Path;

use tracing::info;

use crate::app::Session;
use crate::audio::PlaybackAdapter;
use crate::config::Settings;
use crate::library::scan;
use crate::metadata::MetadataReader;

/// Populate the playlist from `dir` using the configured library filters.
pub fn load_library<P, M>(session: &mut Session<P, M>, dir: &Path, settings: &Settings) -> usize
where
    P: PlaybackAdapter,
    M: MetadataReader,
{
    let added = session.add_tracks(scan(dir, &settings.library));
    info!(dir = %dir.display(), added, "library loaded");
    added
}
