//! Process wiring: settings, logging, library scan and the command loop.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::app::Session;
use crate::audio::{PlaybackAdapter, RodioPlayback, SilentPlayback};
use crate::metadata::LoftyMetadata;

pub mod commands;
pub mod event_loop;
mod settings;
mod startup;

pub use settings::try_load_settings;

/// Install the global `tracing` subscriber on stderr.
///
/// `RUST_LOG` wins over `default_filter` when set.
pub fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("harmony=info"));

    // A subscriber may already be installed (tests, embedding); keep that one.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .with(filter)
        .try_init();
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = try_load_settings();
    let settings = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(&settings.logging.filter);
    if let Err(e) = &loaded {
        warn!("using default settings: {e}");
    }

    let dir = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let mut out = io::stdout().lock();
    let playback = open_playback(&mut out)?;
    let mut session = Session::from_settings(playback, LoftyMetadata, &settings);
    startup::load_library(&mut session, &dir, &settings);

    writeln!(out, "{}", session.playlist.listing_text())?;
    writeln!(out, "{}", commands::HELP)?;

    event_loop::run(&mut session, io::stdin().lock(), &mut out)?;
    Ok(())
}

/// The default output device, or `SilentPlayback` with a notice when none opens.
fn open_playback(out: &mut impl Write) -> io::Result<Box<dyn PlaybackAdapter>> {
    match RodioPlayback::new() {
        Ok(device) => Ok(Box::new(device)),
        Err(e) => {
            warn!("{e}; continuing without audio");
            writeln!(out, "Audio unavailable ({e}); playback is disabled.")?;
            Ok(Box::new(SilentPlayback))
        }
    }
}
