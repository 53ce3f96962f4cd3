use std::io::{self, BufRead, Write};
use std::time::Duration;

use tracing::{debug, warn};

use crate::app::Session;
use crate::audio::PlaybackAdapter;
use crate::error::{Error, Result};
use crate::library::Track;
use crate::metadata::MetadataReader;

use super::commands::{self, HELP, ShellCommand};

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Read commands from `input` until EOF or `quit`, writing replies to `out`.
///
/// Core errors are printed and the loop carries on; only I/O on the shell's
/// own streams ends it early.
pub fn run<P, M>(
    session: &mut Session<P, M>,
    input: impl BufRead,
    mut out: impl Write,
) -> io::Result<()>
where
    P: PlaybackAdapter,
    M: MetadataReader,
{
    for line in input.lines() {
        let line = line?;
        let cmd = match commands::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };

        debug!(target: "shell", ?cmd, "dispatch");
        match dispatch(session, cmd, &mut out) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(Error::Io(e)) => return Err(e),
            Err(e) => {
                warn!(target: "shell", "{e}");
                writeln!(out, "error: {e}")?;
            }
        }
        out.flush()?;
    }
    Ok(())
}

/// Apply one command to the session.
pub fn dispatch<P, M>(
    session: &mut Session<P, M>,
    cmd: ShellCommand,
    out: &mut impl Write,
) -> Result<Flow>
where
    P: PlaybackAdapter,
    M: MetadataReader,
{
    let pl = &mut session.playlist;
    match cmd {
        ShellCommand::Toggle => {
            let state = pl.toggle()?;
            say(out, format!("{state:?}"))?;
        }
        ShellCommand::Stop => {
            pl.stop();
            say(out, "Stopped")?;
        }
        ShellCommand::Next => {
            pl.next()?;
            now_playing(session, out)?;
        }
        ShellCommand::Prev => {
            pl.previous()?;
            now_playing(session, out)?;
        }
        ShellCommand::Select(n) => {
            pl.select(n - 1)?;
            now_playing(session, out)?;
        }
        ShellCommand::Remove(n) => {
            let removed = pl.remove(n - 1)?;
            say(out, format!("removed {removed}"))?;
        }
        ShellCommand::Volume(level) => {
            pl.set_volume(level)?;
            say(out, format!("volume {level}"))?;
        }
        ShellCommand::Seek(fraction) => {
            let offset = pl.seek(fraction)?;
            let total = pl.progress().and_then(|p| p.total);
            say(out, format!("seek {}", position(offset, total)))?;
        }
        ShellCommand::Add(path) => {
            session.add_tracks([Track::new(path)]);
            say(out, format!("{} tracks", session.playlist.len()))?;
        }
        ShellCommand::List => say(out, pl.listing_text())?,
        ShellCommand::Info => info(session, out)?,
        ShellCommand::Date(date) => {
            session.select_date(date);
            say(out, date.to_string())?;
            say_notes(session, out)?;
        }
        ShellCommand::Note(text) => {
            session.add_note(text)?;
            say_notes(session, out)?;
        }
        ShellCommand::Unnote(text) => {
            session.remove_note(&text)?;
            say_notes(session, out)?;
        }
        ShellCommand::Notes => say_notes(session, out)?,
        ShellCommand::Clear => {
            let cleared = session.clear_notes()?;
            say(out, format!("cleared {cleared} notes"))?;
        }
        ShellCommand::Month(which) => month(session, which, out)?,
        ShellCommand::Help => say(out, HELP)?,
        ShellCommand::Quit => {
            session.playlist.stop();
            return Ok(Flow::Quit);
        }
    }
    Ok(Flow::Continue)
}

/// Format a duration as `m:ss`.
pub fn clock(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// `elapsed / total`, with `?` for an unknown total.
fn position(elapsed: Duration, total: Option<Duration>) -> String {
    let total = total.map(clock).unwrap_or_else(|| "?".to_string());
    format!("{} / {}", clock(elapsed), total)
}

fn say(out: &mut impl Write, text: impl AsRef<str>) -> io::Result<()> {
    writeln!(out, "{}", text.as_ref())
}

fn now_playing<P: PlaybackAdapter, M: MetadataReader>(
    session: &Session<P, M>,
    out: &mut impl Write,
) -> io::Result<()> {
    match session.playlist.current_track() {
        Some(t) => say(out, format!("Playing: {t}")),
        None => Ok(()),
    }
}

fn say_notes<P: PlaybackAdapter, M: MetadataReader>(
    session: &Session<P, M>,
    out: &mut impl Write,
) -> io::Result<()> {
    let label = session
        .selected_date()
        .and_then(|d| session.label_for(d))
        .unwrap_or_else(|| "(no notes)".to_string());
    say(out, label)
}

/// Every noted date in a month with its label.
fn month<P: PlaybackAdapter, M: MetadataReader>(
    session: &Session<P, M>,
    which: Option<(i32, u32)>,
    out: &mut impl Write,
) -> Result<()> {
    use chrono::Datelike;

    let (year, month) = match which {
        Some(ym) => ym,
        None => {
            let date = session.selected_date().ok_or(Error::NoDateSelected)?;
            (date.year(), date.month())
        }
    };

    let labels = session.appointments.labels_in_month(year, month);
    if labels.is_empty() {
        say(out, format!("(no notes in {year}-{month:02})"))?;
    }
    for (date, label) in labels {
        say(out, date.to_string())?;
        for line in label.lines() {
            say(out, format!("  {line}"))?;
        }
    }
    Ok(())
}

/// Metadata then progress; a metadata failure is shown in place of the tags.
fn info<P: PlaybackAdapter, M: MetadataReader>(
    session: &Session<P, M>,
    out: &mut impl Write,
) -> Result<()> {
    match session.current_metadata() {
        Ok(None) => {
            say(out, "Nothing playing.")?;
            return Ok(());
        }
        Ok(Some(meta)) => {
            say(out, format!("Title: {}", meta.title))?;
            say(out, format!("Artist: {}", meta.artist))?;
            say(out, format!("Album: {}", meta.album))?;
            say(out, format!("Duration: {}", meta.duration_secs()))?;
        }
        Err(e) => {
            warn!(target: "shell", "{e}");
            say(out, format!("error: {e}"))?;
        }
    }

    if let Some(p) = session.playlist.progress() {
        let idle = if p.active { "" } else { " (idle)" };
        say(out, format!("Progress: {}{idle}", position(p.elapsed, p.total)))?;
    }
    Ok(())
}
