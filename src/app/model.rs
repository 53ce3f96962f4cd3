//! `Session` ties the two state managers together for one run of the app.
//!
//! The shell keeps a single `Session`, forwards user actions to it and
//! re-reads its state to redraw the track list, the now-playing panel and the
//! calendar.

use tracing::{info, warn};

use crate::audio::PlaybackAdapter;
use crate::calendar::{AppointmentDate, AppointmentStore};
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::library::Track;
use crate::metadata::{MetadataReader, TrackMetadata};
use crate::playlist::PlaylistController;

pub struct Session<P, M> {
    pub playlist: PlaylistController<P>,
    pub appointments: AppointmentStore,
    metadata: M,
    selected_date: Option<AppointmentDate>,
}

impl<P: PlaybackAdapter, M: MetadataReader> Session<P, M> {
    pub fn new(playback: P, metadata: M) -> Self {
        Self {
            playlist: PlaylistController::new(playback),
            appointments: AppointmentStore::default(),
            metadata,
            selected_date: None,
        }
    }

    /// Build a session with the startup volume and note policy from `settings`.
    pub fn from_settings(playback: P, metadata: M, settings: &Settings) -> Self {
        let mut session = Self::new(playback, metadata);
        session.appointments = AppointmentStore::new(settings.calendar.allow_empty_notes);
        if let Err(e) = session.playlist.set_volume(settings.audio.initial_volume) {
            warn!("ignoring initial volume: {e}");
        }
        session
    }

    /// Append tracks in order, returning how many were added.
    pub fn add_tracks(&mut self, tracks: impl IntoIterator<Item = Track>) -> usize {
        let before = self.playlist.len();
        for t in tracks {
            self.playlist.add(t);
        }
        let added = self.playlist.len() - before;
        info!(added, total = self.playlist.len(), "tracks added");
        added
    }

    /// Metadata for the current track; `None` when nothing is current.
    pub fn current_metadata(&self) -> Result<Option<TrackMetadata>> {
        self.playlist
            .current_track()
            .map(|t| self.metadata.read(t))
            .transpose()
    }

    pub fn select_date(&mut self, date: AppointmentDate) {
        self.selected_date = Some(date);
    }

    pub fn selected_date(&self) -> Option<AppointmentDate> {
        self.selected_date
    }

    /// Add a note to the selected date.
    pub fn add_note(&mut self, text: impl Into<String>) -> Result<AppointmentDate> {
        let date = self.selected_date.ok_or(Error::NoDateSelected)?;
        self.appointments.add_note(date, text)?;
        Ok(date)
    }

    /// Remove a note from the selected date.
    pub fn remove_note(&mut self, text: &str) -> Result<AppointmentDate> {
        let date = self.selected_date.ok_or(Error::NoDateSelected)?;
        self.appointments.remove_note(date, text)?;
        Ok(date)
    }

    /// Drop every note on the selected date, returning how many went.
    pub fn clear_notes(&mut self) -> Result<usize> {
        let date = self.selected_date.ok_or(Error::NoDateSelected)?;
        let cleared = self.appointments.clear_date(date);
        info!(target: "calendar", %date, cleared, "date cleared");
        Ok(cleared)
    }

    /// Notes on the selected date; empty when no date is selected.
    pub fn notes(&self) -> &[String] {
        match self.selected_date {
            Some(d) => self.appointments.list_notes(d),
            None => &[],
        }
    }

    pub fn label_for(&self, date: AppointmentDate) -> Option<String> {
        self.appointments.label_for(date)
    }
}
