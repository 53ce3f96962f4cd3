use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::{Error, Result};

/// Calendar day used as the key for notes.
pub type AppointmentDate = NaiveDate;

/// Notes per calendar day, in insertion order.
///
/// A date is present only while it has at least one note, so "absent" and
/// "no notes" are the same thing.
#[derive(Debug, Default, Clone)]
pub struct AppointmentStore {
    notes: BTreeMap<AppointmentDate, Vec<String>>,
    allow_empty_notes: bool,
}

impl AppointmentStore {
    pub fn new(allow_empty_notes: bool) -> Self {
        Self {
            notes: BTreeMap::new(),
            allow_empty_notes,
        }
    }

    /// Append `text` to the notes for `date`.
    pub fn add_note(&mut self, date: AppointmentDate, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        if !self.allow_empty_notes && text.trim().is_empty() {
            return Err(Error::EmptyNote);
        }

        debug!(target: "calendar", %date, note = %text, "note added");
        self.notes.entry(date).or_default().push(text);
        Ok(())
    }

    /// Remove the first note on `date` equal to `text`.
    pub fn remove_note(&mut self, date: AppointmentDate, text: &str) -> Result<()> {
        let not_found = || Error::NotFound {
            date,
            text: text.to_string(),
        };

        let list = self.notes.get_mut(&date).ok_or_else(not_found)?;
        let pos = list.iter().position(|n| n == text).ok_or_else(not_found)?;
        list.remove(pos);
        if list.is_empty() {
            self.notes.remove(&date);
        }

        debug!(target: "calendar", %date, note = %text, "note removed");
        Ok(())
    }

    /// Drop every note on `date`, returning how many there were.
    pub fn clear_date(&mut self, date: AppointmentDate) -> usize {
        self.notes.remove(&date).map(|l| l.len()).unwrap_or(0)
    }

    /// Notes for `date` in insertion order; empty when there are none.
    pub fn list_notes(&self, date: AppointmentDate) -> &[String] {
        self.notes.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Cell label for `date`: notes numbered from 1, one per line.
    pub fn label_for(&self, date: AppointmentDate) -> Option<String> {
        let list = self.notes.get(&date)?;
        if list.is_empty() {
            return None;
        }

        let label = list
            .iter()
            .enumerate()
            .map(|(i, n)| format!("{}. {}", i + 1, n))
            .collect::<Vec<_>>()
            .join("\n");
        Some(label)
    }

    /// Dates that carry at least one note, ascending.
    pub fn dates(&self) -> impl Iterator<Item = AppointmentDate> + '_ {
        self.notes.keys().copied()
    }

    /// Labels for every noted date in one calendar month, ascending.
    pub fn labels_in_month(&self, year: i32, month: u32) -> Vec<(AppointmentDate, String)> {
        self.dates()
            .filter(|d| d.year() == year && d.month() == month)
            .filter_map(|d| self.label_for(d).map(|label| (d, label)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
