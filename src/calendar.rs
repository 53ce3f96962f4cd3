//! Per-day appointment notes and their calendar-cell labels.

mod store;

pub use store::{AppointmentDate, AppointmentStore};
