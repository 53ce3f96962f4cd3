//! Application session: the playlist and calendar controllers plus the
//! read-only collaborators, composed once and handed to the shell.

mod model;

pub use model::*;
