use crate::config::Settings;
use crate::error::{Error, Result};

/// Load and validate settings.
///
/// Config is optional: callers fall back to `Settings::default()` on error
/// and report it once logging is up.
pub fn try_load_settings() -> Result<Settings> {
    let settings = Settings::load().map_err(|e| Error::Config(e.to_string()))?;
    settings.validate()?;
    Ok(settings)
}
