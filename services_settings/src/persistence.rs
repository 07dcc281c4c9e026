//! Settings persistence layer
//!
//! Settings are stored as a single JSON object. Missing fields take their
//! defaults and unknown fields are ignored, so older files keep loading.

use crate::{CommanderSettings, SettingsError};

/// Parses, normalises and validates settings from JSON text
pub fn from_json(text: &str) -> Result<CommanderSettings, SettingsError> {
    let mut settings: CommanderSettings =
        serde_json::from_str(text).map_err(|e| SettingsError::Parse(e.to_string()))?;
    settings.normalize();
    settings.validate()?;
    Ok(settings)
}

/// Serializes settings to pretty-printed JSON
pub fn to_json(settings: &CommanderSettings) -> Result<String, SettingsError> {
    serde_json::to_string_pretty(settings).map_err(|e| SettingsError::Serialize(e.to_string()))
}

/// Loads settings, falling back to defaults on any error
pub fn load_or_default(text: Option<&str>) -> CommanderSettings {
    text.and_then(|t| from_json(t).ok()).unwrap_or_default()
}
