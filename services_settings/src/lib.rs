//! # Commander Settings
//!
//! Typed configuration for the browser and the shell.
//!
//! ## Philosophy
//!
//! - **Typed settings**: Every setting has an explicit type and a default
//! - **Validated once**: A settings value that passed [`CommanderSettings::validate`]
//!   is trusted by every component
//! - **Deterministic**: Settings are serializable and reproducible
//!
//! ## Example
//!
//! ```ignore
//! use services_settings::{persistence, CommanderSettings};
//!
//! let settings = persistence::from_json(r#"{ "font_height": 16 }"#)?;
//! assert_eq!(settings.page_size(), 8);
//! ```

pub mod persistence;

use hal::{DisplayMode, Font};
use serde::{Deserialize, Serialize};
use services_logger::LogLevel;
use thiserror::Error;

/// Settings errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Failed to parse settings: {0}")]
    Parse(String),

    #[error("Failed to serialize settings: {0}")]
    Serialize(String),

    #[error("Invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("Unsupported settings version: {0}")]
    UnsupportedVersion(u32),
}

/// Settings for one commander instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommanderSettings {
    /// Format version
    pub version: u32,
    /// Directory the browser lists and the shell runs programs from
    pub working_dir: String,
    /// Launchable filename suffixes; the first one is appended by the shell
    pub launchable_suffixes: Vec<String>,
    /// Display height in pixels
    pub display_height: usize,
    /// Text row height in pixels
    pub font_height: usize,
    /// Width of the name column in characters
    pub name_width: usize,
    /// Marker appended to cut names
    pub truncation_marker: char,
    /// Characters the shell's line editor keeps
    pub line_capacity: usize,
    /// Shell prompt marker
    pub prompt: String,
    /// Printed when the shell starts
    pub banner: String,
    /// Text mode of the browser
    pub browser_mode: DisplayMode,
    /// Text mode of the shell
    pub shell_mode: DisplayMode,
    /// Font selected when the shell starts
    pub shell_font: Font,
    /// Minimum level written by the host log sink
    pub log_level: LogLevel,
}

impl CommanderSettings {
    /// Current version of the settings format
    pub const CURRENT_VERSION: u32 = 1;

    /// Number of listing rows visible at once
    pub fn page_size(&self) -> usize {
        if self.font_height == 0 {
            0
        } else {
            self.display_height / self.font_height
        }
    }

    /// Suffix the shell appends to command names
    pub fn primary_suffix(&self) -> &str {
        self.launchable_suffixes
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Checks every invariant the components rely on
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.version != Self::CURRENT_VERSION {
            return Err(SettingsError::UnsupportedVersion(self.version));
        }
        if !self.working_dir.starts_with('/') {
            return Err(SettingsError::Invalid {
                field: "working_dir",
                reason: format!("{:?} is not absolute", self.working_dir),
            });
        }
        if self.page_size() == 0 {
            return Err(SettingsError::Invalid {
                field: "font_height",
                reason: format!(
                    "display of {} px fits no rows of {} px",
                    self.display_height, self.font_height
                ),
            });
        }
        if self.launchable_suffixes.is_empty() {
            return Err(SettingsError::Invalid {
                field: "launchable_suffixes",
                reason: "at least one suffix is required".to_string(),
            });
        }
        for suffix in &self.launchable_suffixes {
            if suffix.len() != 4 || !suffix.is_ascii() || !suffix.starts_with('.') {
                return Err(SettingsError::Invalid {
                    field: "launchable_suffixes",
                    reason: format!("{:?} is not a dot and three ASCII characters", suffix),
                });
            }
        }
        if self.name_width == 0 {
            return Err(SettingsError::Invalid {
                field: "name_width",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.line_capacity == 0 {
            return Err(SettingsError::Invalid {
                field: "line_capacity",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.prompt.is_empty() {
            return Err(SettingsError::Invalid {
                field: "prompt",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Makes sure the working directory ends with a separator
    pub fn normalize(&mut self) {
        if !self.working_dir.ends_with('/') {
            self.working_dir.push('/');
        }
    }
}

impl Default for CommanderSettings {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            working_dir: "/".to_string(),
            launchable_suffixes: vec![".elf".to_string(), ".bin".to_string()],
            display_height: 128,
            font_height: 8,
            name_width: 14,
            truncation_marker: '.',
            line_capacity: 253,
            prompt: "]".to_string(),
            banner: "FemtOS v. 0.0".to_string(),
            browser_mode: DisplayMode::OLED,
            shell_mode: DisplayMode::FGA_640X400X4BPP,
            shell_font: Font::Font8x16,
            log_level: LogLevel::Info,
        }
    }
}
