#![no_std]

//! # Input Types
//!
//! The input vocabulary of the commander.
//!
//! ## Philosophy
//!
//! - **Events, not buttons**: The browser loop sees discrete navigation events,
//!   never raw button numbers
//! - **Characters for the shell**: The line editor consumes raw character codes
//! - **Testable**: Events are serializable and can be injected for testing
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A keyboard driver or scan-code translator
//! - Key repeat or modifier tracking
//! - A complete input subsystem (just the types)

use core::fmt;
use serde::{Deserialize, Serialize};

/// Browser input event
///
/// One poll of the button source yields exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ButtonEvent {
    /// Nothing happened since the last poll
    #[default]
    None,
    /// Move the selection one row up
    Up,
    /// Move the selection one row down
    Down,
    /// Run the selected program
    Launch,
    /// Suspend the browser and enter the command shell
    EnterShell,
}

impl ButtonEvent {
    /// Maps a raw button code from the board's button controller
    ///
    /// `0` and `-1` both mean "no button". Codes with no assigned action
    /// are treated as no button as well.
    pub fn from_raw(code: i32) -> Self {
        match code {
            2 => Self::Up,
            3 => Self::Down,
            4 => Self::EnterShell,
            5 => Self::Launch,
            _ => Self::None,
        }
    }

    /// Returns the raw button code for this event
    pub fn to_raw(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Up => 2,
            Self::Down => 3,
            Self::EnterShell => 4,
            Self::Launch => 5,
        }
    }

    /// Returns true if the event should trigger a redraw
    pub fn is_some(self) -> bool {
        self != Self::None
    }

    /// Parses a button name as used in input scripts
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let event = if name.eq_ignore_ascii_case("none") || name.eq_ignore_ascii_case("idle") {
            Self::None
        } else if name.eq_ignore_ascii_case("up") {
            Self::Up
        } else if name.eq_ignore_ascii_case("down") {
            Self::Down
        } else if name.eq_ignore_ascii_case("launch") || name.eq_ignore_ascii_case("enter") {
            Self::Launch
        } else if name.eq_ignore_ascii_case("shell") {
            Self::EnterShell
        } else {
            return None;
        };
        Some(event)
    }
}

impl fmt::Display for ButtonEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Launch => write!(f, "launch"),
            Self::EnterShell => write!(f, "shell"),
        }
    }
}

/// Line feed character code
pub const LINE_FEED: char = '\n';

/// Carriage return character code
pub const CARRIAGE_RETURN: char = '\r';

/// Returns true if the character ends a shell line
pub fn is_line_terminator(c: char) -> bool {
    c == LINE_FEED || c == CARRIAGE_RETURN
}
