//! # Display Adapter
//!
//! Text output on the board's screen.
//!
//! ## Philosophy
//!
//! The display is a write-only sink. Rendering code positions the cursor,
//! picks colors and prints text; it never asks the display what it shows.
//! Pixel and glyph rendering live below this trait.

use core::fmt;
use serde::{Deserialize, Serialize};

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Creates a color from components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Text mode identifier
///
/// The value is passed to the display controller untouched, so any number a
/// user types into `mode <n>` is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayMode(pub u32);

impl DisplayMode {
    /// The small OLED panel used by the browser
    pub const OLED: DisplayMode = DisplayMode(0);
    /// 320x200 framebuffer, 16 bits per pixel
    pub const FGA_320X200X16BPP: DisplayMode = DisplayMode(1);
    /// 320x200 framebuffer, 8 bits per pixel
    pub const FGA_320X200X8BPP: DisplayMode = DisplayMode(2);
    /// 640x400 framebuffer, 4 bits per pixel, used by the shell
    pub const FGA_640X400X4BPP: DisplayMode = DisplayMode(3);

    /// Returns the raw mode number
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mode {}", self.0)
    }
}

/// Built-in text fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Font {
    Font3x5,
    Font5x6,
    Font8x8,
    Font8x16,
}

impl Font {
    /// Looks up a font by its shell index (0 to 3)
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Self::Font3x5),
            1 => Some(Self::Font5x6),
            2 => Some(Self::Font8x8),
            3 => Some(Self::Font8x16),
            _ => None,
        }
    }

    /// Returns the glyph height in pixels
    pub fn height(self) -> usize {
        match self {
            Self::Font3x5 => 5,
            Self::Font5x6 => 6,
            Self::Font8x8 => 8,
            Self::Font8x16 => 16,
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Font3x5 => write!(f, "3x5"),
            Self::Font5x6 => write!(f, "5x6"),
            Self::Font8x8 => write!(f, "8x8"),
            Self::Font8x16 => write!(f, "8x16"),
        }
    }
}

/// Text display trait
pub trait TextDisplay {
    /// Clears the whole screen
    fn clear(&mut self);

    /// Moves the text cursor to `(row, column)`
    fn move_to(&mut self, row: usize, column: usize);

    /// Prints text at the cursor
    fn write_str(&mut self, text: &str);

    /// Prints a single character at the cursor
    fn put_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.write_str(c.encode_utf8(&mut buf));
    }

    /// Sets the text foreground color
    fn set_foreground(&mut self, color: Color);

    /// Sets the text background color
    fn set_background(&mut self, color: Color);

    /// Re-initialises the terminal in the given text mode
    fn set_mode(&mut self, mode: DisplayMode);

    /// Selects the text font
    fn set_font(&mut self, font: Font);
}
