//! Recording text display
//!
//! Keeps a log of every call, a plain transcript of all text written, and a
//! row model of the screen so tests can assert on what a user would see.

use std::collections::BTreeSet;

use hal::{Color, DisplayMode, Font, TextDisplay};

/// One recorded display call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayOp {
    Clear,
    MoveTo { row: usize, column: usize },
    Write(String),
    Foreground(Color),
    Background(Color),
    Mode(DisplayMode),
    Font(Font),
}

/// Display fake
#[derive(Debug, Clone)]
pub struct RecordingDisplay {
    ops: Vec<DisplayOp>,
    transcript: String,
    rows: Vec<Vec<char>>,
    highlighted: BTreeSet<usize>,
    row: usize,
    column: usize,
    foreground: Color,
    background: Color,
    mode: Option<DisplayMode>,
    font: Option<Font>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            transcript: String::new(),
            rows: Vec::new(),
            highlighted: BTreeSet::new(),
            row: 0,
            column: 0,
            foreground: Color::WHITE,
            background: Color::BLACK,
            mode: None,
            font: None,
        }
    }

    /// All recorded calls, oldest first
    pub fn ops(&self) -> &[DisplayOp] {
        &self.ops
    }

    /// All text written since creation or the last [`Self::take_transcript`]
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Returns the transcript and starts a new one
    pub fn take_transcript(&mut self) -> String {
        std::mem::take(&mut self.transcript)
    }

    /// Text of one screen row, trailing spaces removed
    pub fn row_text(&self, row: usize) -> String {
        self.rows
            .get(row)
            .map(|cells| cells.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    /// Text of every row up to the last non-empty one
    pub fn screen(&self) -> Vec<String> {
        let mut rows: Vec<String> = (0..self.rows.len()).map(|r| self.row_text(r)).collect();
        while rows.last().is_some_and(|r| r.is_empty()) {
            rows.pop();
        }
        rows
    }

    /// Rows that received text in inverted colors since the last clear
    pub fn highlighted_rows(&self) -> Vec<usize> {
        self.highlighted.iter().copied().collect()
    }

    /// Current foreground color
    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// Current background color
    pub fn background(&self) -> Color {
        self.background
    }

    /// Last text mode set, if any
    pub fn mode(&self) -> Option<DisplayMode> {
        self.mode
    }

    /// Last font set, if any
    pub fn font(&self) -> Option<Font> {
        self.font
    }

    /// Number of `clear` calls so far
    pub fn clear_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == DisplayOp::Clear).count()
    }

    fn is_inverted(&self) -> bool {
        self.foreground == Color::BLACK && self.background == Color::WHITE
    }

    fn put(&mut self, c: char) {
        if input_types::is_line_terminator(c) {
            self.row += 1;
            self.column = 0;
            return;
        }
        while self.rows.len() <= self.row {
            self.rows.push(Vec::new());
        }
        let cells = &mut self.rows[self.row];
        while cells.len() <= self.column {
            cells.push(' ');
        }
        cells[self.column] = c;
        if self.is_inverted() {
            self.highlighted.insert(self.row);
        }
        self.column += 1;
    }
}

impl Default for RecordingDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDisplay for RecordingDisplay {
    fn clear(&mut self) {
        self.ops.push(DisplayOp::Clear);
        self.rows.clear();
        self.highlighted.clear();
        self.row = 0;
        self.column = 0;
    }

    fn move_to(&mut self, row: usize, column: usize) {
        self.ops.push(DisplayOp::MoveTo { row, column });
        self.row = row;
        self.column = column;
    }

    fn write_str(&mut self, text: &str) {
        self.ops.push(DisplayOp::Write(text.to_string()));
        self.transcript.push_str(text);
        for c in text.chars() {
            self.put(c);
        }
    }

    fn set_foreground(&mut self, color: Color) {
        self.ops.push(DisplayOp::Foreground(color));
        self.foreground = color;
    }

    fn set_background(&mut self, color: Color) {
        self.ops.push(DisplayOp::Background(color));
        self.background = color;
    }

    fn set_mode(&mut self, mode: DisplayMode) {
        self.ops.push(DisplayOp::Mode(mode));
        self.mode = Some(mode);
        self.rows.clear();
        self.highlighted.clear();
        self.row = 0;
        self.column = 0;
    }

    fn set_font(&mut self, font: Font) {
        self.ops.push(DisplayOp::Font(font));
        self.font = Some(font);
    }
}
