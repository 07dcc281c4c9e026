//! # Scripted Input
//!
//! Deterministic input for tests and scripted host runs.
//!
//! ## Format
//!
//! Scripts are line-based, with each line representing one input action:
//! - Button names: `up`, `down`, `launch`, `shell`, `idle`
//! - Typed text: `"ls"` (each character, then a carriage return)
//! - Repetition: `down x5`
//! - Comments: `# This is a comment`
//!
//! ## Example
//!
//! ```text
//! # Select the third program and run it
//! down x2
//! launch
//! ```
//!
//! Buttons and typed characters live in separate queues, just as the board's
//! buttons and keyboard are separate devices.

use std::collections::VecDeque;

use hal::InputDevice;
use input_types::{ButtonEvent, CARRIAGE_RETURN};
use thiserror::Error;

/// Input script error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputScriptError {
    #[error("Invalid button name: {0}")]
    InvalidButton(String),

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Invalid button list: {0}")]
    InvalidJson(String),
}

/// Input fake
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    buttons: VecDeque<ButtonEvent>,
    keys: VecDeque<char>,
}

impl ScriptedInput {
    /// Creates an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a script from text
    pub fn from_text(text: &str) -> Result<Self, InputScriptError> {
        let mut script = Self::new();

        for (line_num, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            script.parse_line(line, line_num + 1)?;
        }

        Ok(script)
    }

    /// Parses a JSON array of button events, e.g. `["Down", "Launch"]`
    pub fn from_json_buttons(json: &str) -> Result<Self, InputScriptError> {
        let buttons: Vec<ButtonEvent> =
            serde_json::from_str(json).map_err(|e| InputScriptError::InvalidJson(e.to_string()))?;
        Ok(Self {
            buttons: buttons.into(),
            keys: VecDeque::new(),
        })
    }

    fn parse_line(&mut self, line: &str, line_num: usize) -> Result<(), InputScriptError> {
        if line.len() >= 2 && line.starts_with('"') && line.ends_with('"') {
            self.type_line(&line[1..line.len() - 1]);
            return Ok(());
        }

        let (name, count) = match line.rsplit_once(" x") {
            Some((name, count)) => {
                let count = count.trim().parse::<usize>().map_err(|_| {
                    InputScriptError::ParseError {
                        line: line_num,
                        message: format!("invalid repeat count {:?}", count),
                    }
                })?;
                (name, count)
            }
            None => (line, 1),
        };

        let event = ButtonEvent::from_name(name).ok_or_else(|| InputScriptError::ParseError {
            line: line_num,
            message: InputScriptError::InvalidButton(name.trim().to_string()).to_string(),
        })?;
        for _ in 0..count {
            self.buttons.push_back(event);
        }
        Ok(())
    }

    /// Queues a button event
    pub fn push_button(&mut self, event: ButtonEvent) -> &mut Self {
        self.buttons.push_back(event);
        self
    }

    /// Queues raw characters
    pub fn type_text(&mut self, text: &str) -> &mut Self {
        self.keys.extend(text.chars());
        self
    }

    /// Queues characters followed by a carriage return
    pub fn type_line(&mut self, text: &str) -> &mut Self {
        self.type_text(text);
        self.keys.push_back(CARRIAGE_RETURN);
        self
    }

    /// Remaining queued button events
    pub fn pending_buttons(&self) -> usize {
        self.buttons.len()
    }

    /// Remaining queued characters
    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }
}

impl InputDevice for ScriptedInput {
    fn poll_button(&mut self) -> ButtonEvent {
        self.buttons.pop_front().unwrap_or_default()
    }

    fn read_char(&mut self) -> Option<char> {
        self.keys.pop_front()
    }

    /// Closed once the button queue runs dry; typed characters are only
    /// read from inside a shell session
    fn is_closed(&self) -> bool {
        self.buttons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_buttons() {
        let mut script = ScriptedInput::from_text("up\ndown\nlaunch\nshell\n").unwrap();

        assert_eq!(script.poll_button(), ButtonEvent::Up);
        assert_eq!(script.poll_button(), ButtonEvent::Down);
        assert_eq!(script.poll_button(), ButtonEvent::Launch);
        assert_eq!(script.poll_button(), ButtonEvent::EnterShell);
        assert_eq!(script.poll_button(), ButtonEvent::None);
        assert!(script.is_closed());
    }

    #[test]
    fn test_parse_repeat() {
        let script = ScriptedInput::from_text("down x3").unwrap();
        assert_eq!(script.pending_buttons(), 3);
    }

    #[test]
    fn test_parse_typed_line() {
        let mut script = ScriptedInput::from_text("\"ls\"").unwrap();

        assert_eq!(script.read_char(), Some('l'));
        assert_eq!(script.read_char(), Some('s'));
        assert_eq!(script.read_char(), Some('\r'));
        assert_eq!(script.read_char(), None);
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let script = ScriptedInput::from_text("# header\n\n  down  \n").unwrap();
        assert_eq!(script.pending_buttons(), 1);
    }

    #[test]
    fn test_invalid_button() {
        let result = ScriptedInput::from_text("up\nsideways");
        assert!(matches!(
            result,
            Err(InputScriptError::ParseError { line: 2, .. })
        ));
    }

    #[test]
    fn test_invalid_repeat_count() {
        let result = ScriptedInput::from_text("down xmany");
        assert!(matches!(
            result,
            Err(InputScriptError::ParseError { line: 1, .. })
        ));
    }

    #[test]
    fn test_json_buttons() {
        let mut script = ScriptedInput::from_json_buttons(r#"["Down", "EnterShell"]"#).unwrap();
        assert_eq!(script.poll_button(), ButtonEvent::Down);
        assert_eq!(script.poll_button(), ButtonEvent::EnterShell);
    }

    #[test]
    fn test_json_buttons_invalid() {
        assert!(ScriptedInput::from_json_buttons("[\"Sideways\"]").is_err());
    }

    #[test]
    fn test_builder_queues() {
        let mut script = ScriptedInput::new();
        script.push_button(ButtonEvent::Up).type_line("pwd");

        assert_eq!(script.pending_buttons(), 1);
        assert_eq!(script.pending_keys(), 4);
        assert!(!script.is_closed());
    }

    #[test]
    fn test_closed_with_only_keys_left() {
        let mut script = ScriptedInput::new();
        script.type_line("exit");
        assert!(script.is_closed());
        assert_eq!(script.pending_keys(), 5);
    }
}
