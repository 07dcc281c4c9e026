//! Input source abstraction
//!
//! Two views of the same device: discrete button events for the browser
//! loop and raw characters for the shell's line editor. Both calls run on
//! the single commander thread.

use input_types::ButtonEvent;

/// Input device trait
pub trait InputDevice {
    /// Polls the buttons once
    ///
    /// Returns `ButtonEvent::None` when nothing was pressed. Never blocks.
    fn poll_button(&mut self) -> ButtonEvent;

    /// Reads one character, blocking until one is available
    ///
    /// Returns `None` only when the input stream has ended for good (host
    /// end-of-file, exhausted script). A board keyboard never ends.
    fn read_char(&mut self) -> Option<char>;

    /// Returns true once the input stream has ended
    fn is_closed(&self) -> bool {
        false
    }
}
