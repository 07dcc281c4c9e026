//! Bounded line buffer
//!
//! Characters past the capacity are dropped without error; the caller still
//! echoes them.

/// Command line under construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
    len: usize,
    capacity: usize,
}

impl LineBuffer {
    /// Creates a buffer that keeps at most `capacity` characters
    pub fn new(capacity: usize) -> Self {
        Self {
            text: String::new(),
            len: 0,
            capacity,
        }
    }

    /// Appends a character if there is room
    ///
    /// Returns false if the character was dropped.
    pub fn push(&mut self, c: char) -> bool {
        if self.len >= self.capacity {
            return false;
        }
        self.text.push(c);
        self.len += 1;
        true
    }

    /// Takes the finished line, leaving the buffer empty
    pub fn take(&mut self) -> String {
        self.len = 0;
        std::mem::take(&mut self.text)
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.len = 0;
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of characters held
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
