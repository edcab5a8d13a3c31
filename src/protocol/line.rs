//! Console Line Reader
//!
//! Accumulates console keystrokes into one bounded command line.

use heapless::Vec;

use crate::config::MAX_CHARS;

/// Backspace key code
pub const BACKSPACE: u8 = 8;

/// Delete key code (sent by most terminals for the backspace key)
pub const DELETE: u8 = 127;

/// Carriage return, ends a line
pub const CARRIAGE_RETURN: u8 = 13;

/// One complete, untokenized command line
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Line {
    chars: Vec<u8, MAX_CHARS>,
}

impl Line {
    /// Build a line from raw bytes
    ///
    /// Returns None if longer than the capacity or if `bytes` holds a 0,
    /// which would end an IR message early.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.contains(&0) {
            return None;
        }
        Vec::from_slice(bytes).ok().map(|chars| Self { chars })
    }

    /// Line contents without terminator
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

    /// Line contents as text, if valid UTF-8
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.chars).ok()
    }

    /// Number of characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Console line reader
pub struct LineReader {
    /// Characters accepted so far
    buffer: Vec<u8, MAX_CHARS>,
}

impl LineReader {
    /// Create an empty line reader
    #[must_use]
    pub const fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Feed a byte to the reader
    /// Returns the line once it is complete
    ///
    /// A line completes on carriage return or as soon as it holds
    /// [`MAX_CHARS`] characters.
    pub fn feed(&mut self, byte: u8) -> Option<Line> {
        match byte {
            BACKSPACE | DELETE => {
                // nothing to delete on an empty line
                let _ = self.buffer.pop();
            }
            CARRIAGE_RETURN => return Some(self.take()),
            b if b >= b' ' => {
                let _ = self.buffer.push(b);
            }
            // other control codes are ignored
            _ => {}
        }

        if self.buffer.is_full() {
            Some(self.take())
        } else {
            None
        }
    }

    /// Feed bytes from `source` until a line completes
    ///
    /// Returns None if the source runs dry first; the partial line is kept.
    pub fn read_line<I: Iterator<Item = u8>>(&mut self, source: &mut I) -> Option<Line> {
        source.find_map(|byte| self.feed(byte))
    }

    /// Characters of the line being typed
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Discard the line being typed
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    fn take(&mut self) -> Line {
        Line {
            chars: core::mem::take(&mut self.buffer),
        }
    }
}

impl Default for LineReader {
    fn default() -> Self {
        Self::new()
    }
}
