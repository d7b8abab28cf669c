//! Binary buffer writer over an auto-growing buffer.

use crate::strings::narrow;

/// A binary buffer writer that appends data to an auto-growing buffer.
///
/// # Example
///
/// ```
/// use bin_json_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.ascii("9");
/// writer.u8(0);
/// writer.buf(b"something");
/// assert_eq!(writer.flush(), b"9\0something");
/// ```
#[derive(Default)]
pub struct Writer {
    /// The accumulated bytes.
    pub uint8: Vec<u8>,
}

impl Writer {
    /// Creates a new empty writer.
    pub fn new() -> Self {
        Self { uint8: Vec::new() }
    }

    /// Creates a writer with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
        }
    }

    /// Writes a single byte.
    pub fn u8(&mut self, value: u8) {
        self.uint8.push(value);
    }

    /// Writes a raw byte slice.
    pub fn buf(&mut self, data: &[u8]) {
        self.uint8.extend_from_slice(data);
    }

    /// Writes text one byte per code unit (the narrow fixed-width codec).
    pub fn ascii(&mut self, text: &str) {
        self.uint8.extend(narrow::encode(text));
    }

    /// Returns the accumulated bytes and resets the writer.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.uint8)
    }
}
