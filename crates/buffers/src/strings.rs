//! Fixed-width text codecs.
//!
//! Two mappings between text and bytes, both one code unit per character:
//! [`narrow`] spends 1 byte per unit and is only meaningful for code points
//! 0-255, [`wide`] spends 2 bytes per unit and covers the full Basic
//! Multilingual Plane. Both are total functions with no error paths.

/// 1 byte per UTF-16 code unit. Used for the packed buffer's length header,
/// where every character is an ASCII digit or comma.
pub mod narrow {
    /// Turns a string into one byte per code unit.
    ///
    /// Code units above 255 are truncated to their low 8 bits, so this is
    /// garbage-in/garbage-out for anything outside Latin-1.
    ///
    /// # Example
    ///
    /// ```
    /// use bin_json_buffers::strings::narrow;
    ///
    /// assert_eq!(narrow::encode("10,13"), b"10,13".to_vec());
    /// ```
    pub fn encode(text: &str) -> Vec<u8> {
        text.encode_utf16().map(|unit| unit as u8).collect()
    }

    /// Turns a buffer of single-byte code units back into a string.
    pub fn decode(bytes: &[u8]) -> String {
        bytes.iter().map(|&b| char::from(b)).collect()
    }
}

/// 2 bytes (little-endian) per UTF-16 code unit. Used for the JSON text
/// segment of the packed buffer.
///
/// Embedded NUL units are data, never terminators. Surrogate pairs pass
/// through as two units each; this is per-unit mapping, not Unicode scalar
/// decomposition, which is exactly what a JSON stringifier's output needs.
pub mod wide {
    /// Turns a string into two little-endian bytes per code unit.
    ///
    /// # Example
    ///
    /// ```
    /// use bin_json_buffers::strings::wide;
    ///
    /// assert_eq!(wide::encode("hi"), vec![0x68, 0x00, 0x69, 0x00]);
    /// ```
    pub fn encode(text: &str) -> Vec<u8> {
        let mut out = Vec::with_capacity(text.len() * 2);
        for unit in text.encode_utf16() {
            out.extend_from_slice(&unit.to_le_bytes());
        }
        out
    }

    /// Turns a buffer of two-byte code units back into a string.
    ///
    /// Unpaired surrogates from malformed input are replaced with U+FFFD;
    /// an odd trailing byte is ignored.
    pub fn decode(bytes: &[u8]) -> String {
        let units: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    }
}
