//! Binary buffer utilities for bin-json.
//!
//! This crate provides the byte-level plumbing under the bin-json packed
//! buffer format:
//!
//! - [`Writer`] - Writes binary data to an auto-growing buffer
//! - [`Reader`] - Reads binary data from a byte slice with cursor tracking
//!   and clamped reads
//! - [`strings`] - Fixed-width text codecs (1 and 2 bytes per code unit)
//!
//! Reads never panic: a read past the end of the buffer returns a short
//! (possibly empty) slice. The packed buffer format carries no length-sum
//! validation, so a corrupt header must degrade into truncated trailing
//! segments rather than an out-of-bounds access.
//!
//! # Example
//!
//! ```
//! use bin_json_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.ascii("5,3");
//! writer.u8(0);
//! writer.buf(b"helloabc");
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! let terminator = reader.find(0).unwrap();
//! assert_eq!(reader.buf(terminator), b"5,3");
//! ```

mod reader;
mod writer;

pub mod strings;

pub use reader::Reader;
pub use writer::Writer;
