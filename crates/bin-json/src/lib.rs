//! Serialize JSON intermixed with binary typed arrays into a single buffer.
//!
//! Ordinary JSON cannot hold raw bytes without a second transport channel
//! or base64 inflation. This crate walks a value tree, moves every binary
//! leaf into a side buffer list behind a small placeholder object, and
//! packs the side buffers together with the stringified JSON into one
//! contiguous, self-describing buffer. Decoding reverses both steps and
//! restores each leaf to its original typed-array kind.
//!
//! # Example
//!
//! ```
//! use bin_json::{decode_bytes, encode, BinValue, TypedArray};
//!
//! let value = BinValue::Object(vec![
//!     ("label".to_string(), "reading".into()),
//!     ("samples".to_string(), TypedArray::from_f32(&[0.5, -0.5]).into()),
//! ]);
//!
//! let packed = encode(&value).unwrap();
//! let restored = decode_bytes(&packed).unwrap();
//! assert_eq!(restored, value);
//! ```
//!
//! Per-instance configuration (placeholder key, host buffer hook, coerced
//! buffer recognizer) lives on [`BinJsonCodec`].

mod codec;
mod error;
mod serialize;
mod value;

pub mod packager;

pub use codec::{tagged_byte_object, BinJsonCodec, BufferHook, Recognizer, DEFAULT_SECRET_KEY};
pub use error::DecodeError;
pub use value::{ArrayKind, BinValue, TypedArray};

/// Encodes a value with a default-configured codec.
pub fn encode(value: &BinValue) -> Option<Vec<u8>> {
    BinJsonCodec::new().encode(value)
}

/// Decodes a packed buffer with a default-configured codec.
pub fn decode_bytes(bytes: &[u8]) -> Result<BinValue, DecodeError> {
    BinJsonCodec::new().decode_bytes(bytes)
}
