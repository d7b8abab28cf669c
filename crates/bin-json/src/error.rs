//! Codec error type.

use thiserror::Error;

/// Failures raised by [`decode`](crate::BinJsonCodec::decode).
///
/// Only structurally invalid decode input is raised as an error; every
/// other anomaly (unresolvable placeholders, truncated packed buffers)
/// degrades into best-effort data instead.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The decode input was not buffer-shaped. The message names what was
    /// actually received.
    #[error("expected a packed buffer, received {0}")]
    NotABuffer(&'static str),

    /// The decode input was the text rendering of a buffer object, which
    /// usually means the packed buffer was stringified before transport.
    #[error("received `{0}`, the text rendering of a buffer; pass the packed buffer's raw bytes instead of stringifying it")]
    StringifiedBuffer(String),

    /// The packed buffer's JSON segment failed to parse.
    #[error("packed JSON segment is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
