//! The encode/decode facade.

use bin_json_buffers::strings::wide;
use serde_json::Value as Json;

use crate::error::DecodeError;
use crate::packager::{pack, unpack};
use crate::serialize::{deserialize, serialize};
use crate::value::{ArrayKind, BinValue};

/// The default placeholder key.
pub const DEFAULT_SECRET_KEY: &str = "BIN_JSON_PNTR";

/// Constructs the value for a reconstructed binary leaf during decode.
///
/// Installed via [`BinJsonCodec::use_buffer_hook`] to interoperate with a
/// host-specific buffer representation; when absent the codec builds its
/// own [`TypedArray`](crate::TypedArray) leaves.
pub type BufferHook = Box<dyn Fn(ArrayKind, Vec<u8>) -> BinValue + Send + Sync>;

/// Recognizes an object that is really a binary buffer coerced into plain
/// data by some earlier serialization layer.
///
/// Consulted for every object node during encode; returning `Some` bytes
/// reconstitutes the object into an untyped binary leaf before extraction.
pub type Recognizer = Box<dyn Fn(&[(String, BinValue)]) -> Option<Vec<u8>> + Send + Sync>;

/// A ready-made [`Recognizer`] for the `{"type": <name>, "data": [byte,
/// ...]}` shape some buffer libraries produce when their own JSON hook runs
/// first. Not installed by default.
pub fn tagged_byte_object(entries: &[(String, BinValue)]) -> Option<Vec<u8>> {
    let mut tagged = false;
    let mut data = None;
    for (key, entry) in entries {
        match (key.as_str(), entry) {
            ("type", BinValue::Str(_)) => tagged = true,
            ("data", BinValue::Array(items)) => {
                let mut bytes = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        BinValue::Integer(i) => bytes.push(u8::try_from(*i).ok()?),
                        _ => return None,
                    }
                }
                data = Some(bytes);
            }
            _ => return None,
        }
    }
    if tagged {
        data
    } else {
        None
    }
}

/// Serializes JSON-compatible values intermixed with binary typed arrays
/// into a single packed buffer, and back.
///
/// Each codec instance owns its configuration: the placeholder secret key,
/// an optional host buffer hook, and an optional coerced-buffer recognizer.
/// Independent instances with different keys coexist safely; a key changed
/// between encode and decode makes placeholders unrecognizable, and they
/// come back verbatim rather than failing.
///
/// # Example
///
/// ```
/// use bin_json::{BinJsonCodec, BinValue, TypedArray};
///
/// let codec = BinJsonCodec::new();
/// let value = BinValue::Object(vec![
///     ("enthusiasm".to_string(), BinValue::Integer(11)),
///     ("data".to_string(), TypedArray::bytes(b"binary!".to_vec()).into()),
/// ]);
///
/// let packed = codec.encode(&value).unwrap();
/// assert_eq!(codec.decode_bytes(&packed).unwrap(), value);
/// ```
pub struct BinJsonCodec {
    secret_key: String,
    buffer_hook: Option<BufferHook>,
    recognizer: Option<Recognizer>,
}

impl Default for BinJsonCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl BinJsonCodec {
    pub fn new() -> Self {
        Self {
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            buffer_hook: None,
            recognizer: None,
        }
    }

    /// The placeholder key in use.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Replaces the placeholder key. Takes effect on the next call; both
    /// sides of a round trip must agree on the key.
    pub fn set_secret_key(&mut self, key: impl Into<String>) {
        self.secret_key = key.into();
    }

    /// Installs or clears the host buffer hook applied to every
    /// reconstructed binary leaf during decode.
    pub fn use_buffer_hook(&mut self, hook: Option<BufferHook>) {
        self.buffer_hook = hook;
    }

    /// Installs or clears the coerced-buffer recognizer consulted for every
    /// object node during encode.
    pub fn use_recognizer(&mut self, recognizer: Option<Recognizer>) {
        self.recognizer = recognizer;
    }

    /// Turns a value tree into a packed buffer.
    ///
    /// Encoding the no-value sentinel is a no-op: `Undefined` in, `None`
    /// out. Everything else produces a buffer, including `Null`.
    pub fn encode(&self, value: &BinValue) -> Option<Vec<u8>> {
        if matches!(value, BinValue::Undefined) {
            return None;
        }

        let (json, side) = serialize(value, &self.secret_key, self.recognizer.as_ref());
        let text = wide::encode(&json);

        let mut segments: Vec<&[u8]> = side.iter().map(Vec::as_slice).collect();
        segments.push(&text);
        Some(pack(&segments))
    }

    /// Decodes a packed buffer passed as a value, validating its shape.
    ///
    /// Anything that is not a binary leaf is rejected with a message naming
    /// what was received; a string that looks like the text rendering of a
    /// buffer object gets a more specific message pointing at the likely
    /// double-stringification.
    pub fn decode(&self, input: &BinValue) -> Result<BinValue, DecodeError> {
        match input {
            BinValue::Binary(array) => self.decode_bytes(&array.data),
            BinValue::Str(s) => {
                if s.starts_with("[object ") && s.ends_with(']') {
                    Err(DecodeError::StringifiedBuffer(s.clone()))
                } else {
                    Err(DecodeError::NotABuffer("a string"))
                }
            }
            BinValue::Integer(_) | BinValue::Float(_) => Err(DecodeError::NotABuffer("a number")),
            BinValue::Bool(_) => Err(DecodeError::NotABuffer("a boolean")),
            BinValue::Null => Err(DecodeError::NotABuffer("null")),
            BinValue::Undefined => Err(DecodeError::NotABuffer("undefined")),
            BinValue::Array(_) => Err(DecodeError::NotABuffer("an array")),
            BinValue::Object(_) => Err(DecodeError::NotABuffer("an object")),
        }
    }

    /// Decodes a packed buffer back into the value it encoded.
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<BinValue, DecodeError> {
        let segments = unpack(bytes);
        let (text, side) = match segments.split_last() {
            Some((text, side)) => (*text, side),
            None => (&[] as &[u8], &[] as &[&[u8]]),
        };

        let json = wide::decode(text);
        let tree: Json = serde_json::from_str(&json)?;
        Ok(deserialize(
            tree,
            side,
            &self.secret_key,
            self.buffer_hook.as_ref(),
        ))
    }
}
