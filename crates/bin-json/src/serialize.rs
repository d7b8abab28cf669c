//! Structural serializer and deserializer.
//!
//! Two explicit passes in each direction. Serializing walks the value tree
//! pre-order, moves every binary leaf into a side buffer list, substitutes
//! a placeholder object carrying the leaf's list index (and kind tag, when
//! typed), and renders the remaining tree as ordinary JSON text.
//! Deserializing parses that text and walks it post-order, swapping
//! placeholder-shaped objects back for reconstructed typed views over the
//! side buffers.
//!
//! Traversal order is part of the contract: object entries in insertion
//! order, then array indices in order. The side list index is the
//! extraction sequence number under that order.

use serde_json::{json, Map, Value as Json};

use crate::codec::{BufferHook, Recognizer};
use crate::value::{ArrayKind, BinValue, TypedArray};

/// Stringifies a value tree, extracting binary leaves into a side list.
pub(crate) fn serialize(
    value: &BinValue,
    secret_key: &str,
    recognizer: Option<&Recognizer>,
) -> (String, Vec<Vec<u8>>) {
    let mut side = Vec::new();
    let tree = extract(value, secret_key, recognizer, &mut side);
    (tree.to_string(), side)
}

fn extract(
    value: &BinValue,
    secret_key: &str,
    recognizer: Option<&Recognizer>,
    side: &mut Vec<Vec<u8>>,
) -> Json {
    match value {
        // Undefined only reaches here inside a tree; the facade short-circuits
        // a top-level Undefined before serialization.
        BinValue::Undefined | BinValue::Null => Json::Null,
        BinValue::Bool(b) => Json::Bool(*b),
        BinValue::Integer(i) => Json::from(*i),
        // Non-finite floats are not representable in JSON and coerce to null.
        BinValue::Float(f) => serde_json::Number::from_f64(*f)
            .map(Json::Number)
            .unwrap_or(Json::Null),
        BinValue::Str(s) => Json::String(s.clone()),
        BinValue::Array(items) => Json::Array(
            items
                .iter()
                .map(|item| extract(item, secret_key, recognizer, side))
                .collect(),
        ),
        BinValue::Object(entries) => {
            if let Some(data) = recognizer.and_then(|recognize| recognize(entries)) {
                return placeholder(secret_key, push_segment(side, data), None);
            }
            let mut map = Map::with_capacity(entries.len());
            for (key, entry) in entries {
                if matches!(entry, BinValue::Undefined) {
                    continue;
                }
                map.insert(
                    key.clone(),
                    extract(entry, secret_key, recognizer, side),
                );
            }
            Json::Object(map)
        }
        BinValue::Binary(array) => {
            let index = push_segment(side, array.data.clone());
            placeholder(secret_key, index, array.kind.tag())
        }
    }
}

fn push_segment(side: &mut Vec<Vec<u8>>, data: Vec<u8>) -> usize {
    let index = side.len();
    side.push(data);
    index
}

fn placeholder(secret_key: &str, index: usize, tag: Option<u8>) -> Json {
    let pointer = match tag {
        Some(tag) => json!([index, tag]),
        None => json!([index]),
    };
    let mut map = Map::with_capacity(1);
    map.insert(secret_key.to_string(), pointer);
    Json::Object(map)
}

/// Rebuilds a value tree from parsed JSON, resolving placeholders against
/// the side buffer list.
pub(crate) fn deserialize(
    node: Json,
    side: &[&[u8]],
    secret_key: &str,
    hook: Option<&BufferHook>,
) -> BinValue {
    match node {
        Json::Null => BinValue::Null,
        Json::Bool(b) => BinValue::Bool(b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => BinValue::Integer(i),
            None => BinValue::Float(n.as_f64().unwrap_or(0.0)),
        },
        Json::String(s) => BinValue::Str(s),
        Json::Array(items) => BinValue::Array(
            items
                .into_iter()
                .map(|item| deserialize(item, side, secret_key, hook))
                .collect(),
        ),
        Json::Object(map) => {
            if let Some((kind, data)) = resolve_placeholder(&map, side, secret_key) {
                return match hook {
                    Some(make) => make(kind, data),
                    None => BinValue::Binary(TypedArray::new(kind, data)),
                };
            }
            BinValue::Object(
                map.into_iter()
                    .map(|(key, entry)| (key, deserialize(entry, side, secret_key, hook)))
                    .collect(),
            )
        }
    }
}

/// Extracts `(kind, bytes)` when `map` is a resolvable placeholder.
///
/// Anything short of that (no secret key, a non-array pointer, a bad or
/// out-of-range index) returns `None` and the object passes through as
/// ordinary data. User data that coincidentally re-uses the secret key
/// shape must survive a round trip untouched.
fn resolve_placeholder(
    map: &Map<String, Json>,
    side: &[&[u8]],
    secret_key: &str,
) -> Option<(ArrayKind, Vec<u8>)> {
    let pointer = map.get(secret_key)?.as_array()?;
    let index = usize::try_from(pointer.first()?.as_u64()?).ok()?;
    let data = side.get(index)?.to_vec();
    let kind = pointer
        .get(1)
        .and_then(Json::as_u64)
        .and_then(|tag| u8::try_from(tag).ok())
        .and_then(ArrayKind::from_tag)
        .unwrap_or(ArrayKind::Uint8);
    Some((kind, data))
}
