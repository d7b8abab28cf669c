//! The bin-json value tree and its binary leaves.

use serde_json::Value as Json;

/// The typed-array kind of a binary leaf, preserved across a round trip.
///
/// `Uint8` is the untyped byte view and is never tagged on the wire; the
/// other kinds carry a one-byte tag inside the placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayKind {
    Uint8,
    Int8,
    Uint16,
    Int16,
    Uint32,
    Int32,
    Float32,
    Float64,
}

impl ArrayKind {
    /// The wire tag for this kind, or `None` for the untyped byte view.
    pub fn tag(self) -> Option<u8> {
        match self {
            ArrayKind::Uint8 => None,
            ArrayKind::Int8 => Some(1),
            ArrayKind::Uint16 => Some(2),
            ArrayKind::Int16 => Some(3),
            ArrayKind::Uint32 => Some(4),
            ArrayKind::Int32 => Some(5),
            ArrayKind::Float32 => Some(6),
            ArrayKind::Float64 => Some(7),
        }
    }

    /// Resolves a wire tag back to a kind. Unknown tags resolve to `None`.
    pub fn from_tag(tag: u8) -> Option<ArrayKind> {
        match tag {
            1 => Some(ArrayKind::Int8),
            2 => Some(ArrayKind::Uint16),
            3 => Some(ArrayKind::Int16),
            4 => Some(ArrayKind::Uint32),
            5 => Some(ArrayKind::Int32),
            6 => Some(ArrayKind::Float32),
            7 => Some(ArrayKind::Float64),
            _ => None,
        }
    }

    /// Bytes per element.
    pub fn unit_size(self) -> usize {
        match self {
            ArrayKind::Uint8 | ArrayKind::Int8 => 1,
            ArrayKind::Uint16 | ArrayKind::Int16 => 2,
            ArrayKind::Uint32 | ArrayKind::Int32 | ArrayKind::Float32 => 4,
            ArrayKind::Float64 => 8,
        }
    }
}

/// A fixed-width binary payload plus the [`ArrayKind`] it was built from.
///
/// Element byte order is little-endian, the in-memory layout of the typed
/// arrays this wire format interoperates with.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedArray {
    pub kind: ArrayKind,
    pub data: Vec<u8>,
}

impl TypedArray {
    pub fn new(kind: ArrayKind, data: Vec<u8>) -> Self {
        Self { kind, data }
    }

    /// An untyped byte view over `data`.
    pub fn bytes(data: Vec<u8>) -> Self {
        Self::new(ArrayKind::Uint8, data)
    }

    pub fn from_i8(values: &[i8]) -> Self {
        Self::new(ArrayKind::Int8, values.iter().map(|&v| v as u8).collect())
    }

    pub fn from_u16(values: &[u16]) -> Self {
        Self::new(ArrayKind::Uint16, le_bytes(values, u16::to_le_bytes))
    }

    pub fn from_i16(values: &[i16]) -> Self {
        Self::new(ArrayKind::Int16, le_bytes(values, i16::to_le_bytes))
    }

    pub fn from_u32(values: &[u32]) -> Self {
        Self::new(ArrayKind::Uint32, le_bytes(values, u32::to_le_bytes))
    }

    pub fn from_i32(values: &[i32]) -> Self {
        Self::new(ArrayKind::Int32, le_bytes(values, i32::to_le_bytes))
    }

    pub fn from_f32(values: &[f32]) -> Self {
        Self::new(ArrayKind::Float32, le_bytes(values, f32::to_le_bytes))
    }

    pub fn from_f64(values: &[f64]) -> Self {
        Self::new(ArrayKind::Float64, le_bytes(values, f64::to_le_bytes))
    }

    /// Number of whole elements in the payload.
    pub fn len(&self) -> usize {
        self.data.len() / self.kind.unit_size()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn to_i8(&self) -> Vec<i8> {
        self.data.iter().map(|&b| b as i8).collect()
    }

    pub fn to_u16(&self) -> Vec<u16> {
        le_values(&self.data, u16::from_le_bytes)
    }

    pub fn to_i16(&self) -> Vec<i16> {
        le_values(&self.data, i16::from_le_bytes)
    }

    pub fn to_u32(&self) -> Vec<u32> {
        le_values(&self.data, u32::from_le_bytes)
    }

    pub fn to_i32(&self) -> Vec<i32> {
        le_values(&self.data, i32::from_le_bytes)
    }

    pub fn to_f32(&self) -> Vec<f32> {
        le_values(&self.data, f32::from_le_bytes)
    }

    pub fn to_f64(&self) -> Vec<f64> {
        le_values(&self.data, f64::from_le_bytes)
    }
}

fn le_bytes<T: Copy, const N: usize>(values: &[T], to_le: fn(T) -> [u8; N]) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * N);
    for &value in values {
        out.extend_from_slice(&to_le(value));
    }
    out
}

fn le_values<T, const N: usize>(data: &[u8], from_le: fn([u8; N]) -> T) -> Vec<T> {
    data.chunks_exact(N)
        .map(|chunk| {
            let mut bytes = [0u8; N];
            bytes.copy_from_slice(chunk);
            from_le(bytes)
        })
        .collect()
}

/// Any JSON-representable value, possibly with [`TypedArray`] leaves in
/// place of ordinary values anywhere in the tree.
///
/// `Undefined` is the no-value sentinel: encoding it produces no output,
/// and inside a tree it follows JSON coercion (dropped from objects,
/// `null` in arrays). Object entries preserve insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum BinValue {
    Undefined,
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Str(String),
    Array(Vec<BinValue>),
    Object(Vec<(String, BinValue)>),
    Binary(TypedArray),
}

impl From<Json> for BinValue {
    fn from(value: Json) -> Self {
        match value {
            Json::Null => BinValue::Null,
            Json::Bool(b) => BinValue::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => BinValue::Integer(i),
                None => BinValue::Float(n.as_f64().unwrap_or(0.0)),
            },
            Json::String(s) => BinValue::Str(s),
            Json::Array(items) => BinValue::Array(items.into_iter().map(Into::into).collect()),
            Json::Object(map) => {
                BinValue::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<bool> for BinValue {
    fn from(value: bool) -> Self {
        BinValue::Bool(value)
    }
}

impl From<i32> for BinValue {
    fn from(value: i32) -> Self {
        BinValue::Integer(i64::from(value))
    }
}

impl From<i64> for BinValue {
    fn from(value: i64) -> Self {
        BinValue::Integer(value)
    }
}

impl From<f64> for BinValue {
    fn from(value: f64) -> Self {
        BinValue::Float(value)
    }
}

impl From<&str> for BinValue {
    fn from(value: &str) -> Self {
        BinValue::Str(value.to_string())
    }
}

impl From<String> for BinValue {
    fn from(value: String) -> Self {
        BinValue::Str(value)
    }
}

impl From<Vec<u8>> for BinValue {
    fn from(value: Vec<u8>) -> Self {
        BinValue::Binary(TypedArray::bytes(value))
    }
}

impl From<TypedArray> for BinValue {
    fn from(value: TypedArray) -> Self {
        BinValue::Binary(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tag_roundtrip() {
        let kinds = [
            ArrayKind::Int8,
            ArrayKind::Uint16,
            ArrayKind::Int16,
            ArrayKind::Uint32,
            ArrayKind::Int32,
            ArrayKind::Float32,
            ArrayKind::Float64,
        ];
        for kind in kinds {
            let tag = kind.tag().unwrap();
            assert_eq!(ArrayKind::from_tag(tag), Some(kind));
        }
        assert_eq!(ArrayKind::Uint8.tag(), None);
        assert_eq!(ArrayKind::from_tag(0), None);
        assert_eq!(ArrayKind::from_tag(8), None);
    }

    #[test]
    fn test_typed_views_roundtrip() {
        assert_eq!(TypedArray::from_i8(&[-1, 2]).to_i8(), vec![-1, 2]);
        assert_eq!(TypedArray::from_u16(&[16]).to_u16(), vec![16]);
        assert_eq!(TypedArray::from_i16(&[-16]).to_i16(), vec![-16]);
        assert_eq!(TypedArray::from_u32(&[32]).to_u32(), vec![32]);
        assert_eq!(TypedArray::from_i32(&[-32]).to_i32(), vec![-32]);
        assert_eq!(TypedArray::from_f32(&[32.5]).to_f32(), vec![32.5]);
        assert_eq!(TypedArray::from_f64(&[64.5]).to_f64(), vec![64.5]);
    }

    #[test]
    fn test_element_layout_is_little_endian() {
        assert_eq!(TypedArray::from_u16(&[0x0102]).data, vec![0x02, 0x01]);
        assert_eq!(TypedArray::from_u16(&[0x0102]).len(), 1);
    }

    #[test]
    fn test_from_json_preserves_order() {
        let value = BinValue::from(json!({"z": 1, "a": [true, null, 2.5]}));
        assert_eq!(
            value,
            BinValue::Object(vec![
                ("z".to_string(), BinValue::Integer(1)),
                (
                    "a".to_string(),
                    BinValue::Array(vec![
                        BinValue::Bool(true),
                        BinValue::Null,
                        BinValue::Float(2.5),
                    ]),
                ),
            ]),
        );
    }
}
