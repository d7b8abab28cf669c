//! Segment packer: many buffers in, one length-headered buffer out.
//!
//! Wire format:
//!
//! ```text
//! <len_0>,<len_1>,...,<len_n-1> \0 <segment 0 bytes><segment 1 bytes>...
//! ```
//!
//! The header is narrow-encoded ASCII decimal lengths in input order,
//! terminated by a single NUL byte; segments follow back to back with no
//! padding or alignment.

use bin_json_buffers::{strings::narrow, Reader, Writer};

/// Combines an ordered list of buffers into one buffer with a length header.
///
/// # Example
///
/// ```
/// use bin_json::packager::pack;
///
/// assert_eq!(pack(&[b"something"]), b"9\0something");
/// ```
pub fn pack<B: AsRef<[u8]>>(buffers: &[B]) -> Vec<u8> {
    let header = buffers
        .iter()
        .map(|buffer| buffer.as_ref().len().to_string())
        .collect::<Vec<_>>()
        .join(",");
    let payload_size: usize = buffers.iter().map(|buffer| buffer.as_ref().len()).sum();

    let mut writer = Writer::with_capacity(header.len() + 1 + payload_size);
    writer.ascii(&header);
    writer.u8(0);
    for buffer in buffers {
        writer.buf(buffer.as_ref());
    }

    writer.flush()
}

/// Splits a packed buffer back into its segments, in order, zero-copy.
///
/// There is no validation that the declared lengths sum to the available
/// payload: overdeclared lengths produce truncated (possibly empty)
/// trailing segments, and a buffer with no NUL terminator yields an empty
/// list. Zero-length segments still occupy a slot.
pub fn unpack(buffer: &[u8]) -> Vec<&[u8]> {
    let mut reader = Reader::new(buffer);
    let Some(terminator) = reader.find(0) else {
        return Vec::new();
    };
    let header = narrow::decode(reader.buf(terminator));
    reader.skip(1);

    if header.is_empty() {
        return Vec::new();
    }

    header
        .split(',')
        .map(|length| reader.buf(length.parse().unwrap_or(0)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_buffer_header() {
        assert_eq!(pack(&[b"something"]), b"9\0something");
    }

    #[test]
    fn test_header_lists_every_length() {
        assert_eq!(
            pack(&[b"cool beans".as_slice(), b"cool potatoes"]),
            b"10,13\0cool beanscool potatoes",
        );
    }

    #[test]
    fn test_empty_buffers() {
        assert_eq!(pack(&[b"", b""]), b"0,0\0");
        assert_eq!(unpack(b"0,0\0"), vec![b"" as &[u8], b""]);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(pack::<&[u8]>(&[]), b"\0");
        assert_eq!(unpack(b"\0"), Vec::<&[u8]>::new());
    }

    #[test]
    fn test_unpack_inverse() {
        let buffers: Vec<&[u8]> = vec![b"some data", b"", b"more data", &[0, 1, 0xff]];
        let packed = pack(&buffers);
        assert_eq!(unpack(&packed), buffers);
    }

    #[test]
    fn test_unpack_without_terminator() {
        assert_eq!(unpack(b"10,13"), Vec::<&[u8]>::new());
        assert_eq!(unpack(b""), Vec::<&[u8]>::new());
    }

    #[test]
    fn test_unpack_overdeclared_length_truncates() {
        let segments = unpack(b"4,9\0abcdef");
        assert_eq!(segments, vec![b"abcd" as &[u8], b"ef"]);
    }
}
