//! Binary document element tags.
//!
//! Generators emit values in the self-describing binary document format the
//! surrounding pipeline writes: each element is a one-byte type tag, a
//! NUL-terminated key, then the payload. Only the tags the coordinate
//! generator needs are listed here.

/// Element type tag written before each key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ElementType {
    /// 64-bit IEEE 754 float, little-endian payload.
    Double = 0x01,
    /// Embedded document whose keys are positional indexes.
    Array = 0x04,
}

impl ElementType {
    /// Returns the tag byte as written on the wire.
    #[inline]
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

/// Keys of the first array positions, already NUL-terminated.
///
/// Array elements are keyed by their decimal index, so the first two
/// positions are `"0"` and `"1"`.
pub const INDEX_KEYS: [&[u8]; 2] = [b"0\0", b"1\0"];

/// Terminator closing every document and array.
pub const DOCUMENT_TERMINATOR: u8 = 0x00;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_bytes() {
        assert_eq!(ElementType::Double.as_byte(), 0x01);
        assert_eq!(ElementType::Array.as_byte(), 0x04);
    }

    #[test]
    fn test_index_keys_are_nul_terminated() {
        for (i, key) in INDEX_KEYS.iter().enumerate() {
            assert_eq!(key.len(), 2);
            assert_eq!(key[0], b'0' + i as u8);
            assert_eq!(key[1], 0);
        }
    }
}
