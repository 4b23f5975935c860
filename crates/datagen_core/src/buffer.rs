//! Growable output buffer shared by the generators of one document.
//!
//! [`DocumentBuffer`] is an append-mostly byte stream with one extra
//! capability: overwriting a range that was written earlier. Embedded
//! documents need it because their 4-byte length prefix precedes content
//! whose size is only known once it has been written:
//!
//! 1. [`begin_document`](DocumentBuffer::begin_document) reserves the prefix
//!    and remembers its offset in a [`DocumentSlot`]
//! 2. the caller appends the elements
//! 3. [`end_document`](DocumentBuffer::end_document) appends the terminator
//!    and patches the total length back into the prefix
//!
//! The slot addresses an absolute offset, so nothing may truncate the
//! buffer between steps 1 and 3.

use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};

use crate::element::DOCUMENT_TERMINATOR;
use crate::error::BufferError;

/// Size of the little-endian `i32` length prefix of a document.
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Reserved length prefix of an embedded document still being written.
///
/// Returned by [`DocumentBuffer::begin_document`] and consumed by
/// [`DocumentBuffer::end_document`]. Not `Clone`: each reservation is
/// patched exactly once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "an unfinished document leaves a zero length prefix"]
pub struct DocumentSlot {
    offset: usize,
}

impl DocumentSlot {
    /// Offset of the length prefix within the buffer.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Output buffer for generated document bytes.
///
/// # Examples
///
/// ```rust
/// use datagen_core::buffer::DocumentBuffer;
///
/// let mut buffer = DocumentBuffer::new();
/// buffer.write_byte(b'[');
/// let offset = buffer.reserve(2);
/// buffer.write_byte(b']');
/// buffer.write_at(offset, b"42").unwrap();
///
/// assert_eq!(buffer.as_bytes(), b"[42]");
/// ```
#[derive(Debug, Default, Clone)]
pub struct DocumentBuffer {
    inner: BytesMut,
}

impl DocumentBuffer {
    /// Creates an empty buffer.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer able to hold `capacity` bytes without
    /// reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: BytesMut::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if nothing has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Bytes written so far.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    /// Appends `n` zero bytes and returns the offset of the first one.
    ///
    /// The bytes are placeholders, meant to be overwritten later through
    /// [`write_at`](Self::write_at).
    #[inline]
    pub fn reserve(&mut self, n: usize) -> usize {
        let offset = self.inner.len();
        self.inner.put_bytes(0, n);
        offset
    }

    /// Appends a byte sequence.
    #[inline]
    pub fn write(&mut self, bytes: &[u8]) {
        self.inner.extend_from_slice(bytes);
    }

    /// Appends a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.inner.put_u8(byte);
    }

    /// Appends the UTF-8 bytes of `s`, without terminator.
    #[inline]
    pub fn write_string(&mut self, s: &str) {
        self.inner.extend_from_slice(s.as_bytes());
    }

    /// Appends a 64-bit float in little-endian byte order.
    #[inline]
    pub fn write_f64_le(&mut self, value: f64) {
        self.inner.put_f64_le(value);
    }

    /// Appends a 32-bit signed integer in little-endian byte order.
    #[inline]
    pub fn write_i32_le(&mut self, value: i32) {
        self.inner.put_i32_le(value);
    }

    /// Overwrites `bytes.len()` bytes starting at `offset`.
    ///
    /// Bytes outside the range, including everything written after it,
    /// are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfBounds`] if the range does not lie
    /// entirely within the bytes already written.
    pub fn write_at(&mut self, offset: usize, bytes: &[u8]) -> Result<(), BufferError> {
        let buffer_len = self.inner.len();
        let target = offset
            .checked_add(bytes.len())
            .and_then(|end| self.inner.get_mut(offset..end))
            .ok_or(BufferError::OutOfBounds {
                offset,
                len: bytes.len(),
                buffer_len,
            })?;
        target.copy_from_slice(bytes);
        Ok(())
    }

    /// Starts an embedded document by reserving its length prefix.
    #[inline]
    pub fn begin_document(&mut self) -> DocumentSlot {
        DocumentSlot {
            offset: self.reserve(LENGTH_PREFIX_SIZE),
        }
    }

    /// Closes the document started at `slot`.
    ///
    /// Appends the terminator, then writes the document's total length,
    /// prefix and terminator included, into the reserved prefix as a
    /// little-endian `i32`. Returns that length.
    ///
    /// # Panics
    ///
    /// Panics if the buffer was truncated below the slot since
    /// [`begin_document`](Self::begin_document), or if the document is
    /// longer than `i32::MAX` bytes. Both break the caller's single-writer
    /// contract.
    pub fn end_document(&mut self, slot: DocumentSlot) -> usize {
        self.inner.put_u8(DOCUMENT_TERMINATOR);

        let len = self
            .inner
            .len()
            .checked_sub(slot.offset)
            .filter(|&len| len >= LENGTH_PREFIX_SIZE + 1)
            .unwrap_or_else(|| panic!("Stale document slot at offset {}", slot.offset));
        let prefix = match i32::try_from(len) {
            Ok(prefix) => prefix,
            Err(_) => panic!("Document of {} bytes overflows its length prefix", len),
        };

        let mut rewound = &mut self.inner.as_mut()[slot.offset..];
        rewound.put_i32_le(prefix);
        len
    }

    /// Shortens the buffer to `len` bytes. No effect if already shorter.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.inner.truncate(len);
    }

    /// Discards all bytes, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Takes the bytes written so far, leaving the buffer empty.
    #[inline]
    pub fn split(&mut self) -> Bytes {
        self.inner.split().freeze()
    }

    /// Consumes the buffer and returns its bytes.
    #[inline]
    pub fn freeze(self) -> Bytes {
        self.inner.freeze()
    }
}

impl fmt::Write for DocumentBuffer {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_string(s);
        Ok(())
    }
}
