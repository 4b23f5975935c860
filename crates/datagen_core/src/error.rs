//! Error types for the shared generator collaborators.

use thiserror::Error;

/// Output buffer error.
///
/// Raised by [`DocumentBuffer::write_at`](crate::buffer::DocumentBuffer::write_at)
/// when the target range does not lie inside the bytes already written.
///
/// # Examples
/// ```
/// use datagen_core::error::BufferError;
///
/// let err = BufferError::OutOfBounds { offset: 8, len: 4, buffer_len: 10 };
/// assert_eq!(
///     format!("{}", err),
///     "Write of 4 bytes at offset 8 exceeds buffer length 10"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Overwrite range extends past the current end of the buffer.
    #[error("Write of {len} bytes at offset {offset} exceeds buffer length {buffer_len}")]
    OutOfBounds {
        /// Start of the requested range.
        offset: usize,
        /// Number of bytes to overwrite.
        len: usize,
        /// Buffer length at the time of the call.
        buffer_len: usize,
    },
}
