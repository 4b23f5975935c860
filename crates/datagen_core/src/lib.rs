//! # datagen_core: Collaborators for Document Value Generators
//!
//! This crate holds the pieces every field-value generator of the document
//! synthesis pipeline shares:
//!
//! - [`buffer`]: growable output buffer with patch-back writes for
//!   length-prefixed sub-documents
//! - [`rng`]: seeded, single-owner pseudo-random source
//! - [`element`]: binary document element tags and positional keys
//! - [`error`]: error types
//!
//! ## Ownership Model
//!
//! Neither the buffer nor the random source is global. A worker owns one of
//! each and lends them to generators per call as `&mut`, so no two writers
//! can interleave between a length reservation and its patch-back.
//!
//! ## Usage Example
//!
//! ```rust
//! use datagen_core::buffer::DocumentBuffer;
//! use datagen_core::rng::DatagenRng;
//!
//! let mut rng = DatagenRng::from_seed(42);
//! let mut buffer = DocumentBuffer::new();
//!
//! let slot = buffer.begin_document();
//! buffer.write_f64_le(rng.next_u64() as f64);
//! buffer.end_document(slot);
//!
//! assert_eq!(buffer.len(), 4 + 8 + 1);
//! ```

#![warn(missing_docs)]

pub mod buffer;
pub mod element;
pub mod error;
pub mod rng;

pub use buffer::{DocumentBuffer, DocumentSlot};
pub use element::ElementType;
pub use error::BufferError;
pub use rng::DatagenRng;
