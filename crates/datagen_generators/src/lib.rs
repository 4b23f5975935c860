//! # datagen_generators: Field-Value Generators
//!
//! Generators produce one field value per synthesised document and stream
//! it straight into the worker's [`DocumentBuffer`](datagen_core::DocumentBuffer).
//!
//! ## Module Structure
//!
//! - [`bounds`]: coordinates, bounding boxes and their validation
//! - [`position`]: bounded longitude/latitude pairs
//! - [`generator`]: the [`ValueGenerator`] seam and output encodings
//! - [`config`]: serde construction input
//! - [`batch`]: deterministic parallel generation with one random source
//!   per worker
//! - [`error`]: error types
//!
//! ## Usage Example
//!
//! ```rust
//! use datagen_core::{DatagenRng, DocumentBuffer};
//! use datagen_generators::position::PositionGenerator;
//! use datagen_generators::ValueGenerator;
//!
//! let generator = PositionGenerator::new(Some(&[-4.5, 53.0]), Some(&[1.7, 50.0]));
//! let mut rng = DatagenRng::from_seed(1);
//! let mut buffer = DocumentBuffer::new();
//!
//! generator.encode_value_as_string(&mut rng, &mut buffer);
//! let text = std::str::from_utf8(buffer.as_bytes()).unwrap();
//! assert!(text.starts_with('[') && text.ends_with(']'));
//! ```

#![warn(missing_docs)]

pub mod batch;
pub mod bounds;
pub mod config;
pub mod error;
pub mod generator;
pub mod position;

pub use batch::{generate_batch, BatchConfig};
pub use bounds::{validate_coordinates, BoundingBox, Coordinate};
pub use config::PositionConfig;
pub use error::GeneratorError;
pub use generator::{Encoding, ValueGenerator};
pub use position::PositionGenerator;
