//! Bounded geographic coordinate generator.
//!
//! Each call draws a longitude then a latitude uniformly in coordinate
//! space. Near the poles this over-samples area; the approximation is
//! accepted and kept.
//!
//! ## Binary layout
//!
//! The value is an array sub-document:
//!
//! ```text
//! int32 total_len | 0x01 "0\0" f64 longitude | 0x01 "1\0" f64 latitude | 0x00
//! ```
//!
//! `total_len` is 27 and counts the prefix and terminator.
//!
//! ## Text layout
//!
//! `[<longitude>,<latitude>]`, each number fixed-point with 10 decimals.

use datagen_core::element::INDEX_KEYS;
use datagen_core::{DatagenRng, DocumentBuffer, ElementType};

use crate::bounds::{BoundingBox, Coordinate};
use crate::config::PositionConfig;
use crate::generator::ValueGenerator;

/// 2^64 as a float, the exclusive upper bound of a raw draw.
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Fractional digits in the text encoding.
pub const TEXT_PRECISION: usize = 10;

/// Byte length of one encoded position sub-document.
pub const ENCODED_LEN: usize = 4 + 2 * (1 + 2 + 8) + 1;

/// Maps one 64-bit draw onto `[min, max)`.
///
/// Uses all 64 bits: `min + (max - min) * (raw / 2^64)`. Rounding of
/// `raw as f64` can land exactly on `max` for draws within 2^10 of
/// `u64::MAX`.
///
/// # Examples
///
/// ```rust
/// use datagen_core::DatagenRng;
/// use datagen_generators::position::sample_uniform;
///
/// let mut rng = DatagenRng::from_seed(3);
/// let x = sample_uniform(&mut rng, 50.0, 53.0);
/// assert!((50.0..=53.0).contains(&x));
/// ```
#[inline]
pub fn sample_uniform(rng: &mut DatagenRng, min: f64, max: f64) -> f64 {
    min + (max - min) * (rng.next_u64() as f64 / TWO_POW_64)
}

/// Generates `[longitude, latitude]` pairs inside a bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionGenerator {
    bbox: BoundingBox,
}

impl PositionGenerator {
    /// Creates a generator for the box spanned by `top_left` and
    /// `bottom_right`, each `[longitude, latitude]`.
    ///
    /// Missing, malformed or invalid corners select the whole globe; see
    /// [`BoundingBox::from_corners`].
    pub fn new(top_left: Option<&[f64]>, bottom_right: Option<&[f64]>) -> Self {
        Self::with_bounds(BoundingBox::from_corners(top_left, bottom_right))
    }

    /// Creates a generator for an already validated box.
    #[inline]
    pub fn with_bounds(bbox: BoundingBox) -> Self {
        Self { bbox }
    }

    /// Creates a generator from its deserialised configuration.
    pub fn from_config(config: &PositionConfig) -> Self {
        Self::new(config.top_left.as_deref(), config.bottom_right.as_deref())
    }

    /// The box values are drawn from.
    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    /// Draws one coordinate: longitude first, then latitude.
    pub fn sample(&self, rng: &mut DatagenRng) -> Coordinate {
        let top_left = self.bbox.top_left();
        let bottom_right = self.bbox.bottom_right();

        let longitude = sample_uniform(rng, top_left.longitude, bottom_right.longitude);
        // Latitude decreases from top to bottom.
        let latitude = sample_uniform(rng, bottom_right.latitude, top_left.latitude);

        Coordinate::new(longitude, latitude)
    }
}

impl Default for PositionGenerator {
    fn default() -> Self {
        Self::with_bounds(BoundingBox::WORLD)
    }
}

impl ValueGenerator for PositionGenerator {
    fn element_type(&self) -> ElementType {
        ElementType::Array
    }

    fn encode_value(&self, rng: &mut DatagenRng, buffer: &mut DocumentBuffer) {
        let slot = buffer.begin_document();
        let position = self.sample(rng);

        for (key, value) in INDEX_KEYS.iter().zip(position.to_array()) {
            buffer.write_byte(ElementType::Double.as_byte());
            buffer.write(key);
            buffer.write_f64_le(value);
        }

        buffer.end_document(slot);
    }

    fn encode_value_as_string(&self, rng: &mut DatagenRng, buffer: &mut DocumentBuffer) {
        let position = self.sample(rng);

        buffer.write_byte(b'[');
        buffer.write_string(&format!("{:.*}", TEXT_PRECISION, position.longitude));
        buffer.write_byte(b',');
        buffer.write_string(&format!("{:.*}", TEXT_PRECISION, position.latitude));
        buffer.write_byte(b']');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn uk() -> PositionGenerator {
        PositionGenerator::new(Some(&[-4.5, 53.0]), Some(&[1.7, 50.0]))
    }

    #[test]
    fn test_sample_uniform_bounds() {
        let mut rng = DatagenRng::from_seed(11);
        for _ in 0..10_000 {
            let x = sample_uniform(&mut rng, -1.0, 1.0);
            assert!((-1.0..=1.0).contains(&x), "{} outside [-1, 1]", x);
        }
    }

    #[test]
    fn test_sample_uniform_mean() {
        let mut rng = DatagenRng::from_seed(12);
        let n = 100_000;
        let mean = (0..n).map(|_| sample_uniform(&mut rng, 10.0, 20.0)).sum::<f64>() / n as f64;
        assert_relative_eq!(mean, 15.0, epsilon = 0.05);
    }

    #[test]
    fn test_samples_within_box() {
        let generator = uk();
        let bbox = generator.bounding_box();
        let mut rng = DatagenRng::from_seed(42);

        for _ in 0..10_000 {
            let coord = generator.sample(&mut rng);
            assert!(bbox.contains(coord), "{:?} outside {:?}", coord, bbox);
        }
    }

    #[test]
    fn test_invalid_box_behaves_like_default() {
        let reversed = PositionGenerator::new(Some(&[10.0, 5.0]), Some(&[0.0, 20.0]));
        let default = PositionGenerator::default();
        assert_eq!(reversed, default);

        let mut rng1 = DatagenRng::from_seed(5);
        let mut rng2 = DatagenRng::from_seed(5);
        for _ in 0..100 {
            assert_eq!(reversed.sample(&mut rng1), default.sample(&mut rng2));
        }
    }

    #[test]
    fn test_default_spans_globe() {
        let generator = PositionGenerator::new(None, None);
        let mut rng = DatagenRng::from_seed(77);
        let samples: Vec<Coordinate> = (0..10_000).map(|_| generator.sample(&mut rng)).collect();

        assert!(samples.iter().any(|c| c.longitude < -150.0));
        assert!(samples.iter().any(|c| c.longitude > 150.0));
        assert!(samples.iter().any(|c| c.latitude < -75.0));
        assert!(samples.iter().any(|c| c.latitude > 75.0));
    }

    #[test]
    fn test_binary_layout() {
        let generator = uk();
        let mut rng = DatagenRng::from_seed(1);
        let mut buffer = DocumentBuffer::new();
        generator.encode_value(&mut rng, &mut buffer);

        let bytes = buffer.as_bytes();
        assert_eq!(bytes.len(), ENCODED_LEN);
        assert_eq!(&bytes[0..4], &(ENCODED_LEN as i32).to_le_bytes());
        assert_eq!(&bytes[4..7], &[0x01, b'0', 0x00]);
        assert_eq!(&bytes[15..18], &[0x01, b'1', 0x00]);
        assert_eq!(bytes[26], 0x00);

        let mut expected_rng = DatagenRng::from_seed(1);
        let expected = generator.sample(&mut expected_rng);
        let lon = f64::from_le_bytes(bytes[7..15].try_into().unwrap());
        let lat = f64::from_le_bytes(bytes[18..26].try_into().unwrap());
        assert_eq!(lon, expected.longitude);
        assert_eq!(lat, expected.latitude);
    }

    #[test]
    fn test_text_layout() {
        let generator = uk();
        let mut rng = DatagenRng::from_seed(1);
        let mut buffer = DocumentBuffer::new();
        generator.encode_value_as_string(&mut rng, &mut buffer);

        let mut expected_rng = DatagenRng::from_seed(1);
        let expected = generator.sample(&mut expected_rng);
        let text = std::str::from_utf8(buffer.as_bytes()).unwrap();
        assert_eq!(
            text,
            format!("[{:.10},{:.10}]", expected.longitude, expected.latitude)
        );
    }

    #[test]
    fn test_element_type_is_array() {
        assert_eq!(uk().element_type(), ElementType::Array);
    }

    #[test]
    fn test_each_encoding_draws_twice() {
        let generator = uk();
        let mut rng = DatagenRng::from_seed(9);
        let mut reference = DatagenRng::from_seed(9);
        let mut buffer = DocumentBuffer::new();

        generator.encode_value(&mut rng, &mut buffer);
        generator.encode_value_as_string(&mut rng, &mut buffer);
        for _ in 0..4 {
            reference.next_u64();
        }
        assert_eq!(rng.next_u64(), reference.next_u64());
    }
}
