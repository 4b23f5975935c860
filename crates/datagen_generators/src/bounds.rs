//! Geographic coordinates and bounding boxes.
//!
//! Coordinates follow the `[longitude, latitude]` order everywhere. A box is
//! given by its north-west (`top_left`) and south-east (`bottom_right`)
//! corners.

use std::str::FromStr;

use tracing::debug;

use crate::error::GeneratorError;

/// Smallest legal longitude.
pub const MIN_LONGITUDE: f64 = -180.0;
/// Largest legal longitude.
pub const MAX_LONGITUDE: f64 = 180.0;
/// Smallest legal latitude.
pub const MIN_LATITUDE: f64 = -90.0;
/// Largest legal latitude.
pub const MAX_LATITUDE: f64 = 90.0;

/// A `(longitude, latitude)` pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    /// Degrees east of the prime meridian.
    pub longitude: f64,
    /// Degrees north of the equator.
    pub latitude: f64,
}

impl Coordinate {
    /// Creates a coordinate.
    #[inline]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Reads a `[longitude, latitude]` slice. `None` unless it has exactly
    /// two elements.
    #[inline]
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        match *values {
            [longitude, latitude] => Some(Self::new(longitude, latitude)),
            _ => None,
        }
    }

    /// Returns the `[longitude, latitude]` array.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

impl FromStr for Coordinate {
    type Err = GeneratorError;

    /// Parses `"<longitude>,<latitude>"`, surrounding spaces allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GeneratorError::InvalidCoordinatePair(s.to_string());
        let (lon, lat) = s.split_once(',').ok_or_else(invalid)?;
        let longitude = lon.trim().parse::<f64>().map_err(|_| invalid())?;
        let latitude = lat.trim().parse::<f64>().map_err(|_| invalid())?;
        Ok(Self::new(longitude, latitude))
    }
}

/// Returns `true` if the corners form a legal, correctly oriented box.
///
/// Checked in order:
/// 1. positive width: `top_left.longitude < bottom_right.longitude`
/// 2. positive height: `top_left.latitude > bottom_right.latitude`
/// 3. all corners inside `[-180, 180]` x `[-90, 90]`
///
/// NaN in any position fails the check.
///
/// # Examples
///
/// ```rust
/// use datagen_generators::bounds::{validate_coordinates, Coordinate};
///
/// let nw = Coordinate::new(-4.5, 53.0);
/// let se = Coordinate::new(1.7, 50.0);
/// assert!(validate_coordinates(nw, se));
/// assert!(!validate_coordinates(se, nw));
/// ```
pub fn validate_coordinates(top_left: Coordinate, bottom_right: Coordinate) -> bool {
    if top_left.longitude >= bottom_right.longitude {
        return false;
    }
    if top_left.latitude <= bottom_right.latitude {
        return false;
    }
    top_left.longitude >= MIN_LONGITUDE
        && bottom_right.longitude <= MAX_LONGITUDE
        && top_left.latitude <= MAX_LATITUDE
        && bottom_right.latitude >= MIN_LATITUDE
}

/// Validated rectangle in longitude/latitude space.
///
/// Immutable once built. Always satisfies the rules of
/// [`validate_coordinates`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    top_left: Coordinate,
    bottom_right: Coordinate,
}

impl BoundingBox {
    /// The whole globe.
    pub const WORLD: BoundingBox = BoundingBox {
        top_left: Coordinate::new(MIN_LONGITUDE, MAX_LATITUDE),
        bottom_right: Coordinate::new(MAX_LONGITUDE, MIN_LATITUDE),
    };

    /// Builds a box from two corners, `None` if they fail validation.
    pub fn new(top_left: Coordinate, bottom_right: Coordinate) -> Option<Self> {
        validate_coordinates(top_left, bottom_right).then_some(Self {
            top_left,
            bottom_right,
        })
    }

    /// Builds a box from caller-supplied `[longitude, latitude]` corners,
    /// falling back to [`BoundingBox::WORLD`].
    ///
    /// Both corners are replaced together when either is missing, does not
    /// have exactly two values, or the pair fails validation. Never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use datagen_generators::bounds::BoundingBox;
    ///
    /// let reversed = BoundingBox::from_corners(Some(&[10.0, 5.0]), Some(&[0.0, 20.0]));
    /// assert_eq!(reversed, BoundingBox::WORLD);
    ///
    /// let missing = BoundingBox::from_corners(Some(&[10.0, 5.0]), None);
    /// assert_eq!(missing, BoundingBox::WORLD);
    /// ```
    pub fn from_corners(top_left: Option<&[f64]>, bottom_right: Option<&[f64]>) -> Self {
        let corners = top_left
            .and_then(Coordinate::from_slice)
            .zip(bottom_right.and_then(Coordinate::from_slice));

        match corners.and_then(|(nw, se)| Self::new(nw, se)) {
            Some(bbox) => bbox,
            None => {
                if top_left.is_some() || bottom_right.is_some() {
                    debug!(
                        ?top_left,
                        ?bottom_right,
                        "Invalid bounding box, using whole globe"
                    );
                }
                Self::WORLD
            }
        }
    }

    /// North-west corner.
    #[inline]
    pub fn top_left(&self) -> Coordinate {
        self.top_left
    }

    /// South-east corner.
    #[inline]
    pub fn bottom_right(&self) -> Coordinate {
        self.bottom_right
    }

    /// Longitude span in degrees.
    #[inline]
    pub fn width(&self) -> f64 {
        self.bottom_right.longitude - self.top_left.longitude
    }

    /// Latitude span in degrees.
    #[inline]
    pub fn height(&self) -> f64 {
        self.top_left.latitude - self.bottom_right.latitude
    }

    /// Returns `true` if `coord` lies inside the box, edges included.
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.longitude >= self.top_left.longitude
            && coord.longitude <= self.bottom_right.longitude
            && coord.latitude >= self.bottom_right.latitude
            && coord.latitude <= self.top_left.latitude
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::WORLD
    }
}
