//! Serde construction input for position generators.

use serde::Deserialize;

/// Bounding-box options of a coordinate field.
///
/// Both corners are `[longitude, latitude]` arrays. They are kept as read:
/// any length, any values. Validation and the whole-globe fallback happen
/// when the generator is built.
///
/// # Examples
///
/// ```rust
/// use datagen_generators::config::PositionConfig;
///
/// let config: PositionConfig =
///     serde_json::from_str(r#"{"topLeft": [-4.5, 53], "bottomRight": [1.7, 50]}"#).unwrap();
/// assert_eq!(config.top_left, Some(vec![-4.5, 53.0]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PositionConfig {
    /// North-west corner.
    #[serde(default, rename = "topLeft", alias = "top_left")]
    pub top_left: Option<Vec<f64>>,

    /// South-east corner.
    #[serde(default, rename = "bottomRight", alias = "bottom_right")]
    pub bottom_right: Option<Vec<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::BoundingBox;
    use crate::position::PositionGenerator;

    #[test]
    fn test_empty_config_is_whole_globe() {
        let config: PositionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PositionConfig::default());
        assert_eq!(
            PositionGenerator::from_config(&config).bounding_box(),
            BoundingBox::WORLD
        );
    }

    #[test]
    fn test_snake_case_alias() {
        let config: PositionConfig =
            serde_json::from_str(r#"{"top_left": [0, 10], "bottom_right": [10, 0]}"#).unwrap();
        let bbox = PositionGenerator::from_config(&config).bounding_box();
        assert_eq!(bbox.top_left().to_array(), [0.0, 10.0]);
        assert_eq!(bbox.bottom_right().to_array(), [10.0, 0.0]);
    }

    #[test]
    fn test_short_array_parses_then_defaults() {
        let config: PositionConfig =
            serde_json::from_str(r#"{"topLeft": [0], "bottomRight": [10, 0]}"#).unwrap();
        assert_eq!(config.top_left, Some(vec![0.0]));
        assert_eq!(
            PositionGenerator::from_config(&config).bounding_box(),
            BoundingBox::WORLD
        );
    }
}
