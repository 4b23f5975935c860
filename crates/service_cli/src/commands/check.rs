//! Check command implementation
//!
//! Prints the resolved configuration and one sample value so a config file
//! can be verified before a long run. The sample is the first value the
//! `position` command would write for the same configuration.

use datagen_core::{DatagenRng, DocumentBuffer};
use datagen_generators::{PositionGenerator, ValueGenerator};
use tracing::info;

use crate::config::DatagenConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &DatagenConfig) -> Result<()> {
    let sample = sample(config)?;
    let bbox = PositionGenerator::from_config(&config.position()).bounding_box();

    info!("Configuration OK");
    println!("seed:         {}", config.seed);
    println!("count:        {}", config.count);
    println!("workers:      {}", config.workers);
    println!("format:       {}", config.format);
    println!("top_left:     {:?}", bbox.top_left().to_array());
    println!("bottom_right: {:?}", bbox.bottom_right().to_array());
    println!("sample:       {}", sample);
    Ok(())
}

/// Validates `config` and renders, as text, the first value worker 0 of a
/// run with this configuration produces.
pub fn sample(config: &DatagenConfig) -> Result<String> {
    config.validate()?;

    let generator = PositionGenerator::from_config(&config.position());
    let mut rng = DatagenRng::for_worker(config.seed, 0);
    let mut buffer = DocumentBuffer::new();
    generator.encode_value_as_string(&mut rng, &mut buffer);

    Ok(String::from_utf8_lossy(buffer.as_bytes()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::position::{self, Overrides};
    use datagen_generators::Encoding;

    fn uk_config(seed: u64, workers: usize) -> DatagenConfig {
        DatagenConfig {
            seed,
            count: 5,
            workers,
            format: Encoding::Text,
            top_left: Some(vec![-4.5, 53.0]),
            bottom_right: Some(vec![1.7, 50.0]),
        }
    }

    #[test]
    fn test_sample_is_first_generated_value() {
        for (seed, workers) in [(42, 1), (7, 3)] {
            let config = uk_config(seed, workers);
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("out.txt");

            position::run(config.clone(), Overrides::default(), Some(&path)).unwrap();
            let text = std::fs::read_to_string(&path).unwrap();

            assert_eq!(sample(&config).unwrap(), text.lines().next().unwrap());
        }
    }

    #[test]
    fn test_sample_rejects_invalid_config() {
        let config = DatagenConfig {
            workers: 0,
            ..uk_config(1, 1)
        };
        assert!(sample(&config).is_err());
        assert!(run(&config).is_err());
    }

    #[test]
    fn test_run_succeeds() {
        assert!(run(&uk_config(3, 2)).is_ok());
    }
}
