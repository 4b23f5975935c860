//! Position command implementation
//!
//! Generates coordinate values with the position generator, in parallel,
//! and writes them out in worker order.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use datagen_generators::{generate_batch, BatchConfig, Coordinate, Encoding, PositionGenerator};
use tracing::info;

use crate::config::DatagenConfig;
use crate::Result;

/// Command-line values that override the configuration file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub top_left: Option<Coordinate>,
    pub bottom_right: Option<Coordinate>,
    pub count: Option<usize>,
    pub seed: Option<u64>,
    pub workers: Option<usize>,
    pub format: Option<Encoding>,
}

impl Overrides {
    /// Merges the flags into `config`.
    ///
    /// Corners are taken as a pair: giving either flag replaces both file
    /// corners, so a file corner is never mixed with a flag corner.
    pub fn apply(self, mut config: DatagenConfig) -> DatagenConfig {
        if self.top_left.is_some() || self.bottom_right.is_some() {
            config.top_left = self.top_left.map(|c| c.to_array().to_vec());
            config.bottom_right = self.bottom_right.map(|c| c.to_array().to_vec());
        }
        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config
    }
}

/// Run the position command
pub fn run(config: DatagenConfig, overrides: Overrides, output: Option<&Path>) -> Result<()> {
    let config = overrides.apply(config);
    config.validate()?;

    let generator = PositionGenerator::from_config(&config.position());
    let bbox = generator.bounding_box();
    info!(
        top_left = ?bbox.top_left().to_array(),
        bottom_right = ?bbox.bottom_right().to_array(),
        "Generating {} positions",
        config.count
    );

    let batch = BatchConfig {
        count: config.count,
        seed: config.seed,
        workers: config.workers,
        encoding: config.format,
    };

    let start = Instant::now();
    let chunks = generate_batch(&generator, &batch);

    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let mut written = 0usize;
    for chunk in &chunks {
        writer.write_all(chunk)?;
        written += chunk.len();
    }
    writer.flush()?;

    info!(
        bytes = written,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Generation complete"
    );
    Ok(())
}
