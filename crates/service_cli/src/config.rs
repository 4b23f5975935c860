//! CLI configuration management.
//!
//! Settings come from three layers, later ones winning:
//! 1. `datagen.toml` (or the `--config` path); a missing file means defaults
//! 2. environment variables `DATAGEN_SEED` and `DATAGEN_WORKERS`
//! 3. command-line flags

use std::path::Path;

use datagen_generators::{Encoding, PositionConfig};
use serde::Deserialize;
use tracing::debug;

use crate::error::{CliError, Result};

/// Configuration file contents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatagenConfig {
    /// Base seed of the run.
    pub seed: u64,
    /// Number of values to generate.
    pub count: usize,
    /// Worker threads; defaults to the number of CPUs.
    pub workers: usize,
    /// Output encoding.
    pub format: Encoding,
    /// North-west corner, `[longitude, latitude]`.
    pub top_left: Option<Vec<f64>>,
    /// South-east corner, `[longitude, latitude]`.
    pub bottom_right: Option<Vec<f64>>,
}

impl Default for DatagenConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            count: 1000,
            workers: num_cpus::get(),
            format: Encoding::default(),
            top_left: None,
            bottom_right: None,
        }
    }
}

impl DatagenConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            debug!(path = %path.display(), "Loading configuration file");
            Self::load(path)
        } else {
            debug!(path = %path.display(), "No configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies environment variable overrides from the process environment.
    pub fn with_env_override(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides read through `lookup`.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup("DATAGEN_SEED") {
            self.seed = seed
                .parse()
                .map_err(|_| CliError::InvalidArgument(format!("DATAGEN_SEED={}", seed)))?;
        }
        if let Some(workers) = lookup("DATAGEN_WORKERS") {
            self.workers = workers
                .parse()
                .map_err(|_| CliError::InvalidArgument(format!("DATAGEN_WORKERS={}", workers)))?;
        }
        Ok(self)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(CliError::InvalidArgument(
                "workers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Bounding-box options for the position generator.
    pub fn position(&self) -> PositionConfig {
        PositionConfig {
            top_left: self.top_left.clone(),
            bottom_right: self.bottom_right.clone(),
        }
    }
}
