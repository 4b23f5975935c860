//! Deterministic parallel generation.
//!
//! A run of `count` values is split into contiguous chunks, one per worker.
//! Worker `i` owns `DatagenRng::for_worker(seed, i)` and its own buffer, so
//! workers never share mutable state and the output depends only on
//! `(seed, workers, count)`, not on thread scheduling.

use bytes::Bytes;
use datagen_core::{DatagenRng, DocumentBuffer};
use rayon::prelude::*;
use tracing::{debug, info_span};

use crate::generator::{Encoding, ValueGenerator};

/// Separator written after each value in text mode.
pub const TEXT_SEPARATOR: u8 = b'\n';

/// Parameters of a batch run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Total number of values.
    pub count: usize,
    /// Base seed; each worker derives its own stream from it.
    pub seed: u64,
    /// Number of workers. `0` is treated as `1`.
    pub workers: usize,
    /// Output encoding.
    pub encoding: Encoding,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            seed: 0,
            workers: 1,
            encoding: Encoding::default(),
        }
    }
}

impl BatchConfig {
    /// Number of values assigned to each worker, in worker order.
    ///
    /// The first `count % workers` workers take one extra value.
    pub fn chunk_sizes(&self) -> Vec<usize> {
        let workers = self.workers.max(1);
        let base = self.count / workers;
        let extra = self.count % workers;
        (0..workers)
            .map(|worker| base + usize::from(worker < extra))
            .collect()
    }
}

/// Generates `config.count` values, returning one byte chunk per non-idle
/// worker in worker order.
///
/// Binary chunks are concatenated sub-documents; text chunks hold one value
/// per line.
///
/// # Examples
///
/// ```rust
/// use datagen_generators::{generate_batch, BatchConfig, Encoding, PositionGenerator};
///
/// let config = BatchConfig { count: 10, seed: 7, workers: 3, encoding: Encoding::Text };
/// let chunks = generate_batch(&PositionGenerator::default(), &config);
///
/// let lines: usize = chunks.iter().map(|c| c.iter().filter(|&&b| b == b'\n').count()).sum();
/// assert_eq!(lines, 10);
/// ```
pub fn generate_batch<G: ValueGenerator>(generator: &G, config: &BatchConfig) -> Vec<Bytes> {
    let span = info_span!(
        "generate_batch",
        count = config.count,
        seed = config.seed,
        workers = config.workers.max(1),
        encoding = %config.encoding
    );
    let _enter = span.enter();

    let assignments: Vec<(usize, usize)> = config
        .chunk_sizes()
        .into_iter()
        .enumerate()
        .filter(|&(_, size)| size > 0)
        .collect();

    assignments
        .into_par_iter()
        .map(|(worker, size)| {
            let mut rng = DatagenRng::for_worker(config.seed, worker);
            let mut buffer = DocumentBuffer::new();
            for _ in 0..size {
                generator.encode(config.encoding, &mut rng, &mut buffer);
                if config.encoding == Encoding::Text {
                    buffer.write_byte(TEXT_SEPARATOR);
                }
            }
            debug!(worker, values = size, bytes = buffer.len(), "Worker finished");
            buffer.freeze()
        })
        .collect()
}
