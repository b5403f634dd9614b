//! Null distribution construction from repeated random trials.
//!
//! Each trial draws a fresh uniform sequence of the query's length, compresses
//! it, and records the compressed byte length. Trial `i` runs on its own RNG
//! stream derived from `(seed, i)`, so the distribution is a pure function of
//! `(alphabet, length, iterations, seed)` whether trials execute sequentially
//! or across rayon workers.

use crate::alphabet::Alphabet;
use crate::compressor::Compressor;
use crate::error::{ComplexityError, Result};
use crate::random;
use rand::rngs::StdRng;
use rand::SeedableRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Empirical distribution of compressed lengths for random sequences of a
/// fixed alphabet and length.
///
/// Samples are kept in trial order. The standard deviation is the
/// **population** standard deviation (divide by n), the documented convention
/// for this fixed-size Monte Carlo sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NullDistribution {
    samples: Vec<usize>,
    mean: f64,
    std_dev: f64,
}

impl NullDistribution {
    /// Compute summary statistics over recorded samples.
    ///
    /// Two-pass accumulation (mean first, then squared deviations) keeps the
    /// floating-point result stable and independent of how trials were
    /// scheduled.
    pub(crate) fn from_samples(samples: Vec<usize>) -> Self {
        let n = samples.len() as f64;
        let mean = samples.iter().map(|&s| s as f64).sum::<f64>() / n;
        let variance = samples
            .iter()
            .map(|&s| {
                let d = s as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;
        Self {
            samples,
            mean,
            std_dev: variance.sqrt(),
        }
    }

    /// Sampled compressed lengths, in trial order.
    pub fn samples(&self) -> &[usize] {
        &self.samples
    }

    /// Number of trials.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; the builder rejects zero iterations.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample mean of the compressed lengths.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population standard deviation of the compressed lengths.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

/// Drives the Monte Carlo trials that build a [`NullDistribution`].
pub struct DistributionBuilder;

impl DistributionBuilder {
    /// Run exactly `iterations` independent trials.
    ///
    /// Fails with [`ComplexityError::InsufficientIterations`] when
    /// `iterations` is zero. Larger iteration counts tighten the Monte Carlo
    /// estimate (standard error shrinks as 1/sqrt(iterations)).
    pub fn build<C: Compressor>(
        alphabet: &Alphabet,
        length: usize,
        iterations: u32,
        seed: u64,
        compressor: &C,
    ) -> Result<NullDistribution> {
        if iterations == 0 {
            return Err(ComplexityError::InsufficientIterations {
                requested: iterations,
            });
        }

        log::trace!(
            "building null distribution: k={} length={} iterations={} seed={:#018x}",
            alphabet.len(),
            length,
            iterations,
            seed
        );

        let trial = |i: u32| -> usize {
            let mut rng = StdRng::seed_from_u64(trial_seed(seed, i));
            let sequence = random::generate(alphabet, length, &mut rng);
            compressor.compressed_len(sequence.as_bytes())
        };

        #[cfg(feature = "parallel")]
        let samples: Vec<usize> = (0..iterations).into_par_iter().map(trial).collect();
        #[cfg(not(feature = "parallel"))]
        let samples: Vec<usize> = (0..iterations).map(trial).collect();

        Ok(NullDistribution::from_samples(samples))
    }
}

/// SplitMix64 finalizer over `(seed, trial)`; decorrelates the per-trial RNG
/// streams derived from a single master seed.
fn trial_seed(seed: u64, trial: u32) -> u64 {
    let mut z = seed.wrapping_add((trial as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
