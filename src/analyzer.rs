//! Analyzer facade tying validation, distribution building, and scoring
//! together.

use crate::alphabet::Alphabet;
use crate::compressor::{Compressor, Deflate};
use crate::config::AnalyzerConfig;
use crate::distribution::{DistributionBuilder, NullDistribution};
use crate::error::{ComplexityError, Result};
use crate::report::AnalysisReport;
use crate::score;
use rand::Rng;

/// Compression-based complexity analyzer.
///
/// Configured once at construction (alphabet, case policy, iteration count,
/// optional seed) and immutable afterwards; every query runs the same
/// pipeline and owns its own null distribution, so concurrent queries over a
/// shared analyzer are safe.
///
/// A query's pipeline: validate and case-fold the sequence, compress it once,
/// build a null distribution of compressed lengths for random sequences of
/// the same length and alphabet, then score the observed length against it.
pub struct Analyzer<C: Compressor = Deflate> {
    config: AnalyzerConfig,
    alphabet: Alphabet,
    compressor: C,
}

impl Analyzer<Deflate> {
    /// Create an analyzer with the default DEFLATE compressor.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        Self::with_compressor(config, Deflate)
    }
}

impl<C: Compressor> Analyzer<C> {
    /// Create an analyzer around a custom compression strategy.
    ///
    /// The configuration is validated here: the alphabet must normalize
    /// cleanly and `iterations` must be positive.
    pub fn with_compressor(config: AnalyzerConfig, compressor: C) -> Result<Self> {
        if config.iterations == 0 {
            return Err(ComplexityError::InsufficientIterations {
                requested: config.iterations,
            });
        }
        let alphabet = config.alphabet.resolve(config.ignore_case)?;
        Ok(Self {
            config,
            alphabet,
            compressor,
        })
    }

    /// The normalized alphabet queries are validated against.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The configuration this analyzer was built with.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Z-score of the sequence's compressed length against the null
    /// distribution. Strongly negative means far more compressible than
    /// random, i.e. highly structured.
    pub fn compression_z_score(&self, sequence: &str) -> Result<f64> {
        let (observed, distribution) = self.run(sequence)?;
        score::z_score(observed, &distribution)
    }

    /// Mid-rank percentile of the sequence's compressed length within the
    /// null distribution, in [0, 100]. Near 0 means more structured than
    /// random; near 50 means indistinguishable from random.
    pub fn compression_percentile(&self, sequence: &str) -> Result<f64> {
        let (observed, distribution) = self.run(sequence)?;
        Ok(score::percentile(observed, &distribution))
    }

    /// One full pass returning both scores plus the distribution summary.
    pub fn analyze(&self, sequence: &str) -> Result<AnalysisReport> {
        let folded = self.alphabet.validate(sequence)?;
        let (observed, distribution) = self.run_folded(&folded)?;
        Ok(AnalysisReport {
            sequence_length: folded.chars().count(),
            observed_length: observed,
            null_mean: distribution.mean(),
            null_std_dev: distribution.std_dev(),
            trials: distribution.len(),
            z_score: score::z_score(observed, &distribution)?,
            percentile: score::percentile(observed, &distribution),
        })
    }

    fn run(&self, sequence: &str) -> Result<(usize, NullDistribution)> {
        let folded = self.alphabet.validate(sequence)?;
        self.run_folded(&folded)
    }

    fn run_folded(&self, folded: &str) -> Result<(usize, NullDistribution)> {
        let observed = self.compressor.compressed_len(folded.as_bytes());
        let seed = match self.config.seed {
            Some(seed) => seed,
            None => rand::thread_rng().gen(),
        };
        let distribution = DistributionBuilder::build(
            &self.alphabet,
            folded.chars().count(),
            self.config.iterations,
            seed,
            &self.compressor,
        )?;
        log::debug!(
            "query: length={} observed={} null_mean={:.2} null_std={:.2}",
            folded.chars().count(),
            observed,
            distribution.mean(),
            distribution.std_dev()
        );
        Ok((observed, distribution))
    }
}
