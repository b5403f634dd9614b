//! Analyzer configuration.

use crate::alphabet::{Alphabet, AlphabetPreset};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Default number of Monte Carlo trials per query.
pub const DEFAULT_ITERATIONS: u32 = 1000;

/// How the analyzer's symbol set is specified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlphabetSpec {
    /// A named preset such as [`AlphabetPreset::Dna`].
    Preset(AlphabetPreset),
    /// Explicit symbols, one per character, order preserved.
    Custom(String),
}

impl AlphabetSpec {
    /// Resolve the spec into a validated [`Alphabet`].
    pub fn resolve(&self, ignore_case: bool) -> Result<Alphabet> {
        match self {
            Self::Preset(preset) => Alphabet::from_preset(*preset, ignore_case),
            Self::Custom(symbols) => Alphabet::from_str_symbols(symbols, ignore_case),
        }
    }
}

impl Default for AlphabetSpec {
    fn default() -> Self {
        Self::Preset(AlphabetPreset::Dna)
    }
}

/// Configuration for an [`Analyzer`](crate::Analyzer).
///
/// Owned by the analyzer for its lifetime; queries never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Symbol set for validation and random generation (default: DNA bases).
    pub alphabet: AlphabetSpec,

    /// Fold case before validation and generation (default: true).
    pub ignore_case: bool,

    /// Number of Monte Carlo trials per query; must be positive
    /// (default: [`DEFAULT_ITERATIONS`]).
    pub iterations: u32,

    /// Fixed seed for reproducible null distributions. `None` draws a fresh
    /// seed per query.
    pub seed: Option<u64>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            alphabet: AlphabetSpec::default(),
            ignore_case: true,
            iterations: DEFAULT_ITERATIONS,
            seed: None,
        }
    }
}
