//! Error types for sequence complexity analysis.
//!
//! All failures are deterministic input-validation or numerical-edge-case
//! errors; callers get them immediately, with no retry or silent recovery.

use thiserror::Error;

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, ComplexityError>;

/// Main error type for sequence complexity analysis.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComplexityError {
    /// Alphabet is empty, or case folding collapses symbols meant to be distinct.
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// Query sequence contains a symbol outside the configured alphabet.
    #[error("Invalid character {symbol:?} at position {position}")]
    InvalidCharacter { symbol: char, position: usize },

    /// Iteration count must be positive.
    #[error("Iterations must be a positive integer, got {requested}")]
    InsufficientIterations { requested: u32 },

    /// Every random trial compressed to the identical length, so the
    /// z-score denominator is zero.
    #[error("Null distribution has zero variance; z-score is undefined")]
    DegenerateDistribution,

    /// Query sequence has length zero.
    #[error("Cannot analyze an empty sequence")]
    EmptySequence,
}
