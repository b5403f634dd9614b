//! Alphabet normalization and sequence validation.
//!
//! An [`Alphabet`] is an ordered set of distinct symbols plus the case-folding
//! policy applied to both the set itself and every sequence checked against
//! it. Folding is ASCII case folding (symbols outside the ASCII letters pass
//! through unchanged).

use crate::error::{ComplexityError, Result};
use serde::{Deserialize, Serialize};

const ALPHA_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALPHA_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMERIC: &str = "1234567890";
const SYMBOL: &str = "~!@#$%^&*()_+{}|:\"<>?`-=[]\\;',./ ";

/// Named symbol sets for common sequence domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlphabetPreset {
    /// The four DNA bases.
    Dna,
    /// Latin letters.
    Alpha,
    /// Decimal digits.
    Numeric,
    /// Punctuation and space.
    Symbol,
    /// Letters and digits.
    Alphanumeric,
    /// Letters, digits, punctuation and space.
    Keyboard,
}

impl AlphabetPreset {
    /// Look up a preset by name (case-insensitive). `"keyboard"` and
    /// `"alphanumericsymbol"` are synonyms.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dna" => Some(Self::Dna),
            "alpha" => Some(Self::Alpha),
            "numeric" => Some(Self::Numeric),
            "symbol" => Some(Self::Symbol),
            "alphanumeric" => Some(Self::Alphanumeric),
            "keyboard" | "alphanumericsymbol" => Some(Self::Keyboard),
            _ => None,
        }
    }

    /// Symbols for this preset. Case-sensitive letter presets carry both
    /// cases, so a case-sensitive analyzer still accepts lowercase input.
    fn charset(&self, ignore_case: bool) -> String {
        let letters = |upper: &str| {
            let mut s = upper.to_string();
            if !ignore_case {
                s.push_str(ALPHA_LOWER);
            }
            s
        };
        match self {
            Self::Dna => {
                let mut s = String::from("ACGT");
                if !ignore_case {
                    s.push_str("acgt");
                }
                s
            }
            Self::Alpha => letters(ALPHA_UPPER),
            Self::Numeric => NUMERIC.to_string(),
            Self::Symbol => SYMBOL.to_string(),
            Self::Alphanumeric => letters(ALPHA_UPPER) + NUMERIC,
            Self::Keyboard => letters(ALPHA_UPPER) + NUMERIC + SYMBOL,
        }
    }
}

/// A validated, ordered set of distinct symbols with a case-folding policy.
///
/// Invariant: non-empty, and no two symbols are equal after folding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    symbols: Vec<char>,
    ignore_case: bool,
}

impl Alphabet {
    /// Build an alphabet from explicit symbols, preserving order.
    ///
    /// Fails with [`ComplexityError::InvalidAlphabet`] if the set is empty,
    /// contains a duplicate, or (with `ignore_case`) folding collapses two
    /// symbols meant to be distinct.
    pub fn new<I>(symbols: I, ignore_case: bool) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let mut folded: Vec<char> = Vec::new();
        for symbol in symbols {
            let f = fold(symbol, ignore_case);
            if folded.contains(&f) {
                let reason = if ignore_case && symbol != f {
                    format!("case folding collapses {:?} into {:?}", symbol, f)
                } else {
                    format!("duplicate symbol {:?}", symbol)
                };
                return Err(ComplexityError::InvalidAlphabet(reason));
            }
            folded.push(f);
        }
        if folded.is_empty() {
            return Err(ComplexityError::InvalidAlphabet(
                "alphabet must contain at least one symbol".to_string(),
            ));
        }
        Ok(Self {
            symbols: folded,
            ignore_case,
        })
    }

    /// Build an alphabet from the characters of a string.
    pub fn from_str_symbols(symbols: &str, ignore_case: bool) -> Result<Self> {
        Self::new(symbols.chars(), ignore_case)
    }

    /// Build an alphabet from a named preset.
    pub fn from_preset(preset: AlphabetPreset, ignore_case: bool) -> Result<Self> {
        Self::from_str_symbols(&preset.charset(ignore_case), ignore_case)
    }

    /// Build an alphabet from a preset name, e.g. `"dna"` or `"alphanumeric"`.
    pub fn named(name: &str, ignore_case: bool) -> Result<Self> {
        let preset = AlphabetPreset::from_name(name).ok_or_else(|| {
            ComplexityError::InvalidAlphabet(format!("unknown preset name {:?}", name))
        })?;
        Self::from_preset(preset, ignore_case)
    }

    /// Validate a query sequence against this alphabet.
    ///
    /// Returns the case-folded sequence, or
    /// [`ComplexityError::InvalidCharacter`] identifying the first offending
    /// symbol and its position. An empty sequence is rejected with
    /// [`ComplexityError::EmptySequence`].
    pub fn validate(&self, sequence: &str) -> Result<String> {
        if sequence.is_empty() {
            return Err(ComplexityError::EmptySequence);
        }
        let mut out = String::with_capacity(sequence.len());
        for (position, symbol) in sequence.chars().enumerate() {
            let f = fold(symbol, self.ignore_case);
            if !self.symbols.contains(&f) {
                return Err(ComplexityError::InvalidCharacter { symbol, position });
            }
            out.push(f);
        }
        Ok(out)
    }

    /// The distinct symbols, in insertion order, after folding.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Number of distinct symbols (k).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; the empty alphabet is unconstructible.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Whether case is folded before validation and generation.
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }
}

impl Default for Alphabet {
    /// The four DNA bases, case-insensitive.
    fn default() -> Self {
        Self {
            symbols: vec!['A', 'C', 'G', 'T'],
            ignore_case: true,
        }
    }
}

fn fold(symbol: char, ignore_case: bool) -> char {
    if ignore_case {
        symbol.to_ascii_uppercase()
    } else {
        symbol
    }
}
