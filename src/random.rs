//! Uniform random sequence generation.
//!
//! The RNG is always an explicit parameter, never ambient global state, so a
//! fixed seed yields a fixed sequence.

use crate::alphabet::Alphabet;
use rand::Rng;

/// Generate a sequence of exactly `length` symbols, each drawn independently
/// and uniformly from the alphabet's distinct symbol set.
pub fn generate<R: Rng + ?Sized>(alphabet: &Alphabet, length: usize, rng: &mut R) -> String {
    let symbols = alphabet.symbols();
    let mut out = String::with_capacity(length);
    for _ in 0..length {
        out.push(symbols[rng.gen_range(0..symbols.len())]);
    }
    out
}
