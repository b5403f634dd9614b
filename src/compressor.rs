//! Compressed-length probe behind the scoring pipeline.
//!
//! The analysis only needs the byte length of a deterministic lossless
//! compression of a sequence, so the compressor is a narrow, swappable
//! strategy. Any LZ/deflate-family algorithm works; the default is DEFLATE
//! at maximum compression.

use flate2::write::DeflateEncoder;
use flate2::Compression;
use std::io::Write;

/// A deterministic lossless compressor measured by output byte length.
///
/// Implementations must be stateless across calls (same input, same output,
/// no observable side effects), which also makes them safe to share across
/// parallel trials.
pub trait Compressor: Send + Sync {
    /// Compressed byte length of `data`.
    fn compressed_len(&self, data: &[u8]) -> usize;
}

/// DEFLATE (`flate2`) at maximum compression.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deflate;

impl Compressor for Deflate {
    fn compressed_len(&self, data: &[u8]) -> usize {
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
        if encoder.write_all(data).is_err() {
            // Writes to a Vec cannot fail; treat as incompressible anyway
            return data.len();
        }
        match encoder.finish() {
            Ok(compressed) => compressed.len(),
            Err(_) => data.len(),
        }
    }
}
