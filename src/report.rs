//! Per-query analysis report.

use serde::{Deserialize, Serialize};

/// Full result of one analysis pass, serializable for downstream tooling.
///
/// Ephemeral by design: each query produces a fresh report, and nothing is
/// cached across queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Length of the analyzed sequence, in symbols.
    pub sequence_length: usize,

    /// Compressed byte length of the (case-folded) sequence.
    pub observed_length: usize,

    /// Mean compressed length across the random trials.
    pub null_mean: f64,

    /// Population standard deviation of the trial lengths.
    pub null_std_dev: f64,

    /// Number of random trials behind the null distribution.
    pub trials: usize,

    /// Standard deviations from the null mean. Negative means the sequence
    /// compresses better than random, i.e. it is more structured.
    pub z_score: f64,

    /// Mid-rank percentile within the null distribution, in [0, 100].
    pub percentile: f64,
}

impl AnalysisReport {
    /// Serialize to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
