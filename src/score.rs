//! Z-score and percentile-rank computation.
//!
//! Low scores mean the observed sequence compresses better than random
//! sequences of the same alphabet and length, i.e. it is more structured.

use crate::distribution::NullDistribution;
use crate::error::{ComplexityError, Result};

/// Standard deviations the observed compressed length lies from the null
/// distribution's mean, using the population standard deviation.
///
/// Fails with [`ComplexityError::DegenerateDistribution`] when every trial
/// compressed to the identical length.
pub fn z_score(observed: usize, distribution: &NullDistribution) -> Result<f64> {
    let std_dev = distribution.std_dev();
    if std_dev == 0.0 {
        return Err(ComplexityError::DegenerateDistribution);
    }
    Ok((observed as f64 - distribution.mean()) / std_dev)
}

/// Mid-rank percentile of the observed compressed length within the null
/// distribution, in [0, 100].
///
/// Counts the fraction of samples strictly below `observed` plus half the
/// fraction exactly equal to it, so an observation at the median of a tied
/// distribution lands at 50 rather than being biased to either side.
pub fn percentile(observed: usize, distribution: &NullDistribution) -> f64 {
    let mut below = 0usize;
    let mut equal = 0usize;
    for &sample in distribution.samples() {
        if sample < observed {
            below += 1;
        } else if sample == observed {
            equal += 1;
        }
    }
    let n = distribution.len() as f64;
    (below as f64 + 0.5 * equal as f64) / n * 100.0
}
