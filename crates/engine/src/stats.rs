//! Statistics primitives
//!
//! Pure functions computing score rate, rank, and standardized deviation
//! score from a score and a cohort array. Each is deterministic given its
//! inputs and performs no I/O.

use crate::{EngineError, EngineResult};

/// Score expressed as a percentage of the maximum, one decimal place
///
/// Returns 0.0 when `max_score` is 0; that is a defensive default for a
/// degenerate input, not a meaningful statistic.
pub fn score_rate(score: u32, max_score: u32) -> f64 {
    if max_score == 0 {
        return 0.0;
    }
    (score as f64 / max_score as f64 * 1000.0).round() / 10.0
}

/// 1-based rank of `score` within `cohort` sorted descending
///
/// Tied scores share the rank of the first occurrence in the descending
/// sort (competition ranking): two students tied for best both get rank 1,
/// and the next distinct score gets rank 3.
///
/// A score absent from the cohort indicates a caller bug (mismatched
/// roster/cohort pairing) and is reported as
/// [`EngineError::ScoreNotInCohort`] rather than a misleading rank.
pub fn rank(score: u32, cohort: &[u32]) -> EngineResult<usize> {
    let mut sorted = cohort.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    sorted
        .iter()
        .position(|&s| s == score)
        .map(|index| index + 1)
        .ok_or(EngineError::ScoreNotInCohort {
            score,
            cohort_size: cohort.len(),
        })
}

/// Standardized deviation score (mean 50, scale 10), one decimal place
///
/// Computed as `((score - mean) / population_std_dev) * 10 + 50` over the
/// raw-score distribution. An empty cohort or a zero standard deviation
/// (all scores identical) yields the neutral 50.0: everyone is average by
/// definition, and the division by zero never happens.
pub fn deviation(score: u32, cohort: &[u32]) -> f64 {
    if cohort.is_empty() {
        return 50.0;
    }

    let values: Vec<f64> = cohort.iter().map(|&s| s as f64).collect();
    let mean = mean(&values);
    let std_dev = population_std_dev(&values);

    if std_dev == 0.0 {
        return 50.0;
    }

    round1((score as f64 - mean) / std_dev * 10.0 + 50.0)
}

/// Arithmetic mean; 0.0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divide by N, not N-1); 0.0 when empty
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mean = mean(values);
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

    variance.sqrt()
}

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
