//! Derived result records produced by the statistics engine.
//!
//! All types here are immutable value records: computed fresh per request
//! from raw score inputs, never mutated after construction, and consumed by
//! a presentation layer (tables, gauges) that imposes no contract back
//! beyond reading the documented fields.

use crate::identifiers::StudentId;
use crate::subject::Subject;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Cohort-wide score-rate statistics, computed only when requested
///
/// This is a distribution of *rates* (each cohort raw score converted to a
/// percentage of the subject maximum), independent from the raw-score
/// distribution used for rank and deviation. Used by comparative displays
/// such as the circular score-rate gauge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateStats {
    /// Mean score rate across the cohort, one decimal place
    pub average_rate: f64,
    /// Population standard deviation of the score rates, one decimal place
    pub rate_std_dev: f64,
}

/// Statistics for one student on one subject (or the mandatory block)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectResult {
    /// Raw score earned
    pub score: u32,
    /// Maximum attainable score
    pub max_score: u32,
    /// Score as a percentage of the maximum, one decimal place
    pub score_rate: f64,
    /// 1-based position within the cohort sorted descending; tied scores
    /// share the rank of the first occurrence
    pub rank: usize,
    /// Standardized deviation score (mean 50, scale 10), one decimal place
    pub deviation: f64,
    /// Cohort score-rate statistics; `None` when not requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_stats: Option<RateStats>,
}

/// Aggregate exam result for one student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentExamResult {
    /// Registration code
    pub student_id: StudentId,
    /// Display name
    pub student_name: String,
    /// Mandatory block plus all general subject scores
    pub total_score: u32,
    /// Mandatory block plus all general subject maximums
    pub total_max_score: u32,
    /// Mandatory block score
    pub required_score: u32,
    /// Mandatory block maximum
    pub required_max_score: u32,
    /// Sum of general subject scores, excluding the mandatory block
    pub general_score: u32,
    /// Sum of general subject maximums, excluding the mandatory block
    pub general_max_score: u32,
    /// Statistics for the mandatory block
    pub required: SubjectResult,
    /// Statistics per general subject, in catalog order; a subject the
    /// student did not offer is absent
    pub subjects: IndexMap<Subject, SubjectResult>,
}
