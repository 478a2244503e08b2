//! Exam statistics engine
//!
//! This crate turns a roster of raw per-subject scores into ranked,
//! normalized, comparative metrics: score rate, competition rank,
//! standardized deviation score, and optional cohort-wide score-rate
//! statistics for comparative displays.
//!
//! ## Modules
//!
//! - `stats` - Statistics primitives: pure functions over a score and a
//!   cohort array
//! - `aggregate` - Subject aggregator: assembles per-subject and per-student
//!   result records from the primitives
//!
//! Everything is synchronous and side-effect-free: given a fixed roster and
//! subject catalog the output is fully deterministic, and no call mutates
//! shared state.

pub mod aggregate;
pub mod stats;

// Re-export commonly used entry points
pub use aggregate::{generate_results, subject_stats};

use exam_stats_domain::subject::Subject;
use thiserror::Error;

/// Engine-level errors
///
/// Genuinely degenerate numeric inputs (max score 0, empty cohort, zero
/// standard deviation) are handled with documented neutral defaults and
/// never reach this enum; these variants indicate caller bugs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The queried score is not present in the cohort array, which means
    /// the caller paired a student with the wrong cohort
    #[error("score {score} not present in cohort of size {cohort_size}")]
    ScoreNotInCohort {
        /// The score that was looked up
        score: u32,
        /// Size of the cohort it was looked up in
        cohort_size: usize,
    },

    /// The subject catalog lists a subject without a max-score entry
    #[error("subject catalog has no max score for {0}")]
    MissingMaxScore(Subject),
}

/// Result alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
