//! Subject aggregator
//!
//! Orchestrates the statistics primitives across one subject and across all
//! subjects for one student, assembling the final per-student result
//! records. Cohort arrays are collected once per subject and reused for
//! every student.

use crate::stats;
use crate::{EngineError, EngineResult};
use exam_stats_domain::{
    result::{RateStats, StudentExamResult, SubjectResult},
    roster::{Roster, StudentRecord, SubjectCatalog},
    subject::Subject,
};
use indexmap::IndexMap;
use tracing::{debug, instrument, warn};

/// Compute the statistics record for one student/subject pair
///
/// `cohort` holds every student's raw score for the same subject. Rank and
/// deviation are computed over that raw-score distribution. When
/// `include_rate_stats` is true, every cohort score is additionally
/// converted to a score rate (same `max_score`) and the mean and population
/// standard deviation of that *rate* distribution are attached for
/// comparative displays; the two distributions must not be conflated.
pub fn subject_stats(
    score: u32,
    max_score: u32,
    cohort: &[u32],
    include_rate_stats: bool,
) -> EngineResult<SubjectResult> {
    let rank = stats::rank(score, cohort)?;

    let rate_stats = if include_rate_stats {
        let rates: Vec<f64> = cohort
            .iter()
            .map(|&s| stats::score_rate(s, max_score))
            .collect();
        Some(RateStats {
            average_rate: stats::round1(stats::mean(&rates)),
            rate_std_dev: stats::round1(stats::population_std_dev(&rates)),
        })
    } else {
        None
    };

    Ok(SubjectResult {
        score,
        max_score,
        score_rate: stats::score_rate(score, max_score),
        rank,
        deviation: stats::deviation(score, cohort),
        rate_stats,
    })
}

/// Compute one [`StudentExamResult`] per roster entry, in roster order
///
/// The catalog's max-score table is validated up front: a listed subject
/// (or the mandatory block) without a max score fails the whole call, since
/// that is a configuration error rather than a per-record one. A failure
/// while computing a single student's record is logged and skips only that
/// student; the rest of the roster is still processed.
#[instrument(skip(roster, catalog), fields(students = roster.len(), subjects = catalog.subjects.len()))]
pub fn generate_results(
    roster: &Roster,
    catalog: &SubjectCatalog,
    include_rate_stats: bool,
) -> EngineResult<Vec<StudentExamResult>> {
    let required_max = catalog
        .max_score(Subject::Required)
        .ok_or(EngineError::MissingMaxScore(Subject::Required))?;
    for &subject in &catalog.subjects {
        if catalog.max_score(subject).is_none() {
            return Err(EngineError::MissingMaxScore(subject));
        }
    }

    // Collect each cohort once; a subject's cohort contains only the
    // students who offered it.
    let required_cohort: Vec<u32> = roster.students.iter().map(|s| s.required).collect();
    let mut subject_cohorts: IndexMap<Subject, Vec<u32>> = IndexMap::new();
    for &subject in &catalog.subjects {
        let cohort: Vec<u32> = roster
            .students
            .iter()
            .filter_map(|s| s.score(subject))
            .collect();
        debug!(subject = subject.code(), cohort_size = cohort.len(), "collected cohort");
        subject_cohorts.insert(subject, cohort);
    }

    let mut results = Vec::with_capacity(roster.len());
    for student in &roster.students {
        match student_result(
            student,
            catalog,
            required_max,
            &required_cohort,
            &subject_cohorts,
            include_rate_stats,
        ) {
            Ok(result) => results.push(result),
            Err(error) => {
                warn!(student_id = %student.id, %error, "skipping student record");
            }
        }
    }

    Ok(results)
}

fn student_result(
    student: &StudentRecord,
    catalog: &SubjectCatalog,
    required_max: u32,
    required_cohort: &[u32],
    subject_cohorts: &IndexMap<Subject, Vec<u32>>,
    include_rate_stats: bool,
) -> EngineResult<StudentExamResult> {
    let required = subject_stats(
        student.required,
        required_max,
        required_cohort,
        include_rate_stats,
    )?;

    let mut subjects = IndexMap::new();
    let mut general_score: u32 = 0;
    let mut general_max_score: u32 = 0;

    for &subject in &catalog.subjects {
        let Some(score) = student.score(subject) else {
            // Subject not offered by this student; absent from the mapping
            // and excluded from the totals.
            continue;
        };
        let max_score = catalog
            .max_score(subject)
            .ok_or(EngineError::MissingMaxScore(subject))?;
        let cohort = subject_cohorts
            .get(&subject)
            .map(|c| c.as_slice())
            .unwrap_or(&[]);

        let result = subject_stats(score, max_score, cohort, include_rate_stats)?;
        general_score += score;
        general_max_score += max_score;
        subjects.insert(subject, result);
    }

    Ok(StudentExamResult {
        student_id: student.id.clone(),
        student_name: student.name.clone(),
        total_score: student.required + general_score,
        total_max_score: required_max + general_max_score,
        required_score: student.required,
        required_max_score: required_max,
        general_score,
        general_max_score,
        required,
        subjects,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_stats_without_rate_stats() {
        let cohort = vec![38, 35, 42, 33, 40];
        let result = subject_stats(38, 50, &cohort, false).unwrap();

        assert_eq!(result.score, 38);
        assert_eq!(result.max_score, 50);
        assert_eq!(result.score_rate, 76.0);
        assert_eq!(result.rank, 3);
        assert_eq!(result.deviation, 51.2);
        assert_eq!(result.rate_stats, None);
    }

    #[test]
    fn test_subject_stats_rate_distribution_is_independent() {
        // rates = [76, 70, 84, 66, 80]: mean 75.2, population SD ~= 6.5
        let cohort = vec![38, 35, 42, 33, 40];
        let result = subject_stats(38, 50, &cohort, true).unwrap();

        let rate_stats = result.rate_stats.unwrap();
        assert_eq!(rate_stats.average_rate, 75.2);
        assert_eq!(rate_stats.rate_std_dev, 6.5);
    }

    #[test]
    fn test_subject_stats_propagates_rank_error() {
        let err = subject_stats(44, 50, &[45, 45, 40], false).unwrap_err();
        assert!(matches!(err, EngineError::ScoreNotInCohort { score: 44, .. }));
    }
}
