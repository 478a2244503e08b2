//! End-to-end tests for the subject aggregator
//!
//! Exercises `generate_results` over the sample roster and checks the
//! per-subject statistics, the totals invariants, and the handling of
//! unoffered subjects and catalog misconfiguration.

use exam_stats_domain::subject::Subject;
use exam_stats_engine::{generate_results, EngineError};
use exam_stats_testing::{sample_catalog, sample_roster, RosterBuilder, StudentRecordBuilder};

#[test]
fn test_results_in_roster_order() {
    let results = generate_results(&sample_roster(), &sample_catalog(), true).unwrap();

    let ids: Vec<&str> = results.iter().map(|r| r.student_id.as_str()).collect();
    assert_eq!(ids, vec!["S001", "S002", "S003", "S004", "S005"]);
}

#[test]
fn test_anatomy_scenario_for_first_student() {
    let results = generate_results(&sample_roster(), &sample_catalog(), true).unwrap();

    // Anatomy cohort is [38, 35, 42, 33, 40]; S001 scored 38.
    let anatomy = &results[0].subjects[&Subject::Anatomy];
    assert_eq!(anatomy.score, 38);
    assert_eq!(anatomy.max_score, 50);
    assert_eq!(anatomy.score_rate, 76.0);
    assert_eq!(anatomy.rank, 3);
    assert_eq!(anatomy.deviation, 51.2);

    // Rate distribution [76, 70, 84, 66, 80]: mean 75.2, population SD ~6.5
    let rate_stats = anatomy.rate_stats.unwrap();
    assert_eq!(rate_stats.average_rate, 75.2);
    assert_eq!(rate_stats.rate_std_dev, 6.5);
}

#[test]
fn test_mandatory_block_statistics() {
    let results = generate_results(&sample_roster(), &sample_catalog(), true).unwrap();

    // Required cohort is [45, 42, 48, 40, 46]; S001 scored 45.
    let required = &results[0].required;
    assert_eq!(required.score, 45);
    assert_eq!(required.score_rate, 90.0);
    assert_eq!(required.rank, 3);
    assert_eq!(required.deviation, 52.8);

    let rate_stats = required.rate_stats.unwrap();
    assert_eq!(rate_stats.average_rate, 88.4);
    assert_eq!(rate_stats.rate_std_dev, 5.7);
}

#[test]
fn test_totals_for_first_student() {
    let results = generate_results(&sample_roster(), &sample_catalog(), false).unwrap();

    let first = &results[0];
    assert_eq!(first.required_score, 45);
    assert_eq!(first.required_max_score, 50);
    assert_eq!(first.general_score, 398);
    assert_eq!(first.general_max_score, 500);
    assert_eq!(first.total_score, 443);
    assert_eq!(first.total_max_score, 550);
}

#[test]
fn test_aggregation_law_holds_for_every_student() {
    let results = generate_results(&sample_roster(), &sample_catalog(), false).unwrap();

    for result in &results {
        let subject_sum: u32 = result.subjects.values().map(|s| s.score).sum();
        let max_sum: u32 = result.subjects.values().map(|s| s.max_score).sum();

        assert_eq!(result.general_score, subject_sum);
        assert_eq!(result.general_max_score, max_sum);
        assert_eq!(result.total_score, result.required_score + subject_sum);
        assert_eq!(result.total_max_score, result.required_max_score + max_sum);
    }
}

#[test]
fn test_subject_keys_follow_catalog_order() {
    let catalog = sample_catalog();
    let results = generate_results(&sample_roster(), &catalog, false).unwrap();

    for result in &results {
        let keys: Vec<Subject> = result.subjects.keys().copied().collect();
        assert_eq!(keys, catalog.subjects);
    }
}

#[test]
fn test_rate_stats_absent_when_not_requested() {
    let results = generate_results(&sample_roster(), &sample_catalog(), false).unwrap();

    for result in &results {
        assert_eq!(result.required.rate_stats, None);
        for subject_result in result.subjects.values() {
            assert_eq!(subject_result.rate_stats, None);
        }
    }
}

#[test]
fn test_idempotence() {
    let roster = sample_roster();
    let catalog = sample_catalog();

    let first = generate_results(&roster, &catalog, true).unwrap();
    let second = generate_results(&roster, &catalog, true).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unoffered_subject_excluded_everywhere() {
    let roster = RosterBuilder::new()
        .with_student(
            StudentRecordBuilder::new("S001")
                .with_required(45)
                .with_score(Subject::Anatomy, 40)
                .with_score(Subject::Physiology, 30)
                .build(),
        )
        .with_student(
            StudentRecordBuilder::new("S002")
                .with_required(42)
                .with_score(Subject::Anatomy, 35)
                .build(),
        )
        .build();
    let catalog = sample_catalog();

    let results = generate_results(&roster, &catalog, false).unwrap();

    // S002 never sat physiology: no entry, and totals exclude it.
    let second = &results[1];
    assert!(!second.subjects.contains_key(&Subject::Physiology));
    assert_eq!(second.general_score, 35);
    assert_eq!(second.general_max_score, 50);
    assert_eq!(second.total_score, 42 + 35);

    // The physiology cohort is S001 alone, so S001 ranks 1 with a
    // neutral deviation.
    let physiology = &results[0].subjects[&Subject::Physiology];
    assert_eq!(physiology.rank, 1);
    assert_eq!(physiology.deviation, 50.0);
}

#[test]
fn test_missing_max_score_fails_upfront() {
    let mut catalog = sample_catalog();
    catalog.max_scores.shift_remove(&Subject::Surgery);

    let err = generate_results(&sample_roster(), &catalog, false).unwrap_err();
    assert_eq!(err, EngineError::MissingMaxScore(Subject::Surgery));
}

#[test]
fn test_missing_required_max_score_fails_upfront() {
    let mut catalog = sample_catalog();
    catalog.max_scores.shift_remove(&Subject::Required);

    let err = generate_results(&sample_roster(), &catalog, false).unwrap_err();
    assert_eq!(err, EngineError::MissingMaxScore(Subject::Required));
}

#[test]
fn test_empty_roster_yields_no_results() {
    let results = generate_results(&RosterBuilder::new().build(), &sample_catalog(), true).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_uniform_cohort_everyone_average() {
    let roster = RosterBuilder::new()
        .with_student(
            StudentRecordBuilder::new("S001")
                .with_required(30)
                .with_score(Subject::Anatomy, 30)
                .build(),
        )
        .with_student(
            StudentRecordBuilder::new("S002")
                .with_required(30)
                .with_score(Subject::Anatomy, 30)
                .build(),
        )
        .build();

    let results = generate_results(&roster, &sample_catalog(), false).unwrap();
    for result in &results {
        assert_eq!(result.required.deviation, 50.0);
        assert_eq!(result.required.rank, 1);
        assert_eq!(result.subjects[&Subject::Anatomy].deviation, 50.0);
        assert_eq!(result.subjects[&Subject::Anatomy].rank, 1);
    }
}
