//! Tests for derived result record serialization
//!
//! The result records are the engine's only external contract, so their
//! serialized shape (optional rate statistics, catalog-ordered subject
//! keys) is pinned down here.

use exam_stats_domain::{
    identifiers::StudentId,
    result::{RateStats, StudentExamResult, SubjectResult},
    subject::Subject,
};
use indexmap::IndexMap;

fn subject_result(score: u32, rank: usize) -> SubjectResult {
    SubjectResult {
        score,
        max_score: 50,
        score_rate: (score as f64 / 50.0 * 1000.0).round() / 10.0,
        rank,
        deviation: 50.0,
        rate_stats: None,
    }
}

fn sample_result() -> StudentExamResult {
    let mut subjects = IndexMap::new();
    subjects.insert(Subject::Anatomy, subject_result(38, 3));
    subjects.insert(Subject::Physiology, subject_result(42, 2));

    StudentExamResult {
        student_id: StudentId::new("S001"),
        student_name: "山田太郎".to_string(),
        total_score: 125,
        total_max_score: 150,
        required_score: 45,
        required_max_score: 50,
        general_score: 80,
        general_max_score: 100,
        required: subject_result(45, 2),
        subjects,
    }
}

#[test]
fn test_serialization_round_trip() {
    let result = sample_result();
    let json = serde_json::to_string(&result).unwrap();
    let back: StudentExamResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn test_subject_keys_preserve_insertion_order() {
    let result = sample_result();
    let keys: Vec<Subject> = result.subjects.keys().copied().collect();
    assert_eq!(keys, vec![Subject::Anatomy, Subject::Physiology]);

    // IndexMap keeps the order through serialization too
    let json = serde_json::to_string(&result).unwrap();
    let anatomy_pos = json.find("anatomy").unwrap();
    let physiology_pos = json.find("physiology").unwrap();
    assert!(anatomy_pos < physiology_pos);
}

#[test]
fn test_absent_subject_stays_absent() {
    let result = sample_result();
    assert!(!result.subjects.contains_key(&Subject::Surgery));

    let json = serde_json::to_value(&result).unwrap();
    assert!(json["subjects"].get("surgery").is_none());
}

#[test]
fn test_rate_stats_round_trip() {
    let mut result = sample_result();
    result.required.rate_stats = Some(RateStats {
        average_rate: 88.4,
        rate_std_dev: 5.9,
    });

    let json = serde_json::to_string(&result).unwrap();
    let back: StudentExamResult = serde_json::from_str(&json).unwrap();
    assert_eq!(
        back.required.rate_stats,
        Some(RateStats {
            average_rate: 88.4,
            rate_std_dev: 5.9,
        })
    );
}
