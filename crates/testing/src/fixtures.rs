//! Test fixtures mirroring the sample roster dataset.
//!
//! `sample_roster` and `sample_catalog` are in-memory copies of
//! `fixtures/roster.toml`, so tests can exercise the engine without file
//! I/O. `random_student` fills a record with generated data for tests that
//! only care about structure.

use exam_stats_domain::{
    identifiers::StudentId,
    roster::{Roster, StudentRecord, SubjectCatalog},
    subject::Subject,
};
use fake::{faker::name::ja_jp::Name, Fake};
use indexmap::IndexMap;

/// The subject catalog of the sample sitting: all ten general subjects,
/// max score 50 everywhere including the mandatory block
pub fn sample_catalog() -> SubjectCatalog {
    let mut max_scores = IndexMap::new();
    max_scores.insert(Subject::Required, 50);
    for subject in Subject::GENERAL {
        max_scores.insert(subject, 50);
    }

    SubjectCatalog {
        subjects: Subject::GENERAL.to_vec(),
        max_scores,
    }
}

/// The five-student sample roster
pub fn sample_roster() -> Roster {
    Roster {
        students: vec![
            student("S001", "山田太郎", 45, [38, 42, 35, 40, 36, 41, 44, 39, 43, 40]),
            student("S002", "佐藤花子", 42, [35, 38, 40, 37, 39, 38, 41, 36, 40, 38]),
            student("S003", "鈴木一郎", 48, [42, 45, 38, 43, 40, 44, 46, 41, 45, 43]),
            student("S004", "田中美咲", 40, [33, 36, 38, 35, 37, 36, 39, 34, 38, 36]),
            student("S005", "高橋健", 46, [40, 43, 36, 41, 38, 42, 44, 39, 42, 41]),
        ],
    }
}

/// The anatomy cohort of the sample roster: mean 37.6, population SD ~3.26
pub fn anatomy_cohort() -> Vec<u32> {
    sample_roster()
        .students
        .iter()
        .filter_map(|s| s.score(Subject::Anatomy))
        .collect()
}

/// A student record with a generated name and the given scores applied to
/// every general subject
pub fn random_student(id: &str, required: u32, subject_score: u32) -> StudentRecord {
    let mut scores = IndexMap::new();
    for subject in Subject::GENERAL {
        scores.insert(subject, subject_score);
    }

    StudentRecord {
        id: StudentId::new(id),
        name: Name().fake(),
        required,
        scores,
    }
}

fn student(id: &str, name: &str, required: u32, general: [u32; 10]) -> StudentRecord {
    let mut scores = IndexMap::new();
    for (subject, score) in Subject::GENERAL.into_iter().zip(general) {
        scores.insert(subject, score);
    }

    StudentRecord {
        id: StudentId::new(id),
        name: name.to_string(),
        required,
        scores,
    }
}
