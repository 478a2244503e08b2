//! Raw score inputs: student records, the roster, and the subject catalog.
//!
//! These types describe the data a caller must supply to the statistics
//! engine. Any loading mechanism (fixture file, test builder) is an external
//! collaborator that shapes its data into this structure; the engine itself
//! performs no I/O.

use crate::identifiers::StudentId;
use crate::subject::Subject;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Raw exam scores for one student
///
/// The mandatory block is tracked separately from the general subjects.
/// A subject absent from `scores` was not offered by this student and is
/// excluded from their results and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Registration code
    pub id: StudentId,
    /// Display name
    pub name: String,
    /// Raw score on the mandatory block
    pub required: u32,
    /// Raw score per general subject, in catalog order
    #[serde(default)]
    pub scores: IndexMap<Subject, u32>,
}

impl StudentRecord {
    /// Raw score for a general subject, if the student offered it
    pub fn score(&self, subject: Subject) -> Option<u32> {
        self.scores.get(&subject).copied()
    }
}

/// The full cohort of student records, in roster order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    /// Student records; result output preserves this ordering
    pub students: Vec<StudentRecord>,
}

impl Roster {
    /// Number of students on the roster
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the roster is empty
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// The offered subjects and their maximum attainable scores
///
/// `subjects` lists the general subjects in the fixed enumerated order used
/// for presentation. `max_scores` must contain an entry for every listed
/// subject and for [`Subject::Required`]; max scores are fixed per subject
/// across the whole cohort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectCatalog {
    /// General subjects offered in this sitting, in presentation order
    pub subjects: Vec<Subject>,
    /// Maximum attainable score per subject, including the mandatory block
    pub max_scores: IndexMap<Subject, u32>,
}

impl SubjectCatalog {
    /// Maximum attainable score for a subject, if the catalog defines one
    pub fn max_score(&self, subject: Subject) -> Option<u32> {
        self.max_scores.get(&subject).copied()
    }
}
