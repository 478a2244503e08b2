//! Fluent builders for constructing test rosters.
//!
//! Builders keep test setup terse when a scenario needs a cohort shape the
//! sample fixture does not cover (ties, unoffered subjects, degenerate
//! cohorts).

use exam_stats_domain::{
    identifiers::StudentId,
    roster::{Roster, StudentRecord},
    subject::Subject,
};
use indexmap::IndexMap;

/// Builder for [`StudentRecord`] test instances
#[derive(Clone)]
pub struct StudentRecordBuilder {
    id: StudentId,
    name: String,
    required: u32,
    scores: IndexMap<Subject, u32>,
}

impl StudentRecordBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: StudentId::new(id),
            name: "受験生".to_string(),
            required: 0,
            scores: IndexMap::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_required(mut self, score: u32) -> Self {
        self.required = score;
        self
    }

    pub fn with_score(mut self, subject: Subject, score: u32) -> Self {
        self.scores.insert(subject, score);
        self
    }

    pub fn build(self) -> StudentRecord {
        StudentRecord {
            id: self.id,
            name: self.name,
            required: self.required,
            scores: self.scores,
        }
    }
}

/// Builder for [`Roster`] test instances
#[derive(Clone, Default)]
pub struct RosterBuilder {
    students: Vec<StudentRecord>,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_student(mut self, student: StudentRecord) -> Self {
        self.students.push(student);
        self
    }

    pub fn build(self) -> Roster {
        Roster {
            students: self.students,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let roster = RosterBuilder::new()
            .with_student(
                StudentRecordBuilder::new("S010")
                    .with_name("試験太郎")
                    .with_required(45)
                    .with_score(Subject::Anatomy, 38)
                    .build(),
            )
            .build();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster.students[0].required, 45);
        assert_eq!(roster.students[0].score(Subject::Anatomy), Some(38));
        assert_eq!(roster.students[0].score(Subject::Surgery), None);
    }
}
