//! The closed subject enumeration.
//!
//! Subjects form a fixed, enumerated set: the mandatory block (which every
//! student must sit) plus the ten general subjects of the exam. Modeling
//! them as a sum type rather than free-form strings prevents typo'd subject
//! names from reaching the statistics engine.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Subject identifier, with the mandatory block as a distinguished member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    /// The mandatory block every student must complete, tracked separately
    /// from the general subjects but included in the overall total
    Required,
    /// 解剖学
    Anatomy,
    /// 生理学
    Physiology,
    /// 運動学
    Kinesiology,
    /// 病理学
    Pathology,
    /// 衛生学
    Hygiene,
    /// リハビリ医学
    Rehabilitation,
    /// 一般臨床
    ClinicalMedicine,
    /// 外科学
    Surgery,
    /// 整形外科
    Orthopedics,
    /// 柔整理論
    JudoTherapyTheory,
}

impl Subject {
    /// All general (non-mandatory) subjects, in the fixed presentation order
    pub const GENERAL: [Subject; 10] = [
        Self::Anatomy,
        Self::Physiology,
        Self::Kinesiology,
        Self::Pathology,
        Self::Hygiene,
        Self::Rehabilitation,
        Self::ClinicalMedicine,
        Self::Surgery,
        Self::Orthopedics,
        Self::JudoTherapyTheory,
    ];

    /// Whether this is the mandatory block
    #[inline]
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Required)
    }

    /// Presentation name of the subject (Japanese, as printed on reports)
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Required => "必修",
            Self::Anatomy => "解剖学",
            Self::Physiology => "生理学",
            Self::Kinesiology => "運動学",
            Self::Pathology => "病理学",
            Self::Hygiene => "衛生学",
            Self::Rehabilitation => "リハビリ医学",
            Self::ClinicalMedicine => "一般臨床",
            Self::Surgery => "外科学",
            Self::Orthopedics => "整形外科",
            Self::JudoTherapyTheory => "柔整理論",
        }
    }

    /// Machine-readable code, matching the serde representation
    pub fn code(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Anatomy => "anatomy",
            Self::Physiology => "physiology",
            Self::Kinesiology => "kinesiology",
            Self::Pathology => "pathology",
            Self::Hygiene => "hygiene",
            Self::Rehabilitation => "rehabilitation",
            Self::ClinicalMedicine => "clinical_medicine",
            Self::Surgery => "surgery",
            Self::Orthopedics => "orthopedics",
            Self::JudoTherapyTheory => "judo_therapy_theory",
        }
    }
}

impl Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_excludes_required() {
        assert_eq!(Subject::GENERAL.len(), 10);
        assert!(!Subject::GENERAL.contains(&Subject::Required));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Subject::Required.display_name(), "必修");
        assert_eq!(Subject::Anatomy.display_name(), "解剖学");
        assert_eq!(Subject::JudoTherapyTheory.display_name(), "柔整理論");
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Subject::ClinicalMedicine).unwrap();
        assert_eq!(json, "\"clinical_medicine\"");

        let back: Subject = serde_json::from_str("\"judo_therapy_theory\"").unwrap();
        assert_eq!(back, Subject::JudoTherapyTheory);
    }
}
