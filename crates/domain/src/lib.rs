//! Exam Statistics Domain Types
//!
//! This crate provides the core domain model for the exam statistics engine.
//! It defines the closed subject enumeration, the roster/catalog input types,
//! and the derived result records, all as plain serializable value types.
//!
//! ## Architecture
//!
//! The domain layer is organized into the following modules:
//!
//! - **identifiers**: Strongly-typed student identifiers
//! - **subject**: The closed subject enumeration with the mandatory block
//!   as a distinguished member
//! - **roster**: Raw score inputs (student records, roster, subject catalog)
//! - **result**: Derived per-subject and per-student result records
//!
//! All result types are derived values: recomputed fresh from raw scores on
//! every pass, never mutated after construction, and never persisted.
//!
//! ## Usage
//!
//! ```rust
//! use exam_stats_domain::subject::Subject;
//!
//! let subject = Subject::Anatomy;
//! assert_eq!(subject.display_name(), "解剖学");
//! assert!(!subject.is_required());
//! assert!(Subject::Required.is_required());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod identifiers;
pub mod result;
pub mod roster;
pub mod subject;

// Re-export commonly used types
pub use identifiers::StudentId;
pub use result::{RateStats, StudentExamResult, SubjectResult};
pub use roster::{Roster, StudentRecord, SubjectCatalog};
pub use subject::Subject;
