//! Test utilities for the exam statistics workspace
//!
//! This crate provides shared fixtures (the five-student sample cohort that
//! ships as `fixtures/roster.toml`) and fluent builders for constructing
//! bespoke rosters in tests.

pub mod builders;
pub mod fixtures;

pub use builders::{RosterBuilder, StudentRecordBuilder};
pub use fixtures::{anatomy_cohort, sample_catalog, sample_roster};
