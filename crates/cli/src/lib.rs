//! Exam statistics CLI
//!
//! Presentation glue over the statistics engine: loads a roster fixture
//! from a TOML file, computes the result records, and renders them as
//! tables, JSON, or plain text.

pub mod commands;
pub mod fixture;
pub mod output;
pub mod telemetry;
