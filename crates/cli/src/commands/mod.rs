//! CLI commands

pub mod ranking;
pub mod report;
