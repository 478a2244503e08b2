//! Roster fixture loading
//!
//! The sample dataset is external fixture data, never code-level constants:
//! a TOML file holding the subject catalog and the student roster, shaped
//! directly into the domain input types.

use anyhow::{Context, Result};
use exam_stats_domain::roster::{Roster, SubjectCatalog};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A roster fixture file: subject catalog plus student records
#[derive(Debug, Clone, Deserialize)]
pub struct RosterFixture {
    /// Offered subjects and their max scores
    pub catalog: SubjectCatalog,
    /// Student records, in roster order
    #[serde(flatten)]
    pub roster: Roster,
}

/// Load a roster fixture from a TOML file
pub fn load_fixture(path: &Path) -> Result<RosterFixture> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read roster fixture: {}", path.display()))?;
    let fixture = parse_fixture(&contents)
        .with_context(|| format!("failed to parse roster fixture: {}", path.display()))?;
    debug!(
        students = fixture.roster.len(),
        subjects = fixture.catalog.subjects.len(),
        "loaded roster fixture"
    );
    Ok(fixture)
}

/// Parse a roster fixture from TOML text
pub fn parse_fixture(contents: &str) -> Result<RosterFixture> {
    let fixture: RosterFixture = toml::from_str(contents)?;
    Ok(fixture)
}
