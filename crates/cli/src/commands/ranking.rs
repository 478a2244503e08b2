//! Cohort ranking command
//!
//! Ranks every student by total score, using the same competition-ranking
//! and deviation primitives the per-subject statistics use, so tied totals
//! share a rank here too.

use anyhow::Result;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::fixture::RosterFixture;
use crate::output::{JsonFormatter, OutputFormat, PlainFormatter, TableFormatter};
use exam_stats_domain::result::StudentExamResult;
use exam_stats_engine::{generate_results, stats};

/// One row of the cohort ranking
#[derive(Debug, Serialize, Deserialize)]
pub struct RankingEntry {
    pub rank: usize,
    pub student_id: String,
    pub student_name: String,
    pub total_score: u32,
    pub total_max_score: u32,
    pub score_rate: f64,
    pub deviation: f64,
    pub required_score: u32,
}

/// Show the cohort ranking by total score
pub fn run(fixture: &RosterFixture, format: OutputFormat) -> Result<()> {
    let results = generate_results(&fixture.roster, &fixture.catalog, false)?;
    let entries = build_entries(&results)?;

    if entries.is_empty() {
        println!("{}", "No students on the roster.".yellow());
        return Ok(());
    }

    match format {
        OutputFormat::Json => println!("{}", JsonFormatter::format(&entries)?),
        OutputFormat::Plain => println!("{}", PlainFormatter::format(&entries)?),
        OutputFormat::Table => {
            println!("{}", "総合順位".bold());
            println!();

            let headers = vec!["順位", "学籍番号", "氏名", "必修", "総合点", "得点率", "偏差値"];
            let rows: Vec<Vec<String>> = entries
                .iter()
                .map(|e| {
                    vec![
                        format!("#{}", e.rank),
                        e.student_id.clone(),
                        e.student_name.clone(),
                        e.required_score.to_string(),
                        format!("{} / {}", e.total_score, e.total_max_score),
                        format!("{:.1}%", e.score_rate),
                        format!("{:.1}", e.deviation),
                    ]
                })
                .collect();

            println!("{}", TableFormatter::stats(headers, rows)?);
        }
    }

    Ok(())
}

fn build_entries(results: &[StudentExamResult]) -> Result<Vec<RankingEntry>> {
    let totals: Vec<u32> = results.iter().map(|r| r.total_score).collect();

    let mut entries = results
        .iter()
        .map(|r| {
            Ok(RankingEntry {
                rank: stats::rank(r.total_score, &totals)?,
                student_id: r.student_id.to_string(),
                student_name: r.student_name.clone(),
                total_score: r.total_score,
                total_max_score: r.total_max_score,
                score_rate: stats::score_rate(r.total_score, r.total_max_score),
                deviation: stats::deviation(r.total_score, &totals),
                required_score: r.required_score,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // Stable sort: tied totals keep roster order
    entries.sort_by_key(|e| e.rank);
    Ok(entries)
}
