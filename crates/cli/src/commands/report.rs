//! Per-student report command
//!
//! Renders one detailed report per student: identity and totals, then one
//! row per subject with the mandatory block first. Cohort score-rate
//! statistics are always computed here, since the report is the comparative
//! view.

use anyhow::{anyhow, Result};
use colored::Colorize;

use crate::fixture::RosterFixture;
use crate::output::{JsonFormatter, OutputFormat, PlainFormatter, TableFormatter};
use exam_stats_domain::result::{StudentExamResult, SubjectResult};
use exam_stats_domain::subject::Subject;
use exam_stats_engine::{generate_results, stats};

/// Show per-student exam reports, optionally restricted to one student
pub fn run(fixture: &RosterFixture, student: Option<&str>, format: OutputFormat) -> Result<()> {
    let results = generate_results(&fixture.roster, &fixture.catalog, true)?;

    let selected: Vec<&StudentExamResult> = match student {
        Some(id) => {
            let result = results
                .iter()
                .find(|r| r.student_id.as_str() == id)
                .ok_or_else(|| anyhow!("student {} not found on the roster", id))?;
            vec![result]
        }
        None => results.iter().collect(),
    };

    match format {
        OutputFormat::Json => println!("{}", JsonFormatter::format(&selected)?),
        OutputFormat::Plain => println!("{}", PlainFormatter::format(&selected)?),
        OutputFormat::Table => {
            for result in selected {
                print_report(result)?;
                println!();
            }
        }
    }

    Ok(())
}

fn print_report(result: &StudentExamResult) -> Result<()> {
    println!(
        "{}",
        format!("{} ({})", result.student_name, result.student_id).bold()
    );
    println!();

    let summary = vec![
        (
            "総合点",
            format!(
                "{} / {} ({:.1}%)",
                result.total_score,
                result.total_max_score,
                stats::score_rate(result.total_score, result.total_max_score)
            ),
        ),
        (
            "必修",
            format!("{} / {}", result.required_score, result.required_max_score),
        ),
        (
            "一般合計",
            format!("{} / {}", result.general_score, result.general_max_score),
        ),
    ];
    println!("{}", TableFormatter::key_value(summary)?);

    let headers = vec![
        "科目",
        "得点",
        "得点率",
        "順位",
        "偏差値",
        "平均得点率",
        "得点率標準偏差",
    ];
    let mut rows = vec![subject_row(Subject::Required, &result.required)];
    for (&subject, subject_result) in &result.subjects {
        rows.push(subject_row(subject, subject_result));
    }

    println!("{}", TableFormatter::stats(headers, rows)?);
    Ok(())
}

fn subject_row(subject: Subject, result: &SubjectResult) -> Vec<String> {
    let (average_rate, rate_std_dev) = match result.rate_stats {
        Some(stats) => (
            format!("{:.1}%", stats.average_rate),
            format!("{:.1}", stats.rate_std_dev),
        ),
        None => ("-".to_string(), "-".to_string()),
    };

    vec![
        subject.display_name().to_string(),
        format!("{} / {}", result.score, result.max_score),
        format!("{:.1}%", result.score_rate),
        format!("#{}", result.rank),
        format!("{:.1}", result.deviation),
        average_rate,
        rate_std_dev,
    ]
}
