//! Exam statistics CLI
//!
//! Loads a roster fixture, runs the statistics engine, and renders
//! per-student reports or the cohort ranking.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use exam_stats_cli::commands::{ranking, report};
use exam_stats_cli::fixture;
use exam_stats_cli::output::OutputFormat;
use exam_stats_cli::telemetry;

/// Output format for CLI commands
#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum CliOutputFormat {
    /// JSON output
    Json,
    /// Table output (default)
    #[default]
    Table,
    /// Plain text output
    Plain,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "exam-stats")]
#[command(author, version, about = "Exam result statistics")]
#[command(long_about = "Computes descriptive statistics (score rate, rank, standardized \
    deviation score) for exam results across a cohort of students, per subject and in aggregate.")]
#[command(propagate_version = true)]
struct Cli {
    /// Path to the roster fixture (TOML)
    #[arg(
        short,
        long,
        global = true,
        env = "EXAM_STATS_ROSTER",
        default_value = "fixtures/roster.toml"
    )]
    roster: PathBuf,

    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value = "table")]
    format: CliOutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Per-student exam reports
    #[command(alias = "rep")]
    Report {
        /// Restrict the report to one student (registration code)
        #[arg(long)]
        student: Option<String>,
    },

    /// Cohort ranking by total score
    #[command(alias = "rank")]
    Ranking,
}

fn main() {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    if let Err(e) = run(&cli) {
        use colored::Colorize;
        eprintln!("{} {}", "Error:".red().bold(), e);
        if cli.verbose {
            eprintln!("\n{}", "Backtrace:".dimmed());
            eprintln!("{:?}", e);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let fixture = fixture::load_fixture(&cli.roster)?;
    let format = cli.format.into();

    match &cli.command {
        Commands::Report { student } => report::run(&fixture, student.as_deref(), format),
        Commands::Ranking => ranking::run(&fixture, format),
    }
}
