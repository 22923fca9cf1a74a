//! Pricescope CLI — report and export commands over a daily-close CSV file.
//!
//! Commands:
//! - `report` — load a CSV, print summary statistics, event markers, and
//!   the tail of the enriched series
//! - `export` — write the enriched series as a CSV or JSON artifact

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use pricescope_core::export::{export_enriched_csv, export_enriched_json};
use pricescope_core::format::{format_date, format_number, format_percent};
use pricescope_core::{LoadOutcome, Session, SummaryStats};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "pricescope",
    about = "Pricescope CLI — historical daily closing price explorer"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print summary statistics and the tail of the enriched series.
    Report {
        /// CSV file with Date and Close (or Adj Close) columns.
        file: PathBuf,

        /// TOML file with [[event]] tables (date + label) to overlay.
        #[arg(long)]
        events: Option<PathBuf>,

        /// Number of trailing rows to print.
        #[arg(long, default_value_t = 10)]
        tail: usize,
    },
    /// Write the enriched series as a CSV or JSON artifact.
    Export {
        /// CSV file with Date and Close (or Adj Close) columns.
        file: PathBuf,

        /// Artifact format.
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output path. Writes to stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

/// One `[[event]]` table in the events file.
#[derive(Debug, Deserialize)]
struct EventEntry {
    date: String,
    label: String,
}

#[derive(Debug, Deserialize)]
struct EventsFile {
    #[serde(default)]
    event: Vec<EventEntry>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report { file, events, tail } => cmd_report(&file, events.as_deref(), tail),
        Commands::Export {
            file,
            format,
            output,
        } => cmd_export(&file, format, output.as_deref()),
    }
}

fn load_session(file: &Path) -> Result<(Session, LoadOutcome)> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let mut session = Session::new();
    let outcome = session
        .load_csv(&raw)
        .with_context(|| format!("failed to parse {}", file.display()))?;
    Ok((session, outcome))
}

fn load_events(session: &mut Session, path: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let parsed: EventsFile =
        toml::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))?;

    for entry in parsed.event {
        let date = NaiveDate::parse_from_str(&entry.date, "%Y-%m-%d")
            .with_context(|| format!("invalid event date '{}' (expected YYYY-MM-DD)", entry.date))?;
        session
            .markers_mut()
            .add(date, &entry.label)
            .with_context(|| format!("invalid event label '{}'", entry.label))?;
    }
    Ok(())
}

fn cmd_report(file: &Path, events: Option<&Path>, tail: usize) -> Result<()> {
    let (mut session, outcome) = load_session(file)?;

    if outcome == LoadOutcome::NoValidData {
        println!("No valid data rows in {}", file.display());
        return Ok(());
    }

    if let Some(path) = events {
        load_events(&mut session, path)?;
    }

    let Some(stats) = session.summary() else {
        return Ok(());
    };
    print_summary(file, &stats);

    if !session.markers().is_empty() {
        println!();
        println!("Events");
        for marker in session.markers().iter() {
            println!("  {}  {}", marker.date, marker.label);
        }
    }

    println!();
    print_tail(&session, tail);
    Ok(())
}

fn print_summary(file: &Path, stats: &SummaryStats) {
    println!("Summary: {}", file.display());
    println!("{}", "-".repeat(58));
    println!(
        "{:<16} {} to {}",
        "Period",
        format_date(stats.start_date),
        format_date(stats.end_date)
    );
    println!("{:<16} {}", "Observations", stats.observations);
    println!(
        "{:<16} {}",
        "Total return",
        format_percent(stats.total_return, 2)
    );
    println!(
        "{:<16} {} / {}",
        "High / Low",
        format_number(stats.high, 2),
        format_number(stats.low, 2)
    );
    println!(
        "{:<16} {}",
        "Max drawdown",
        format_percent(stats.max_drawdown, 2)
    );
    match stats.avg_volatility {
        Some(v) => println!("{:<16} {}%", "Avg volatility", format_number(v, 2)),
        None => println!("{:<16} n/a", "Avg volatility"),
    }
}

fn print_tail(session: &Session, tail: usize) {
    println!(
        "{:<12} {:>10} {:>10} {:>10} {:>9} {:>9} {:>9}",
        "date", "close", "ma20", "ma50", "return", "drawdown", "vol20"
    );
    let rows = session.observations();
    let start = rows.len().saturating_sub(tail);
    for obs in &rows[start..] {
        println!(
            "{:<12} {:>10} {:>10} {:>10} {:>9} {:>9} {:>9}",
            obs.date.to_string(),
            format_number(obs.close, 2),
            cell(obs.ma20, 2),
            cell(obs.ma50, 2),
            cell(obs.daily_return, 2),
            format_number(obs.drawdown, 2),
            cell(obs.volatility20, 2),
        );
    }
}

fn cell(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format_number(v, decimals))
        .unwrap_or_else(|| "-".to_string())
}

fn cmd_export(file: &Path, format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let (session, outcome) = load_session(file)?;
    if outcome == LoadOutcome::NoValidData {
        eprintln!("No valid data rows in {}", file.display());
    }

    let artifact = match format {
        ExportFormat::Csv => export_enriched_csv(session.observations())?,
        ExportFormat::Json => export_enriched_json(session.observations())?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, &artifact)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "Wrote {} observations to {}",
                session.observations().len(),
                path.display()
            );
        }
        None => print!("{artifact}"),
    }
    Ok(())
}
