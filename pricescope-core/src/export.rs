//! Export — CSV and JSON artifacts for an enriched dataset.
//!
//! CSV renders unavailable values as empty cells; JSON renders them as
//! `null`. Both formats carry every observation in date order.

use crate::domain::EnrichedObservation;
use anyhow::{Context, Result};

/// Column order for the enriched CSV artifact.
const CSV_COLUMNS: [&str; 7] = [
    "date",
    "close",
    "ma20",
    "ma50",
    "daily_return",
    "drawdown",
    "volatility20",
];

fn cell(value: Option<f64>, decimals: usize) -> String {
    value.map(|v| format!("{v:.decimals$}")).unwrap_or_default()
}

/// Render enriched observations as a CSV table.
///
/// Prices and averages at 4 decimal places, percentages at 6.
pub fn export_enriched_csv(observations: &[EnrichedObservation]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_COLUMNS)?;

    for obs in observations {
        wtr.write_record([
            obs.date.to_string(),
            format!("{:.4}", obs.close),
            cell(obs.ma20, 4),
            cell(obs.ma50, 4),
            cell(obs.daily_return, 6),
            format!("{:.6}", obs.drawdown),
            cell(obs.volatility20, 6),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Render enriched observations as pretty JSON.
pub fn export_enriched_json(observations: &[EnrichedObservation]) -> Result<String> {
    serde_json::to_string_pretty(observations)
        .context("failed to serialize observations to JSON")
}
