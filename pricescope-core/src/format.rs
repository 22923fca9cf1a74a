//! Display formatting helpers for reports.

use chrono::NaiveDate;

/// Short human date, e.g. "Jan 3, 2023".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Fixed-decimal number.
pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Signed percentage with an explicit `+` for non-negative values.
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{value:+.decimals$}%")
}
