//! Formatting utilities used for CLI and export outputs.

use chrono::Timelike;

use crate::models::grid::{CellOrigin, ShiftCell};

/// "2500", "2500.50" (no trailing zeros for whole amounts)
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}

pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{} {}", format_amount(amount), currency)
}

/// Compact cell label for the terminal grid: "09-18" when both ends are on
/// the hour, "09:30-18:00" otherwise. Overridden cells get a trailing '*'.
pub fn compact_cell(cell: &ShiftCell) -> String {
    let on_hour = cell.start_local.minute() == 0 && cell.end_local.minute() == 0;
    let mut label = if on_hour {
        format!("{:02}-{:02}", cell.start_local.hour(), cell.end_local.hour())
    } else {
        cell.range_label()
    };

    if cell.origin == CellOrigin::Override {
        label.push('*');
    }
    label
}
