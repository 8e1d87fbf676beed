// src/export/model.rs

use crate::core::reconcile::ReconciledGrid;
use crate::utils::formatting::format_amount;

/// Header for the CSV grid: employee columns, one column per day, totals.
pub(crate) fn get_headers(rec: &ReconciledGrid) -> Vec<String> {
    let mut headers = vec!["employee_id".to_string(), "employee".to_string()];
    headers.extend(rec.grid.days.iter().map(|d| d.to_string()));
    headers.push("shifts".to_string());
    headers.push("total".to_string());
    headers
}

/// Flatten the grid into string rows; empty days become empty strings.
pub(crate) fn grid_to_table(rec: &ReconciledGrid) -> Vec<Vec<String>> {
    rec.grid
        .rows
        .iter()
        .zip(&rec.totals)
        .map(|(row, total)| {
            let mut out = vec![row.employee_id.to_string(), row.employee_name.clone()];
            out.extend(
                row.shifts_by_day
                    .iter()
                    .map(|c| c.as_ref().map(|c| c.range_label()).unwrap_or_default()),
            );
            out.push(total.shifts.to_string());
            out.push(format_amount(total.amount));
            out
        })
        .collect()
}
