// src/export/json_csv.rs

use crate::core::reconcile::ReconciledGrid;
use crate::errors::AppResult;
use crate::export::model::{get_headers, grid_to_table};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed (full grid, cell origins and totals).
pub(crate) fn export_json(rec: &ReconciledGrid, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rec)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV: one row per employee, one column per day.
pub(crate) fn export_csv(rec: &ReconciledGrid, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(get_headers(rec))?;
    for row in grid_to_table(rec) {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
