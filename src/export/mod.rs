// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod model;

use crate::core::reconcile::ReconciledGrid;
use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;
use tracing::debug;

/// Common completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write a reconciled grid to `path` in the requested format.
pub fn export_grid(rec: &ReconciledGrid, format: &ExportFormat, path: &Path, force: bool) -> AppResult<()> {
    let grid_label = format!("{} {}", rec.grid.line, rec.grid.month_key);
    fs_utils::ensure_export_target(path, &grid_label, force, std::io::stdin().lock())?;
    debug!(format = format.as_str(), rows = rec.grid.rows.len(), "exporting grid");

    match format {
        ExportFormat::Csv => json_csv::export_csv(rec, path),
        ExportFormat::Json => json_csv::export_json(rec, path),
    }
}
