use chrono::NaiveTime;
use serde::Serialize;

use super::line::Line;
use crate::utils::time::hhmm;

/// Where a cell's values came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellOrigin {
    Server,
    Override,
}

/// One employee's shift on one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftCell {
    #[serde(with = "hhmm")]
    pub start_local: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_local: NaiveTime,
    pub amount: f64,
    pub task_id: Option<i64>,
    /// Day of month the cell is filed under.
    pub source_day: u32,
    pub origin: CellOrigin,
}

impl ShiftCell {
    pub fn range_label(&self) -> String {
        format!(
            "{}-{}",
            self.start_local.format("%H:%M"),
            self.end_local.format("%H:%M")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridRow {
    pub employee_id: i64,
    pub employee_name: String,
    /// Dense: exactly one slot per entry of `ScheduleGrid::days`.
    pub shifts_by_day: Vec<Option<ShiftCell>>,
}

impl GridRow {
    pub fn cell(&self, day: u32) -> Option<&ShiftCell> {
        day.checked_sub(1)
            .and_then(|i| self.shifts_by_day.get(i as usize))
            .and_then(Option::as_ref)
    }

    /// Monthly amount: plain sum over non-empty cells.
    pub fn total_amount(&self) -> f64 {
        self.shifts_by_day.iter().flatten().map(|c| c.amount).sum()
    }

    pub fn shift_count(&self) -> usize {
        self.shifts_by_day.iter().flatten().count()
    }
}

/// Per-line, per-month matrix of employees x days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleGrid {
    pub line: Line,
    pub year: i32,
    pub month: u32,
    /// "YYYY-MM"
    pub month_key: String,
    /// 1..=N, N = days in month
    pub days: Vec<u32>,
    pub rows: Vec<GridRow>,
}

impl ScheduleGrid {
    pub fn row(&self, employee_id: i64) -> Option<&GridRow> {
        self.rows.iter().find(|r| r.employee_id == employee_id)
    }
}
