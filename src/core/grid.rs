//! Per-line monthly grid builder.
//!
//! Rows come from the roster (one per employee, roster order), columns from
//! the calendar (one per day). Task records only ever fill cells: a record
//! that is malformed, falls in another month, or carries no line marker is
//! skipped and counted, never raised as an error.

use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::core::catalog::{value_amount, value_text};
use crate::core::classify::line_from_tag;
use crate::core::time_convert::{LocalShiftRange, local_range_from_utc_due_and_duration};
use crate::models::employee::Employee;
use crate::models::grid::{CellOrigin, GridRow, ScheduleGrid, ShiftCell};
use crate::models::line::Line;
use crate::models::task::TaskRecord;
use crate::utils::date::{days_in_month, month_key};

/// Numeric ids of the task fields the builder reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskFieldIds {
    /// Due date-time field (value = UTC instant, duration = minutes)
    pub due: i64,
    /// Monetary field
    pub amount: i64,
    /// Person field (value = {id, ...})
    pub assignee: i64,
    /// Catalog reference to the shift (value = {values: [...]})
    pub shift: i64,
    /// Position of the department tag inside the shift reference values
    pub shift_department_index: usize,
}

impl Default for TaskFieldIds {
    fn default() -> Self {
        Self {
            due: 4,
            amount: 6,
            assignee: 2,
            shift: 3,
            shift_department_index: 3,
        }
    }
}

/// Why a task record did not make it into a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MissingDue,
    MissingAssignee,
    MissingShift,
    InvalidDue,
    OutsideMonth,
    UnclassifiedTag,
}

impl SkipReason {
    pub fn label(&self) -> &'static str {
        match self {
            SkipReason::MissingDue => "missing due field",
            SkipReason::MissingAssignee => "missing assignee",
            SkipReason::MissingShift => "missing shift reference",
            SkipReason::InvalidDue => "unparseable due date",
            SkipReason::OutsideMonth => "outside month",
            SkipReason::UnclassifiedTag => "no line marker",
        }
    }
}

/// Diagnostic counters of a grid build.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkipStats {
    pub by_reason: BTreeMap<SkipReason, usize>,
    /// Records that belong to the other line (not a malformation).
    pub other_line: usize,
    /// Records that replaced an earlier record on the same employee/day.
    pub collisions: usize,
}

impl SkipStats {
    pub fn record(&mut self, reason: SkipReason) {
        *self.by_reason.entry(reason).or_insert(0) += 1;
    }

    pub fn count(&self, reason: SkipReason) -> usize {
        self.by_reason.get(&reason).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.by_reason.values().sum()
    }
}

/// A task record reduced to what the grid needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftRecord {
    pub task_id: Option<i64>,
    pub employee_id: i64,
    pub range: LocalShiftRange,
    pub amount: f64,
    pub line: Line,
}

/// Extract a shift record from a task, or say why it cannot be used.
/// The month filter is applied by the builder, not here.
pub fn extract_record(task: &TaskRecord, fields: &TaskFieldIds) -> Result<ShiftRecord, SkipReason> {
    let due = task.field(fields.due).ok_or(SkipReason::MissingDue)?;
    let assignee = task.field(fields.assignee).ok_or(SkipReason::MissingAssignee)?;
    let shift = task.field(fields.shift).ok_or(SkipReason::MissingShift)?;

    let employee_id = value_id(assignee.value.get("id")).ok_or(SkipReason::MissingAssignee)?;

    let range = local_range_from_utc_due_and_duration(due.value.as_str(), due.duration.unwrap_or(0))
        .ok_or(SkipReason::InvalidDue)?;

    let tag = shift
        .value
        .get("values")
        .and_then(Value::as_array)
        .ok_or(SkipReason::MissingShift)?
        .get(fields.shift_department_index)
        .map(value_text)
        .unwrap_or_default();
    let line = line_from_tag(&tag).ok_or(SkipReason::UnclassifiedTag)?;

    let amount = task
        .field(fields.amount)
        .map(|f| value_amount(&f.value))
        .unwrap_or(0.0);

    Ok(ShiftRecord {
        task_id: task.id,
        employee_id,
        range,
        amount,
        line,
    })
}

fn value_id(v: Option<&Value>) -> Option<i64> {
    match v? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Output of a grid build.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltGrid {
    pub grid: ScheduleGrid,
    pub stats: SkipStats,
}

/// Build the dense grid of `line` for `year`/`month` (1-based).
///
/// Records colliding on the same employee and day: the last one in source
/// order wins.
pub fn build_grid(
    line: Line,
    year: i32,
    month: u32,
    roster: &[Employee],
    tasks: &[TaskRecord],
    fields: &TaskFieldIds,
) -> BuiltGrid {
    let days: Vec<u32> = (1..=days_in_month(year, month)).collect();
    let mut stats = SkipStats::default();
    let mut index: HashMap<(i64, u32), ShiftCell> = HashMap::new();

    for task in tasks {
        let record = match extract_record(task, fields) {
            Ok(r) => r,
            Err(reason) => {
                stats.record(reason);
                continue;
            }
        };

        let date = record.range.local_date;
        if date.year() != year || date.month() != month {
            stats.record(SkipReason::OutsideMonth);
            continue;
        }
        if record.line != line {
            stats.other_line += 1;
            continue;
        }

        let day = date.day();
        let cell = ShiftCell {
            start_local: record.range.start_local,
            end_local: record.range.end_local,
            amount: record.amount,
            task_id: record.task_id,
            source_day: day,
            origin: CellOrigin::Server,
        };

        if let Some(previous) = index.insert((record.employee_id, day), cell) {
            stats.collisions += 1;
            debug!(
                employee_id = record.employee_id,
                day,
                replaced_task = ?previous.task_id,
                task = ?record.task_id,
                "same-day shift replaced by later record"
            );
        }
    }

    let rows = roster
        .iter()
        .map(|e| GridRow {
            employee_id: e.id,
            employee_name: e.full_name.clone(),
            shifts_by_day: days
                .iter()
                .map(|&d| index.get(&(e.id, d)).cloned())
                .collect(),
        })
        .collect();

    debug!(
        line = %line,
        month = %month_key(year, month),
        skipped = stats.total(),
        other_line = stats.other_line,
        collisions = stats.collisions,
        "grid built"
    );

    BuiltGrid {
        grid: ScheduleGrid {
            line,
            year,
            month,
            month_key: month_key(year, month),
            days,
            rows,
        },
        stats,
    }
}
