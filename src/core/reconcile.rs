//! Merge of server-derived grids with manual overrides.

use serde::Serialize;

use crate::core::overrides::OverrideStore;
use crate::models::grid::{CellOrigin, ScheduleGrid, ShiftCell};

/// Monthly total of one grid row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowTotal {
    pub employee_id: i64,
    pub amount: f64,
    pub shifts: usize,
}

/// Render-ready grid: overrides applied, totals computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconciledGrid {
    pub grid: ScheduleGrid,
    /// Same order as `grid.rows`.
    pub totals: Vec<RowTotal>,
}

impl ReconciledGrid {
    pub fn total_for(&self, employee_id: i64) -> Option<&RowTotal> {
        self.totals.iter().find(|t| t.employee_id == employee_id)
    }

    pub fn grand_total(&self) -> f64 {
        self.totals.iter().map(|t| t.amount).sum()
    }
}

/// Copy of `grid` with every matching patch applied.
///
/// A patch overwrites start, end and amount of an existing cell (the task
/// id is kept) or creates the cell on an empty day. Patches for employees
/// outside the roster or days outside the month are ignored. The result
/// depends only on `grid` and `store`.
pub fn apply_overrides(grid: &ScheduleGrid, store: &OverrideStore) -> ScheduleGrid {
    let mut out = grid.clone();

    for (key, patch) in store.for_month(grid.line, grid.year, grid.month) {
        let Some(idx) = key.day.checked_sub(1).map(|d| d as usize) else {
            continue;
        };

        for row in out.rows.iter_mut().filter(|r| r.employee_id == key.employee_id) {
            let Some(slot) = row.shifts_by_day.get_mut(idx) else {
                continue;
            };

            match slot {
                Some(cell) => {
                    cell.start_local = patch.start_local;
                    cell.end_local = patch.end_local;
                    cell.amount = patch.amount;
                    cell.origin = CellOrigin::Override;
                }
                None => {
                    *slot = Some(ShiftCell {
                        start_local: patch.start_local,
                        end_local: patch.end_local,
                        amount: patch.amount,
                        task_id: None,
                        source_day: key.day,
                        origin: CellOrigin::Override,
                    });
                }
            }
        }
    }

    out
}

/// Apply overrides and compute per-row totals.
pub fn reconcile(grid: &ScheduleGrid, store: &OverrideStore) -> ReconciledGrid {
    let grid = apply_overrides(grid, store);
    let totals = grid
        .rows
        .iter()
        .map(|r| RowTotal {
            employee_id: r.employee_id,
            amount: r.total_amount(),
            shifts: r.shift_count(),
        })
        .collect();

    ReconciledGrid { grid, totals }
}
