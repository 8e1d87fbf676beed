//! Month schedule assembly: directory + catalog + task register →
//! reconciled grids for every line.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::catalog::{CatalogColumns, ShiftCatalogIndex};
use crate::core::classify::LineRules;
use crate::core::directory::{EmployeeDirectory, RosterMode};
use crate::core::grid::{SkipStats, TaskFieldIds, build_grid};
use crate::core::overrides::OverrideStore;
use crate::core::reconcile::{ReconciledGrid, reconcile};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::grid::ScheduleGrid;
use crate::models::line::Line;
use crate::models::template::ShiftTemplate;
use crate::source::ScheduleInputs;
use crate::utils::date::month_key;

/// Knobs of the assembly, read from the config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSettings {
    #[serde(default)]
    pub roster_mode: RosterMode,
    #[serde(default)]
    pub task_fields: TaskFieldIds,
    #[serde(default)]
    pub catalog_columns: CatalogColumns,
    #[serde(default)]
    pub line_rules: LineRules,
}

/// One line of a month: server grid, reconciled grid and its inputs.
#[derive(Debug, Clone)]
pub struct LineSchedule {
    pub line: Line,
    /// Grid as derived from the task register, before overrides.
    pub server: ScheduleGrid,
    pub reconciled: ReconciledGrid,
    pub roster: Vec<Employee>,
    pub templates: Vec<ShiftTemplate>,
    pub stats: SkipStats,
}

#[derive(Debug, Clone)]
pub struct MonthSchedule {
    pub year: i32,
    pub month: u32,
    pub directory: EmployeeDirectory,
    pub catalog: ShiftCatalogIndex,
    pub lines: Vec<LineSchedule>,
}

impl MonthSchedule {
    pub fn month_key(&self) -> String {
        month_key(self.year, self.month)
    }

    pub fn line(&self, line: Line) -> Option<&LineSchedule> {
        self.lines.iter().find(|l| l.line == line)
    }

    /// Rebuild every reconciled grid from the retained server grids.
    pub fn reapply(&mut self, store: &OverrideStore) {
        for l in &mut self.lines {
            l.reconciled = reconcile(&l.server, store);
        }
    }
}

/// Build and reconcile the grids of both lines for `year`/`month`.
pub fn build_month_schedule(
    inputs: &ScheduleInputs,
    year: i32,
    month: u32,
    settings: &ScheduleSettings,
    store: &OverrideStore,
) -> AppResult<MonthSchedule> {
    if !(1..=12).contains(&month) {
        return Err(AppError::InvalidMonth(month_key(year, month)));
    }

    let directory = EmployeeDirectory::from_members(&inputs.members, &settings.line_rules);
    let catalog = ShiftCatalogIndex::build(&inputs.catalog, &settings.catalog_columns);

    let lines = Line::ALL
        .iter()
        .map(|&line| {
            let roster = directory.roster_for(line, settings.roster_mode);
            let built = build_grid(line, year, month, &roster, &inputs.tasks, &settings.task_fields);
            let reconciled = reconcile(&built.grid, store);

            LineSchedule {
                line,
                server: built.grid,
                reconciled,
                templates: catalog.templates(line).to_vec(),
                roster,
                stats: built.stats,
            }
        })
        .collect();

    info!(month = %month_key(year, month), overrides = store.len(), "month schedule assembled");

    Ok(MonthSchedule {
        year,
        month,
        directory,
        catalog,
        lines,
    })
}
