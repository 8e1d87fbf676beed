//! Terminal views of grids, rosters and shift templates.

use crate::core::grid::SkipStats;
use crate::core::reconcile::ReconciledGrid;
use crate::models::employee::Employee;
use crate::models::template::ShiftTemplate;
use crate::utils::colors::{RESET, color_for_special, colorize_cell};
use crate::utils::formatting::{compact_cell, format_amount, format_money};
use crate::utils::table::{Column, Table};

const EMPTY_CELL: &str = "·";

pub fn render_grid(rec: &ReconciledGrid, currency: &str) -> String {
    let mut columns = vec![Column::left("Employee", 8)];
    columns.extend(rec.grid.days.iter().map(|d| Column::right(d.to_string(), 2)));
    columns.push(Column::right("Shifts", 6));
    columns.push(Column::right(format!("Total ({currency})"), 8));

    let mut table = Table::new(columns);

    for (row, total) in rec.grid.rows.iter().zip(&rec.totals) {
        let mut cells = Vec::with_capacity(rec.grid.days.len() + 3);
        cells.push(row.employee_name.clone());
        cells.extend(row.shifts_by_day.iter().map(|slot| match slot {
            Some(cell) => colorize_cell(&compact_cell(cell), Some(cell.origin)),
            None => colorize_cell(EMPTY_CELL, None),
        }));
        cells.push(total.shifts.to_string());
        cells.push(format_amount(total.amount));
        table.add_row(cells);
    }

    table.fit();
    let mut out = table.render();
    out.push_str(&format!(
        "Grand total: {}\n",
        format_money(rec.grand_total(), currency)
    ));
    out
}

pub fn render_roster(employees: &[Employee]) -> String {
    let mut table = Table::new(vec![
        Column::right("ID", 4),
        Column::left("Name", 10),
        Column::left("Department", 10),
        Column::left("Position", 8),
    ]);

    for e in employees {
        table.add_row(vec![
            e.id.to_string(),
            e.full_name.clone(),
            e.department_name.clone().unwrap_or_default(),
            e.position.clone().unwrap_or_default(),
        ]);
    }

    table.fit();
    table.render()
}

pub fn render_templates(templates: &[ShiftTemplate], currency: &str) -> String {
    let mut table = Table::new(vec![
        Column::right("ID", 4),
        Column::left("Name", 8),
        Column::left("Time", 11),
        Column::right(format!("Amount ({currency})"), 8),
        Column::left("Department", 10),
    ]);

    for t in templates {
        let name = match t.special_label {
            Some(label) => format!("{}{label}{RESET} {}", color_for_special(label), t.name),
            None => t.name.clone(),
        };
        let time = t
            .time_range
            .map(|r| r.label())
            .unwrap_or_else(|| t.time_raw.clone());

        table.add_row(vec![
            t.id.to_string(),
            name,
            time,
            format_amount(t.amount),
            t.department_tag.clone(),
        ]);
    }

    table.fit();
    table.render()
}

/// One line per non-zero counter, e.g. "skipped 2 (missing assignee)".
pub fn render_stats(stats: &SkipStats) -> Vec<String> {
    let mut lines: Vec<String> = stats
        .by_reason
        .iter()
        .filter(|(_, n)| **n > 0)
        .map(|(reason, n)| format!("skipped {} ({})", n, reason.label()))
        .collect();

    if stats.collisions > 0 {
        lines.push(format!(
            "{} same-day record(s) replaced by a later one",
            stats.collisions
        ));
    }
    lines
}
