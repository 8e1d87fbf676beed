use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::grid_view::{render_grid, render_stats};
use crate::ui::messages::{header, info, note};

use super::{load_month, resolve_lines};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { month, line, set } = cmd {
        let lines = resolve_lines(line.as_deref())?;
        let schedule = load_month(cfg, month.as_deref(), set)?;

        for l in lines {
            let Some(ls) = schedule.line(l) else {
                continue;
            };

            header(format!("{} · {}", l, schedule.month_key()));

            if ls.reconciled.grid.rows.is_empty() {
                info(format!("No employees on line {}.", l));
                continue;
            }

            print!("{}", render_grid(&ls.reconciled, &cfg.currency));
            for s in render_stats(&ls.stats) {
                note(s);
            }
        }

        note("* = manual override");
    }
    Ok(())
}
