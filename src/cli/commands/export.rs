use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::export_grid;
use crate::models::line::Line;
use crate::utils::path::expand_tilde;

use super::load_month;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        month,
        line,
        format,
        file,
        set,
        force,
    } = cmd
    {
        let line: Line = line.parse()?;
        let schedule = load_month(cfg, month.as_deref(), set)?;

        let ls = schedule
            .line(line)
            .ok_or_else(|| AppError::Export(format!("line {} not available", line)))?;

        export_grid(&ls.reconciled, format, &expand_tilde(file), *force)?;
    }
    Ok(())
}
