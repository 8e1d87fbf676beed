pub mod config;
pub mod convert;
pub mod export;
pub mod init;
pub mod roster;
pub mod show;
pub mod templates;

use crate::config::Config;
use crate::core::overrides::OverrideStore;
use crate::core::schedule::MonthSchedule;
use crate::core::session::ScheduleSession;
use crate::errors::{AppError, AppResult};
use crate::models::line::Line;
use crate::source::JsonDirSource;
use crate::utils::date;

/// Overrides from the configured file plus the `--set` assignments.
fn collect_overrides(cfg: &Config, sets: &[String]) -> AppResult<OverrideStore> {
    let mut store = match cfg.overrides_path() {
        Some(path) => OverrideStore::load_file(&path)?,
        None => OverrideStore::new(),
    };

    for raw in sets {
        store.set_from_assignment(raw)?;
    }
    Ok(store)
}

/// "YYYY-MM" → (year, month), current month when omitted.
fn resolve_month(month: Option<&str>) -> AppResult<(i32, u32)> {
    match month {
        Some(m) => date::parse_month(m),
        None => Ok(date::current_month()),
    }
}

/// Lines selected by an optional `--line` argument.
fn resolve_lines(line: Option<&str>) -> AppResult<Vec<Line>> {
    match line {
        Some(l) => Ok(vec![l.parse()?]),
        None => Ok(Line::ALL.to_vec()),
    }
}

/// Load, build and reconcile the schedule of a month from the data dir.
fn load_month(cfg: &Config, month: Option<&str>, sets: &[String]) -> AppResult<MonthSchedule> {
    let (year, month) = resolve_month(month)?;
    let store = collect_overrides(cfg, sets)?;

    let mut session = ScheduleSession::new(cfg.schedule.clone(), store);
    session.load(&JsonDirSource::new(cfg.data_path()), year, month)?;

    session
        .into_published()
        .ok_or_else(|| AppError::source_failure("schedule", "no schedule was published"))
}
