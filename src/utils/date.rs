use chrono::{Datelike, NaiveDate};

use crate::errors::{AppError, AppResult};

/// Grids never have more than 31 day columns.
pub const MAX_GRID_DAYS: u32 = 31;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Number of days of the given month (1-based), capped at 31.
/// Returns 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    match next {
        Some(n) => (n - first).num_days().clamp(0, MAX_GRID_DAYS as i64) as u32,
        None => 0,
    }
}

/// "YYYY-MM"
pub fn month_key(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month)
}

/// Parse "YYYY-MM" into (year, month).
pub fn parse_month(s: &str) -> AppResult<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidMonth(s.to_string()))?;
    Ok((d.year(), d.month()))
}

pub fn current_month() -> (i32, u32) {
    let t = today();
    (t.year(), t.month())
}
