//! UTC due instant + duration → local shift interval.
//!
//! The task register stores the *end* of a shift as a UTC due timestamp plus
//! the shift length in minutes. The schedule is kept in local time, which is
//! the fixed offset UTC+4. The local start is derived by walking back
//! `duration` minutes from the local end; when that crosses midnight the
//! shift is filed under the day it started on.

use std::sync::LazyLock;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use regex::Regex;
use serde::Serialize;

use crate::models::template::TimeRange;
use crate::utils::time::{MINUTES_PER_DAY, from_minute_of_day, hhmm, minute_of_day};

/// Local timezone offset from UTC, in hours.
pub const LOCAL_UTC_OFFSET_HOURS: i32 = 4;

/// Local shift interval derived from a due instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalShiftRange {
    /// Calendar date the shift is filed under (the start date).
    pub local_date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_local: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_local: NaiveTime,
    /// Signed number of days between the local end date and `local_date`
    /// (0 or negative).
    pub day_shift: i64,
}

impl LocalShiftRange {
    /// "YYYY-MM-DD"
    pub fn local_date_key(&self) -> String {
        self.local_date.format("%Y-%m-%d").to_string()
    }
}

/// Longest shift accepted from a due field: one leap year of minutes.
pub const MAX_SHIFT_MINUTES: i64 = 366 * MINUTES_PER_DAY;

/// The local fixed offset, `None` only if `LOCAL_UTC_OFFSET_HOURS` is out of ±24h.
pub fn local_offset() -> Option<FixedOffset> {
    FixedOffset::east_opt(LOCAL_UTC_OFFSET_HOURS * 3600)
}

/// Parse an ISO-8601 instant. Strings without an offset are read as UTC.
pub fn parse_utc_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Convert a UTC due instant and a duration into the local shift interval.
///
/// Returns `None` when the instant is missing or unparseable, or when the
/// duration is negative or longer than `MAX_SHIFT_MINUTES`. Durations of a
/// day or more roll the start back by as many days as needed.
pub fn local_range_from_utc_due_and_duration(
    utc_iso: Option<&str>,
    duration_minutes: i64,
) -> Option<LocalShiftRange> {
    if !(0..=MAX_SHIFT_MINUTES).contains(&duration_minutes) {
        return None;
    }

    let due = parse_utc_instant(utc_iso?)?;
    let local_end = due.with_timezone(&local_offset()?).naive_local();

    let end_minute = minute_of_day(local_end.time());
    let start_minute = end_minute.checked_sub(duration_minutes)?;
    let day_shift = start_minute.div_euclid(MINUTES_PER_DAY);

    let local_date = local_end
        .date()
        .checked_add_signed(Duration::try_days(day_shift)?)?;

    Some(LocalShiftRange {
        local_date,
        start_local: from_minute_of_day(start_minute),
        end_local: from_minute_of_day(end_minute),
        day_shift,
    })
}

static TIME_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})(?::(\d{1,2}))?$").unwrap());

/// Parse free-form shift time text such as "09:00-18:00", "9.00-18.00"
/// or "9-18".
///
/// Returns `None` unless the text splits on '-' into exactly two non-empty
/// numeric parts.
pub fn parse_shift_time_range_string(raw: &str) -> Option<TimeRange> {
    let normalized = raw.trim().replace('.', ":").replace(['–', '—'], "-");

    let parts: Vec<&str> = normalized.split('-').map(str::trim).collect();
    let [start, end] = parts.as_slice() else {
        return None;
    };
    if start.is_empty() || end.is_empty() {
        return None;
    }

    Some(TimeRange {
        start: parse_clock_part(start)?,
        end: parse_clock_part(end)?,
    })
}

/// "9" → 09:00, "9:5" → 09:05, "24:00" → 00:00
fn parse_clock_part(part: &str) -> Option<NaiveTime> {
    let caps = TIME_PART.captures(part)?;
    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    if hour == 24 && minute == 0 {
        return NaiveTime::from_hms_opt(0, 0, 0);
    }
    NaiveTime::from_hms_opt(hour, minute, 0)
}
