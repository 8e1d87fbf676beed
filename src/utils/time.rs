//! Time utilities: parsing HH:MM, minute-of-day arithmetic, serde helpers.

use chrono::{NaiveTime, Timelike};

pub const MINUTES_PER_DAY: i64 = 1440;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn minute_of_day(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

/// Clock time for a minute-of-day, wrapping into 0..1440.
pub fn from_minute_of_day(minutes: i64) -> NaiveTime {
    let m = minutes.rem_euclid(MINUTES_PER_DAY) as u32;
    // m < 1440 so both parts are in range
    NaiveTime::from_hms_opt(m / 60, m % 60, 0).unwrap_or_default()
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Serde adapter: `NaiveTime` <-> "HH:MM".
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_time(&raw).ok_or_else(|| D::Error::custom(format!("invalid time '{raw}'")))
    }
}
