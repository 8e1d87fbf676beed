use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::line::Line;
use crate::utils::time::hhmm;

/// Local clock range "HH:MM" - "HH:MM". `end` may be earlier than `start`
/// for overnight shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl TimeRange {
    pub fn label(&self) -> String {
        format!("{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

/// A pre-defined shift offered as a quick-fill option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftTemplate {
    pub id: i64,
    pub name: String,
    pub time_raw: String,
    pub time_range: Option<TimeRange>,
    pub amount: f64,
    pub department_tag: String,
    /// Single-line view of the department tag (L1 wins when both match).
    pub line: Option<Line>,
    /// Short label for non-working days (day off, vacation, birthday).
    pub special_label: Option<&'static str>,
}
