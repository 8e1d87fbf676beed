//! In-memory store of manual cell overrides.
//!
//! Overrides live outside the server-derived grids: grids are rebuilt
//! wholesale, overrides survive and are reapplied after every rebuild.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::core::time_convert::parse_shift_time_range_string;
use crate::errors::{AppError, AppResult};
use crate::models::line::Line;
use crate::utils::time::hhmm;

/// Composite slot key. Text form: `line|year|month|employeeId|day`,
/// e.g. `L1|2024|3|7|15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverrideKey {
    pub line: Line,
    pub year: i32,
    pub month: u32,
    pub employee_id: i64,
    pub day: u32,
}

impl fmt::Display for OverrideKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}|{}",
            self.line, self.year, self.month, self.employee_id, self.day
        )
    }
}

impl FromStr for OverrideKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || AppError::InvalidOverride(format!("bad key '{s}' (expected LINE|YEAR|MONTH|EMPLOYEE|DAY)"));

        let parts: Vec<&str> = s.split('|').map(str::trim).collect();
        let [line, year, month, employee_id, day] = parts.as_slice() else {
            return Err(bad());
        };

        let key = OverrideKey {
            line: line.parse()?,
            year: year.parse().map_err(|_| bad())?,
            month: month.parse().map_err(|_| bad())?,
            employee_id: employee_id.parse().map_err(|_| bad())?,
            day: day.parse().map_err(|_| bad())?,
        };

        if !(1..=12).contains(&key.month) || !(1..=31).contains(&key.day) {
            return Err(bad());
        }
        Ok(key)
    }
}

/// Manually entered values for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverridePatch {
    #[serde(with = "hhmm")]
    pub start_local: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_local: NaiveTime,
    #[serde(default)]
    pub amount: f64,
}

impl FromStr for OverridePatch {
    type Err = AppError;

    /// "09:00-18:00@2500" (amount optional, defaults to 0)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (range_raw, amount_raw) = match s.split_once('@') {
            Some((r, a)) => (r, Some(a)),
            None => (s, None),
        };

        let range = parse_shift_time_range_string(range_raw)
            .ok_or_else(|| AppError::InvalidOverride(format!("bad time range '{range_raw}'")))?;

        let amount = match amount_raw {
            Some(a) => a
                .trim()
                .replace(',', ".")
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .ok_or_else(|| AppError::InvalidOverride(format!("bad amount '{a}'")))?,
            None => 0.0,
        };

        Ok(OverridePatch {
            start_local: range.start,
            end_local: range.end,
            amount,
        })
    }
}

/// Serialized form used by override files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverrideEntry {
    pub key: String,
    #[serde(flatten)]
    pub patch: OverridePatch,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideStore {
    patches: BTreeMap<OverrideKey, OverridePatch>,
}

impl OverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a YAML (or JSON) list of `{key, start_local, end_local, amount}`
    /// entries. The file is only read, never written back.
    pub fn load_file(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path)?;
        let entries: Vec<OverrideEntry> = serde_yaml::from_str(&raw)
            .map_err(|e| AppError::InvalidOverride(format!("{}: {e}", path.display())))?;

        let mut store = Self::new();
        store.extend_from_entries(&entries)?;
        Ok(store)
    }

    /// Store or replace the patch of a slot (last write wins).
    pub fn set_override(&mut self, key: OverrideKey, patch: OverridePatch) {
        self.patches.insert(key, patch);
    }

    pub fn remove(&mut self, key: &OverrideKey) -> Option<OverridePatch> {
        self.patches.remove(key)
    }

    pub fn get(&self, key: &OverrideKey) -> Option<&OverridePatch> {
        self.patches.get(key)
    }

    pub fn len(&self) -> usize {
        self.patches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    /// Patches of one line/month, in key order.
    pub fn for_month(&self, line: Line, year: i32, month: u32) -> impl Iterator<Item = (&OverrideKey, &OverridePatch)> {
        self.patches
            .iter()
            .filter(move |(k, _)| k.line == line && k.year == year && k.month == month)
    }

    /// Parse and store a `KEY=RANGE@AMOUNT` assignment, as given on the
    /// command line.
    pub fn set_from_assignment(&mut self, raw: &str) -> AppResult<OverrideKey> {
        let (key_raw, patch_raw) = raw
            .split_once('=')
            .ok_or_else(|| AppError::InvalidOverride(format!("expected KEY=RANGE@AMOUNT, got '{raw}'")))?;

        let key: OverrideKey = key_raw.parse()?;
        let patch: OverridePatch = patch_raw.parse()?;
        self.set_override(key, patch);
        Ok(key)
    }

    pub fn extend_from_entries(&mut self, entries: &[OverrideEntry]) -> AppResult<()> {
        for e in entries {
            let key: OverrideKey = e.key.parse()?;
            self.set_override(key, e.patch);
        }
        Ok(())
    }
}
