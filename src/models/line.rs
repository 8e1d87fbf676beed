use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Organisational line a shift or an employee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Line {
    /// Front line (operators / contact center)
    L1,
    /// Engineering line
    L2,
}

impl Line {
    pub const ALL: [Line; 2] = [Line::L1, Line::L2];

    pub fn code(&self) -> &'static str {
        match self {
            Line::L1 => "L1",
            Line::L2 => "L2",
        }
    }

    /// Helper: accept CLI input in any case ("l1", "L2").
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "L1" => Some(Line::L1),
            "L2" => Some(Line::L2),
            _ => None,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Line {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Line::from_code(s).ok_or_else(|| AppError::InvalidLine(s.to_string()))
    }
}

/// Result of the department classifier: a line, or `Extra` for employees
/// that match no rule. Extra employees are retained, never dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RosterGroup {
    L1,
    L2,
    Extra,
}

impl RosterGroup {
    pub fn line(&self) -> Option<Line> {
        match self {
            RosterGroup::L1 => Some(Line::L1),
            RosterGroup::L2 => Some(Line::L2),
            RosterGroup::Extra => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            RosterGroup::L1 => "L1",
            RosterGroup::L2 => "L2",
            RosterGroup::Extra => "extra",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "l1" => Some(RosterGroup::L1),
            "l2" => Some(RosterGroup::L2),
            "extra" => Some(RosterGroup::Extra),
            _ => None,
        }
    }
}

impl From<Line> for RosterGroup {
    fn from(line: Line) -> Self {
        match line {
            Line::L1 => RosterGroup::L1,
            Line::L2 => RosterGroup::L2,
        }
    }
}

/// Set of lines matched by the substring classifiers. Unlike `RosterGroup`
/// both flags may be set at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineSet {
    pub l1: bool,
    pub l2: bool,
}

impl LineSet {
    pub fn contains(&self, line: Line) -> bool {
        match line {
            Line::L1 => self.l1,
            Line::L2 => self.l2,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.l1 && !self.l2
    }

    /// Collapse to a single line; L1 wins when both are present.
    pub fn preferred(&self) -> Option<Line> {
        if self.l1 {
            Some(Line::L1)
        } else if self.l2 {
            Some(Line::L2)
        } else {
            None
        }
    }
}
