//! Line classification.
//!
//! Three independent classifiers, one per input shape:
//! - `resolve_line`: department id / exact department name (directory
//!   records). Unmatched employees land in `RosterGroup::Extra`.
//! - `classify_by_keywords`: free-text department/position substrings.
//!   An employee may match both lines.
//! - `lines_from_tag` / `line_from_tag`: "L1"/"L2" markers in a department
//!   tag (catalog entries, task records). Unmatched records are dropped by
//!   the grid builder.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::employee::Employee;
use crate::models::line::{Line, LineSet, RosterGroup};

/// Identifier/name rule for a single line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineRule {
    #[serde(default)]
    pub department_ids: BTreeSet<i64>,
    #[serde(default)]
    pub department_names: BTreeSet<String>,
}

impl LineRule {
    fn matches(&self, id: Option<i64>, name: Option<&str>) -> bool {
        id.is_some_and(|id| self.department_ids.contains(&id))
            || name
                .map(str::trim)
                .is_some_and(|n| !n.is_empty() && self.department_names.contains(n))
    }
}

/// Position of a department in the L2 roster ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentRank {
    pub id: Option<i64>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRules {
    pub l1: LineRule,
    pub l2: LineRule,
    /// L2 departments in display order; unknown departments sort last.
    #[serde(default)]
    pub l2_order: Vec<DepartmentRank>,
}

/// Rank given to departments missing from `l2_order`.
pub const UNRANKED_DEPARTMENT: usize = 99;

impl Default for LineRules {
    fn default() -> Self {
        let l2_order = vec![
            DepartmentRank {
                id: Some(171_248_779),
                name: "Инженера 5/2".into(),
            },
            DepartmentRank {
                id: Some(171_248_780),
                name: "Инженера 2/2".into(),
            },
            DepartmentRank {
                id: Some(108_368_026),
                name: "Инженеры".into(),
            },
        ];

        Self {
            l1: LineRule {
                department_ids: BTreeSet::from([108_368_027]),
                department_names: BTreeSet::from(["Операторы".to_string()]),
            },
            l2: LineRule {
                department_ids: l2_order.iter().filter_map(|d| d.id).collect(),
                department_names: l2_order.iter().map(|d| d.name.clone()).collect(),
            },
            l2_order,
        }
    }
}

impl LineRules {
    /// Tiered lookup: L1 rule first, then L2, otherwise `Extra`.
    pub fn resolve_line(&self, department_id: Option<i64>, department_name: Option<&str>) -> RosterGroup {
        if self.l1.matches(department_id, department_name) {
            RosterGroup::L1
        } else if self.l2.matches(department_id, department_name) {
            RosterGroup::L2
        } else {
            RosterGroup::Extra
        }
    }

    pub fn resolve_employee(&self, e: &Employee) -> RosterGroup {
        self.resolve_line(e.department_id, e.department_name.as_deref())
    }

    /// L2 display rank: by department id, falling back to the name.
    pub fn l2_rank(&self, department_id: Option<i64>, department_name: Option<&str>) -> usize {
        let by_id = department_id.and_then(|id| self.l2_order.iter().position(|d| d.id == Some(id)));

        by_id
            .or_else(|| {
                let name = department_name.unwrap_or("").trim();
                self.l2_order.iter().position(|d| d.name == name)
            })
            .unwrap_or(UNRANKED_DEPARTMENT)
    }
}

/// Keywords matched case-insensitively in department/position text.
pub const L1_KEYWORDS: &[&str] = &[
    "оператор",
    "контакт-центр",
    "контакт центр",
    "operator",
    "contact center",
    "contact-center",
    "call center",
];

pub const L2_KEYWORDS: &[&str] = &[
    "инженер",
    "техподдерж",
    "технической поддерж",
    "engineer",
    "technical support",
    "tech support",
];

/// Free-text classifier. Both flags may be set.
pub fn classify_by_keywords(department: Option<&str>, position: Option<&str>) -> LineSet {
    let haystack = [department, position]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    LineSet {
        l1: L1_KEYWORDS.iter().any(|k| haystack.contains(k)),
        l2: L2_KEYWORDS.iter().any(|k| haystack.contains(k)),
    }
}

pub fn classify_employee_by_keywords(e: &Employee) -> LineSet {
    classify_by_keywords(e.department_name.as_deref(), e.position.as_deref())
}

/// Which line markers a department tag carries ("L1", "L2", case-insensitive).
pub fn lines_from_tag(tag: &str) -> LineSet {
    let upper = tag.to_uppercase();
    LineSet {
        l1: upper.contains("L1"),
        l2: upper.contains("L2"),
    }
}

/// Single line for a tag: L1 wins over L2, `None` means the record is dropped.
pub fn line_from_tag(tag: &str) -> Option<Line> {
    lines_from_tag(tag).preferred()
}
