//! Employee directory: loads members, drops banned ones and splits them
//! into line rosters in a deterministic order.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::classify::{LineRules, classify_employee_by_keywords};
use crate::models::employee::{Employee, Member};
use crate::models::line::{Line, RosterGroup};

/// Which classifier feeds the grid rosters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RosterMode {
    /// Department id / name rules
    #[default]
    Department,
    /// Free-text keyword rules on department and position
    Keywords,
}

#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    all: Vec<Employee>,
    by_id: HashMap<i64, usize>,
    l1: Vec<Employee>,
    l2: Vec<Employee>,
    extra: Vec<Employee>,
}

impl EmployeeDirectory {
    pub fn from_members(members: &[Member], rules: &LineRules) -> Self {
        let mut dir = Self::default();
        let mut banned = 0usize;

        for m in members {
            if m.banned {
                banned += 1;
                continue;
            }
            let Some(employee) = Employee::from_member(m) else {
                continue;
            };

            match rules.resolve_employee(&employee) {
                RosterGroup::L1 => dir.l1.push(employee.clone()),
                RosterGroup::L2 => dir.l2.push(employee.clone()),
                RosterGroup::Extra => dir.extra.push(employee.clone()),
            }

            dir.by_id.insert(employee.id, dir.all.len());
            dir.all.push(employee);
        }

        // L2: department order first (5/2 → 2/2 → others), then name
        dir.l2.sort_by(|a, b| {
            let ra = rules.l2_rank(a.department_id, a.department_name.as_deref());
            let rb = rules.l2_rank(b.department_id, b.department_name.as_deref());
            ra.cmp(&rb).then_with(|| compare_employees(a, b))
        });
        dir.l1.sort_by(compare_employees);
        dir.extra.sort_by(compare_employees);

        debug!(
            total = dir.all.len(),
            banned,
            l1 = dir.l1.len(),
            l2 = dir.l2.len(),
            extra = dir.extra.len(),
            "employee directory loaded"
        );

        dir
    }

    /// Every non-banned employee, in source order.
    pub fn all(&self) -> &[Employee] {
        &self.all
    }

    pub fn get(&self, id: i64) -> Option<&Employee> {
        self.by_id.get(&id).map(|&i| &self.all[i])
    }

    /// Roster built by the department rules.
    pub fn roster(&self, group: RosterGroup) -> &[Employee] {
        match group {
            RosterGroup::L1 => &self.l1,
            RosterGroup::L2 => &self.l2,
            RosterGroup::Extra => &self.extra,
        }
    }

    /// Roster built by the keyword rules; an employee may be on both lines.
    pub fn keyword_roster(&self, line: Line) -> Vec<Employee> {
        let mut out: Vec<Employee> = self
            .all
            .iter()
            .filter(|e| classify_employee_by_keywords(e).contains(line))
            .cloned()
            .collect();
        out.sort_by(compare_employees);
        out
    }

    pub fn roster_for(&self, line: Line, mode: RosterMode) -> Vec<Employee> {
        match mode {
            RosterMode::Department => self.roster(line.into()).to_vec(),
            RosterMode::Keywords => self.keyword_roster(line),
        }
    }
}

/// Case-insensitive name order (ё sorts with е), then id for stability.
fn compare_employees(a: &Employee, b: &Employee) -> Ordering {
    name_key(&a.full_name)
        .cmp(&name_key(&b.full_name))
        .then_with(|| a.full_name.cmp(&b.full_name))
        .then_with(|| a.id.cmp(&b.id))
}

fn name_key(name: &str) -> String {
    name.to_lowercase().replace('ё', "е")
}
