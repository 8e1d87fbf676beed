use serde::{Deserialize, Serialize};

/// Raw directory record as returned by the members collaborator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Member {
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub department_id: Option<i64>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub banned: bool,
}

/// Employee as used by the schedule. Line membership is derived on demand
/// (see `core::classify`), never stored here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: i64,
    pub full_name: String,
    pub department_id: Option<i64>,
    pub department_name: Option<String>,
    pub position: Option<String>,
}

impl Employee {
    /// Build an employee from a directory record.
    /// - name = first + last, empty parts omitted
    /// - department name and position trimmed, blank → None
    ///
    /// Returns `None` when the record has no id.
    pub fn from_member(m: &Member) -> Option<Self> {
        let id = m.id?;

        let full_name = [m.first_name.as_deref(), m.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Some(Self {
            id,
            full_name,
            department_id: m.department_id,
            department_name: trimmed(m.department_name.as_deref()),
            position: trimmed(m.position.as_deref()),
        })
    }
}

fn trimmed(s: Option<&str>) -> Option<String> {
    s.map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
