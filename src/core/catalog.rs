//! Shift catalog indexing: heterogeneous catalog rows → typed templates,
//! bucketed per line.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::core::classify::lines_from_tag;
use crate::core::time_convert::parse_shift_time_range_string;
use crate::models::catalog::{Catalog, CatalogItem};
use crate::models::line::Line;
use crate::models::template::ShiftTemplate;

/// Header names of the four catalog columns the indexer reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogColumns {
    pub name: String,
    pub time: String,
    pub amount: String,
    pub department: String,
}

impl Default for CatalogColumns {
    fn default() -> Self {
        Self {
            name: "Смена".into(),
            time: "Время".into(),
            amount: "Сумма".into(),
            department: "Отдел".into(),
        }
    }
}

/// Short labels for non-working "shifts", matched on the template name.
const SPECIAL_LABELS: &[(&str, &str)] = &[
    ("выходн", "ВЫХ"),
    ("отпуск", "ОТП"),
    ("день рожд", "ДР"),
];

#[derive(Debug, Clone, Default)]
pub struct ShiftCatalogIndex {
    all: Vec<ShiftTemplate>,
    l1: Vec<ShiftTemplate>,
    l2: Vec<ShiftTemplate>,
    skipped: usize,
}

impl ShiftCatalogIndex {
    /// Index every catalog row. Missing columns give empty/zero values;
    /// rows without an `item_id` are skipped.
    pub fn build(catalog: &Catalog, columns: &CatalogColumns) -> Self {
        let cols = ColumnPositions {
            name: catalog.column(&columns.name),
            time: catalog.column(&columns.time),
            amount: catalog.column(&columns.amount),
            department: catalog.column(&columns.department),
        };

        let mut index = Self::default();

        for item in &catalog.items {
            let Some(template) = cols.template(item) else {
                index.skipped += 1;
                continue;
            };

            // A tag naming both lines puts the template in both lists
            let lines = lines_from_tag(&template.department_tag);
            if lines.l1 {
                index.l1.push(template.clone());
            }
            if lines.l2 {
                index.l2.push(template.clone());
            }
            index.all.push(template);
        }

        index.l1.sort_by(compare_templates);
        index.l2.sort_by(compare_templates);

        debug!(
            templates = index.all.len(),
            l1 = index.l1.len(),
            l2 = index.l2.len(),
            skipped = index.skipped,
            "shift catalog indexed"
        );

        index
    }

    /// Every template, in catalog order.
    pub fn all(&self) -> &[ShiftTemplate] {
        &self.all
    }

    pub fn templates(&self, line: Line) -> &[ShiftTemplate] {
        match line {
            Line::L1 => &self.l1,
            Line::L2 => &self.l2,
        }
    }

    pub fn get(&self, id: i64) -> Option<&ShiftTemplate> {
        self.all.iter().find(|t| t.id == id)
    }

    /// Rows dropped for lacking an item id.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

struct ColumnPositions {
    name: Option<usize>,
    time: Option<usize>,
    amount: Option<usize>,
    department: Option<usize>,
}

impl ColumnPositions {
    fn template(&self, item: &CatalogItem) -> Option<ShiftTemplate> {
        let id = item.item_id?;
        let cell = |col: Option<usize>| col.and_then(|i| item.values.get(i));

        let name = cell(self.name).map(value_text).unwrap_or_default();
        let time_raw = cell(self.time).map(value_text).unwrap_or_default();
        let department_tag = cell(self.department).map(value_text).unwrap_or_default();
        let amount = cell(self.amount).map(value_amount).unwrap_or(0.0);

        Some(ShiftTemplate {
            id,
            time_range: parse_shift_time_range_string(&time_raw),
            line: lines_from_tag(&department_tag).preferred(),
            special_label: special_label(&name),
            name,
            time_raw,
            amount,
            department_tag,
        })
    }
}

/// Text view of a heterogeneous catalog value.
pub(crate) fn value_text(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        // Catalog references / multi-values: join their textual parts
        Value::Array(items) => items
            .iter()
            .map(value_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) => map
            .get("name")
            .or_else(|| map.get("value"))
            .map(value_text)
            .unwrap_or_default(),
    }
}

/// Non-negative amount from a number or a numeric string ("1 500,50").
pub(crate) fn value_amount(v: &Value) -> f64 {
    let parsed = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .replace(',', ".")
            .parse::<f64>()
            .ok(),
        _ => None,
    };

    match parsed {
        Some(a) if a.is_finite() && a > 0.0 => a,
        _ => 0.0,
    }
}

fn special_label(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    SPECIAL_LABELS
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map(|(_, label)| *label)
}

/// Start time (templates without a range last), then name, then id.
fn compare_templates(a: &ShiftTemplate, b: &ShiftTemplate) -> Ordering {
    let start = |t: &ShiftTemplate| t.time_range.map(|r| r.start);
    match (start(a), start(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.name.cmp(&b.name))
    .then_with(|| a.id.cmp(&b.id))
}
