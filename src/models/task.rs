use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Task-shaped record from the register collaborator. Every payload field
/// is addressed by its stable numeric field id.
///
/// Decoding never fails: numeric members accept integers, floats and
/// numeric strings, and anything unusable is left out. A broken element
/// therefore still reaches the grid builder, which reports why it was
/// skipped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Value")]
pub struct TaskRecord {
    pub id: Option<i64>,
    pub fields: Vec<TaskField>,
}

impl From<Value> for TaskRecord {
    fn from(v: Value) -> Self {
        let fields = v
            .get("fields")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|f| TaskField::deserialize(f).ok())
                    .collect()
            })
            .unwrap_or_default();

        TaskRecord {
            id: v.get("id").and_then(number_from_value),
            fields,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskField {
    /// A field without a usable id is kept but never matched.
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default)]
    pub value: Value,
    /// Only set on due fields (minutes).
    #[serde(default, deserialize_with = "lenient_i64")]
    pub duration: Option<i64>,
}

impl TaskRecord {
    /// Field with the given id, if present with a non-null value.
    pub fn field(&self, id: i64) -> Option<&TaskField> {
        self.fields
            .iter()
            .find(|f| f.id == Some(id) && !f.value.is_null())
    }
}

fn lenient_i64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    Ok(number_from_value(&Value::deserialize(d)?))
}

/// 540, 540.0 and "540" all give 540. Fractions are rounded.
pub fn number_from_value(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(float_to_i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(float_to_i64))
        }
        _ => None,
    }
}

fn float_to_i64(f: f64) -> Option<i64> {
    let r = f.round();
    (r.is_finite() && r.abs() < i64::MAX as f64).then_some(r as i64)
}
