//! Upstream collaborators: employee directory, shift catalog and task
//! register. The engine only sees their decoded payloads; transport lives
//! behind `ScheduleSource`.

mod json_dir;

pub use json_dir::JsonDirSource;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::errors::{AppError, AppResult};
use crate::models::catalog::Catalog;
use crate::models::employee::Member;
use crate::models::task::TaskRecord;

pub const MEMBERS: &str = "members";
pub const CATALOG: &str = "catalog";
pub const TASKS: &str = "tasks";

/// Provider of the three inputs a month build needs.
pub trait ScheduleSource {
    fn load_members(&self) -> AppResult<Vec<Member>>;
    fn load_catalog(&self) -> AppResult<Catalog>;
    fn load_tasks(&self, year: i32, month: u32) -> AppResult<Vec<TaskRecord>>;
}

/// Everything needed to build the grids of one month.
#[derive(Debug, Clone, Default)]
pub struct ScheduleInputs {
    pub members: Vec<Member>,
    pub catalog: Catalog,
    pub tasks: Vec<TaskRecord>,
}

/// Fetch all three inputs. Any failing source fails the whole load.
pub fn load_inputs<S: ScheduleSource + ?Sized>(source: &S, year: i32, month: u32) -> AppResult<ScheduleInputs> {
    Ok(ScheduleInputs {
        members: source.load_members()?,
        catalog: source.load_catalog()?,
        tasks: source.load_tasks(year, month)?,
    })
}

/// `{ "members": [...] }` → members. Elements that do not decode are skipped.
pub fn parse_members(payload: &Value) -> AppResult<Vec<Member>> {
    decode_list(payload, MEMBERS, MEMBERS)
}

/// `{ "tasks": [...] }` → task records. Every element is kept, malformed ones
/// are reported later by the grid build.
pub fn parse_tasks(payload: &Value) -> AppResult<Vec<TaskRecord>> {
    decode_list(payload, TASKS, TASKS)
}

/// `{ "catalog_headers": [...], "items": [...] }` → catalog.
pub fn parse_catalog(payload: &Value) -> AppResult<Catalog> {
    let shape_ok = payload.get("catalog_headers").is_some_and(Value::is_array)
        && payload.get("items").is_some_and(Value::is_array);
    if !shape_ok {
        return Err(AppError::source_failure(
            CATALOG,
            "expected an object with 'catalog_headers' and 'items' arrays",
        ));
    }

    serde_json::from_value(payload.clone()).map_err(|e| AppError::source_failure(CATALOG, e.to_string()))
}

fn decode_list<T: DeserializeOwned>(payload: &Value, key: &str, source_name: &'static str) -> AppResult<Vec<T>> {
    let items = payload
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::source_failure(source_name, format!("expected an object with a '{key}' array")))?;

    let mut out = Vec::with_capacity(items.len());
    let mut bad = 0usize;
    for item in items {
        match serde_json::from_value::<T>(item.clone()) {
            Ok(v) => out.push(v),
            Err(_) => bad += 1,
        }
    }

    if bad > 0 {
        warn!(source = source_name, skipped = bad, "undecodable records skipped");
    }
    Ok(out)
}
