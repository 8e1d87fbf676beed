use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use super::{CATALOG, MEMBERS, ScheduleSource, TASKS, parse_catalog, parse_members, parse_tasks};
use crate::errors::{AppError, AppResult};
use crate::models::catalog::Catalog;
use crate::models::employee::Member;
use crate::models::task::TaskRecord;
use crate::utils::date::month_key;

/// Reads collaborator dumps from a directory:
/// - `members.json`
/// - `catalog.json`
/// - `tasks-YYYY-MM.json`, falling back to `tasks.json`
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read(&self, file: &str, source_name: &'static str) -> AppResult<Value> {
        let path = self.dir.join(file);
        debug!(path = %path.display(), "reading source dump");

        let raw = fs::read_to_string(&path)
            .map_err(|e| AppError::source_failure(source_name, format!("{}: {e}", path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|e| AppError::source_failure(source_name, format!("{}: {e}", path.display())))
    }
}

impl ScheduleSource for JsonDirSource {
    fn load_members(&self) -> AppResult<Vec<Member>> {
        parse_members(&self.read("members.json", MEMBERS)?)
    }

    fn load_catalog(&self) -> AppResult<Catalog> {
        parse_catalog(&self.read("catalog.json", CATALOG)?)
    }

    fn load_tasks(&self, year: i32, month: u32) -> AppResult<Vec<TaskRecord>> {
        let monthly = format!("tasks-{}.json", month_key(year, month));
        let file = if self.dir.join(&monthly).exists() {
            monthly
        } else {
            "tasks.json".to_string()
        };
        parse_tasks(&self.read(&file, TASKS)?)
    }
}
