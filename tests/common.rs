#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use serde_json::{Value, json};
use shiftgrid::source::{ScheduleInputs, parse_catalog, parse_members, parse_tasks};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sg() -> Command {
    cargo_bin_cmd!("shiftgrid")
}

/// Fresh (emptied) directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftgrid", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Temporary output file path inside tempdir, removed if present
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftgrid_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Directory roster:
/// - 7, 8: operators (L1)
/// - 9: engineers, 10: engineers 5/2 (L2)
/// - 11: banned operator
/// - 12: accounting (extra)
pub fn members_json() -> Value {
    json!({
        "members": [
            {"id": 9, "first_name": "Вера", "last_name": "Ёлкина", "department_id": 108368026, "department_name": "Инженеры", "position": "Инженер"},
            {"id": 8, "first_name": "Борис", "last_name": "Алексеев", "department_id": 108368027, "department_name": "Операторы"},
            {"id": 7, "first_name": "Анна", "last_name": "Смирнова", "department_id": 108368027, "department_name": "Операторы", "position": "Оператор"},
            {"id": 10, "first_name": "Глеб", "last_name": "Петров", "department_id": 171248779, "department_name": "Инженера 5/2"},
            {"id": 11, "first_name": "Олег", "last_name": "Уволенный", "department_id": 108368027, "banned": true},
            {"id": 12, "first_name": "Дарья", "last_name": "Иванова", "department_id": 555, "department_name": "Бухгалтерия"}
        ]
    })
}

pub fn catalog_json() -> Value {
    json!({
        "catalog_headers": [{"name": "Смена"}, {"name": "Время"}, {"name": "Сумма"}, {"name": "Отдел"}],
        "items": [
            {"item_id": 1, "values": ["Дневная", "09:00-18:00", 2500, "L1"]},
            {"item_id": 2, "values": ["Ночная", "21:00-09:00", "3 000", "L2"]},
            {"item_id": 3, "values": ["Выходной", "", 0, "L1 L2"]},
            {"item_id": 4, "values": ["Ранняя", "7-16", 2000, "L1"]},
            {"values": ["Без id", "10-19", 1000, "L1"]}
        ]
    })
}

/// Task record in the register shape (due=4, amount=6, assignee=2, shift=3).
pub fn task(id: i64, employee_id: i64, due: &str, duration: i64, amount: Value, tag: &str) -> Value {
    json!({
        "id": id,
        "fields": [
            {"id": 4, "value": due, "duration": duration},
            {"id": 6, "value": amount},
            {"id": 2, "value": {"id": employee_id}},
            {"id": 3, "value": {"values": ["Смена", "", "", tag]}}
        ]
    })
}

/// March 2024 register:
/// - 100: Анна, 14th, 23:00-02:00 (crosses local midnight)
/// - 101: Анна, 1st, 09:00-18:00
/// - 102: Вера, 1st, 21:00-09:00 (L2)
/// - 103: no assignee
/// - 104: April
/// - 105: tag without a line marker
pub fn tasks_json() -> Value {
    let mut no_assignee = task(103, 8, "2024-03-05T14:00:00Z", 540, json!(2500), "L1");
    if let Some(fields) = no_assignee["fields"].as_array_mut() {
        fields.retain(|f| f["id"] != 2);
    }

    json!({
        "tasks": [
            task(100, 7, "2024-03-14T22:00:00Z", 180, json!(2500), "L1"),
            task(101, 7, "2024-03-01T14:00:00Z", 540, json!(2500), "L1"),
            task(102, 9, "2024-03-02T05:00:00Z", 720, json!("3000"), "L2"),
            no_assignee,
            task(104, 7, "2024-04-01T10:00:00Z", 540, json!(2500), "L1"),
            task(105, 8, "2024-03-06T14:00:00Z", 540, json!(2500), "Бухгалтерия")
        ]
    })
}

pub fn fixture_inputs() -> ScheduleInputs {
    ScheduleInputs {
        members: parse_members(&members_json()).expect("members"),
        catalog: parse_catalog(&catalog_json()).expect("catalog"),
        tasks: parse_tasks(&tasks_json()).expect("tasks"),
    }
}

/// Data dir with members.json, catalog.json and tasks-2024-03.json
pub fn write_data_dir(name: &str) -> PathBuf {
    let dir = temp_dir(&format!("{}_data", name));

    let write = |file: &str, v: Value| {
        fs::write(dir.join(file), serde_json::to_string_pretty(&v).expect("json")).expect("write fixture");
    };
    write("members.json", members_json());
    write("catalog.json", catalog_json());
    write("tasks-2024-03.json", tasks_json());

    dir
}

/// Empty HOME so no user config is picked up
pub fn temp_home(name: &str) -> PathBuf {
    temp_dir(&format!("{}_home", name))
}
