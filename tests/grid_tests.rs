use chrono::NaiveTime;
use serde_json::json;
use shiftgrid::core::classify::LineRules;
use shiftgrid::core::directory::EmployeeDirectory;
use shiftgrid::core::grid::{SkipReason, TaskFieldIds, build_grid, extract_record};
use shiftgrid::models::employee::Employee;
use shiftgrid::models::grid::CellOrigin;
use shiftgrid::models::line::{Line, RosterGroup};
use shiftgrid::source::parse_tasks;

mod common;
use common::{fixture_inputs, task};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn roster(group: RosterGroup) -> Vec<Employee> {
    let inputs = fixture_inputs();
    EmployeeDirectory::from_members(&inputs.members, &LineRules::default())
        .roster(group)
        .to_vec()
}

#[test]
fn test_l1_grid_from_fixture() {
    let inputs = fixture_inputs();
    let built = build_grid(Line::L1, 2024, 3, &roster(RosterGroup::L1), &inputs.tasks, &TaskFieldIds::default());
    let grid = &built.grid;

    assert_eq!(grid.month_key, "2024-03");
    assert_eq!(grid.days.len(), 31);
    assert_eq!(grid.rows.len(), 2);
    assert!(grid.rows.iter().all(|r| r.shifts_by_day.len() == 31));

    let anna = grid.row(7).unwrap();
    assert_eq!(anna.employee_name, "Анна Смирнова");
    assert_eq!(anna.shift_count(), 2);
    assert_eq!(anna.total_amount(), 5000.0);

    let first = anna.cell(1).unwrap();
    assert_eq!((first.start_local, first.end_local), (t(9, 0), t(18, 0)));
    assert_eq!(first.task_id, Some(101));
    assert_eq!(first.origin, CellOrigin::Server);

    // ends at 02:00 on the 15th, filed under the 14th
    let night = anna.cell(14).unwrap();
    assert_eq!((night.start_local, night.end_local), (t(23, 0), t(2, 0)));
    assert_eq!(night.source_day, 14);
    assert!(anna.cell(15).is_none());

    // roster member without shifts still gets a full empty row
    let boris = grid.row(8).unwrap();
    assert_eq!(boris.shift_count(), 0);
}

#[test]
fn test_skip_stats() {
    let inputs = fixture_inputs();
    let built = build_grid(Line::L1, 2024, 3, &roster(RosterGroup::L1), &inputs.tasks, &TaskFieldIds::default());

    assert_eq!(built.stats.count(SkipReason::MissingAssignee), 1);
    assert_eq!(built.stats.count(SkipReason::OutsideMonth), 1);
    assert_eq!(built.stats.count(SkipReason::UnclassifiedTag), 1);
    assert_eq!(built.stats.total(), 3);
    assert_eq!(built.stats.other_line, 1);
    assert_eq!(built.stats.collisions, 0);
}

#[test]
fn test_l2_grid_from_fixture() {
    let inputs = fixture_inputs();
    let built = build_grid(Line::L2, 2024, 3, &roster(RosterGroup::L2), &inputs.tasks, &TaskFieldIds::default());

    let order: Vec<i64> = built.grid.rows.iter().map(|r| r.employee_id).collect();
    assert_eq!(order, vec![10, 9]);

    let vera = built.grid.row(9).unwrap();
    let cell = vera.cell(1).unwrap();
    assert_eq!((cell.start_local, cell.end_local), (t(21, 0), t(9, 0)));
    assert_eq!(cell.amount, 3000.0);
    assert_eq!(built.stats.other_line, 2);
}

#[test]
fn test_leap_february_has_29_days() {
    let built = build_grid(Line::L1, 2024, 2, &roster(RosterGroup::L1), &[], &TaskFieldIds::default());
    assert_eq!(built.grid.days, (1..=29).collect::<Vec<u32>>());

    let built = build_grid(Line::L1, 2023, 2, &roster(RosterGroup::L1), &[], &TaskFieldIds::default());
    assert_eq!(built.grid.days.len(), 28);
}

#[test]
fn test_thirty_day_month_is_dense_without_records() {
    let roster = roster(RosterGroup::L1);
    let built = build_grid(Line::L1, 2024, 4, &roster, &[], &TaskFieldIds::default());

    assert_eq!(built.grid.rows.len(), roster.len());
    assert!(built.grid.rows.iter().all(|r| r.shifts_by_day.len() == 30));
    assert_eq!(built.stats.total(), 0);
}

#[test]
fn test_same_day_collision_last_record_wins() {
    let tasks = parse_tasks(&json!({
        "tasks": [
            task(1, 7, "2024-03-01T14:00:00Z", 540, json!(2500), "L1"),
            task(2, 7, "2024-03-01T15:00:00Z", 600, json!(2700), "L1")
        ]
    }))
    .unwrap();

    let built = build_grid(Line::L1, 2024, 3, &roster(RosterGroup::L1), &tasks, &TaskFieldIds::default());
    let cell = built.grid.row(7).unwrap().cell(1).unwrap();

    assert_eq!(cell.task_id, Some(2));
    assert_eq!(cell.end_local, t(19, 0));
    assert_eq!(cell.amount, 2700.0);
    assert_eq!(built.stats.collisions, 1);
    assert_eq!(built.grid.row(7).unwrap().total_amount(), 2700.0);
}

#[test]
fn test_tasks_of_employees_outside_roster_are_ignored() {
    let tasks = parse_tasks(&json!({
        "tasks": [task(1, 999, "2024-03-01T14:00:00Z", 540, json!(2500), "L1")]
    }))
    .unwrap();

    let built = build_grid(Line::L1, 2024, 3, &roster(RosterGroup::L1), &tasks, &TaskFieldIds::default());
    assert!(built.grid.row(999).is_none());
    assert!(built.grid.rows.iter().all(|r| r.shift_count() == 0));
}

#[test]
fn test_extract_record_reasons() {
    let fields = TaskFieldIds::default();
    let tasks = parse_tasks(&json!({
        "tasks": [
            {"id": 1, "fields": [{"id": 2, "value": {"id": 7}}, {"id": 3, "value": {"values": ["", "", "", "L1"]}}]},
            task(2, 7, "garbage", 60, json!(100), "L1"),
            {"id": 3, "fields": [{"id": 4, "value": "2024-03-01T14:00:00Z", "duration": 60}, {"id": 2, "value": {"id": 7}}]},
            {"id": 4, "fields": [
                {"id": 4, "value": "2024-03-01T14:00:00Z", "duration": 60},
                {"id": 2, "value": {"id": "7"}},
                {"id": 3, "value": {"values": ["", "", "", "l2"]}}
            ]}
        ]
    }))
    .unwrap();

    assert_eq!(extract_record(&tasks[0], &fields).unwrap_err(), SkipReason::MissingDue);
    assert_eq!(extract_record(&tasks[1], &fields).unwrap_err(), SkipReason::InvalidDue);
    assert_eq!(extract_record(&tasks[2], &fields).unwrap_err(), SkipReason::MissingShift);

    // string ids accepted, missing amount is zero
    let rec = extract_record(&tasks[3], &fields).unwrap();
    assert_eq!(rec.employee_id, 7);
    assert_eq!(rec.line, Line::L2);
    assert_eq!(rec.amount, 0.0);
    assert_eq!(rec.task_id, Some(4));
}

#[test]
fn test_custom_field_ids() {
    let fields = TaskFieldIds {
        due: 40,
        amount: 60,
        assignee: 20,
        shift: 30,
        shift_department_index: 0,
    };
    let tasks = parse_tasks(&json!({
        "tasks": [{"id": 1, "fields": [
            {"id": 40, "value": "2024-03-10T05:00:00Z", "duration": 120},
            {"id": 60, "value": 900},
            {"id": 20, "value": {"id": 8}},
            {"id": 30, "value": {"values": ["L1"]}}
        ]}]
    }))
    .unwrap();

    let built = build_grid(Line::L1, 2024, 3, &roster(RosterGroup::L1), &tasks, &fields);
    let cell = built.grid.row(8).unwrap().cell(10).unwrap();
    assert_eq!((cell.start_local, cell.end_local), (t(7, 0), t(9, 0)));
    assert_eq!(cell.amount, 900.0);
}

#[test]
fn test_absurd_duration_is_an_invalid_due() {
    let tasks = parse_tasks(&json!({
        "tasks": [
            task(1, 7, "2024-03-01T14:00:00Z", 540, json!(2500), "L1"),
            task(2, 7, "2024-03-02T14:00:00Z", 1_000_000_000_000_000i64, json!(2500), "L1")
        ]
    }))
    .unwrap();

    let built = build_grid(Line::L1, 2024, 3, &roster(RosterGroup::L1), &tasks, &TaskFieldIds::default());
    assert_eq!(built.stats.count(SkipReason::InvalidDue), 1);
    assert_eq!(built.grid.row(7).unwrap().shift_count(), 1);
}

#[test]
fn test_shift_rolling_back_into_previous_month() {
    // 00:00Z on April 1st = 04:00 local, 5h back → 23:00 on March 31st
    let tasks = parse_tasks(&json!({
        "tasks": [task(1, 7, "2024-04-01T00:00:00Z", 300, json!(2500), "L1")]
    }))
    .unwrap();

    let march = build_grid(Line::L1, 2024, 3, &roster(RosterGroup::L1), &tasks, &TaskFieldIds::default());
    let cell = march.grid.row(7).unwrap().cell(31).unwrap();
    assert_eq!((cell.start_local, cell.end_local), (t(23, 0), t(4, 0)));
    assert_eq!(cell.source_day, 31);
    assert_eq!(march.stats.total(), 0);

    let april = build_grid(Line::L1, 2024, 4, &roster(RosterGroup::L1), &tasks, &TaskFieldIds::default());
    assert!(april.grid.row(7).unwrap().cell(1).is_none());
    assert_eq!(april.stats.count(SkipReason::OutsideMonth), 1);
    assert_eq!(april.stats.total(), 1);
}

#[test]
fn test_loosely_typed_task_payloads() {
    let tasks = parse_tasks(&json!({
        "tasks": [
            {"id": 1, "fields": [
                {"id": 4, "value": "2024-03-01T14:00:00Z", "duration": 540.0},
                {"id": 2, "value": {"id": 7}},
                {"value": "stray field"},
                {"id": 3, "value": {"values": ["", "", "", "L1"]}}
            ]},
            {"id": "2", "fields": [
                {"id": 4, "value": "2024-03-02T14:00:00Z", "duration": "600"},
                {"id": 2, "value": {"id": 8}},
                {"id": 3, "value": {"values": ["", "", "", "L1"]}}
            ]},
            "not a task",
            {"id": 4, "fields": {"id": 4}}
        ]
    }))
    .unwrap();

    // nothing is dropped while decoding
    assert_eq!(tasks.len(), 4);

    let built = build_grid(Line::L1, 2024, 3, &roster(RosterGroup::L1), &tasks, &TaskFieldIds::default());

    let anna = built.grid.row(7).unwrap().cell(1).unwrap();
    assert_eq!((anna.start_local, anna.end_local), (t(9, 0), t(18, 0)));

    let boris = built.grid.row(8).unwrap().cell(2).unwrap();
    assert_eq!((boris.start_local, boris.end_local), (t(8, 0), t(18, 0)));
    assert_eq!(boris.task_id, Some(2));

    // broken elements still show up in the counters
    assert_eq!(built.stats.count(SkipReason::MissingDue), 2);
}
