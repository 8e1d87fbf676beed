use shiftgrid::core::classify::{
    LineRules, UNRANKED_DEPARTMENT, classify_by_keywords, line_from_tag, lines_from_tag,
};
use shiftgrid::core::directory::{EmployeeDirectory, RosterMode};
use shiftgrid::models::line::{Line, RosterGroup};
use shiftgrid::source::parse_members;

mod common;
use common::members_json;

#[test]
fn test_resolve_line_by_id_and_name() {
    let rules = LineRules::default();

    assert_eq!(rules.resolve_line(Some(108_368_027), None), RosterGroup::L1);
    assert_eq!(rules.resolve_line(None, Some(" Операторы ")), RosterGroup::L1);
    assert_eq!(rules.resolve_line(Some(171_248_780), None), RosterGroup::L2);
    assert_eq!(rules.resolve_line(None, Some("Инженера 5/2")), RosterGroup::L2);
    assert_eq!(rules.resolve_line(Some(1), Some("Бухгалтерия")), RosterGroup::Extra);
    assert_eq!(rules.resolve_line(None, None), RosterGroup::Extra);
}

#[test]
fn test_resolve_line_prefers_l1() {
    let mut rules = LineRules::default();
    rules.l2.department_ids.insert(108_368_027);

    assert_eq!(rules.resolve_line(Some(108_368_027), None), RosterGroup::L1);
}

#[test]
fn test_l2_rank_order() {
    let rules = LineRules::default();

    assert_eq!(rules.l2_rank(Some(171_248_779), None), 0);
    assert_eq!(rules.l2_rank(None, Some("Инженера 2/2")), 1);
    assert_eq!(rules.l2_rank(Some(108_368_026), Some("whatever")), 2);
    assert_eq!(rules.l2_rank(Some(42), Some("Прочие")), UNRANKED_DEPARTMENT);
}

#[test]
fn test_keyword_classifier() {
    let s = classify_by_keywords(Some("Контакт-центр"), None);
    assert!(s.l1 && !s.l2);

    let s = classify_by_keywords(None, Some("Senior Engineer"));
    assert!(!s.l1 && s.l2);

    let s = classify_by_keywords(Some("Операторы"), Some("старший инженер"));
    assert!(s.l1 && s.l2);

    assert!(classify_by_keywords(None, None).is_empty());
    assert!(classify_by_keywords(Some("Бухгалтерия"), Some("Кассир")).is_empty());
}

#[test]
fn test_tag_classifier() {
    let s = lines_from_tag("l1 / L2");
    assert!(s.l1 && s.l2);

    assert_eq!(line_from_tag("L1, L2"), Some(Line::L1));
    assert_eq!(line_from_tag("l1/l2-shared"), Some(Line::L1));
    assert_eq!(line_from_tag("Отдел L2"), Some(Line::L2));
    assert_eq!(line_from_tag("l1"), Some(Line::L1));
    assert_eq!(line_from_tag("Бухгалтерия"), None);
    assert_eq!(line_from_tag(""), None);
}

#[test]
fn test_directory_rosters() {
    let members = parse_members(&members_json()).unwrap();
    let dir = EmployeeDirectory::from_members(&members, &LineRules::default());

    // banned member is gone everywhere
    assert_eq!(dir.all().len(), 5);
    assert!(dir.get(11).is_none());
    assert_eq!(dir.get(7).map(|e| e.full_name.as_str()), Some("Анна Смирнова"));

    let ids = |group: RosterGroup| dir.roster(group).iter().map(|e| e.id).collect::<Vec<_>>();

    // name order
    assert_eq!(ids(RosterGroup::L1), vec![7, 8]);
    // 5/2 before "Инженеры"
    assert_eq!(ids(RosterGroup::L2), vec![10, 9]);
    assert_eq!(ids(RosterGroup::Extra), vec![12]);
}

#[test]
fn test_directory_keyword_rosters() {
    let members = parse_members(&members_json()).unwrap();
    let dir = EmployeeDirectory::from_members(&members, &LineRules::default());

    let l1: Vec<i64> = dir.roster_for(Line::L1, RosterMode::Keywords).iter().map(|e| e.id).collect();
    let l2: Vec<i64> = dir.roster_for(Line::L2, RosterMode::Keywords).iter().map(|e| e.id).collect();

    assert_eq!(l1, vec![7, 8]);
    // no department rank in keyword mode, plain name order
    assert_eq!(l2, vec![9, 10]);
}

#[test]
fn test_directory_skips_members_without_id() {
    let payload = serde_json::json!({
        "members": [
            {"first_name": "Без", "last_name": "Номера", "department_id": 108368027},
            {"id": 1, "first_name": " Ирина ", "last_name": "", "department_id": 108368027}
        ]
    });
    let members = parse_members(&payload).unwrap();
    let dir = EmployeeDirectory::from_members(&members, &LineRules::default());

    assert_eq!(dir.all().len(), 1);
    assert_eq!(dir.roster(RosterGroup::L1)[0].full_name, "Ирина");
}
