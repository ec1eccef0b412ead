use callsheet_types::{
    reduce::reduce_action, DomainAction, HeaderAction, HeaderField, ScheduleAction, ScheduleField, ScheduleKind,
    SheetDefaults, TalentAction,
};

use super::sample_sheet;
use crate::state::persistence::{load_or_default, load_sheet, save_sheet, KeyValueStore, MemoryStore, SHEET_KEY};

#[test]
fn load_from_empty_store_is_none() {
    let store = MemoryStore::new();
    assert!(load_sheet(&store).unwrap().is_none());
}

#[test]
fn save_and_load_round_trip() {
    let mut sheet = sample_sheet();
    reduce_action(&DomainAction::Header(HeaderAction::Set(HeaderField::Title, "Night Shoot".into())), &mut sheet);
    reduce_action(&DomainAction::Header(HeaderAction::Set(HeaderField::MaxTemp, "72".into())), &mut sheet);
    reduce_action(&DomainAction::Schedule(ScheduleAction::Add(ScheduleKind::Banner)), &mut sheet);
    let banner = sheet.schedule.get(1).unwrap().id;
    reduce_action(
        &DomainAction::Schedule(ScheduleAction::Update(banner, ScheduleField::Description, "LUNCH".into())),
        &mut sheet,
    );
    reduce_action(&DomainAction::Talent(TalentAction::Add), &mut sheet);

    let mut store = MemoryStore::new();
    save_sheet(&mut store, &sheet).unwrap();
    let loaded = load_sheet(&store).unwrap().unwrap();
    assert_eq!(loaded, sheet);
}

#[test]
fn snapshot_uses_fixed_key_and_camel_case() {
    let mut store = MemoryStore::new();
    save_sheet(&mut store, &sample_sheet()).unwrap();
    let raw = store.get(SHEET_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["title"], "YOUR MOVIE NAME");
    assert!(json["callTimes"].is_array());
    assert!(json["advanceSchedule"].is_array());
}

#[test]
fn malformed_snapshot_is_an_error() {
    let mut store = MemoryStore::new();
    store.set(SHEET_KEY, "{not json").unwrap();
    assert!(matches!(
        load_sheet(&store),
        Err(crate::state::persistence::PersistenceError::Malformed(_))
    ));
}

#[test]
fn malformed_snapshot_falls_back_to_defaults() {
    let mut store = MemoryStore::new();
    store.set(SHEET_KEY, "42").unwrap();
    let defaults = SheetDefaults { title: "Fallback".into(), ..SheetDefaults::default() };
    let sheet = load_or_default(&store, &defaults);
    assert_eq!(sheet.title, "Fallback");
    assert_eq!(sheet.schedule.len(), 1);
}

#[test]
fn snapshot_missing_header_keys_still_loads() {
    let mut store = MemoryStore::new();
    let raw = r#"{
        "shootDate": "2024-03-02",
        "talent": [{"id": 3, "name": "Ada Lee", "role": "Nina"}]
    }"#;
    store.set(SHEET_KEY, raw).unwrap();
    let sheet = load_sheet(&store).unwrap().unwrap();
    assert_eq!(sheet.title, "");
    assert_eq!(sheet.shoot_day, "");
    assert_eq!(sheet.shoot_date, "2024-03-02");
    assert_eq!(sheet.talent.get(0).map(|t| t.name.as_str()), Some("Ada Lee"));
}

#[test]
fn loading_raises_id_counter() {
    // Snapshot without nextItemId: fresh ids must not collide with stored ones.
    let mut store = MemoryStore::new();
    let raw = r#"{
        "title": "T", "shootDay": "2", "shootDate": "2024-03-02",
        "crewContacts": [{"id": 40, "position": "UPM", "name": "", "phone": ""}],
        "callTimes": [{"id": 41, "name": "Crew Call", "time": "7:00 AM"}],
        "schedule": [{"id": 42, "type": "company-move", "time": "1:00 PM"}]
    }"#;
    store.set(SHEET_KEY, raw).unwrap();
    let mut sheet = load_sheet(&store).unwrap().unwrap();
    assert_eq!(sheet.next_id().get(), 43);
    assert!(sheet.talent.is_empty());
}

#[test]
fn missing_crew_call_is_restored() {
    let mut store = MemoryStore::new();
    let raw = r#"{"title": "T", "shootDay": "1", "shootDate": "2024-03-02",
        "callTimes": [{"id": 3, "name": "Lunch", "time": "1:00 PM"}]}"#;
    store.set(SHEET_KEY, raw).unwrap();
    let sheet = load_sheet(&store).unwrap().unwrap();
    assert_eq!(sheet.call_times.len(), 2);
    assert!(sheet.call_times.get(0).unwrap().is_crew_call());
}
