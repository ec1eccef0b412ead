use super::update_field;
use crate::{AdvanceAction, AdvanceItem, CallSheet, ScheduleAction, ScheduleItem};

pub(super) fn reduce_schedule(action: &ScheduleAction, sheet: &mut CallSheet) -> bool {
    match action {
        ScheduleAction::Add(kind) => {
            let id = sheet.next_id();
            sheet.schedule.push(ScheduleItem::new(id, *kind));
            true
        }
        ScheduleAction::Update(id, field, value) => update_field(&mut sheet.schedule, *id, *field, value),
        ScheduleAction::Remove(id) => sheet.schedule.remove(*id),
        ScheduleAction::Move(id, direction) => sheet.schedule.move_item(*id, *direction),
    }
}

pub(super) fn reduce_advance(action: &AdvanceAction, sheet: &mut CallSheet) -> bool {
    match action {
        AdvanceAction::Add => {
            let id = sheet.next_id();
            sheet.advance_schedule.push(AdvanceItem::new(id));
            true
        }
        AdvanceAction::Update(id, field, value) => update_field(&mut sheet.advance_schedule, *id, *field, value),
        AdvanceAction::Remove(id) => sheet.advance_schedule.remove(*id),
        AdvanceAction::Move(id, direction) => sheet.advance_schedule.move_item(*id, *direction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::total_pages;
    use crate::{MoveDirection, ScheduleEntry, ScheduleField, ScheduleKind, SheetDefaults};

    fn sheet() -> CallSheet {
        CallSheet::new(&SheetDefaults::default(), "2024-01-01")
    }

    fn kinds(s: &CallSheet) -> Vec<ScheduleKind> {
        s.schedule.iter().map(|i| i.entry.kind()).collect()
    }

    #[test]
    fn add_each_kind() {
        let mut s = sheet();
        reduce_schedule(&ScheduleAction::Add(ScheduleKind::Banner), &mut s);
        reduce_schedule(&ScheduleAction::Add(ScheduleKind::CompanyMove), &mut s);
        assert_eq!(kinds(&s), vec![ScheduleKind::Scene, ScheduleKind::Banner, ScheduleKind::CompanyMove]);
    }

    #[test]
    fn move_reorders_and_stops_at_edges() {
        let mut s = sheet();
        reduce_schedule(&ScheduleAction::Add(ScheduleKind::Banner), &mut s);
        let banner = s.schedule.get(1).unwrap().id;
        assert!(reduce_schedule(&ScheduleAction::Move(banner, MoveDirection::Up), &mut s));
        assert_eq!(kinds(&s), vec![ScheduleKind::Banner, ScheduleKind::Scene]);
        assert!(!reduce_schedule(&ScheduleAction::Move(banner, MoveDirection::Up), &mut s));
        assert_eq!(kinds(&s), vec![ScheduleKind::Banner, ScheduleKind::Scene]);
    }

    #[test]
    fn pages_feed_total() {
        let mut s = sheet();
        let first = s.schedule.get(0).unwrap().id;
        reduce_schedule(&ScheduleAction::Update(first, ScheduleField::Pages, "1 4/8".into()), &mut s);
        reduce_schedule(&ScheduleAction::Add(ScheduleKind::Scene), &mut s);
        let second = s.schedule.get(1).unwrap().id;
        reduce_schedule(&ScheduleAction::Update(second, ScheduleField::Pages, "2".into()), &mut s);
        reduce_schedule(&ScheduleAction::Add(ScheduleKind::Banner), &mut s);
        assert!((total_pages(&s.schedule) - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn banner_rejects_scene_fields() {
        let mut s = sheet();
        reduce_schedule(&ScheduleAction::Add(ScheduleKind::Banner), &mut s);
        let banner = s.schedule.get(1).unwrap().id;
        assert!(!reduce_schedule(&ScheduleAction::Update(banner, ScheduleField::Pages, "2".into()), &mut s));
        assert!(reduce_schedule(&ScheduleAction::Update(banner, ScheduleField::Description, "LUNCH".into()), &mut s));
        assert!(matches!(
            &s.schedule.find(banner).unwrap().entry,
            ScheduleEntry::Banner { banner_text, .. } if banner_text == "LUNCH"
        ));
    }

    #[test]
    fn advance_rows() {
        let mut s = sheet();
        assert!(reduce_advance(&AdvanceAction::Add, &mut s));
        assert!(reduce_advance(&AdvanceAction::Add, &mut s));
        let first = s.advance_schedule.get(0).unwrap().id;
        assert!(reduce_advance(&AdvanceAction::Update(first, ScheduleField::SceneNo, "14".into()), &mut s));
        assert!(reduce_advance(&AdvanceAction::Move(first, MoveDirection::Down), &mut s));
        assert_eq!(s.advance_schedule.get(1).unwrap().scene.scene_no, "14");
        assert!(reduce_advance(&AdvanceAction::Remove(first), &mut s));
        assert_eq!(s.advance_schedule.len(), 1);
    }
}
