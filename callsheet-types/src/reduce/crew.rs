use super::update_field;
use crate::{CallSheet, CallTime, CallTimeAction, CrewAction, CrewContact};

pub(super) fn reduce_crew(action: &CrewAction, sheet: &mut CallSheet) -> bool {
    match action {
        CrewAction::Add => {
            let id = sheet.next_id();
            sheet.crew_contacts.push(CrewContact::new(id));
            true
        }
        CrewAction::Update(id, field, value) => update_field(&mut sheet.crew_contacts, *id, *field, value),
        CrewAction::Remove(id) => sheet.crew_contacts.remove(*id),
    }
}

pub(super) fn reduce_call_time(action: &CallTimeAction, sheet: &mut CallSheet) -> bool {
    match action {
        CallTimeAction::Add => {
            let id = sheet.next_id();
            sheet.call_times.push(CallTime::new(id));
            true
        }
        CallTimeAction::Update(id, field, value) => update_field(&mut sheet.call_times, *id, *field, value),
        CallTimeAction::Remove(id) => {
            if sheet.call_times.find(*id).map_or(true, CallTime::is_crew_call) {
                return false;
            }
            sheet.call_times.remove(*id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CallTimeField, CrewField, ItemId, SheetDefaults};

    fn sheet() -> CallSheet {
        CallSheet::new(&SheetDefaults::default(), "2024-01-01")
    }

    #[test]
    fn add_and_edit_contact() {
        let mut s = sheet();
        assert!(reduce_crew(&CrewAction::Add, &mut s));
        let id = s.crew_contacts.get(2).unwrap().id;
        assert!(reduce_crew(&CrewAction::Update(id, CrewField::Phone, "555-0100".into()), &mut s));
        assert_eq!(s.crew_contacts.find(id).unwrap().phone, "555-0100");
        assert_eq!(s.crew_contacts.find(id).unwrap().position, "Producer");
    }

    #[test]
    fn unknown_id_is_noop() {
        let mut s = sheet();
        let before = s.clone();
        assert!(!reduce_crew(&CrewAction::Update(ItemId::new(999), CrewField::Name, "X".into()), &mut s));
        assert!(!reduce_crew(&CrewAction::Remove(ItemId::new(999)), &mut s));
        assert_eq!(s, before);
    }

    #[test]
    fn crew_call_cannot_be_removed() {
        let mut s = sheet();
        let crew_call = s.call_times.get(0).unwrap().id;
        assert!(!reduce_call_time(&CallTimeAction::Remove(crew_call), &mut s));
        assert_eq!(s.call_times.len(), 1);

        assert!(reduce_call_time(&CallTimeAction::Add, &mut s));
        let lunch = s.call_times.get(1).unwrap().id;
        assert!(reduce_call_time(&CallTimeAction::Update(lunch, CallTimeField::Name, "Lunch".into()), &mut s));
        assert!(reduce_call_time(&CallTimeAction::Remove(lunch), &mut s));
        assert_eq!(s.call_times.len(), 1);
    }
}
