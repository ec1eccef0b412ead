use super::update_field;
use crate::{CallSheet, DepartmentNote, DepartmentNoteAction, RadioAction, RadioChannel};

pub(super) fn reduce_note(action: &DepartmentNoteAction, sheet: &mut CallSheet) -> bool {
    match action {
        DepartmentNoteAction::Add => {
            let id = sheet.next_id();
            sheet.department_notes.push(DepartmentNote::new(id));
            true
        }
        DepartmentNoteAction::Update(id, field, value) => {
            update_field(&mut sheet.department_notes, *id, *field, value)
        }
        DepartmentNoteAction::Remove(id) => sheet.department_notes.remove(*id),
    }
}

pub(super) fn reduce_radio(action: &RadioAction, sheet: &mut CallSheet) -> bool {
    match action {
        RadioAction::Add => {
            let id = sheet.next_id();
            let number = sheet.radio_channels.len() + 1;
            sheet.radio_channels.push(RadioChannel::new(id, number));
            true
        }
        RadioAction::Update(id, field, value) => update_field(&mut sheet.radio_channels, *id, *field, value),
        RadioAction::Remove(id) => sheet.radio_channels.remove(*id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NoteField, RadioField, SheetDefaults};

    fn sheet() -> CallSheet {
        CallSheet::new(&SheetDefaults::default(), "2024-01-01")
    }

    #[test]
    fn note_lifecycle() {
        let mut s = sheet();
        assert!(reduce_note(&DepartmentNoteAction::Add, &mut s));
        let id = s.department_notes.get(0).unwrap().id;
        assert!(reduce_note(&DepartmentNoteAction::Update(id, NoteField::Department, "Camera".into()), &mut s));
        assert_eq!(s.department_notes.find(id).unwrap().department, "Camera");
        assert!(reduce_note(&DepartmentNoteAction::Remove(id), &mut s));
        assert!(s.department_notes.is_empty());
    }

    #[test]
    fn radio_channels_number_sequentially() {
        let mut s = sheet();
        reduce_radio(&RadioAction::Add, &mut s);
        reduce_radio(&RadioAction::Add, &mut s);
        let second = s.radio_channels.get(1).unwrap().id;
        assert_eq!(s.radio_channels.find(second).unwrap().number, "2");
        assert!(reduce_radio(&RadioAction::Update(second, RadioField::Department, "Grip".into()), &mut s));
    }
}
