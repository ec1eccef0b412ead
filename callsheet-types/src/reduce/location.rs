use super::update_field;
use crate::{CallSheet, LocationAction, LocationItem};

pub(super) fn reduce(action: &LocationAction, sheet: &mut CallSheet) -> bool {
    match action {
        LocationAction::Add => {
            let id = sheet.next_id();
            let number = sheet.locations.len() + 1;
            sheet.locations.push(LocationItem::new(id, number));
            true
        }
        LocationAction::Update(id, field, value) => update_field(&mut sheet.locations, *id, *field, value),
        LocationAction::Remove(id) => sheet.locations.remove(*id),
    }
}
