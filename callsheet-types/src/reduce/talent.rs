use super::update_field;
use crate::{CallSheet, TalentAction, TalentItem};

pub(super) fn reduce(action: &TalentAction, sheet: &mut CallSheet) -> bool {
    match action {
        TalentAction::Add => {
            let id = sheet.next_id();
            sheet.talent.push(TalentItem::new(id));
            true
        }
        TalentAction::Update(id, field, value) => update_field(&mut sheet.talent, *id, *field, value),
        TalentAction::Remove(id) => sheet.talent.remove(*id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SheetDefaults, Swf, TalentField};

    #[test]
    fn swf_update_validates() {
        let mut s = CallSheet::new(&SheetDefaults::default(), "2024-01-01");
        let id = s.talent.get(0).unwrap().id;
        assert!(reduce(&TalentAction::Update(id, TalentField::Swf, "SW".into()), &mut s));
        assert!(!reduce(&TalentAction::Update(id, TalentField::Swf, "??".into()), &mut s));
        assert_eq!(s.talent.find(id).unwrap().swf, Swf::Sw);
    }
}
