//! Pure reducers that apply document actions to a `CallSheet`.
//!
//! Reducers mutate the sheet only. They do NOT:
//! - Construct DispatchResult (no nav intents, no status toasts)
//! - Mark the project dirty or schedule saves
//! - Touch the filesystem
//!
//! Every reducer returns whether the sheet changed, so the caller can skip
//! dirty-marking for no-op edits (unknown id, boundary move, fixed rows).

mod crew;
mod header;
mod location;
mod notes;
mod schedule;
mod talent;

use crate::{CallSheet, DomainAction, FieldRecord, ItemId, RecordList};

/// Apply a document action. Returns false when nothing changed.
/// Session actions need I/O and always return false here.
pub fn reduce_action(action: &DomainAction, sheet: &mut CallSheet) -> bool {
    match action {
        DomainAction::Header(a) => header::reduce(a, sheet),
        DomainAction::Crew(a) => crew::reduce_crew(a, sheet),
        DomainAction::CallTime(a) => crew::reduce_call_time(a, sheet),
        DomainAction::Schedule(a) => schedule::reduce_schedule(a, sheet),
        DomainAction::Advance(a) => schedule::reduce_advance(a, sheet),
        DomainAction::Talent(a) => talent::reduce(a, sheet),
        DomainAction::Location(a) => location::reduce(a, sheet),
        DomainAction::DepartmentNote(a) => notes::reduce_note(a, sheet),
        DomainAction::Radio(a) => notes::reduce_radio(a, sheet),
        DomainAction::Session(_) => false,
    }
}

/// Write one cell of the row with `id`. False for unknown ids or rejected values.
fn update_field<T: FieldRecord>(list: &mut RecordList<T>, id: ItemId, field: T::Field, value: &str) -> bool {
    let mut changed = false;
    list.update(id, |row| changed = row.set_field(field, value));
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SessionAction, SheetDefaults};

    #[test]
    fn session_actions_are_not_reduced() {
        let mut sheet = CallSheet::new(&SheetDefaults::default(), "2024-01-01");
        let before = sheet.clone();
        assert!(!reduce_action(&DomainAction::Session(SessionAction::Save), &mut sheet));
        assert_eq!(sheet, before);
    }
}
