//! The sheet's lists, each described as a table section.

use callsheet_types::fields::{format_total, total_pages};
use callsheet_types::{
    AdvanceAction, AdvanceItem, CallSheet, CallTime, CallTimeAction, CallTimeField, CrewAction, CrewContact,
    CrewField, DepartmentNote, DepartmentNoteAction, FieldRecord, ItemId, LocationAction, LocationField,
    LocationItem, MoveDirection, NoteField, RadioAction, RadioChannel, RadioField, Record, ScheduleAction,
    ScheduleEntry, ScheduleField, ScheduleItem, ScheduleKind, TalentAction, TalentField, TalentItem,
    CALL_TYPES, CREW_POSITIONS,
};

use super::{AddKind, Column, Section, TablePane};
use crate::panes::cell_editor::{CellKind, Suggestions};
use crate::ui::{Action, Color};

/// Labels of `DayNight::ALL`, in order.
pub const DAY_NIGHT_LABELS: &[&str] = &["Day", "Night", "Morning", "Evening"];

/// Codes of `Swf::ALL`, in order.
pub const SWF_CODES: &[&str] = &["SW", "W", "WF", "H", "WD", "PW", "SWF"];

pub type CrewPane = TablePane<CrewSection>;
pub type CallTimesPane = TablePane<CallTimeSection>;
pub type SchedulePane = TablePane<ScheduleSection>;
pub type TalentPane = TablePane<TalentSection>;
pub type LocationsPane = TablePane<LocationSection>;
pub type NotesPane = TablePane<NoteSection>;
pub type AdvancePane = TablePane<AdvanceSection>;
pub type RadioPane = TablePane<RadioSection>;

pub struct CrewSection;

impl Section for CrewSection {
    type Row = CrewContact;

    const ID: &'static str = "crew";
    const TITLE: &'static str = "Crew Contacts";
    const LAYER: &'static str = "list";

    fn columns() -> Vec<Column<CrewField>> {
        vec![
            Column::new("Position", CrewField::Position, CellKind::Choice(CREW_POSITIONS), 3),
            Column::new("Name", CrewField::Name, CellKind::Text, 3),
            Column::new("Phone", CrewField::Phone, CellKind::Text, 2),
        ]
    }

    fn rows(sheet: &CallSheet) -> &[CrewContact] {
        sheet.crew_contacts.as_slice()
    }

    fn add(_kind: AddKind) -> Option<Action> {
        Some(Action::Crew(CrewAction::Add))
    }

    fn update(id: ItemId, field: CrewField, value: String) -> Action {
        Action::Crew(CrewAction::Update(id, field, value))
    }

    fn remove(row: &CrewContact) -> Option<Action> {
        Some(Action::Crew(CrewAction::Remove(row.id())))
    }
}

pub struct CallTimeSection;

impl Section for CallTimeSection {
    type Row = CallTime;

    const ID: &'static str = "call_times";
    const TITLE: &'static str = "Call Times";
    const LAYER: &'static str = "list";

    fn columns() -> Vec<Column<CallTimeField>> {
        vec![
            Column::new("Call", CallTimeField::Name, CellKind::Choice(CALL_TYPES), 3),
            Column::new("Time", CallTimeField::Time, CellKind::Time, 2),
        ]
    }

    fn rows(sheet: &CallSheet) -> &[CallTime] {
        sheet.call_times.as_slice()
    }

    fn add(_kind: AddKind) -> Option<Action> {
        Some(Action::CallTime(CallTimeAction::Add))
    }

    fn update(id: ItemId, field: CallTimeField, value: String) -> Action {
        Action::CallTime(CallTimeAction::Update(id, field, value))
    }

    fn remove(row: &CallTime) -> Option<Action> {
        if row.is_crew_call() {
            return None;
        }
        Some(Action::CallTime(CallTimeAction::Remove(row.id())))
    }

    fn is_editable(row: &CallTime, field: CallTimeField) -> bool {
        !(row.is_crew_call() && field == CallTimeField::Name)
    }

    fn row_color(row: &CallTime) -> Option<Color> {
        row.is_crew_call().then_some(Color::CREW_CALL_COLOR)
    }
}

pub struct ScheduleSection;

impl Section for ScheduleSection {
    type Row = ScheduleItem;

    const ID: &'static str = "schedule";
    const TITLE: &'static str = "Shooting Schedule";
    const LAYER: &'static str = "schedule";

    fn columns() -> Vec<Column<ScheduleField>> {
        vec![
            Column::new("Time", ScheduleField::Time, CellKind::Time, 2),
            Column::new("Sc", ScheduleField::SceneNo, CellKind::Text, 1),
            Column::new("Description", ScheduleField::Description, CellKind::Text, 5),
            Column::new("D/N", ScheduleField::DayNight, CellKind::Choice(DAY_NIGHT_LABELS), 2),
            Column::new("Cast", ScheduleField::Cast, CellKind::Autocomplete(Suggestions::Cast), 3),
            Column::new("Location", ScheduleField::Location, CellKind::Autocomplete(Suggestions::Locations), 3),
            Column::new("Pages", ScheduleField::Pages, CellKind::Pages, 1),
        ]
    }

    fn rows(sheet: &CallSheet) -> &[ScheduleItem] {
        sheet.schedule.as_slice()
    }

    fn add(kind: AddKind) -> Option<Action> {
        let kind = match kind {
            AddKind::Row => ScheduleKind::Scene,
            AddKind::Banner => ScheduleKind::Banner,
            AddKind::CompanyMove => ScheduleKind::CompanyMove,
        };
        Some(Action::Schedule(ScheduleAction::Add(kind)))
    }

    fn update(id: ItemId, field: ScheduleField, value: String) -> Action {
        Action::Schedule(ScheduleAction::Update(id, field, value))
    }

    fn remove(row: &ScheduleItem) -> Option<Action> {
        Some(Action::Schedule(ScheduleAction::Remove(row.id())))
    }

    fn move_row(id: ItemId, direction: MoveDirection) -> Option<Action> {
        Some(Action::Schedule(ScheduleAction::Move(id, direction)))
    }

    fn cell_text(row: &ScheduleItem, field: ScheduleField) -> String {
        match (&row.entry, field) {
            (ScheduleEntry::Banner { .. }, ScheduleField::SceneNo) => "BANNER".to_string(),
            (ScheduleEntry::CompanyMove { .. }, ScheduleField::Description) => "COMPANY MOVE".to_string(),
            _ => row.field(field).unwrap_or_default().to_string(),
        }
    }

    fn row_color(row: &ScheduleItem) -> Option<Color> {
        match row.entry.kind() {
            ScheduleKind::Scene => None,
            ScheduleKind::Banner => Some(Color::BANNER_COLOR),
            ScheduleKind::CompanyMove => Some(Color::MOVE_COLOR),
        }
    }

    fn footer(sheet: &CallSheet) -> Option<String> {
        Some(format!("Total pages: {}", format_total(total_pages(sheet.schedule.iter()))))
    }
}

pub struct TalentSection;

impl Section for TalentSection {
    type Row = TalentItem;

    const ID: &'static str = "talent";
    const TITLE: &'static str = "Talent";
    const LAYER: &'static str = "list";

    fn columns() -> Vec<Column<TalentField>> {
        vec![
            Column::new("#", TalentField::CastId, CellKind::Text, 1),
            Column::new("Name", TalentField::Name, CellKind::Text, 3),
            Column::new("Role", TalentField::Role, CellKind::Text, 3),
            Column::new("Makeup", TalentField::Makeup, CellKind::Time, 2),
            Column::new("Call", TalentField::CallTime, CellKind::Time, 2),
            Column::new("Contact", TalentField::Contact, CellKind::Text, 3),
            Column::new("SWF", TalentField::Swf, CellKind::Choice(SWF_CODES), 1),
        ]
    }

    fn rows(sheet: &CallSheet) -> &[TalentItem] {
        sheet.talent.as_slice()
    }

    fn add(_kind: AddKind) -> Option<Action> {
        Some(Action::Talent(TalentAction::Add))
    }

    fn update(id: ItemId, field: TalentField, value: String) -> Action {
        Action::Talent(TalentAction::Update(id, field, value))
    }

    fn remove(row: &TalentItem) -> Option<Action> {
        Some(Action::Talent(TalentAction::Remove(row.id())))
    }
}

pub struct LocationSection;

impl Section for LocationSection {
    type Row = LocationItem;

    const ID: &'static str = "locations";
    const TITLE: &'static str = "Locations";
    const LAYER: &'static str = "list";

    fn columns() -> Vec<Column<LocationField>> {
        vec![
            Column::new("#", LocationField::Number, CellKind::Text, 1),
            Column::new("Set Location", LocationField::SetLocation, CellKind::Text, 4),
            Column::new("Parking", LocationField::Parking, CellKind::Text, 3),
            Column::new("Nearest Hospital", LocationField::NearestHospital, CellKind::Text, 4),
        ]
    }

    fn rows(sheet: &CallSheet) -> &[LocationItem] {
        sheet.locations.as_slice()
    }

    fn add(_kind: AddKind) -> Option<Action> {
        Some(Action::Location(LocationAction::Add))
    }

    fn update(id: ItemId, field: LocationField, value: String) -> Action {
        Action::Location(LocationAction::Update(id, field, value))
    }

    fn remove(row: &LocationItem) -> Option<Action> {
        Some(Action::Location(LocationAction::Remove(row.id())))
    }
}

pub struct NoteSection;

impl Section for NoteSection {
    type Row = DepartmentNote;

    const ID: &'static str = "notes";
    const TITLE: &'static str = "Department Notes";
    const LAYER: &'static str = "list";

    fn columns() -> Vec<Column<NoteField>> {
        vec![
            Column::new("Department", NoteField::Department, CellKind::Autocomplete(Suggestions::Departments), 1),
            Column::new("Notes", NoteField::Notes, CellKind::Text, 3),
        ]
    }

    fn rows(sheet: &CallSheet) -> &[DepartmentNote] {
        sheet.department_notes.as_slice()
    }

    fn add(_kind: AddKind) -> Option<Action> {
        Some(Action::DepartmentNote(DepartmentNoteAction::Add))
    }

    fn update(id: ItemId, field: NoteField, value: String) -> Action {
        Action::DepartmentNote(DepartmentNoteAction::Update(id, field, value))
    }

    fn remove(row: &DepartmentNote) -> Option<Action> {
        Some(Action::DepartmentNote(DepartmentNoteAction::Remove(row.id())))
    }
}

pub struct AdvanceSection;

impl Section for AdvanceSection {
    type Row = AdvanceItem;

    const ID: &'static str = "advance";
    const TITLE: &'static str = "Advance Schedule";
    const LAYER: &'static str = "ordered_list";

    // Advance rows often carry a day ("Day 2") instead of a clock time
    fn columns() -> Vec<Column<ScheduleField>> {
        vec![
            Column::new("Time", ScheduleField::Time, CellKind::Text, 2),
            Column::new("Sc", ScheduleField::SceneNo, CellKind::Text, 1),
            Column::new("Description", ScheduleField::Description, CellKind::Text, 5),
            Column::new("D/N", ScheduleField::DayNight, CellKind::Choice(DAY_NIGHT_LABELS), 2),
            Column::new("Cast", ScheduleField::Cast, CellKind::Text, 3),
            Column::new("Location", ScheduleField::Location, CellKind::Text, 3),
            Column::new("Pages", ScheduleField::Pages, CellKind::Pages, 1),
        ]
    }

    fn rows(sheet: &CallSheet) -> &[AdvanceItem] {
        sheet.advance_schedule.as_slice()
    }

    fn add(_kind: AddKind) -> Option<Action> {
        Some(Action::Advance(AdvanceAction::Add))
    }

    fn update(id: ItemId, field: ScheduleField, value: String) -> Action {
        Action::Advance(AdvanceAction::Update(id, field, value))
    }

    fn remove(row: &AdvanceItem) -> Option<Action> {
        Some(Action::Advance(AdvanceAction::Remove(row.id())))
    }

    fn move_row(id: ItemId, direction: MoveDirection) -> Option<Action> {
        Some(Action::Advance(AdvanceAction::Move(id, direction)))
    }
}

pub struct RadioSection;

impl Section for RadioSection {
    type Row = RadioChannel;

    const ID: &'static str = "radio";
    const TITLE: &'static str = "Radio Channels";
    const LAYER: &'static str = "list";

    fn columns() -> Vec<Column<RadioField>> {
        vec![
            Column::new("Channel", RadioField::Number, CellKind::Text, 1),
            Column::new("Department", RadioField::Department, CellKind::Text, 3),
        ]
    }

    fn rows(sheet: &CallSheet) -> &[RadioChannel] {
        sheet.radio_channels.as_slice()
    }

    fn add(_kind: AddKind) -> Option<Action> {
        Some(Action::Radio(RadioAction::Add))
    }

    fn update(id: ItemId, field: RadioField, value: String) -> Action {
        Action::Radio(RadioAction::Update(id, field, value))
    }

    fn remove(row: &RadioChannel) -> Option<Action> {
        Some(Action::Radio(RadioAction::Remove(row.id())))
    }
}
