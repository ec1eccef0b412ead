//! The root call sheet document.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::crew::{CallTime, CrewContact};
use super::location::LocationItem;
use super::notes::{DepartmentNote, RadioChannel};
use super::records::RecordList;
use super::schedule::{AdvanceItem, ScheduleItem, ScheduleKind};
use super::talent::TalentItem;
use crate::ItemId;

pub const DEFAULT_TITLE: &str = "YOUR MOVIE NAME";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TempUnit {
    #[default]
    F,
    C,
}

impl TempUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            TempUnit::F => "F",
            TempUnit::C => "C",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "F" | "f" => Some(TempUnit::F),
            "C" | "c" => Some(TempUnit::C),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            TempUnit::F => TempUnit::C,
            TempUnit::C => TempUnit::F,
        }
    }
}

/// Values a fresh sheet starts with. Loaded from config by the core crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetDefaults {
    pub title: String,
    pub shoot_day: String,
    pub general_crew_call: String,
    pub temp_unit: TempUnit,
}

impl Default for SheetDefaults {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            shoot_day: "1".to_string(),
            general_crew_call: "8:00".to_string(),
            temp_unit: TempUnit::F,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSheet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub shoot_day: String,
    #[serde(default)]
    pub shoot_date: String,
    #[serde(default)]
    pub general_crew_call: String,
    #[serde(default)]
    pub production_notes: String,
    #[serde(default)]
    pub production_logo: String,
    #[serde(default)]
    pub production_address: String,
    #[serde(default)]
    pub crew_contacts: RecordList<CrewContact>,
    #[serde(default)]
    pub call_times: RecordList<CallTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_temp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_temp: Option<String>,
    #[serde(default)]
    pub temp_unit: TempUnit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunset: Option<String>,
    #[serde(default)]
    pub schedule: RecordList<ScheduleItem>,
    #[serde(default)]
    pub talent: RecordList<TalentItem>,
    #[serde(default)]
    pub locations: RecordList<LocationItem>,
    #[serde(default)]
    pub department_notes: RecordList<DepartmentNote>,
    #[serde(default)]
    pub advance_schedule: RecordList<AdvanceItem>,
    #[serde(default)]
    pub radio_channels: RecordList<RadioChannel>,
    #[serde(default)]
    next_item_id: u64,
}

/// Scalar fields edited from the header pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderField {
    Title,
    ShootDay,
    ShootDate,
    GeneralCrewCall,
    ProductionNotes,
    ProductionAddress,
    MaxTemp,
    MinTemp,
    TempUnit,
    Sunrise,
    Sunset,
}

impl HeaderField {
    pub const ALL: [HeaderField; 11] = [
        HeaderField::Title,
        HeaderField::ShootDay,
        HeaderField::ShootDate,
        HeaderField::GeneralCrewCall,
        HeaderField::ProductionNotes,
        HeaderField::ProductionAddress,
        HeaderField::MaxTemp,
        HeaderField::MinTemp,
        HeaderField::TempUnit,
        HeaderField::Sunrise,
        HeaderField::Sunset,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HeaderField::Title => "Title",
            HeaderField::ShootDay => "Shoot Day",
            HeaderField::ShootDate => "Shoot Date",
            HeaderField::GeneralCrewCall => "General Crew Call",
            HeaderField::ProductionNotes => "Production Notes",
            HeaderField::ProductionAddress => "Production Address",
            HeaderField::MaxTemp => "High",
            HeaderField::MinTemp => "Low",
            HeaderField::TempUnit => "Unit",
            HeaderField::Sunrise => "Sunrise",
            HeaderField::Sunset => "Sunset",
        }
    }
}

/// True when `value` is an ISO `YYYY-MM-DD` date.
pub fn is_valid_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl Default for CallSheet {
    fn default() -> Self {
        let today = chrono::Local::now().date_naive().format(DATE_FORMAT).to_string();
        Self::new(&SheetDefaults::default(), today)
    }
}

impl CallSheet {
    /// A fresh sheet: two sample contacts, the crew call row, and one empty
    /// scene, talent row and location.
    pub fn new(defaults: &SheetDefaults, shoot_date: impl Into<String>) -> Self {
        let mut sheet = Self {
            title: defaults.title.clone(),
            shoot_day: defaults.shoot_day.clone(),
            shoot_date: shoot_date.into(),
            general_crew_call: defaults.general_crew_call.clone(),
            production_notes: String::new(),
            production_logo: String::new(),
            production_address: String::new(),
            crew_contacts: RecordList::new(),
            call_times: RecordList::new(),
            max_temp: None,
            min_temp: None,
            temp_unit: defaults.temp_unit,
            sunrise: None,
            sunset: None,
            schedule: RecordList::new(),
            talent: RecordList::new(),
            locations: RecordList::new(),
            department_notes: RecordList::new(),
            advance_schedule: RecordList::new(),
            radio_channels: RecordList::new(),
            next_item_id: 1,
        };

        for position in ["Producer", "Director"] {
            let id = sheet.next_id();
            sheet.crew_contacts.push(CrewContact {
                id,
                position: position.to_string(),
                name: "John Smith".to_string(),
                phone: "(555) 555-5555".to_string(),
            });
        }
        let id = sheet.next_id();
        sheet.call_times.push(CallTime::crew_call(id, "8:00 AM"));
        let id = sheet.next_id();
        sheet.schedule.push(ScheduleItem::new(id, ScheduleKind::Scene));
        let id = sheet.next_id();
        sheet.talent.push(TalentItem::new(id));
        let id = sheet.next_id();
        sheet.locations.push(LocationItem::new(id, 1));
        sheet
    }

    /// Issue a fresh row id.
    pub fn next_id(&mut self) -> ItemId {
        let id = ItemId::new(self.next_item_id.max(1));
        self.next_item_id = id.get().wrapping_add(1);
        id
    }

    /// Raise the id counter above every id present. Call after loading a snapshot.
    pub fn reconcile_ids(&mut self) {
        let max = [
            self.crew_contacts.max_id(),
            self.call_times.max_id(),
            self.schedule.max_id(),
            self.talent.max_id(),
            self.locations.max_id(),
            self.department_notes.max_id(),
            self.advance_schedule.max_id(),
            self.radio_channels.max_id(),
        ]
        .into_iter()
        .flatten()
        .map(ItemId::get)
        .max()
        .unwrap_or(0);
        if self.next_item_id <= max {
            self.next_item_id = max + 1;
        }
    }

    /// Put a crew call row back at the top if a snapshot lost it.
    pub fn ensure_crew_call(&mut self) {
        if self.call_times.iter().any(CallTime::is_crew_call) {
            return;
        }
        let id = self.next_id();
        let mut rows = vec![CallTime::crew_call(id, "8:00 AM")];
        rows.extend(self.call_times.iter().cloned());
        self.call_times = rows.into();
    }

    pub fn header_field(&self, field: HeaderField) -> &str {
        match field {
            HeaderField::Title => &self.title,
            HeaderField::ShootDay => &self.shoot_day,
            HeaderField::ShootDate => &self.shoot_date,
            HeaderField::GeneralCrewCall => &self.general_crew_call,
            HeaderField::ProductionNotes => &self.production_notes,
            HeaderField::ProductionAddress => &self.production_address,
            HeaderField::MaxTemp => self.max_temp.as_deref().unwrap_or(""),
            HeaderField::MinTemp => self.min_temp.as_deref().unwrap_or(""),
            HeaderField::TempUnit => self.temp_unit.as_str(),
            HeaderField::Sunrise => self.sunrise.as_deref().unwrap_or(""),
            HeaderField::Sunset => self.sunset.as_deref().unwrap_or(""),
        }
    }

    /// Returns false when the value is rejected (bad date, unknown unit).
    /// Empty weather values clear the field.
    pub fn set_header_field(&mut self, field: HeaderField, value: &str) -> bool {
        match field {
            HeaderField::Title => self.title = value.to_string(),
            HeaderField::ShootDay => self.shoot_day = value.to_string(),
            HeaderField::ShootDate => {
                if !is_valid_date(value) {
                    return false;
                }
                self.shoot_date = value.to_string();
            }
            HeaderField::GeneralCrewCall => self.general_crew_call = value.to_string(),
            HeaderField::ProductionNotes => self.production_notes = value.to_string(),
            HeaderField::ProductionAddress => self.production_address = value.to_string(),
            HeaderField::MaxTemp => self.max_temp = non_empty(value),
            HeaderField::MinTemp => self.min_temp = non_empty(value),
            HeaderField::TempUnit => match TempUnit::parse(value) {
                Some(unit) => self.temp_unit = unit,
                None => return false,
            },
            HeaderField::Sunrise => self.sunrise = non_empty(value),
            HeaderField::Sunset => self.sunset = non_empty(value),
        }
        true
    }

    pub fn shoot_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.shoot_date, DATE_FORMAT).ok()
    }

    /// `"{name} - {role}"` for each talent row with a name or role.
    pub fn cast_options(&self) -> Vec<String> {
        self.talent.iter().filter_map(TalentItem::cast_option).collect()
    }

    /// `"{number}: {setLocation}"` for each location with a set location.
    pub fn location_options(&self) -> Vec<String> {
        self.locations.iter().filter_map(LocationItem::location_option).collect()
    }

    pub fn contains_id(&self, id: ItemId) -> bool {
        self.crew_contacts.find(id).is_some()
            || self.call_times.find(id).is_some()
            || self.schedule.find(id).is_some()
            || self.talent.find(id).is_some()
            || self.locations.find(id).is_some()
            || self.department_notes.find(id).is_some()
            || self.advance_schedule.find(id).is_some()
            || self.radio_channels.find(id).is_some()
    }
}
