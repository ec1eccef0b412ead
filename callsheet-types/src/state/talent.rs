use serde::{Deserialize, Serialize};

use super::records::{FieldRecord, Record};
use crate::ItemId;

/// Work status code for a cast member on this day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Swf {
    Sw,
    #[default]
    W,
    Wf,
    H,
    Wd,
    Pw,
    Swf,
}

impl Swf {
    pub const ALL: [Swf; 7] = [Swf::Sw, Swf::W, Swf::Wf, Swf::H, Swf::Wd, Swf::Pw, Swf::Swf];

    pub fn code(self) -> &'static str {
        match self {
            Swf::Sw => "SW",
            Swf::W => "W",
            Swf::Wf => "WF",
            Swf::H => "H",
            Swf::Wd => "WD",
            Swf::Pw => "PW",
            Swf::Swf => "SWF",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Swf::Sw => "SW - Start Work",
            Swf::W => "W - Work",
            Swf::Wf => "WF - Work Finish",
            Swf::H => "H - Hold",
            Swf::Wd => "WD - Work Drop",
            Swf::Pw => "PW - Pickup Work",
            Swf::Swf => "SWF - Start Work Finish",
        }
    }

    /// Accepts either the bare code or the full label.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == value || s.label() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TalentItem {
    pub id: ItemId,
    pub cast_id: String,
    pub name: String,
    pub role: String,
    pub makeup: String,
    pub call_time: String,
    pub contact: String,
    pub swf: Swf,
}

impl TalentItem {
    pub fn new(id: ItemId) -> Self {
        Self { id, ..Self::default() }
    }

    /// Suggestion text for the schedule's cast column, if the row has anything to show.
    pub fn cast_option(&self) -> Option<String> {
        if self.name.is_empty() && self.role.is_empty() {
            return None;
        }
        Some(format!("{} - {}", self.name, self.role))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TalentField {
    CastId,
    Name,
    Role,
    Makeup,
    CallTime,
    Contact,
    Swf,
}

impl Record for TalentItem {
    fn id(&self) -> ItemId {
        self.id
    }
}

impl FieldRecord for TalentItem {
    type Field = TalentField;

    fn field(&self, field: TalentField) -> Option<&str> {
        Some(match field {
            TalentField::CastId => &self.cast_id,
            TalentField::Name => &self.name,
            TalentField::Role => &self.role,
            TalentField::Makeup => &self.makeup,
            TalentField::CallTime => &self.call_time,
            TalentField::Contact => &self.contact,
            TalentField::Swf => self.swf.code(),
        })
    }

    fn set_field(&mut self, field: TalentField, value: &str) -> bool {
        let slot = match field {
            TalentField::Swf => {
                return match Swf::parse(value) {
                    Some(swf) => {
                        self.swf = swf;
                        true
                    }
                    None => false,
                };
            }
            TalentField::CastId => &mut self.cast_id,
            TalentField::Name => &mut self.name,
            TalentField::Role => &mut self.role,
            TalentField::Makeup => &mut self.makeup,
            TalentField::CallTime => &mut self.call_time,
            TalentField::Contact => &mut self.contact,
        };
        *slot = value.to_string();
        true
    }
}
