//! Crew contacts and named call times from the sheet header.

use serde::{Deserialize, Serialize};

use super::records::{FieldRecord, Record};
use crate::ItemId;

/// Positions offered for a crew contact.
pub const CREW_POSITIONS: &[&str] = &["Producer", "Director", "UPM", "Director of Photography", "Other"];

/// Name of the call time row that every sheet keeps.
pub const CREW_CALL: &str = "Crew Call";

/// Call types offered for additional call time rows.
pub const CALL_TYPES: &[&str] = &["Shooting Call", "Breakfast", "Lunch", "2nd Meal", "Est. Wrap", "Other"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewContact {
    pub id: ItemId,
    pub position: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
}

impl CrewContact {
    /// Blank contact with the first offered position.
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            position: CREW_POSITIONS[0].to_string(),
            name: String::new(),
            phone: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrewField {
    Position,
    Name,
    Phone,
}

impl Record for CrewContact {
    fn id(&self) -> ItemId {
        self.id
    }
}

impl FieldRecord for CrewContact {
    type Field = CrewField;

    fn field(&self, field: CrewField) -> Option<&str> {
        Some(match field {
            CrewField::Position => &self.position,
            CrewField::Name => &self.name,
            CrewField::Phone => &self.phone,
        })
    }

    fn set_field(&mut self, field: CrewField, value: &str) -> bool {
        match field {
            CrewField::Position => {
                if !CREW_POSITIONS.contains(&value) {
                    return false;
                }
                self.position = value.to_string();
            }
            CrewField::Name => self.name = value.to_string(),
            CrewField::Phone => self.phone = value.to_string(),
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallTime {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub time: String,
}

impl CallTime {
    /// New rows start as a 9 AM shooting call.
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            name: CALL_TYPES[0].to_string(),
            time: "9:00 AM".to_string(),
        }
    }

    pub fn crew_call(id: ItemId, time: impl Into<String>) -> Self {
        Self { id, name: CREW_CALL.to_string(), time: time.into() }
    }

    pub fn is_crew_call(&self) -> bool {
        self.name == CREW_CALL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallTimeField {
    Name,
    Time,
}

impl Record for CallTime {
    fn id(&self) -> ItemId {
        self.id
    }
}

impl FieldRecord for CallTime {
    type Field = CallTimeField;

    fn field(&self, field: CallTimeField) -> Option<&str> {
        Some(match field {
            CallTimeField::Name => &self.name,
            CallTimeField::Time => &self.time,
        })
    }

    fn set_field(&mut self, field: CallTimeField, value: &str) -> bool {
        match field {
            CallTimeField::Name => {
                // The crew call row keeps its name; other rows pick from the offered types.
                if self.is_crew_call() || !CALL_TYPES.contains(&value) {
                    return false;
                }
                self.name = value.to_string();
            }
            CallTimeField::Time => self.time = value.to_string(),
        }
        true
    }
}
