//! Department notes and radio channel assignments.

use serde::{Deserialize, Serialize};

use super::records::{FieldRecord, Record};
use crate::ItemId;

/// Departments suggested for notes and radio channels.
pub const DEPARTMENTS: &[&str] = &[
    "Art",
    "Camera",
    "Craft Services",
    "Direction",
    "Electric",
    "Grip",
    "Hair & Makeup",
    "Health & Safety",
    "Location",
    "Production",
    "Props",
    "Set Dressing",
    "Sound",
    "Special Effects",
    "Stunts",
    "Transportation",
    "Visual Effects",
    "Wardrobe",
];

pub fn department_options() -> Vec<String> {
    DEPARTMENTS.iter().map(|d| d.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DepartmentNote {
    pub id: ItemId,
    pub department: String,
    pub notes: String,
}

impl DepartmentNote {
    pub fn new(id: ItemId) -> Self {
        Self { id, ..Self::default() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteField {
    Department,
    Notes,
}

impl Record for DepartmentNote {
    fn id(&self) -> ItemId {
        self.id
    }
}

impl FieldRecord for DepartmentNote {
    type Field = NoteField;

    fn field(&self, field: NoteField) -> Option<&str> {
        Some(match field {
            NoteField::Department => &self.department,
            NoteField::Notes => &self.notes,
        })
    }

    fn set_field(&mut self, field: NoteField, value: &str) -> bool {
        match field {
            NoteField::Department => self.department = value.to_string(),
            NoteField::Notes => self.notes = value.to_string(),
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RadioChannel {
    pub id: ItemId,
    pub number: String,
    pub department: String,
}

impl RadioChannel {
    pub fn new(id: ItemId, number: usize) -> Self {
        Self { id, number: number.to_string(), department: String::new() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RadioField {
    Number,
    Department,
}

impl Record for RadioChannel {
    fn id(&self) -> ItemId {
        self.id
    }
}

impl FieldRecord for RadioChannel {
    type Field = RadioField;

    fn field(&self, field: RadioField) -> Option<&str> {
        Some(match field {
            RadioField::Number => &self.number,
            RadioField::Department => &self.department,
        })
    }

    fn set_field(&mut self, field: RadioField, value: &str) -> bool {
        match field {
            RadioField::Number => self.number = value.to_string(),
            RadioField::Department => self.department = value.to_string(),
        }
        true
    }
}
