use serde::{Deserialize, Serialize};

use super::records::{FieldRecord, Record};
use crate::ItemId;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationItem {
    pub id: ItemId,
    pub number: String,
    pub set_location: String,
    pub parking: String,
    pub nearest_hospital: String,
}

impl LocationItem {
    /// `number` is usually the list length plus one.
    pub fn new(id: ItemId, number: usize) -> Self {
        Self { id, number: number.to_string(), ..Self::default() }
    }

    pub fn location_option(&self) -> Option<String> {
        if self.set_location.is_empty() {
            return None;
        }
        Some(format!("{}: {}", self.number, self.set_location))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationField {
    Number,
    SetLocation,
    Parking,
    NearestHospital,
}

impl Record for LocationItem {
    fn id(&self) -> ItemId {
        self.id
    }
}

impl FieldRecord for LocationItem {
    type Field = LocationField;

    fn field(&self, field: LocationField) -> Option<&str> {
        Some(match field {
            LocationField::Number => &self.number,
            LocationField::SetLocation => &self.set_location,
            LocationField::Parking => &self.parking,
            LocationField::NearestHospital => &self.nearest_hospital,
        })
    }

    fn set_field(&mut self, field: LocationField, value: &str) -> bool {
        let slot = match field {
            LocationField::Number => &mut self.number,
            LocationField::SetLocation => &mut self.set_location,
            LocationField::Parking => &mut self.parking,
            LocationField::NearestHospital => &mut self.nearest_hospital,
        };
        *slot = value.to_string();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_requires_set_location() {
        let mut loc = LocationItem::new(ItemId::new(1), 2);
        assert_eq!(loc.number, "2");
        assert_eq!(loc.location_option(), None);
        loc.set_field(LocationField::SetLocation, "Warehouse");
        assert_eq!(loc.location_option().as_deref(), Some("2: Warehouse"));
    }
}
