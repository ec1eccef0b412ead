//! Shooting schedule entries and the advance (look-ahead) schedule.

use serde::{Deserialize, Serialize};

use super::records::{FieldRecord, Record};
use crate::ItemId;

/// Lighting condition of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayNight {
    #[default]
    Day,
    Night,
    Morning,
    Evening,
}

impl DayNight {
    pub const ALL: [DayNight; 4] = [DayNight::Day, DayNight::Night, DayNight::Morning, DayNight::Evening];

    pub fn label(self) -> &'static str {
        match self {
            DayNight::Day => "Day",
            DayNight::Night => "Night",
            DayNight::Morning => "Morning",
            DayNight::Evening => "Evening",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dn| dn.label() == label)
    }
}

/// Scene row fields, shared by the schedule and the advance schedule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneDetails {
    pub time: String,
    pub scene_no: String,
    pub description: String,
    pub dn: DayNight,
    pub cast: String,
    pub location: String,
    pub pages: String,
}

/// What a schedule row represents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ScheduleEntry {
    Scene(SceneDetails),
    Banner {
        #[serde(default)]
        time: String,
        #[serde(default, rename = "bannerText")]
        banner_text: String,
    },
    CompanyMove {
        #[serde(default)]
        time: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScheduleKind {
    Scene,
    Banner,
    CompanyMove,
}

impl ScheduleKind {
    pub fn label(self) -> &'static str {
        match self {
            ScheduleKind::Scene => "Scene",
            ScheduleKind::Banner => "Banner",
            ScheduleKind::CompanyMove => "Company Move",
        }
    }
}

impl ScheduleEntry {
    pub fn new(kind: ScheduleKind) -> Self {
        match kind {
            ScheduleKind::Scene => ScheduleEntry::Scene(SceneDetails::default()),
            ScheduleKind::Banner => ScheduleEntry::Banner { time: String::new(), banner_text: String::new() },
            ScheduleKind::CompanyMove => ScheduleEntry::CompanyMove { time: String::new() },
        }
    }

    pub fn kind(&self) -> ScheduleKind {
        match self {
            ScheduleEntry::Scene(_) => ScheduleKind::Scene,
            ScheduleEntry::Banner { .. } => ScheduleKind::Banner,
            ScheduleEntry::CompanyMove { .. } => ScheduleKind::CompanyMove,
        }
    }

    pub fn time(&self) -> &str {
        match self {
            ScheduleEntry::Scene(scene) => &scene.time,
            ScheduleEntry::Banner { time, .. } | ScheduleEntry::CompanyMove { time } => time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: ItemId,
    #[serde(flatten)]
    pub entry: ScheduleEntry,
}

impl ScheduleItem {
    pub fn new(id: ItemId, kind: ScheduleKind) -> Self {
        Self { id, entry: ScheduleEntry::new(kind) }
    }
}

/// Cells of a schedule row. A banner keeps its text in `Description`;
/// a company move only has `Time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScheduleField {
    Time,
    SceneNo,
    Description,
    DayNight,
    Cast,
    Location,
    Pages,
}

fn scene_field(scene: &SceneDetails, field: ScheduleField) -> &str {
    match field {
        ScheduleField::Time => &scene.time,
        ScheduleField::SceneNo => &scene.scene_no,
        ScheduleField::Description => &scene.description,
        ScheduleField::DayNight => scene.dn.label(),
        ScheduleField::Cast => &scene.cast,
        ScheduleField::Location => &scene.location,
        ScheduleField::Pages => &scene.pages,
    }
}

fn set_scene_field(scene: &mut SceneDetails, field: ScheduleField, value: &str) -> bool {
    let slot = match field {
        ScheduleField::DayNight => {
            return match DayNight::from_label(value) {
                Some(dn) => {
                    scene.dn = dn;
                    true
                }
                None => false,
            };
        }
        ScheduleField::Time => &mut scene.time,
        ScheduleField::SceneNo => &mut scene.scene_no,
        ScheduleField::Description => &mut scene.description,
        ScheduleField::Cast => &mut scene.cast,
        ScheduleField::Location => &mut scene.location,
        ScheduleField::Pages => &mut scene.pages,
    };
    *slot = value.to_string();
    true
}

impl Record for ScheduleItem {
    fn id(&self) -> ItemId {
        self.id
    }
}

impl FieldRecord for ScheduleItem {
    type Field = ScheduleField;

    fn field(&self, field: ScheduleField) -> Option<&str> {
        match (&self.entry, field) {
            (ScheduleEntry::Scene(scene), f) => Some(scene_field(scene, f)),
            (ScheduleEntry::Banner { time, .. }, ScheduleField::Time)
            | (ScheduleEntry::CompanyMove { time }, ScheduleField::Time) => Some(time),
            (ScheduleEntry::Banner { banner_text, .. }, ScheduleField::Description) => Some(banner_text),
            _ => None,
        }
    }

    fn set_field(&mut self, field: ScheduleField, value: &str) -> bool {
        match (&mut self.entry, field) {
            (ScheduleEntry::Scene(scene), f) => set_scene_field(scene, f, value),
            (ScheduleEntry::Banner { time, .. }, ScheduleField::Time)
            | (ScheduleEntry::CompanyMove { time }, ScheduleField::Time) => {
                *time = value.to_string();
                true
            }
            (ScheduleEntry::Banner { banner_text, .. }, ScheduleField::Description) => {
                *banner_text = value.to_string();
                true
            }
            _ => false,
        }
    }
}

/// Row of the advance schedule: always scene-shaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceItem {
    pub id: ItemId,
    #[serde(flatten)]
    pub scene: SceneDetails,
}

impl AdvanceItem {
    pub fn new(id: ItemId) -> Self {
        Self { id, scene: SceneDetails::default() }
    }
}

impl Record for AdvanceItem {
    fn id(&self) -> ItemId {
        self.id
    }
}

impl FieldRecord for AdvanceItem {
    type Field = ScheduleField;

    fn field(&self, field: ScheduleField) -> Option<&str> {
        Some(scene_field(&self.scene, field))
    }

    fn set_field(&mut self, field: ScheduleField, value: &str) -> bool {
        set_scene_field(&mut self.scene, field, value)
    }
}
