//! Action types for the dispatch system.
//!
//! Actions are user intents produced by panes and routed through the
//! dispatcher. Per-section enums carry row edits; `SessionAction` carries
//! document-level commands that need I/O.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    CallTimeField, CrewField, HeaderField, ItemId, LocationField, MoveDirection, NoteField, RadioField,
    ScheduleField, ScheduleKind, TalentField,
};

// ============================================================================
// Navigation and status
// ============================================================================

/// Navigation actions (pane switching, modal stack).
#[derive(Debug, Clone, PartialEq)]
pub enum NavAction {
    SwitchPane(&'static str),
    PushPane(&'static str),
    PopPane,
}

/// Navigation intent returned from dispatch, processed by the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub enum NavIntent {
    SwitchTo(&'static str),
    PushTo(&'static str),
    Pop,
    /// Pop only if the active pane matches the given id
    ConditionalPop(&'static str),
    /// Pop, falling back to SwitchTo if stack is empty
    PopOrSwitchTo(&'static str),
}

/// Severity of a status toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Status event returned from dispatch, shown by the UI as a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEvent {
    pub level: StatusLevel,
    pub message: String,
}

/// Result of dispatching an action: side effects for the UI layer to process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchResult {
    pub quit: bool,
    pub nav: Vec<NavIntent>,
    pub status: Vec<StatusEvent>,
    /// Set when the sheet title changed, so the frame can refresh its header.
    pub sheet_title: Option<String>,
}

impl DispatchResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_quit() -> Self {
        Self { quit: true, ..Self::default() }
    }

    pub fn with_nav(intent: NavIntent) -> Self {
        Self { nav: vec![intent], ..Self::default() }
    }

    pub fn with_status(level: StatusLevel, message: impl Into<String>) -> Self {
        Self {
            status: vec![StatusEvent { level, message: message.into() }],
            ..Self::default()
        }
    }

    pub fn push_nav(&mut self, intent: NavIntent) {
        self.nav.push(intent);
    }

    pub fn push_status(&mut self, level: StatusLevel, message: impl Into<String>) {
        self.status.push(StatusEvent { level, message: message.into() });
    }

    pub fn merge(&mut self, other: DispatchResult) {
        self.quit = self.quit || other.quit;
        self.nav.extend(other.nav);
        self.status.extend(other.status);
        if other.sheet_title.is_some() {
            self.sheet_title = other.sheet_title;
        }
    }
}

// ============================================================================
// Section actions
// ============================================================================

/// Header scalar fields and the production logo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HeaderAction {
    Set(HeaderField, String),
    /// Store an already-encoded data URI
    SetLogo(String),
    ClearLogo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CrewAction {
    Add,
    Update(ItemId, CrewField, String),
    Remove(ItemId),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CallTimeAction {
    Add,
    Update(ItemId, CallTimeField, String),
    /// Ignored for the crew call row
    Remove(ItemId),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScheduleAction {
    Add(ScheduleKind),
    Update(ItemId, ScheduleField, String),
    Remove(ItemId),
    Move(ItemId, MoveDirection),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TalentAction {
    Add,
    Update(ItemId, TalentField, String),
    Remove(ItemId),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LocationAction {
    Add,
    Update(ItemId, LocationField, String),
    Remove(ItemId),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DepartmentNoteAction {
    Add,
    Update(ItemId, NoteField, String),
    Remove(ItemId),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AdvanceAction {
    Add,
    Update(ItemId, ScheduleField, String),
    Remove(ItemId),
    Move(ItemId, MoveDirection),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RadioAction {
    Add,
    Update(ItemId, RadioField, String),
    Remove(ItemId),
}

/// Document-level commands. These need I/O and are handled by core dispatch,
/// not by the pure reducers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionAction {
    Save,
    /// Write the print-ready document to the export directory
    Export,
    Email,
    ShareLink,
    /// Discard the current sheet and start from defaults
    NewSheet,
    LoadLogo(PathBuf),
}

// ============================================================================
// Top-level Action
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    Quit,
    Nav(NavAction),
    Header(HeaderAction),
    Crew(CrewAction),
    CallTime(CallTimeAction),
    Schedule(ScheduleAction),
    Talent(TalentAction),
    Location(LocationAction),
    DepartmentNote(DepartmentNoteAction),
    Advance(AdvanceAction),
    Radio(RadioAction),
    Session(SessionAction),
    /// Push a named layer onto the layer stack
    PushLayer(&'static str),
    /// Pop a named layer from the layer stack
    PopLayer(&'static str),
    /// Flush any pending save then quit
    SaveAndQuit,
}

// ============================================================================
// DomainAction: document mutations handled by core dispatch
// ============================================================================

/// Actions that touch the document. Extracted from `Action` via
/// `Action::to_domain()`; excludes navigation, layers and quit.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainAction {
    Header(HeaderAction),
    Crew(CrewAction),
    CallTime(CallTimeAction),
    Schedule(ScheduleAction),
    Talent(TalentAction),
    Location(LocationAction),
    DepartmentNote(DepartmentNoteAction),
    Advance(AdvanceAction),
    Radio(RadioAction),
    Session(SessionAction),
}

impl Action {
    pub fn to_domain(&self) -> Option<DomainAction> {
        match self {
            Self::Header(a) => Some(DomainAction::Header(a.clone())),
            Self::Crew(a) => Some(DomainAction::Crew(a.clone())),
            Self::CallTime(a) => Some(DomainAction::CallTime(a.clone())),
            Self::Schedule(a) => Some(DomainAction::Schedule(a.clone())),
            Self::Talent(a) => Some(DomainAction::Talent(a.clone())),
            Self::Location(a) => Some(DomainAction::Location(a.clone())),
            Self::DepartmentNote(a) => Some(DomainAction::DepartmentNote(a.clone())),
            Self::Advance(a) => Some(DomainAction::Advance(a.clone())),
            Self::Radio(a) => Some(DomainAction::Radio(a.clone())),
            Self::Session(a) => Some(DomainAction::Session(a.clone())),
            // UI-only actions
            Self::None | Self::Quit | Self::Nav(_) | Self::PushLayer(_) | Self::PopLayer(_) | Self::SaveAndQuit => {
                None
            }
        }
    }
}

impl From<DomainAction> for Action {
    fn from(d: DomainAction) -> Self {
        match d {
            DomainAction::Header(a) => Self::Header(a),
            DomainAction::Crew(a) => Self::Crew(a),
            DomainAction::CallTime(a) => Self::CallTime(a),
            DomainAction::Schedule(a) => Self::Schedule(a),
            DomainAction::Talent(a) => Self::Talent(a),
            DomainAction::Location(a) => Self::Location(a),
            DomainAction::DepartmentNote(a) => Self::DepartmentNote(a),
            DomainAction::Advance(a) => Self::Advance(a),
            DomainAction::Radio(a) => Self::Radio(a),
            DomainAction::Session(a) => Self::Session(a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_result_none_is_empty() {
        let r = DispatchResult::none();
        assert!(!r.quit);
        assert!(r.nav.is_empty());
        assert!(r.status.is_empty());
        assert!(r.sheet_title.is_none());
    }

    #[test]
    fn dispatch_result_with_quit() {
        assert!(DispatchResult::with_quit().quit);
    }

    #[test]
    fn dispatch_result_merge() {
        let mut a = DispatchResult::with_status(StatusLevel::Info, "saved");
        let mut b = DispatchResult::with_nav(NavIntent::Pop);
        b.sheet_title = Some("Night Shoot".into());
        b.quit = true;
        a.merge(b);
        assert!(a.quit);
        assert_eq!(a.nav, vec![NavIntent::Pop]);
        assert_eq!(a.status.len(), 1);
        assert_eq!(a.sheet_title.as_deref(), Some("Night Shoot"));
    }

    #[test]
    fn merge_keeps_title_when_other_has_none() {
        let mut a = DispatchResult { sheet_title: Some("A".into()), ..DispatchResult::none() };
        a.merge(DispatchResult::none());
        assert_eq!(a.sheet_title.as_deref(), Some("A"));
    }

    #[test]
    fn ui_actions_have_no_domain() {
        assert!(Action::None.to_domain().is_none());
        assert!(Action::Quit.to_domain().is_none());
        assert!(Action::PushLayer("text_edit").to_domain().is_none());
        assert!(Action::SaveAndQuit.to_domain().is_none());
    }

    #[test]
    fn domain_round_trip() {
        let action = Action::Schedule(ScheduleAction::Add(ScheduleKind::Banner));
        let domain = action.to_domain().unwrap();
        assert_eq!(Action::from(domain), action);
    }
}
