//! Action types for the dispatch system.
//!
//! Action types are re-exported from callsheet-types. This module defines
//! IoFeedback, the completion messages sent back by background I/O threads.

use std::path::PathBuf;

pub use callsheet_types::{
    Action, AdvanceAction, CallTimeAction, CrewAction, DepartmentNoteAction, DispatchResult, DomainAction,
    HeaderAction, LocationAction, NavAction, NavIntent, RadioAction, ScheduleAction, SessionAction,
    StatusEvent, StatusLevel, TalentAction,
};

/// Feedback from async I/O operations to the main thread.
#[derive(Debug)]
pub enum IoFeedback {
    SaveComplete { id: u64, result: Result<(), String> },
    ExportComplete { id: u64, path: PathBuf, result: Result<(), String> },
}
