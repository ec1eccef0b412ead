mod local;
mod session;

pub use local::LocalDispatcher;
pub use session::{EMAIL_PLACEHOLDER, SAVED_MESSAGE, SHARE_LINK_PLACEHOLDER};

use std::sync::mpsc::Sender;
use std::time::Instant;

use callsheet_types::reduce::reduce_action;
use callsheet_types::HeaderField;

use crate::action::{Action, DispatchResult, HeaderAction, IoFeedback, StatusLevel};
use crate::state::AppState;

/// Dispatch an action. Returns a DispatchResult describing side effects for
/// the UI layer.
///
/// Every edit that changes the document marks it dirty and restarts the
/// autosave debounce; the save itself is started later by `flush_due_save`.
pub fn dispatch_action(action: &Action, state: &mut AppState, io_tx: &Sender<IoFeedback>) -> DispatchResult {
    match action {
        Action::Quit => DispatchResult::with_quit(),
        Action::Nav(_) => DispatchResult::none(), // Handled by PaneManager
        Action::None => DispatchResult::none(),
        // Layer management and SaveAndQuit are intercepted by the runtime
        Action::PushLayer(_) | Action::PopLayer(_) | Action::SaveAndQuit => DispatchResult::none(),
        Action::Session(a) => session::dispatch_session(a, state, io_tx),
        _ => dispatch_edit(action, state),
    }
}

fn dispatch_edit(action: &Action, state: &mut AppState) -> DispatchResult {
    let Some(domain) = action.to_domain() else {
        return DispatchResult::none();
    };
    if !reduce_action(&domain, &mut state.sheet) {
        return DispatchResult::none();
    }
    state.mark_dirty(Instant::now());

    let mut result = DispatchResult::none();
    if let Action::Header(HeaderAction::Set(HeaderField::Title, _)) = action {
        result.sheet_title = Some(state.sheet.title.clone());
    }
    result
}

/// Start a silent save once the debounce has elapsed. Returns true when a
/// save was started.
///
/// While a save is still in flight the debounce stays armed, so edits made
/// during it are picked up on a later turn.
pub fn flush_due_save(state: &mut AppState, io_tx: &Sender<IoFeedback>, now: Instant) -> bool {
    if state.io.pending_save.is_some() || !state.autosave.is_due(now) {
        return false;
    }
    if !state.project.dirty {
        state.autosave.clear();
        return false;
    }
    session::start_save(state, io_tx, false);
    true
}

/// Save immediately if there are unsaved edits, ignoring the debounce.
/// Returns true while a save is in flight.
pub fn flush_pending_save(state: &mut AppState, io_tx: &Sender<IoFeedback>) -> bool {
    if state.io.pending_save.is_none() && state.project.dirty {
        session::start_save(state, io_tx, false);
    }
    state.io.pending_save.is_some()
}

/// Apply a background I/O completion. Stale completions (superseded by a
/// newer request) are dropped. A queued explicit save starts here, after the
/// previous write has landed, so the store never sees two writers.
pub fn apply_io_feedback(feedback: IoFeedback, state: &mut AppState, io_tx: &Sender<IoFeedback>) -> DispatchResult {
    match feedback {
        IoFeedback::SaveComplete { id, result } => {
            let Some(pending) = state.io.pending_save.filter(|p| p.id == id) else {
                log::debug!(target: "dispatch", "dropping stale save completion {}", id);
                return DispatchResult::none();
            };
            state.io.pending_save = None;
            let outcome = match result {
                Ok(()) => {
                    state.io.last_io_error = None;
                    if state.project.revision == pending.revision {
                        state.project.dirty = false;
                    }
                    if pending.manual {
                        DispatchResult::with_status(StatusLevel::Info, SAVED_MESSAGE)
                    } else {
                        DispatchResult::none()
                    }
                }
                Err(e) => {
                    log::error!(target: "dispatch", "save failed: {}", e);
                    let msg = format!("Save failed: {}", e);
                    state.io.last_io_error = Some(e);
                    DispatchResult::with_status(StatusLevel::Error, msg)
                }
            };
            if state.io.manual_save_queued {
                session::start_save(state, io_tx, true);
            }
            outcome
        }
        IoFeedback::ExportComplete { id, path, result } => {
            if id != state.io.generation.export {
                return DispatchResult::none();
            }
            state.io.export_in_progress = false;
            match result {
                Ok(()) => {
                    log::info!(target: "dispatch", "exported {}", path.display());
                    DispatchResult::with_status(StatusLevel::Info, format!("Exported to {}", path.display()))
                }
                Err(e) => {
                    log::error!(target: "dispatch", "export to {} failed: {}", path.display(), e);
                    let msg = format!("Export failed: {}", e);
                    state.io.last_io_error = Some(e);
                    DispatchResult::with_status(StatusLevel::Error, msg)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::mpsc::channel;
    use std::time::Duration;

    use crate::action::{CrewAction, ScheduleAction};
    use crate::state::{fresh_sheet, PendingSave, ProjectMeta, SaveDebounce};
    use callsheet_types::{ScheduleKind, SheetDefaults};

    fn state() -> AppState {
        let defaults = SheetDefaults::default();
        let project = ProjectMeta::new(PathBuf::from("unused.sqlite"), PathBuf::from("."), defaults.clone());
        AppState::new(fresh_sheet(&defaults), project, SaveDebounce::new(Duration::from_millis(100), true))
    }

    #[test]
    fn quit_sets_flag() {
        let (tx, _rx) = channel();
        let mut s = state();
        assert!(dispatch_action(&Action::Quit, &mut s, &tx).quit);
    }

    #[test]
    fn edit_marks_dirty() {
        let (tx, _rx) = channel();
        let mut s = state();
        dispatch_action(&Action::Schedule(ScheduleAction::Add(ScheduleKind::Banner)), &mut s, &tx);
        assert!(s.project.dirty);
        assert_eq!(s.project.revision, 1);
        assert!(s.autosave.is_pending());
    }

    #[test]
    fn noop_edit_stays_clean() {
        let (tx, _rx) = channel();
        let mut s = state();
        let missing = callsheet_types::ItemId::new(9999);
        dispatch_action(&Action::Crew(CrewAction::Remove(missing)), &mut s, &tx);
        assert!(!s.project.dirty);
    }

    #[test]
    fn title_change_is_reported() {
        let (tx, _rx) = channel();
        let mut s = state();
        let r = dispatch_action(&Action::Header(HeaderAction::Set(HeaderField::Title, "Night".into())), &mut s, &tx);
        assert_eq!(r.sheet_title.as_deref(), Some("Night"));
        let r = dispatch_action(&Action::Header(HeaderAction::Set(HeaderField::ShootDay, "2".into())), &mut s, &tx);
        assert!(r.sheet_title.is_none());
    }

    #[test]
    fn flush_waits_for_debounce() {
        let (tx, _rx) = channel();
        let mut s = state();
        let t0 = Instant::now();
        s.mark_dirty(t0);
        assert!(!flush_due_save(&mut s, &tx, t0));
        assert!(s.io.pending_save.is_none());
    }

    #[test]
    fn flush_holds_while_save_in_flight() {
        let (tx, _rx) = channel();
        let mut s = state();
        let t0 = Instant::now();
        s.mark_dirty(t0);
        s.io.pending_save = Some(PendingSave { id: 7, revision: 0, manual: false });
        assert!(!flush_due_save(&mut s, &tx, t0 + Duration::from_secs(5)));
        assert!(s.autosave.is_pending());
    }

    #[test]
    fn stale_save_completion_is_ignored() {
        let (tx, _rx) = channel();
        let mut s = state();
        s.project.dirty = true;
        s.io.pending_save = Some(PendingSave { id: 2, revision: 0, manual: true });
        let r = apply_io_feedback(IoFeedback::SaveComplete { id: 1, result: Ok(()) }, &mut s, &tx);
        assert_eq!(r, DispatchResult::none());
        assert!(s.project.dirty);
        assert!(s.io.pending_save.is_some());
    }

    #[test]
    fn manual_save_toasts() {
        let (tx, _rx) = channel();
        let mut s = state();
        s.project.dirty = true;
        s.io.pending_save = Some(PendingSave { id: 3, revision: 0, manual: true });
        let r = apply_io_feedback(IoFeedback::SaveComplete { id: 3, result: Ok(()) }, &mut s, &tx);
        assert_eq!(r.status[0].message, SAVED_MESSAGE);
        assert!(!s.project.dirty);
    }

    #[test]
    fn edits_during_save_keep_dirty() {
        let (tx, _rx) = channel();
        let mut s = state();
        s.project.dirty = true;
        s.project.revision = 5;
        s.io.pending_save = Some(PendingSave { id: 1, revision: 4, manual: false });
        let r = apply_io_feedback(IoFeedback::SaveComplete { id: 1, result: Ok(()) }, &mut s, &tx);
        assert!(r.status.is_empty());
        assert!(s.project.dirty);
    }

    #[test]
    fn failed_save_reports_error() {
        let (tx, _rx) = channel();
        let mut s = state();
        s.project.dirty = true;
        s.io.pending_save = Some(PendingSave { id: 1, revision: 0, manual: false });
        let r = apply_io_feedback(IoFeedback::SaveComplete { id: 1, result: Err("disk full".into()) }, &mut s, &tx);
        assert_eq!(r.status[0].level, StatusLevel::Error);
        assert_eq!(s.io.last_io_error.as_deref(), Some("disk full"));
        assert!(s.project.dirty);
    }

    #[test]
    fn save_during_save_is_queued() {
        let (tx, rx) = channel();
        let mut s = state();
        s.mark_dirty(Instant::now());
        s.io.pending_save = Some(PendingSave { id: 4, revision: 1, manual: false });
        let r = dispatch_action(&Action::Session(crate::action::SessionAction::Save), &mut s, &tx);
        assert_eq!(r, DispatchResult::none());
        assert!(s.io.manual_save_queued);
        assert_eq!(s.io.pending_save.map(|p| p.id), Some(4));
        assert!(rx.try_recv().is_err());
    }
}
