use std::sync::mpsc::Sender;
use std::time::Instant;

use crate::action::{DispatchResult, IoFeedback, NavIntent, SessionAction, StatusLevel};
use crate::logo;
use crate::print;
use crate::state::persistence::{self, SqliteStore};
use crate::state::{AppState, PendingSave};

pub const SAVED_MESSAGE: &str = "Call sheet saved successfully!";
pub const EMAIL_PLACEHOLDER: &str = "Email feature will be available soon!";
pub const SHARE_LINK_PLACEHOLDER: &str = "Shareable link feature will be available soon!";

/// Snapshot the sheet and write it on a background thread. Only one save
/// runs at a time; callers check `pending_save` first.
pub(super) fn start_save(state: &mut AppState, io_tx: &Sender<IoFeedback>, manual: bool) {
    debug_assert!(state.io.pending_save.is_none());
    let id = state.io.generation.next_save();
    state.io.pending_save = Some(PendingSave { id, revision: state.project.revision, manual });
    if manual {
        state.io.manual_save_queued = false;
    }
    state.io.last_io_error = None;
    state.autosave.clear();

    let sheet = state.sheet.clone();
    let path = state.project.store_path.clone();
    let tx = io_tx.clone();

    std::thread::spawn(move || {
        let result = SqliteStore::open(&path)
            .and_then(|mut store| persistence::save_sheet(&mut store, &sheet))
            .map_err(|e| e.to_string());
        let _ = tx.send(IoFeedback::SaveComplete { id, result });
    });
    log::debug!(target: "dispatch", "save {} started (manual: {})", id, manual);
}

fn start_export(state: &mut AppState, io_tx: &Sender<IoFeedback>) -> DispatchResult {
    let id = state.io.generation.next_export();
    state.io.export_in_progress = true;

    let sheet = state.sheet.clone();
    let path = print::export_path(&state.project.export_dir, &sheet);
    let tx = io_tx.clone();

    std::thread::spawn(move || {
        let result = print::write_html(&path, &sheet).map_err(|e| e.to_string());
        let _ = tx.send(IoFeedback::ExportComplete { id, path, result });
    });

    DispatchResult::with_status(StatusLevel::Info, "Exporting...")
}

pub(super) fn dispatch_session(
    action: &SessionAction,
    state: &mut AppState,
    io_tx: &Sender<IoFeedback>,
) -> DispatchResult {
    match action {
        SessionAction::Save => {
            if state.io.pending_save.is_some() {
                // Started from apply_io_feedback once the running write lands
                state.io.manual_save_queued = true;
            } else {
                start_save(state, io_tx, true);
            }
            DispatchResult::none()
        }
        SessionAction::Export => start_export(state, io_tx),
        SessionAction::Email => DispatchResult::with_status(StatusLevel::Info, EMAIL_PLACEHOLDER),
        SessionAction::ShareLink => DispatchResult::with_status(StatusLevel::Info, SHARE_LINK_PLACEHOLDER),
        SessionAction::NewSheet => {
            state.reset_sheet();
            state.mark_dirty(Instant::now());
            let mut result = DispatchResult::with_nav(NavIntent::ConditionalPop("confirm"));
            result.sheet_title = Some(state.sheet.title.clone());
            result.push_status(StatusLevel::Info, "Started a new call sheet");
            result
        }
        SessionAction::LoadLogo(path) => match logo::load_logo(path) {
            Ok(data_uri) => {
                state.sheet.production_logo = data_uri;
                state.mark_dirty(Instant::now());
                let mut result = DispatchResult::with_nav(NavIntent::ConditionalPop("logo"));
                result.push_status(StatusLevel::Info, "Logo loaded");
                result
            }
            Err(e) => {
                log::warn!(target: "dispatch", "logo {}: {}", path.display(), e);
                DispatchResult::with_status(StatusLevel::Error, e.to_string())
            }
        },
    }
}
