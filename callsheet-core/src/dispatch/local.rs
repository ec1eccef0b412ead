//! LocalDispatcher: Dispatcher implementation for local execution.

use std::sync::mpsc::Sender;
use std::time::Instant;

use callsheet_types::{Action, DispatchResult, Dispatcher};

use crate::action::IoFeedback;
use crate::state::AppState;

use super::{apply_io_feedback, dispatch_action, flush_due_save, flush_pending_save};

/// Owns the application state and the I/O feedback sender; the runtime
/// reads state through it and routes every mutation through `dispatch`.
pub struct LocalDispatcher {
    state: AppState,
    io_tx: Sender<IoFeedback>,
}

impl LocalDispatcher {
    pub fn new(state: AppState, io_tx: Sender<IoFeedback>) -> Self {
        Self { state, io_tx }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn io_tx(&self) -> &Sender<IoFeedback> {
        &self.io_tx
    }

    pub fn flush_due_save(&mut self, now: Instant) -> bool {
        flush_due_save(&mut self.state, &self.io_tx, now)
    }

    pub fn flush_pending_save(&mut self) -> bool {
        flush_pending_save(&mut self.state, &self.io_tx)
    }

    pub fn apply_io_feedback(&mut self, feedback: IoFeedback) -> DispatchResult {
        apply_io_feedback(feedback, &mut self.state, &self.io_tx)
    }
}

impl Dispatcher for LocalDispatcher {
    fn dispatch(&mut self, action: &Action) -> DispatchResult {
        dispatch_action(action, &mut self.state, &self.io_tx)
    }
}
