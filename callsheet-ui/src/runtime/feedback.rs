//! Save debounce flushing and background I/O completions.

use std::time::Instant;

use super::AppRuntime;
use crate::action::{IoFeedback, StatusLevel};
use crate::global_actions::apply_dispatch_result;

impl AppRuntime {
    /// Start the debounced autosave once the sheet has been quiet long enough.
    pub(crate) fn flush_due_save(&mut self) {
        if self.dispatcher.flush_due_save(Instant::now()) {
            self.render_needed = true;
        }
    }

    /// Drain save and export completions.
    pub(crate) fn drain_io_feedback(&mut self) {
        while let Ok(feedback) = self.io_rx.try_recv() {
            self.apply_io_feedback(feedback);
        }
    }

    pub(crate) fn apply_io_feedback(&mut self, feedback: IoFeedback) {
        let result = self.dispatcher.apply_io_feedback(feedback);
        apply_dispatch_result(result, &mut self.dispatcher, &mut self.panes, &mut self.layer_stack, &mut self.app_frame);
        // Dirty marker and toasts change with every completion
        self.render_needed = true;
    }

    /// True once a save-and-quit has nothing left to write. A failed save
    /// cancels the quit so the edits are not lost.
    pub(crate) fn quit_ready(&mut self) -> bool {
        if !self.quit_after_save || self.dispatcher.state().io.pending_save.is_some() {
            return false;
        }
        let state = self.dispatcher.state();
        if !state.project.dirty {
            return true;
        }
        if state.io.last_io_error.is_some() {
            self.quit_after_save = false;
            self.app_frame.status_bar.push("Quit cancelled: the sheet could not be saved", StatusLevel::Error);
            return false;
        }
        // Edits landed while the last save was in flight
        !self.dispatcher.flush_pending_save()
    }
}
