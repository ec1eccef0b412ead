//! App runtime coordinator.
//!
//! The event loop is split into focused subsystems:
//! - `input`: event polling, layer resolution, global handler, pane dispatch
//! - `feedback`: save debounce flush and background I/O completions
//! - `render`: frame throttle and drawing

mod feedback;
mod input;
mod render;

use std::sync::mpsc::{self, Receiver};
use std::time::Instant;

use crate::action::IoFeedback;
use crate::dispatch::LocalDispatcher;
use crate::global_actions::sync_pane_layer;
use crate::state::AppState;
use crate::ui::{keybindings, Frame, LayerStack, PaneManager, RatatuiBackend, Rect};

/// Owns the dispatcher, panes and layer stack, and drives the event loop.
pub struct AppRuntime {
    pub(crate) dispatcher: LocalDispatcher,
    pub(crate) panes: PaneManager,
    pub(crate) layer_stack: LayerStack,
    pub(crate) app_frame: Frame,
    pub(crate) io_rx: Receiver<IoFeedback>,

    // Per-frame state
    pub(crate) quit_after_save: bool,
    pub(crate) render_needed: bool,
    /// A toast was on screen at the last render
    pub(crate) status_visible: bool,
    pub(crate) last_render_time: Instant,
    pub(crate) last_area: Rect,
}

impl AppRuntime {
    pub fn new(state: AppState) -> Self {
        let (io_tx, io_rx) = mpsc::channel::<IoFeedback>();

        let (layers, keymaps) = keybindings::load_keybindings();
        let panes = crate::register_all_panes(&keymaps);

        let mut layer_stack = LayerStack::new(layers);
        layer_stack.push("global");

        let mut app_frame = Frame::new();
        app_frame.set_sheet_title(state.sheet.title.clone());
        sync_pane_layer(&panes, &mut layer_stack, &mut app_frame);

        Self {
            dispatcher: LocalDispatcher::new(state, io_tx),
            panes,
            layer_stack,
            app_frame,
            io_rx,
            quit_after_save: false,
            render_needed: true,
            status_visible: false,
            last_render_time: Instant::now(),
            last_area: Rect::new(0, 0, Frame::MIN_WIDTH, Frame::MIN_HEIGHT),
        }
    }

    /// Main event loop.
    pub fn run(&mut self, backend: &mut RatatuiBackend) -> std::io::Result<()> {
        loop {
            sync_pane_layer(&self.panes, &mut self.layer_stack, &mut self.app_frame);

            if self.process_events(backend)? {
                break;
            }

            self.process_tick();
            self.flush_due_save();
            self.drain_io_feedback();

            if self.quit_ready() {
                break;
            }

            self.maybe_render(backend)?;
        }
        log::info!(target: "runtime", "event loop finished");
        Ok(())
    }
}

/// Run the editor on `state` until the user quits.
pub fn run(backend: &mut RatatuiBackend, state: AppState) -> std::io::Result<()> {
    AppRuntime::new(state).run(backend)
}

#[cfg(test)]
mod tests;
