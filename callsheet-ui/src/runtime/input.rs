//! Input processing: event polling, layer resolution, global handler, pane dispatch.

use std::time::Duration;

use super::AppRuntime;
use crate::action::{Action, StatusLevel};
use crate::global_actions::{apply_dispatch_result, handle_global_action, sync_pane_layer, GlobalResult};
use crate::ui::{AppEvent, InputSource, LayerResult, RatatuiBackend};
use callsheet_types::Dispatcher;

/// Events handled per loop turn before ticking and rendering
const MAX_EVENTS_PER_TURN: u8 = 16;

/// What the loop should do after one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EventOutcome {
    Continue,
    Quit,
    RefreshScreen,
}

impl AppRuntime {
    /// Process input events. Returns true if the app should quit.
    pub(crate) fn process_events(&mut self, backend: &mut RatatuiBackend) -> std::io::Result<bool> {
        let mut events_processed = 0u8;

        while events_processed < MAX_EVENTS_PER_TURN {
            let timeout = if events_processed == 0 { Duration::from_millis(2) } else { Duration::ZERO };
            let Some(app_event) = backend.poll_event(timeout) else {
                break;
            };
            events_processed += 1;

            match self.handle_event(app_event) {
                EventOutcome::Quit => return Ok(true),
                EventOutcome::RefreshScreen => backend.clear()?,
                EventOutcome::Continue => {}
            }
        }
        if events_processed > 0 {
            self.render_needed = true;
        }

        Ok(false)
    }

    pub(crate) fn handle_event(&mut self, app_event: AppEvent) -> EventOutcome {
        let pane_action = match app_event {
            AppEvent::Resize(_, _) => {
                self.render_needed = true;
                return EventOutcome::Continue;
            }
            AppEvent::Mouse(mouse_event) => {
                self.panes.active_mut().handle_mouse(&mouse_event, self.last_area, self.dispatcher.state())
            }
            AppEvent::Key(event) => match self.layer_stack.resolve(&event) {
                LayerResult::Action(action) => {
                    log::trace!(target: "ui::input", "{:?} -> {}", event.key, action.as_str());
                    match handle_global_action(
                        action,
                        &mut self.dispatcher,
                        &mut self.panes,
                        &mut self.app_frame,
                        &mut self.layer_stack,
                    ) {
                        GlobalResult::Quit => return EventOutcome::Quit,
                        GlobalResult::RefreshScreen => return EventOutcome::RefreshScreen,
                        GlobalResult::Handled => return EventOutcome::Continue,
                        GlobalResult::NotHandled => {
                            self.panes.active_mut().handle_action(action, &event, self.dispatcher.state())
                        }
                    }
                }
                LayerResult::Blocked | LayerResult::Unresolved => {
                    self.panes.active_mut().handle_raw_input(&event, self.dispatcher.state())
                }
            },
        };

        self.process_pane_action(pane_action)
    }

    fn process_pane_action(&mut self, pane_action: Action) -> EventOutcome {
        match &pane_action {
            Action::PushLayer(name) => self.layer_stack.push(*name),
            Action::PopLayer(name) => self.layer_stack.pop(*name),
            _ => {}
        }

        self.panes.process_nav(&pane_action, self.dispatcher.state());
        if matches!(&pane_action, Action::Nav(_)) {
            sync_pane_layer(&self.panes, &mut self.layer_stack, &mut self.app_frame);
        }

        // Drop the text_edit layer once the pane's editor has closed
        if self.layer_stack.has_layer("text_edit") && !self.panes.active().is_editing() {
            self.layer_stack.pop("text_edit");
        }

        // SaveAndQuit is handled here: quitting waits for the save to land
        if matches!(&pane_action, Action::SaveAndQuit) {
            self.panes.pop(self.dispatcher.state());
            sync_pane_layer(&self.panes, &mut self.layer_stack, &mut self.app_frame);
            if !self.dispatcher.flush_pending_save() {
                return EventOutcome::Quit;
            }
            self.quit_after_save = true;
            self.app_frame.status_bar.push("Saving before quit...", StatusLevel::Info);
            return EventOutcome::Continue;
        }

        let result = self.dispatcher.dispatch(&pane_action);
        if result.quit {
            return EventOutcome::Quit;
        }
        apply_dispatch_result(
            result,
            &mut self.dispatcher,
            &mut self.panes,
            &mut self.layer_stack,
            &mut self.app_frame,
        );
        EventOutcome::Continue
    }

    /// Time-based pane updates.
    pub(crate) fn process_tick(&mut self) {
        let tick_actions = self.panes.active_mut().tick(self.dispatcher.state());
        if !tick_actions.is_empty() {
            self.render_needed = true;
        }
        for action in &tick_actions {
            let r = self.dispatcher.dispatch(action);
            apply_dispatch_result(r, &mut self.dispatcher, &mut self.panes, &mut self.layer_stack, &mut self.app_frame);
        }
    }
}
