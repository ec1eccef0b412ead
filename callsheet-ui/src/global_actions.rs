use crate::action::{Action, DispatchResult, SessionAction, StatusEvent};
use crate::dispatch::LocalDispatcher;
use crate::panes::{ConfirmPane, HelpPane, PendingAction};
use crate::ui::action_id::{ActionId, GlobalActionId, PaneId};
use crate::ui::{Frame, LayerStack, PaneManager};
use callsheet_types::Dispatcher;

pub(crate) enum GlobalResult {
    Quit,
    RefreshScreen,
    Handled,
    NotHandled,
}

/// Put the active pane's layer in slot 1 and remember the section under any
/// modal so the tabs stay highlighted.
pub(crate) fn sync_pane_layer(panes: &PaneManager, layer_stack: &mut LayerStack, app_frame: &mut Frame) {
    layer_stack.set_pane_layer(panes.active().layer());
    if let Some(section) = PaneId::from_pane_id(panes.active().id()) {
        app_frame.section = section;
    }
}

/// Step through the section panes in tab order.
fn cycle_section(current: PaneId, forward: bool) -> PaneId {
    let len = PaneId::ALL.len();
    let index = PaneId::ALL.iter().position(|p| *p == current).unwrap_or(0);
    let next = if forward { (index + 1) % len } else { (index + len - 1) % len };
    PaneId::ALL[next]
}

fn open_confirm(
    message: &str,
    pending: PendingAction,
    dispatcher: &LocalDispatcher,
    panes: &mut PaneManager,
    layer_stack: &mut LayerStack,
    app_frame: &mut Frame,
) {
    if let Some(confirm) = panes.get_pane_mut::<ConfirmPane>("confirm") {
        confirm.set_confirm(message, pending);
    }
    panes.push_to("confirm", dispatcher.state());
    sync_pane_layer(panes, layer_stack, app_frame);
}

fn dispatch_session(
    action: SessionAction,
    dispatcher: &mut LocalDispatcher,
    panes: &mut PaneManager,
    layer_stack: &mut LayerStack,
    app_frame: &mut Frame,
) {
    let r = dispatcher.dispatch(&Action::Session(action));
    apply_dispatch_result(r, dispatcher, panes, layer_stack, app_frame);
}

pub(crate) fn handle_global_action(
    action: ActionId,
    dispatcher: &mut LocalDispatcher,
    panes: &mut PaneManager,
    app_frame: &mut Frame,
    layer_stack: &mut LayerStack,
) -> GlobalResult {
    let ActionId::Global(g) = action else {
        return GlobalResult::NotHandled;
    };
    match g {
        GlobalActionId::Quit => {
            if dispatcher.state().project.dirty {
                open_confirm(
                    "Save changes and quit?",
                    PendingAction::Quit,
                    dispatcher,
                    panes,
                    layer_stack,
                    app_frame,
                );
                return GlobalResult::Handled;
            }
            return GlobalResult::Quit;
        }
        GlobalActionId::Save => dispatch_session(SessionAction::Save, dispatcher, panes, layer_stack, app_frame),
        GlobalActionId::Export => dispatch_session(SessionAction::Export, dispatcher, panes, layer_stack, app_frame),
        GlobalActionId::Email => dispatch_session(SessionAction::Email, dispatcher, panes, layer_stack, app_frame),
        GlobalActionId::ShareLink => {
            dispatch_session(SessionAction::ShareLink, dispatcher, panes, layer_stack, app_frame)
        }
        GlobalActionId::NewSheet => {
            open_confirm(
                "Discard this call sheet and start a new one?",
                PendingAction::NewSheet,
                dispatcher,
                panes,
                layer_stack,
                app_frame,
            );
        }
        GlobalActionId::Help => {
            if panes.active().id() != "help" {
                let title = panes.active().title();
                let commands = layer_stack.collect_commands();
                if let Some(help) = panes.get_pane_mut::<HelpPane>("help") {
                    help.set_context(title, &commands);
                }
                panes.push_to("help", dispatcher.state());
                sync_pane_layer(panes, layer_stack, app_frame);
            }
        }
        GlobalActionId::NextPane | GlobalActionId::PrevPane => {
            let target = cycle_section(app_frame.section, g == GlobalActionId::NextPane);
            panes.switch_to(target.pane_id(), dispatcher.state());
            sync_pane_layer(panes, layer_stack, app_frame);
        }
        GlobalActionId::SwitchPane(pane) => {
            panes.switch_to(pane.pane_id(), dispatcher.state());
            sync_pane_layer(panes, layer_stack, app_frame);
        }
        GlobalActionId::RefreshScreen => return GlobalResult::RefreshScreen,
    }
    GlobalResult::Handled
}

pub(crate) fn apply_status_events(events: &[StatusEvent], app_frame: &mut Frame) {
    for event in events {
        app_frame.status_bar.push(event.message.clone(), event.level);
    }
}

/// Apply a DispatchResult to the UI layer: nav intents, status toasts and
/// the sheet title.
pub(crate) fn apply_dispatch_result(
    result: DispatchResult,
    dispatcher: &mut LocalDispatcher,
    panes: &mut PaneManager,
    layer_stack: &mut LayerStack,
    app_frame: &mut Frame,
) {
    if !result.nav.is_empty() {
        panes.process_nav_intents(&result.nav, dispatcher.state());
        sync_pane_layer(panes, layer_stack, app_frame);
    }

    apply_status_events(&result.status, app_frame);

    if let Some(title) = result.sheet_title {
        app_frame.set_sheet_title(title);
    }
}
