use std::any::Any;

use crate::state::AppState;
use crate::ui::action_id::{ActionId, ConfirmActionId};
use crate::ui::layout_helpers::render_dialog_frame;
use crate::ui::theme::SheetTheme;
use crate::ui::{Action, Color, InputEvent, KeyCode, Keymap, NavAction, Pane, Rect, RenderBuf, SessionAction, Style};

/// What to do when the user confirms the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// Discard the sheet and start from defaults
    NewSheet,
    /// Save unsaved edits, then quit
    Quit,
}

pub struct ConfirmPane {
    keymap: Keymap,
    message: String,
    pending: Option<PendingAction>,
    selected: bool, // false = No (cancel), true = Yes (confirm)
}

impl ConfirmPane {
    pub fn new(keymap: Keymap) -> Self {
        Self { keymap, message: String::new(), pending: None, selected: false }
    }

    /// Configure the dialog before showing it
    pub fn set_confirm(&mut self, message: &str, pending: PendingAction) {
        self.message = message.to_string();
        self.pending = Some(pending);
        self.selected = false;
    }

    fn confirm_action(&self) -> Action {
        match self.pending {
            Some(PendingAction::NewSheet) => Action::Session(SessionAction::NewSheet),
            Some(PendingAction::Quit) => Action::SaveAndQuit,
            None => Action::Nav(NavAction::PopPane),
        }
    }
}

impl Pane for ConfirmPane {
    fn id(&self) -> &'static str {
        "confirm"
    }

    fn title(&self) -> &'static str {
        "Confirm"
    }

    fn handle_action(&mut self, action: ActionId, _event: &InputEvent, _state: &AppState) -> Action {
        match action {
            ActionId::Confirm(ConfirmActionId::Cancel) => Action::Nav(NavAction::PopPane),
            ActionId::Confirm(ConfirmActionId::Confirm) => {
                if self.selected {
                    self.confirm_action()
                } else {
                    Action::Nav(NavAction::PopPane)
                }
            }
            ActionId::Confirm(ConfirmActionId::Left)
            | ActionId::Confirm(ConfirmActionId::Right)
            | ActionId::Confirm(ConfirmActionId::Toggle) => {
                self.selected = !self.selected;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_raw_input(&mut self, event: &InputEvent, _state: &AppState) -> Action {
        match event.key {
            KeyCode::Char('y') | KeyCode::Char('Y') => self.confirm_action(),
            KeyCode::Char('n') | KeyCode::Char('N') => Action::Nav(NavAction::PopPane),
            KeyCode::Tab => {
                self.selected = !self.selected;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, area: Rect, buf: &mut RenderBuf, _state: &AppState) {
        let width = (self.message.chars().count() as u16 + 6).max(34);
        let inner = render_dialog_frame(area, buf, " Confirm ", width, 7, SheetTheme::warning_border());

        let msg_area = Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 1);
        buf.draw_line(msg_area, &[(&self.message, Style::new().fg(Color::WHITE))]);

        let no_style = if !self.selected {
            Style::new().fg(Color::BLACK).bg(Color::WHITE).bold()
        } else {
            Style::new().fg(Color::DARK_GRAY)
        };
        let yes_style = if self.selected {
            Style::new().fg(Color::BLACK).bg(Color::WARN_COLOR).bold()
        } else {
            Style::new().fg(Color::DARK_GRAY)
        };

        let btn_y = inner.y + 3;
        if btn_y < inner.y + inner.height {
            let btn_area = Rect::new(inner.x + 1, btn_y, inner.width.saturating_sub(2), 1);
            buf.draw_line(btn_area, &[("  [N]o  ", no_style), ("    ", Style::new()), ("  [Y]es  ", yes_style)]);
        }
    }

    fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::test_state;
    use crate::ui::Modifiers;

    fn act(pane: &mut ConfirmPane, action: ConfirmActionId, state: &AppState) -> Action {
        pane.handle_action(ActionId::Confirm(action), &InputEvent::key(KeyCode::Enter), state)
    }

    #[test]
    fn defaults_to_no() {
        let state = test_state();
        let mut pane = ConfirmPane::new(Keymap::new());
        pane.set_confirm("Discard this call sheet?", PendingAction::NewSheet);
        assert_eq!(act(&mut pane, ConfirmActionId::Confirm, &state), Action::Nav(NavAction::PopPane));
    }

    #[test]
    fn toggle_then_confirm_runs_pending() {
        let state = test_state();
        let mut pane = ConfirmPane::new(Keymap::new());
        pane.set_confirm("Discard this call sheet?", PendingAction::NewSheet);
        act(&mut pane, ConfirmActionId::Toggle, &state);
        assert_eq!(act(&mut pane, ConfirmActionId::Confirm, &state), Action::Session(SessionAction::NewSheet));
    }

    #[test]
    fn y_key_confirms_quit() {
        let state = test_state();
        let mut pane = ConfirmPane::new(Keymap::new());
        pane.set_confirm("Save changes and quit?", PendingAction::Quit);
        let action = pane.handle_raw_input(&InputEvent::new(KeyCode::Char('y'), Modifiers::none()), &state);
        assert_eq!(action, Action::SaveAndQuit);
    }
}
