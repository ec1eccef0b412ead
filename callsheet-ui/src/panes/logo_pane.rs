use std::any::Any;
use std::path::PathBuf;

use callsheet_core::logo::mime_for;

use crate::state::AppState;
use crate::ui::action_id::ActionId;
use crate::ui::layout_helpers::render_dialog_frame;
use crate::ui::theme::SheetTheme;
use crate::ui::widgets::TextInput;
use crate::ui::{Action, InputEvent, KeyCode, Keymap, NavAction, Pane, Rect, RenderBuf, SessionAction};

/// Expand a leading `~/` to the home directory.
fn expand_path(input: &str) -> PathBuf {
    match (input.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(input),
    }
}

/// Prompt for the path of an image to embed as the production logo.
pub struct LogoPane {
    keymap: Keymap,
    text_input: TextInput,
    error: Option<String>,
}

impl LogoPane {
    pub fn new(keymap: Keymap) -> Self {
        let mut text_input = TextInput::new("");
        text_input.set_focused(true);
        Self { keymap, text_input, error: None }
    }

    fn submit(&mut self) -> Action {
        let input = self.text_input.value().trim();
        if input.is_empty() {
            self.error = Some("Enter the path of an image file".to_string());
            return Action::None;
        }
        let path = expand_path(input);
        if !path.is_file() {
            self.error = Some(format!("No such file: {}", path.display()));
            return Action::None;
        }
        Action::Session(SessionAction::LoadLogo(path))
    }
}

impl Pane for LogoPane {
    fn id(&self) -> &'static str {
        "logo"
    }

    fn title(&self) -> &'static str {
        "Production Logo"
    }

    fn handle_action(&mut self, _action: ActionId, _event: &InputEvent, _state: &AppState) -> Action {
        Action::None
    }

    fn handle_raw_input(&mut self, event: &InputEvent, _state: &AppState) -> Action {
        match event.key {
            KeyCode::Enter => self.submit(),
            KeyCode::Escape => Action::Nav(NavAction::PopPane),
            _ => {
                self.text_input.handle_input(event);
                self.error = None;
                Action::None
            }
        }
    }

    fn render(&mut self, area: Rect, buf: &mut RenderBuf, _state: &AppState) {
        let width = 60_u16.min(area.width.saturating_sub(4));
        let inner = render_dialog_frame(area, buf, " Production Logo ", width, 8, SheetTheme::dialog_border());

        let label_area = Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 1);
        buf.draw_line(label_area, &[("Image file:", SheetTheme::muted_text())]);

        let field_width = inner.width.saturating_sub(2);
        self.text_input.render_buf(buf.raw_buf(), inner.x + 1, inner.y + 2, field_width);

        let info_y = inner.y + 3;
        match &self.error {
            Some(error) => buf.draw_str_max(inner.x + 1, info_y, error, field_width, SheetTheme::error_text()),
            None => {
                let value = self.text_input.value().trim();
                if !value.is_empty() {
                    let kind = format!("Type: {}", mime_for(&expand_path(value)));
                    buf.draw_str_max(inner.x + 1, info_y, &kind, field_width, SheetTheme::muted_text());
                }
            }
        }

        let footer_y = inner.y + inner.height.saturating_sub(1);
        buf.draw_str(inner.x + 1, footer_y, "[Enter] Load  [Esc] Cancel", SheetTheme::help_text());
    }

    fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    fn on_enter(&mut self, _state: &AppState) {
        self.text_input.set_value("");
        self.text_input.set_focused(true);
        self.error = None;
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

    fn type_str(pane: &mut LogoPane, text: &str, state: &AppState) {
        for ch in text.chars() {
            pane.handle_raw_input(&InputEvent::new(KeyCode::Char(ch), Modifiers::none()), state);
        }
    }

    #[test]
    fn empty_path_is_rejected() {
        let state = test_state();
        let mut pane = LogoPane::new(Keymap::new());
        assert_eq!(pane.handle_raw_input(&InputEvent::key(KeyCode::Enter), &state), Action::None);
        assert!(pane.error.is_some());
    }

    #[test]
    fn missing_file_is_rejected() {
        let state = test_state();
        let mut pane = LogoPane::new(Keymap::new());
        type_str(&mut pane, "/no/such/logo.png", &state);
        assert_eq!(pane.handle_raw_input(&InputEvent::key(KeyCode::Enter), &state), Action::None);
        assert!(pane.error.as_deref().unwrap_or_default().contains("No such file"));
    }

    #[test]
    fn existing_file_loads() {
        let state = test_state();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let mut pane = LogoPane::new(Keymap::new());
        type_str(&mut pane, path.to_str().unwrap(), &state);
        assert_eq!(
            pane.handle_raw_input(&InputEvent::key(KeyCode::Enter), &state),
            Action::Session(SessionAction::LoadLogo(path))
        );
    }

    #[test]
    fn escape_cancels() {
        let state = test_state();
        let mut pane = LogoPane::new(Keymap::new());
        assert_eq!(pane.handle_raw_input(&InputEvent::key(KeyCode::Escape), &state), Action::Nav(NavAction::PopPane));
    }

    #[test]
    fn tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_path("~/logo.png"), home.join("logo.png"));
        }
        assert_eq!(expand_path("logo.png"), PathBuf::from("logo.png"));
    }
}
