use std::any::Any;

use crate::state::AppState;
use crate::ui::action_id::{ActionId, HelpActionId};
use crate::ui::layout_helpers::render_dialog_frame;
use crate::ui::{
    Action, Color, InputEvent, Keymap, MouseButton, MouseEvent, MouseEventKind, NavAction, Pane, Rect, RenderBuf,
    Style,
};

pub struct HelpPane {
    keymap: Keymap,
    /// (key, description) rows
    entries: Vec<(String, String)>,
    /// Title of the pane help was opened from
    title: String,
    scroll: usize,
}

impl HelpPane {
    pub fn new(keymap: Keymap) -> Self {
        Self { keymap, entries: Vec::new(), title: String::new(), scroll: 0 }
    }

    /// Commands reachable from the pane help was opened over, as
    /// `(action, description, key)` rows from the layer stack.
    pub fn set_context(&mut self, pane_title: &str, commands: &[(ActionId, &'static str, String)]) {
        self.title = pane_title.to_string();
        self.scroll = 0;
        self.entries = commands
            .iter()
            .map(|(_, description, key)| (key.clone(), description.to_string()))
            .collect();
    }
}

impl Pane for HelpPane {
    fn id(&self) -> &'static str {
        "help"
    }

    fn title(&self) -> &'static str {
        "Help"
    }

    fn handle_action(&mut self, action: ActionId, _event: &InputEvent, _state: &AppState) -> Action {
        match action {
            ActionId::Help(HelpActionId::Close) => Action::Nav(NavAction::PopPane),
            ActionId::Help(HelpActionId::Up) => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            ActionId::Help(HelpActionId::Down) => {
                self.scroll += 1;
                Action::None
            }
            ActionId::Help(HelpActionId::Top) => {
                self.scroll = 0;
                Action::None
            }
            ActionId::Help(HelpActionId::Bottom) => {
                self.scroll = self.entries.len().saturating_sub(1);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, area: Rect, buf: &mut RenderBuf, _state: &AppState) {
        let title = format!(" Help: {} ", self.title);
        let border_style = Style::new().fg(Color::SKY_BLUE);
        let inner = render_dialog_frame(area, buf, &title, 64, 22, border_style);

        let visible_lines = inner.height.saturating_sub(3) as usize;
        let max_scroll = self.entries.len().saturating_sub(visible_lines);
        self.scroll = self.scroll.min(max_scroll);

        let key_style = Style::new().fg(Color::CYAN).bold();
        let desc_style = Style::new().fg(Color::WHITE);

        for (i, (key, desc)) in self.entries.iter().skip(self.scroll).take(visible_lines).enumerate() {
            let y = inner.y + 1 + i as u16;
            let max_desc_len = inner.width.saturating_sub(16) as usize;
            let desc_truncated: String = desc.chars().take(max_desc_len).collect();
            let key_formatted = format!("{:<14}", key);
            let line_area = Rect::new(inner.x + 1, y, inner.width.saturating_sub(1), 1);
            buf.draw_line(line_area, &[(&key_formatted, key_style), (&desc_truncated, desc_style)]);
        }

        let footer_y = inner.y + inner.height.saturating_sub(1);
        if self.entries.len() > visible_lines {
            let indicator = format!(
                "{}-{}/{}",
                self.scroll + 1,
                (self.scroll + visible_lines).min(self.entries.len()),
                self.entries.len()
            );
            let x = inner.x + inner.width.saturating_sub(indicator.len() as u16 + 1);
            buf.draw_str(x, footer_y, &indicator, Style::new().fg(Color::DARK_GRAY));
        }
        buf.draw_str(inner.x + 1, footer_y, "[Esc/F1] Close  [Up/Down] Scroll", Style::new().fg(Color::DARK_GRAY));
    }

    fn handle_mouse(&mut self, event: &MouseEvent, _area: Rect, _state: &AppState) -> Action {
        match event.kind {
            MouseEventKind::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            MouseEventKind::ScrollDown => {
                self.scroll += 1;
                Action::None
            }
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Down(MouseButton::Right) => {
                Action::Nav(NavAction::PopPane)
            }
            _ => Action::None,
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
    use crate::ui::action_id::{GlobalActionId, TableActionId};
    use crate::ui::testing::{screen_text, test_state};
    use crate::ui::KeyCode;
    use ratatui::buffer::Buffer;

    fn commands() -> Vec<(ActionId, &'static str, String)> {
        vec![
            (ActionId::Table(TableActionId::Add), "Add row", "a".to_string()),
            (ActionId::Global(GlobalActionId::Save), "Save", "Ctrl+s".to_string()),
        ]
    }

    #[test]
    fn lists_commands_for_context() {
        let state = test_state();
        let mut pane = HelpPane::new(Keymap::new());
        pane.set_context("Crew Contacts", &commands());

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        pane.render(area, &mut RenderBuf::new(&mut buf), &state);
        let text = screen_text(&buf);
        assert!(text.contains("Help: Crew Contacts"));
        assert!(text.contains("Add row"));
        assert!(text.contains("Ctrl+s"));
    }

    #[test]
    fn close_pops() {
        let state = test_state();
        let mut pane = HelpPane::new(Keymap::new());
        let action = pane.handle_action(ActionId::Help(HelpActionId::Close), &InputEvent::key(KeyCode::Escape), &state);
        assert_eq!(action, Action::Nav(NavAction::PopPane));
    }
}
