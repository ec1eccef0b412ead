use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;

use rat_event::{HandleEvent, Regular};
use rat_widget::focus::HasFocus;
use rat_widget::text_input::{TextInput as RatTextInput, TextInputState};

use crate::ui::input::InputEvent;
use crate::ui::rat_compat::{outcome_consumed, to_crossterm_key_event};
use crate::ui::theme::SheetTheme;

/// Single-line text field. Editing, cursor movement and rendering are
/// delegated to `rat_widget::text_input`; an optional label is drawn in
/// front of the field.
pub struct TextInput {
    label: String,
    state: TextInputState,
}

impl TextInput {
    pub fn new(label: &str) -> Self {
        Self { label: label.to_string(), state: TextInputState::new() }
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.state.set_value(value);
        self
    }

    pub fn value(&self) -> &str {
        self.state.text()
    }

    pub fn set_value(&mut self, value: &str) {
        self.state.set_value(value);
    }

    /// Select everything so the next typed character replaces the value.
    pub fn select_all(&mut self) {
        self.state.select_all();
    }

    /// Load `value`, focus the field and select it for overtyping.
    pub fn open(&mut self, value: &str) {
        self.set_value(value);
        self.select_all();
        self.set_focused(true);
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.state.focus.set(focused);
    }

    pub fn is_focused(&self) -> bool {
        self.state.is_focused()
    }

    /// Returns true when the field used the event.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !self.state.is_focused() {
            return false;
        }
        let ct_event = to_crossterm_key_event(event);
        let outcome: rat_event::Outcome = self.state.handle(&ct_event, Regular).into();
        outcome_consumed(outcome)
    }

    /// Draw the label and field on row `y`. Returns the rows used.
    pub fn render_buf(&mut self, buf: &mut Buffer, x: u16, y: u16, width: u16) -> u16 {
        let label_style = ratatui::style::Style::from(SheetTheme::label());
        for (j, ch) in self.label.chars().take(width as usize).enumerate() {
            if let Some(cell) = buf.cell_mut((x + j as u16, y)) {
                cell.set_char(ch).set_style(label_style);
            }
        }

        let label_offset = if self.label.is_empty() { 0 } else { self.label.chars().count() as u16 + 1 };
        let input_width = width.saturating_sub(label_offset);
        if input_width == 0 {
            return 1;
        }

        let widget = RatTextInput::new()
            .style(SheetTheme::text_input_style())
            .focus_style(SheetTheme::text_input_focus_style())
            .select_style(SheetTheme::text_input_select_style())
            .cursor_style(SheetTheme::text_input_cursor_style());
        widget.render(Rect::new(x + label_offset, y, input_width, 1), buf, &mut self.state);
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::input::{KeyCode, Modifiers};

    fn char_event(ch: char) -> InputEvent {
        InputEvent::new(KeyCode::Char(ch), Modifiers::none())
    }

    fn type_str(input: &mut TextInput, text: &str) {
        for ch in text.chars() {
            input.handle_input(&char_event(ch));
        }
    }

    #[test]
    fn typing_inserts() {
        let mut input = TextInput::new("");
        input.set_focused(true);
        type_str(&mut input, "Ada");
        assert_eq!(input.value(), "Ada");
    }

    #[test]
    fn open_selects_for_overtype() {
        let mut input = TextInput::new("Name:");
        input.open("John Smith");
        assert!(input.is_focused());
        type_str(&mut input, "Jo");
        assert_eq!(input.value(), "Jo");
    }

    #[test]
    fn backspace_at_end() {
        let mut input = TextInput::new("").with_value("12A");
        input.set_focused(true);
        input.handle_input(&InputEvent::key(KeyCode::End));
        input.handle_input(&InputEvent::key(KeyCode::Backspace));
        assert_eq!(input.value(), "12");
    }

    #[test]
    fn unfocused_input_ignores_keys() {
        let mut input = TextInput::new("");
        assert!(!input.handle_input(&char_event('a')));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn renders_label_and_value() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        let mut input = TextInput::new("Path:").with_value("logo.png");
        input.render_buf(&mut buf, 0, 0, 20);
        let row: String = (0..20).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(row.starts_with("Path: logo.png"));
    }
}
