use std::any::Any;

use callsheet_types::{is_valid_date, HeaderAction, HeaderField};

use super::cell_editor::{next_choice, CellEditor, CellKind};
use crate::state::AppState;
use crate::ui::action_id::{ActionId, HeaderActionId, ModeActionId};
use crate::ui::layout_helpers::content_area;
use crate::ui::style::selected_style;
use crate::ui::theme::SheetTheme;
use crate::ui::{Action, Color, InputEvent, Keymap, NavAction, Pane, Rect, RenderBuf, Style};

const TEMP_UNITS: &[&str] = &["F", "C"];

const LABEL_WIDTH: u16 = 20;

fn field_kind(field: HeaderField) -> CellKind {
    match field {
        HeaderField::TempUnit => CellKind::Choice(TEMP_UNITS),
        HeaderField::Sunrise | HeaderField::Sunset => CellKind::Time,
        _ => CellKind::Text,
    }
}

/// Short description of the stored logo: its MIME type and encoded size.
fn logo_summary(data_uri: &str) -> String {
    if data_uri.is_empty() {
        return "(none)".to_string();
    }
    let mime = data_uri
        .strip_prefix("data:")
        .and_then(|rest| rest.split(';').next())
        .unwrap_or("unknown");
    format!("{} ({} KB encoded)", mime, data_uri.len().div_ceil(1024))
}

/// Title, date, weather and the production logo.
pub struct HeaderPane {
    keymap: Keymap,
    selected: usize,
    edit: Option<(HeaderField, CellEditor)>,
    error: Option<&'static str>,
}

impl HeaderPane {
    pub fn new(keymap: Keymap) -> Self {
        Self { keymap, selected: 0, edit: None, error: None }
    }

    fn current_field(&self) -> HeaderField {
        HeaderField::ALL[self.selected.min(HeaderField::ALL.len() - 1)]
    }

    fn start_edit(&mut self, state: &AppState) -> Action {
        let field = self.current_field();
        let value = state.sheet.header_field(field);
        let kind = field_kind(field);

        if let CellKind::Choice(options) = kind {
            return match next_choice(options, value) {
                Some(next) => Action::Header(HeaderAction::Set(field, next.to_string())),
                None => Action::None,
            };
        }
        match CellEditor::open(kind, value, &state.sheet) {
            Some(editor) => {
                self.edit = Some((field, editor));
                self.error = None;
                Action::PushLayer("text_edit")
            }
            None => Action::None,
        }
    }

    fn confirm_edit(&mut self) -> Action {
        let Some((field, editor)) = self.edit.take() else {
            return Action::None;
        };
        let Some(value) = editor.commit() else {
            return Action::None;
        };
        if field == HeaderField::ShootDate && !is_valid_date(&value) {
            // Stay in the editor until the date parses
            self.error = Some("Shoot date must be YYYY-MM-DD");
            self.edit = Some((field, editor));
            return Action::None;
        }
        self.error = None;
        Action::Header(HeaderAction::Set(field, value))
    }
}

impl Pane for HeaderPane {
    fn id(&self) -> &'static str {
        "header"
    }

    fn title(&self) -> &'static str {
        "Header"
    }

    fn handle_action(&mut self, action: ActionId, _event: &InputEvent, state: &AppState) -> Action {
        if let ActionId::Mode(mode) = action {
            return match mode {
                ModeActionId::TextConfirm => self.confirm_edit(),
                ModeActionId::TextCancel => {
                    self.edit = None;
                    self.error = None;
                    Action::None
                }
            };
        }

        let ActionId::Header(action) = action else {
            return Action::None;
        };
        match action {
            HeaderActionId::Prev => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            HeaderActionId::Next => {
                if self.selected + 1 < HeaderField::ALL.len() {
                    self.selected += 1;
                }
                Action::None
            }
            HeaderActionId::Top => {
                self.selected = 0;
                Action::None
            }
            HeaderActionId::Bottom => {
                self.selected = HeaderField::ALL.len() - 1;
                Action::None
            }
            HeaderActionId::Edit => self.start_edit(state),
            HeaderActionId::LoadLogo => Action::Nav(NavAction::PushPane("logo")),
            HeaderActionId::ClearLogo => {
                if state.sheet.production_logo.is_empty() {
                    Action::None
                } else {
                    Action::Header(HeaderAction::ClearLogo)
                }
            }
        }
    }

    fn handle_raw_input(&mut self, event: &InputEvent, _state: &AppState) -> Action {
        if let Some((_, editor)) = self.edit.as_mut() {
            editor.handle_input(event);
        }
        Action::None
    }

    fn render(&mut self, area: Rect, buf: &mut RenderBuf, state: &AppState) {
        let content = content_area(area);
        let bottom = content.y + content.height;
        buf.draw_str(content.x, content.y, " Production ", Style::new().fg(Color::CYAN).bold());

        let value_x = content.x + 2 + LABEL_WIDTH;
        let value_width = content.width.saturating_sub(LABEL_WIDTH + 3);

        for (i, field) in HeaderField::ALL.iter().enumerate() {
            let y = content.y + 2 + i as u16;
            if y >= bottom.saturating_sub(4) {
                break;
            }
            let is_selected = i == self.selected;
            let label = format!("{:<width$}", field.label(), width = LABEL_WIDTH as usize);
            buf.draw_str(content.x + 2, y, &label, selected_style(is_selected, Color::CYAN));

            match self.edit.as_mut() {
                Some((edit_field, editor)) if is_selected && *edit_field == *field => {
                    editor.render(buf, value_x, y, value_width, bottom.saturating_sub(2));
                }
                _ => {
                    let style = selected_style(is_selected, Color::WHITE);
                    if is_selected {
                        buf.fill_row(value_x, y, value_width, style);
                    }
                    buf.draw_str_max(value_x, y, state.sheet.header_field(*field), value_width, style);
                }
            }
        }

        let logo_y = content.y + 3 + HeaderField::ALL.len() as u16;
        if logo_y < bottom.saturating_sub(2) {
            buf.draw_str(content.x + 2, logo_y, "Logo", Style::new().fg(Color::CYAN));
            buf.draw_str_max(
                value_x,
                logo_y,
                &logo_summary(&state.sheet.production_logo),
                value_width,
                SheetTheme::muted_text(),
            );
        }

        if let Some(error) = self.error {
            buf.draw_str(content.x + 2, bottom.saturating_sub(2), error, SheetTheme::error_text());
        }
        let hint = match &self.edit {
            Some((_, editor)) => editor.hint().to_string(),
            None => self.keymap().hint_line(&[
                (ActionId::Header(HeaderActionId::Edit), "Edit"),
                (ActionId::Header(HeaderActionId::LoadLogo), "Load logo"),
                (ActionId::Header(HeaderActionId::ClearLogo), "Clear logo"),
            ]),
        };
        buf.draw_str_max(content.x + 1, bottom.saturating_sub(1), &hint, content.width.saturating_sub(2), SheetTheme::help_text());
    }

    fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    fn on_exit(&mut self, _state: &AppState) {
        self.edit = None;
        self.error = None;
    }

    fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
