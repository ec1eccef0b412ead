use callsheet_types::{FieldRecord, MoveDirection, Record};

use super::{AddKind, EditTarget, Section, TablePane};
use crate::panes::cell_editor::{next_choice, CellEditor, CellKind};
use crate::state::AppState;
use crate::ui::action_id::{ActionId, ModeActionId, TableActionId};
use crate::ui::layout_helpers::content_area;
use crate::ui::{Action, MouseButton, MouseEvent, MouseEventKind, Rect};

impl<S: Section> TablePane<S> {
    pub(super) fn handle_action_impl(&mut self, action: ActionId, state: &AppState) -> Action {
        let sheet = &state.sheet;
        self.sync_cursor(S::rows(sheet).len());

        if let ActionId::Mode(mode) = action {
            let Some(edit) = self.edit.take() else {
                return Action::None;
            };
            return match mode {
                ModeActionId::TextConfirm => match edit.editor.commit() {
                    Some(value) => S::update(edit.id, edit.field, value),
                    None => Action::None,
                },
                ModeActionId::TextCancel => Action::None,
            };
        }

        let ActionId::Table(action) = action else {
            return Action::None;
        };
        let len = S::rows(sheet).len();

        match action {
            TableActionId::Up => {
                self.row = self.row.saturating_sub(1);
                Action::None
            }
            TableActionId::Down => {
                if self.row + 1 < len {
                    self.row += 1;
                }
                Action::None
            }
            TableActionId::Left => {
                self.col = self.col.saturating_sub(1);
                Action::None
            }
            TableActionId::Right => {
                if self.col + 1 < self.columns.len() {
                    self.col += 1;
                }
                Action::None
            }
            TableActionId::Top => {
                self.row = 0;
                Action::None
            }
            TableActionId::Bottom => {
                self.row = len.saturating_sub(1);
                Action::None
            }
            TableActionId::Edit => self.edit_cell(state),
            TableActionId::Add => self.add(AddKind::Row),
            TableActionId::AddBanner => self.add(AddKind::Banner),
            TableActionId::AddMove => self.add(AddKind::CompanyMove),
            TableActionId::Remove => match self.current_row(sheet) {
                Some(row) => S::remove(row).unwrap_or(Action::None),
                None => Action::None,
            },
            TableActionId::MoveUp => self.move_current(state, MoveDirection::Up),
            TableActionId::MoveDown => self.move_current(state, MoveDirection::Down),
        }
    }

    fn add(&mut self, kind: AddKind) -> Action {
        match S::add(kind) {
            Some(action) => {
                self.follow_added = true;
                action
            }
            None => Action::None,
        }
    }

    fn move_current(&mut self, state: &AppState, direction: MoveDirection) -> Action {
        let len = S::rows(&state.sheet).len();
        let Some(id) = self.current_row(&state.sheet).map(Record::id) else {
            return Action::None;
        };
        let at_edge = match direction {
            MoveDirection::Up => self.row == 0,
            MoveDirection::Down => self.row + 1 >= len,
        };
        if at_edge {
            return Action::None;
        }
        let Some(action) = S::move_row(id, direction) else {
            return Action::None;
        };
        match direction {
            MoveDirection::Up => self.row -= 1,
            MoveDirection::Down => self.row += 1,
        }
        action
    }

    /// Choice cells cycle in place; everything else opens an inline editor.
    fn edit_cell(&mut self, state: &AppState) -> Action {
        let Some(column) = self.columns.get(self.col).copied() else {
            return Action::None;
        };
        let Some(row) = self.current_row(&state.sheet) else {
            return Action::None;
        };
        let Some(value) = row.field(column.field) else {
            return Action::None;
        };
        if !S::is_editable(row, column.field) {
            return Action::None;
        }
        let id = row.id();

        if let CellKind::Choice(options) = column.kind {
            return match next_choice(options, value) {
                Some(next) => S::update(id, column.field, next.to_string()),
                None => Action::None,
            };
        }

        match CellEditor::open(column.kind, value, &state.sheet) {
            Some(editor) => {
                self.edit = Some(EditTarget { id, field: column.field, editor });
                Action::PushLayer("text_edit")
            }
            None => Action::None,
        }
    }

    pub(super) fn handle_mouse_impl(&mut self, event: &MouseEvent, area: Rect, state: &AppState) -> Action {
        if self.edit.is_some() {
            return Action::None;
        }
        let len = S::rows(&state.sheet).len();
        match event.kind {
            MouseEventKind::ScrollUp => {
                self.row = self.row.saturating_sub(1);
                Action::None
            }
            MouseEventKind::ScrollDown => {
                if self.row + 1 < len {
                    self.row += 1;
                }
                Action::None
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let table = Self::table_area(content_area(area));
                if event.row < table.y || event.row >= table.y + table.height {
                    return Action::None;
                }
                let row = self.scroll + (event.row - table.y) as usize;
                if row >= len {
                    return Action::None;
                }
                let clicked_same = row == self.row;
                self.row = row;
                if let Some(col) = self.column_at(table, event.column) {
                    let same_col = col == self.col;
                    self.col = col;
                    if clicked_same && same_col {
                        return self.edit_cell(state);
                    }
                }
                Action::None
            }
            _ => Action::None,
        }
    }
}
