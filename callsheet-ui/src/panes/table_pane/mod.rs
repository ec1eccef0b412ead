mod input;
mod rendering;
pub mod sections;

use std::any::Any;
use std::marker::PhantomData;

use callsheet_types::{CallSheet, FieldRecord, ItemId, MoveDirection};

use super::cell_editor::{CellEditor, CellKind};
use crate::state::AppState;
use crate::ui::action_id::ActionId;
use crate::ui::{Action, Color, InputEvent, Keymap, MouseEvent, Pane, Rect, RenderBuf};

/// Field enum of a section's row type.
pub type FieldOf<S> = <<S as Section>::Row as FieldRecord>::Field;

/// What an add key asks for. Only the schedule knows banners and moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddKind {
    Row,
    Banner,
    CompanyMove,
}

/// One column of a table editor.
#[derive(Debug, Clone, Copy)]
pub struct Column<F> {
    pub title: &'static str,
    pub field: F,
    pub kind: CellKind,
    /// Share of the table width
    pub weight: u16,
}

impl<F> Column<F> {
    pub const fn new(title: &'static str, field: F, kind: CellKind, weight: u16) -> Self {
        Self { title, field, kind, weight }
    }
}

/// A list of the sheet edited as a table: where its rows live and which
/// actions edit them.
pub trait Section: 'static {
    type Row: FieldRecord;

    const ID: &'static str;
    const TITLE: &'static str;
    const LAYER: &'static str;

    fn columns() -> Vec<Column<FieldOf<Self>>>;

    fn rows(sheet: &CallSheet) -> &[Self::Row];

    fn add(kind: AddKind) -> Option<Action>;

    fn update(id: ItemId, field: FieldOf<Self>, value: String) -> Action;

    /// `None` for rows that cannot be removed.
    fn remove(row: &Self::Row) -> Option<Action>;

    fn move_row(_id: ItemId, _direction: MoveDirection) -> Option<Action> {
        None
    }

    /// False for cells that exist but are locked.
    fn is_editable(_row: &Self::Row, _field: FieldOf<Self>) -> bool {
        true
    }

    /// Display text of a cell; fields that do not apply show blank.
    fn cell_text(row: &Self::Row, field: FieldOf<Self>) -> String {
        row.field(field).unwrap_or_default().to_string()
    }

    fn row_color(_row: &Self::Row) -> Option<Color> {
        None
    }

    /// Summary line under the table.
    fn footer(_sheet: &CallSheet) -> Option<String> {
        None
    }
}

/// The cell an open editor writes back to.
struct EditTarget<F> {
    id: ItemId,
    field: F,
    editor: CellEditor,
}

/// Row/column cursor over one section of the sheet, with inline cell editors.
pub struct TablePane<S: Section> {
    keymap: Keymap,
    columns: Vec<Column<FieldOf<S>>>,
    row: usize,
    col: usize,
    scroll: usize,
    /// Jump to the last row once an added row shows up
    follow_added: bool,
    edit: Option<EditTarget<FieldOf<S>>>,
    _section: PhantomData<S>,
}

impl<S: Section> TablePane<S> {
    pub fn new(keymap: Keymap) -> Self {
        Self {
            keymap,
            columns: S::columns(),
            row: 0,
            col: 0,
            scroll: 0,
            follow_added: false,
            edit: None,
            _section: PhantomData,
        }
    }

    /// Keep the cursor on an existing row after the list changed.
    fn sync_cursor(&mut self, len: usize) {
        if self.follow_added && len > 0 {
            self.row = len - 1;
            self.follow_added = false;
        }
        self.row = self.row.min(len.saturating_sub(1));
        self.col = self.col.min(self.columns.len().saturating_sub(1));
    }

    fn current_row<'a>(&self, sheet: &'a CallSheet) -> Option<&'a S::Row> {
        S::rows(sheet).get(self.row)
    }
}

impl<S: Section> Pane for TablePane<S> {
    fn id(&self) -> &'static str {
        S::ID
    }

    fn layer(&self) -> &'static str {
        S::LAYER
    }

    fn title(&self) -> &'static str {
        S::TITLE
    }

    fn handle_action(&mut self, action: ActionId, _event: &InputEvent, state: &AppState) -> Action {
        self.handle_action_impl(action, state)
    }

    fn handle_raw_input(&mut self, event: &InputEvent, _state: &AppState) -> Action {
        if let Some(edit) = self.edit.as_mut() {
            edit.editor.handle_input(event);
        }
        Action::None
    }

    fn handle_mouse(&mut self, event: &MouseEvent, area: Rect, state: &AppState) -> Action {
        self.handle_mouse_impl(event, area, state)
    }

    fn render(&mut self, area: Rect, buf: &mut RenderBuf, state: &AppState) {
        self.render_impl(area, buf, state);
    }

    fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    fn on_enter(&mut self, state: &AppState) {
        self.sync_cursor(S::rows(&state.sheet).len());
    }

    fn on_exit(&mut self, _state: &AppState) {
        self.edit = None;
    }

    fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
