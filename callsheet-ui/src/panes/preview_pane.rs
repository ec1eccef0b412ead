use std::any::Any;

use crate::print::render_text;
use crate::state::AppState;
use crate::ui::action_id::{ActionId, PreviewActionId};
use crate::ui::layout_helpers::content_area;
use crate::ui::theme::SheetTheme;
use crate::ui::{
    Action, Color, InputEvent, Keymap, MouseEvent, MouseEventKind, Pane, Rect, RenderBuf, SessionAction, Style,
};

/// Read-only print layout of the whole sheet.
pub struct PreviewPane {
    keymap: Keymap,
    scroll: usize,
    /// Lines and visible rows from the last render, for paging
    line_count: usize,
    page: usize,
}

impl PreviewPane {
    pub fn new(keymap: Keymap) -> Self {
        Self { keymap, scroll: 0, line_count: 0, page: 1 }
    }

    fn max_scroll(&self) -> usize {
        self.line_count.saturating_sub(self.page)
    }

    fn scroll_by(&mut self, delta: isize) {
        let next = self.scroll as isize + delta;
        self.scroll = next.clamp(0, self.max_scroll() as isize) as usize;
    }
}

impl Pane for PreviewPane {
    fn id(&self) -> &'static str {
        "preview"
    }

    fn title(&self) -> &'static str {
        "Print Preview"
    }

    fn handle_action(&mut self, action: ActionId, _event: &InputEvent, _state: &AppState) -> Action {
        let ActionId::Preview(action) = action else {
            return Action::None;
        };
        let page = self.page.max(1) as isize;
        match action {
            PreviewActionId::Up => self.scroll_by(-1),
            PreviewActionId::Down => self.scroll_by(1),
            PreviewActionId::PageUp => self.scroll_by(-page),
            PreviewActionId::PageDown => self.scroll_by(page),
            PreviewActionId::Top => self.scroll = 0,
            PreviewActionId::Bottom => self.scroll = self.max_scroll(),
            PreviewActionId::Print => return Action::Session(SessionAction::Export),
        }
        Action::None
    }

    fn handle_mouse(&mut self, event: &MouseEvent, _area: Rect, _state: &AppState) -> Action {
        match event.kind {
            MouseEventKind::ScrollUp => self.scroll_by(-3),
            MouseEventKind::ScrollDown => self.scroll_by(3),
            _ => {}
        }
        Action::None
    }

    fn render(&mut self, area: Rect, buf: &mut RenderBuf, state: &AppState) {
        let content = content_area(area);
        let width = content.width.saturating_sub(2) as usize;
        let lines = render_text(&state.sheet, width);

        let page_area = Rect::new(content.x, content.y, content.width, content.height.saturating_sub(1));
        self.line_count = lines.len();
        self.page = page_area.height as usize;
        self.scroll = self.scroll.min(self.max_scroll());

        let text_style = Style::new().fg(Color::WHITE);
        for (i, line) in lines.iter().skip(self.scroll).take(self.page).enumerate() {
            buf.draw_str_max(page_area.x + 1, page_area.y + i as u16, line, width as u16, text_style);
        }

        let footer_y = content.y + content.height.saturating_sub(1);
        let position = format!("{}-{}/{}", self.scroll + 1, (self.scroll + self.page).min(lines.len()), lines.len());
        buf.draw_str(content.x + 1, footer_y, "[p] Print to file  [Up/Down/PgUp/PgDn] Scroll", SheetTheme::help_text());
        let x = content.x + content.width.saturating_sub(position.len() as u16 + 1);
        buf.draw_str(x, footer_y, &position, Style::new().fg(Color::DARK_GRAY));
    }

    fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    fn on_enter(&mut self, _state: &AppState) {
        self.scroll = 0;
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
