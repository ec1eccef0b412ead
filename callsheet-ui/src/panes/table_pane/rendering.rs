use super::{Section, TablePane};
use crate::state::AppState;
use crate::ui::layout_helpers::content_area;
use crate::ui::style::selected_style;
use crate::ui::theme::SheetTheme;
use crate::ui::action_id::{ActionId, TableActionId};
use crate::ui::{Color, Pane, Rect, RenderBuf, Style};

/// Gap between columns
const GAP: u16 = 1;

/// Footer entries; a layer without the binding leaves the entry out.
const BROWSE_HINTS: &[(ActionId, &str)] = &[
    (ActionId::Table(TableActionId::Edit), "Edit"),
    (ActionId::Table(TableActionId::Add), "Add"),
    (ActionId::Table(TableActionId::AddBanner), "Banner"),
    (ActionId::Table(TableActionId::AddMove), "Move"),
    (ActionId::Table(TableActionId::Remove), "Remove"),
    (ActionId::Table(TableActionId::MoveUp), "Row up"),
    (ActionId::Table(TableActionId::MoveDown), "Row down"),
];

/// Split `total` between columns by weight. The last column takes the rounding slack.
pub(super) fn column_widths(weights: &[u16], total: u16) -> Vec<u16> {
    if weights.is_empty() {
        return Vec::new();
    }
    let gaps = GAP * (weights.len() as u16 - 1);
    let usable = total.saturating_sub(gaps) as u32;
    let sum: u32 = weights.iter().map(|w| *w as u32).sum::<u32>().max(1);
    let mut widths: Vec<u16> = weights.iter().map(|w| (usable * *w as u32 / sum) as u16).collect();
    let used: u16 = widths.iter().sum();
    if let Some(last) = widths.last_mut() {
        *last += (usable as u16).saturating_sub(used);
    }
    widths
}

impl<S: Section> TablePane<S> {
    /// Rows area inside the pane's content: below the title and column
    /// headers, above the footer and key hint.
    pub(super) fn table_area(content: Rect) -> Rect {
        Rect::new(content.x, content.y + 2, content.width, content.height.saturating_sub(4))
    }

    fn weights(&self) -> Vec<u16> {
        self.columns.iter().map(|c| c.weight).collect()
    }

    /// Left edge and width of each column.
    fn column_spans(&self, table: Rect) -> Vec<(u16, u16)> {
        let mut x = table.x;
        column_widths(&self.weights(), table.width)
            .into_iter()
            .map(|w| {
                let span = (x, w);
                x += w + GAP;
                span
            })
            .collect()
    }

    pub(super) fn column_at(&self, table: Rect, x: u16) -> Option<usize> {
        self.column_spans(table)
            .into_iter()
            .position(|(start, width)| x >= start && x < start + width + GAP)
    }

    fn scroll_into_view(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        if self.row < self.scroll {
            self.scroll = self.row;
        } else if self.row >= self.scroll + visible {
            self.scroll = self.row + 1 - visible;
        }
    }

    pub(super) fn render_impl(&mut self, area: Rect, buf: &mut RenderBuf, state: &AppState) {
        let sheet = &state.sheet;
        let rows = S::rows(sheet);
        self.sync_cursor(rows.len());

        let content = content_area(area);
        let table = Self::table_area(content);
        let spans = self.column_spans(table);
        let bottom = content.y + content.height;

        let title = format!(" {} ({}) ", S::TITLE, rows.len());
        buf.draw_str(content.x, content.y, &title, Style::new().fg(Color::CYAN).bold());

        let header_style = Style::new().fg(Color::GOLD).bold();
        for (column, (x, width)) in self.columns.iter().zip(&spans) {
            buf.draw_str_max(*x, content.y + 1, column.title, *width, header_style);
        }

        if rows.is_empty() {
            buf.draw_str(table.x + 1, table.y, "No rows. Press [a] to add one.", SheetTheme::muted_text());
        }

        let visible = table.height as usize;
        self.scroll_into_view(visible);

        let mut editor_at = None;
        for (i, row) in rows.iter().enumerate().skip(self.scroll).take(visible) {
            let y = table.y + (i - self.scroll) as u16;
            let is_selected = i == self.row;
            let fg = S::row_color(row).unwrap_or(Color::WHITE);
            let row_style = selected_style(is_selected, fg);
            if is_selected {
                buf.fill_row(table.x, y, table.width, row_style);
            }

            for (c, (column, (x, width))) in self.columns.iter().zip(&spans).enumerate() {
                let is_cursor = is_selected && c == self.col;
                if is_cursor && self.edit.is_some() {
                    editor_at = Some((*x, y, *width));
                    continue;
                }
                let style = if is_cursor {
                    Style::new().fg(Color::BLACK).bg(Color::GOLD).bold()
                } else {
                    row_style
                };
                let text = S::cell_text(row, column.field);
                if is_cursor {
                    buf.fill_row(*x, y, *width, style);
                }
                buf.draw_str_max(*x, y, &text, *width, style);
            }
        }

        if let (Some((x, y, width)), Some(edit)) = (editor_at, self.edit.as_mut()) {
            edit.editor.render(buf, x, y, width, bottom.saturating_sub(2));
        }

        if rows.len() > visible && visible > 0 {
            let indicator = format!("{}-{}/{}", self.scroll + 1, (self.scroll + visible).min(rows.len()), rows.len());
            let x = content.x + content.width.saturating_sub(indicator.len() as u16 + 1);
            buf.draw_str(x, content.y, &indicator, Style::new().fg(Color::DARK_GRAY));
        }

        let footer_y = bottom.saturating_sub(2);
        if let Some(footer) = S::footer(sheet) {
            buf.draw_str_max(content.x + 1, footer_y, &footer, content.width.saturating_sub(2), SheetTheme::label());
        }

        let hint = match &self.edit {
            Some(edit) => edit.editor.hint().to_string(),
            None => self.keymap().hint_line(BROWSE_HINTS),
        };
        buf.draw_str_max(content.x + 1, bottom.saturating_sub(1), &hint, content.width.saturating_sub(2), SheetTheme::help_text());
    }
}
