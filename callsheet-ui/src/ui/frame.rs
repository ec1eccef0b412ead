use super::action_id::PaneId;
use super::status_bar::StatusBar;
use super::{Color, Rect, RenderBuf, Style};
use crate::action::StatusLevel;
use crate::state::AppState;

/// Tab label for each section pane. Function keys are listed in help.
fn tab_label(pane: PaneId) -> &'static str {
    match pane {
        PaneId::Header => "Header",
        PaneId::Crew => "Crew",
        PaneId::CallTimes => "Calls",
        PaneId::Schedule => "Schedule",
        PaneId::Talent => "Talent",
        PaneId::Locations => "Locs",
        PaneId::Notes => "Notes",
        PaneId::Advance => "Advance",
        PaneId::Radio => "Radio",
        PaneId::Preview => "Preview",
    }
}

/// Chrome around the active pane: border, title line, section tabs and the
/// status toast on the bottom edge.
pub struct Frame {
    pub sheet_title: String,
    /// Section pane under any modal, for tab highlighting
    pub section: PaneId,
    pub status_bar: StatusBar,
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    pub fn new() -> Self {
        Self { sheet_title: String::new(), section: PaneId::Header, status_bar: StatusBar::new() }
    }

    pub fn set_sheet_title(&mut self, title: String) {
        self.sheet_title = title;
    }

    pub const MIN_WIDTH: u16 = 80;
    pub const MIN_HEIGHT: u16 = 24;

    pub fn is_size_ok(area: Rect) -> bool {
        area.width >= Self::MIN_WIDTH && area.height >= Self::MIN_HEIGHT
    }

    pub fn render_buf(&self, area: Rect, buf: &mut RenderBuf, state: &AppState) {
        if !Self::is_size_ok(area) {
            let msg = format!(
                "{}x{} required, got {}x{}",
                Self::MIN_WIDTH,
                Self::MIN_HEIGHT,
                area.width,
                area.height
            );
            let x = area.x + area.width.saturating_sub(msg.len() as u16) / 2;
            buf.draw_str(x, area.y + area.height / 2, &msg, Style::new().fg(Color::ERROR_COLOR));
            return;
        }

        let border_style = Style::new().fg(Color::GRAY);
        buf.draw_block(area, "", border_style, border_style);

        let dirty = if state.project.dirty { "*" } else { "" };
        let header = format!(" CALL SHEET - {}{} ", self.sheet_title, dirty);
        buf.draw_str_max(
            area.x + 1,
            area.y,
            &header,
            area.width.saturating_sub(24),
            Style::new().fg(Color::CYAN).bold(),
        );

        // Right side of the title line, drawn right to left
        let mut cursor = area.x + area.width.saturating_sub(1);
        let hint = " F1 help ";
        cursor = cursor.saturating_sub(hint.len() as u16);
        buf.draw_str(cursor, area.y, hint, Style::new().fg(Color::DARK_GRAY));

        if state.io.pending_save.is_some() {
            let saving = " saving... ";
            cursor = cursor.saturating_sub(saving.len() as u16);
            buf.draw_str(cursor, area.y, saving, Style::new().fg(Color::WARN_COLOR));
        }
        if state.io.export_in_progress {
            let exporting = " exporting... ";
            cursor = cursor.saturating_sub(exporting.len() as u16);
            buf.draw_str(cursor, area.y, exporting, Style::new().fg(Color::WARN_COLOR));
        }

        self.render_tabs(area, buf);

        if let Some(msg) = self.status_bar.current() {
            let color = match msg.level {
                StatusLevel::Info => Color::OK_COLOR,
                StatusLevel::Warning => Color::WARN_COLOR,
                StatusLevel::Error => Color::ERROR_COLOR,
            };
            let text = format!(" {} ", msg.text);
            let max_width = area.width.saturating_sub(4);
            let shown = text.chars().count().min(max_width as usize) as u16;
            let x = area.x + area.width.saturating_sub(shown) / 2;
            let bottom_y = area.y + area.height.saturating_sub(1);
            buf.draw_str_max(x, bottom_y, &text, max_width, Style::new().fg(color).bold());
        }
    }

    fn render_tabs(&self, area: Rect, buf: &mut RenderBuf) {
        let y = area.y + 1;
        let right = area.x + area.width.saturating_sub(1);
        let mut x = area.x + 1;
        for pane in PaneId::ALL {
            let label = format!(" {} ", tab_label(pane));
            let style = if pane == self.section {
                Style::new().fg(Color::BLACK).bg(Color::GOLD).bold()
            } else {
                Style::new().fg(Color::WHITE)
            };
            let width = label.len() as u16;
            if x + width > right {
                break;
            }
            buf.draw_str(x, y, &label, style);
            x += width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::{row_text, test_state};
    use ratatui::buffer::Buffer;

    #[test]
    fn title_line_shows_dirty_marker() {
        let mut state = test_state();
        state.project.dirty = true;
        let mut frame = Frame::new();
        frame.set_sheet_title("Night Shoot".into());

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        frame.render_buf(area, &mut RenderBuf::new(&mut buf), &state);
        assert!(row_text(&buf, 0).contains("CALL SHEET - Night Shoot*"));
        assert!(row_text(&buf, 1).contains("Schedule"));
    }

    #[test]
    fn toast_on_bottom_edge() {
        let state = test_state();
        let mut frame = Frame::new();
        frame.status_bar.push("Call sheet saved successfully!", StatusLevel::Info);

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        frame.render_buf(area, &mut RenderBuf::new(&mut buf), &state);
        assert!(row_text(&buf, 23).contains("Call sheet saved successfully!"));
    }

    #[test]
    fn small_terminal_warns() {
        let state = test_state();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        Frame::new().render_buf(area, &mut RenderBuf::new(&mut buf), &state);
        assert!(row_text(&buf, 5).contains("80x24 required"));
    }
}
