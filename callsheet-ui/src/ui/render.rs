use ratatui::buffer::Buffer;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

pub use ratatui::layout::Rect;

use super::style::Style;

/// Drawing surface for panes. Wraps a ratatui `Buffer` and takes our own
/// `Style`; `raw_buf()` is there for ratatui and rat-widget widgets.
pub struct RenderBuf<'a> {
    buf: &'a mut Buffer,
}

impl<'a> RenderBuf<'a> {
    pub fn new(buf: &'a mut Buffer) -> Self {
        Self { buf }
    }

    pub fn set_cell(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(ch).set_style(ratatui::style::Style::from(style));
        }
    }

    /// Draw `text` on one row. Cells outside the buffer are clipped.
    pub fn draw_str(&mut self, x: u16, y: u16, text: &str, style: Style) {
        self.draw_str_max(x, y, text, u16::MAX, style);
    }

    /// Draw at most `max_width` characters of `text`.
    pub fn draw_str_max(&mut self, x: u16, y: u16, text: &str, max_width: u16, style: Style) {
        let rat_style = ratatui::style::Style::from(style);
        for (i, ch) in text.chars().take(max_width as usize).enumerate() {
            let Some(cx) = x.checked_add(i as u16) else {
                break;
            };
            if let Some(cell) = self.buf.cell_mut((cx, y)) {
                cell.set_char(ch).set_style(rat_style);
            }
        }
    }

    /// Paint `width` cells starting at (x, y) with spaces in `style`.
    pub fn fill_row(&mut self, x: u16, y: u16, width: u16, style: Style) {
        for dx in 0..width {
            self.set_cell(x.saturating_add(dx), y, ' ', style);
        }
    }

    /// Blank an area before drawing a dialog over it.
    pub fn clear(&mut self, area: Rect) {
        Clear.render(area, self.buf);
    }

    /// Bordered block with a title. Returns the inner area.
    pub fn draw_block(&mut self, area: Rect, title: &str, border_style: Style, title_style: Style) -> Rect {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(ratatui::style::Style::from(border_style))
            .title_style(ratatui::style::Style::from(title_style));
        let inner = block.inner(area);
        block.render(area, self.buf);
        inner
    }

    /// Styled spans on a single line.
    pub fn draw_line(&mut self, area: Rect, spans: &[(&str, Style)]) {
        let rat_spans: Vec<Span> = spans
            .iter()
            .map(|(text, style)| Span::styled(*text, ratatui::style::Style::from(*style)))
            .collect();
        Paragraph::new(Line::from(rat_spans)).render(area, self.buf);
    }

    pub fn raw_buf(&mut self) -> &mut Buffer {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16, width: u16) -> String {
        (0..width).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn draw_str_clips_at_edge() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 1));
        RenderBuf::new(&mut buf).draw_str(2, 0, "abcdef", Style::new());
        assert_eq!(row(&buf, 0, 5), "  abc");
    }

    #[test]
    fn draw_str_max_limits_width() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 1));
        RenderBuf::new(&mut buf).draw_str_max(0, 0, "Director", 3, Style::new());
        assert_eq!(row(&buf, 0, 8), "Dir     ");
    }

    #[test]
    fn block_returns_inner() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 4));
        let inner = RenderBuf::new(&mut buf).draw_block(Rect::new(0, 0, 10, 4), "T", Style::new(), Style::new());
        assert_eq!(inner, Rect::new(1, 1, 8, 2));
    }
}
