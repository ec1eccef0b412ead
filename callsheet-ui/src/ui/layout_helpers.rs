use crate::ui::style::Style;
use crate::ui::{Rect, RenderBuf};

/// Center a `width x height` rect in `area`, leaving at least a one-cell
/// margin.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(2));
    let h = height.min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}

/// Clear a centered area and draw a titled dialog border. Returns the inner area.
pub fn render_dialog_frame(area: Rect, buf: &mut RenderBuf, title: &str, width: u16, height: u16, border: Style) -> Rect {
    let rect = center_rect(area, width, height);
    buf.clear(rect);
    buf.draw_block(rect, title, border, border.bold())
}

/// Area inside the application frame's border, below the tab row.
pub fn content_area(area: Rect) -> Rect {
    Rect::new(
        area.x + 1,
        area.y + 2,
        area.width.saturating_sub(2),
        area.height.saturating_sub(3),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(center_rect(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(center_rect(area, 50, 50), Rect::new(1, 1, 18, 8));
    }

    #[test]
    fn content_sits_inside_frame() {
        assert_eq!(content_area(Rect::new(0, 0, 80, 24)), Rect::new(1, 2, 78, 21));
    }
}
