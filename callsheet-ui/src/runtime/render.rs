//! Rendering: frame throttle and drawing.

use std::time::{Duration, Instant};

use super::AppRuntime;
use crate::ui::{Frame, RatatuiBackend, Rect, RenderBuf};

/// ~60fps
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

impl AppRuntime {
    /// Render if something changed and the frame interval has passed.
    pub(crate) fn maybe_render(&mut self, backend: &mut RatatuiBackend) -> std::io::Result<()> {
        let now = Instant::now();
        if now.duration_since(self.last_render_time) < FRAME_INTERVAL {
            return Ok(());
        }

        // Keep drawing while a toast is up, plus once more to erase it
        let status_visible = self.app_frame.status_bar.current().is_some();
        if status_visible || self.status_visible {
            self.render_needed = true;
        }
        self.status_visible = status_visible;

        if !self.render_needed {
            return Ok(());
        }
        self.last_render_time = now;

        let mut frame = backend.begin_frame()?;
        let area = frame.area();
        self.last_area = area;
        let mut rbuf = RenderBuf::new(frame.buffer_mut());
        self.draw(area, &mut rbuf);
        backend.end_frame(frame)?;

        self.render_needed = false;
        Ok(())
    }

    /// Frame chrome, then the active pane on top.
    pub(crate) fn draw(&mut self, area: Rect, buf: &mut RenderBuf) {
        let state = self.dispatcher.state();
        self.app_frame.render_buf(area, buf, state);
        if Frame::is_size_ok(area) {
            self.panes.render(area, buf, state);
        }
    }
}
