use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode as CtKeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton as CtMouseButton, MouseEvent as CtMouseEvent,
        MouseEventKind as CtMouseEventKind, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::Rect as RatatuiRect,
    style::{Color as RatatuiColor, Style as RatatuiStyle},
    widgets::Widget,
    Terminal,
};

use super::{AppEvent, InputEvent, InputSource, KeyCode, Modifiers, MouseButton, MouseEvent, MouseEventKind};

pub struct RatatuiBackend {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    keyboard_enhancement_enabled: bool,
}

impl RatatuiBackend {
    /// Does not touch the terminal until `start`.
    pub fn new() -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self { terminal, keyboard_enhancement_enabled: false })
    }

    /// Raw mode, alternate screen, mouse capture.
    pub fn start(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        // Must be queried before entering the alternate screen
        let supports_enhancement = matches!(supports_keyboard_enhancement(), Ok(true));
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;

        // Lets Esc and Ctrl chords arrive unambiguously where supported
        if supports_enhancement
            && execute!(
                io::stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )
            .is_ok()
        {
            self.keyboard_enhancement_enabled = true;
        }

        self.terminal.clear()?;
        Ok(())
    }

    pub fn stop(&mut self) -> io::Result<()> {
        if self.keyboard_enhancement_enabled {
            let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
            self.keyboard_enhancement_enabled = false;
        }
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        Ok(())
    }

    /// Start an off-screen frame filled with a black background.
    pub fn begin_frame(&self) -> io::Result<RatatuiFrame> {
        let size = self.terminal.size()?;
        let area = RatatuiRect::new(0, 0, size.width, size.height);
        let mut buffer = Buffer::empty(area);
        buffer.set_style(area, RatatuiStyle::default().bg(RatatuiColor::Rgb(0, 0, 0)));
        Ok(RatatuiFrame { buffer, size: (area.width, area.height) })
    }

    pub fn end_frame(&mut self, frame: RatatuiFrame) -> io::Result<()> {
        self.terminal.draw(|f| {
            let area = f.area();
            f.render_widget(BufferWidget(frame.buffer), area);
        })?;
        Ok(())
    }

    /// Full repaint, for recovering from display corruption.
    pub fn clear(&mut self) -> io::Result<()> {
        self.terminal.clear()
    }
}

pub struct RatatuiFrame {
    buffer: Buffer,
    size: (u16, u16),
}

impl RatatuiFrame {
    pub fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    pub fn area(&self) -> RatatuiRect {
        RatatuiRect::new(0, 0, self.size.0, self.size.1)
    }
}

impl InputSource for RatatuiBackend {
    fn poll_event(&mut self, timeout: Duration) -> Option<AppEvent> {
        let mut t = timeout;
        loop {
            if !event::poll(t).ok()? {
                return None;
            }
            let converted = match event::read().ok()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => convert_key_event(key).map(AppEvent::Key),
                Event::Mouse(mouse) => convert_mouse_event(mouse).map(AppEvent::Mouse),
                Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
                _ => None,
            };
            if converted.is_some() {
                return converted;
            }
            // Dropped event: drain the rest without waiting again
            t = Duration::ZERO;
        }
    }
}

fn convert_modifiers(m: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: m.contains(KeyModifiers::CONTROL),
        alt: m.contains(KeyModifiers::ALT),
        shift: m.contains(KeyModifiers::SHIFT),
    }
}

fn convert_key_event(event: KeyEvent) -> Option<InputEvent> {
    let mut modifiers = convert_modifiers(event.modifiers);
    let key = match event.code {
        CtKeyCode::Char(c) => KeyCode::Char(c),
        CtKeyCode::Enter => KeyCode::Enter,
        CtKeyCode::Esc => KeyCode::Escape,
        CtKeyCode::Backspace => KeyCode::Backspace,
        CtKeyCode::Tab => KeyCode::Tab,
        CtKeyCode::BackTab => {
            modifiers.shift = true;
            KeyCode::Tab
        }
        CtKeyCode::Up => KeyCode::Up,
        CtKeyCode::Down => KeyCode::Down,
        CtKeyCode::Left => KeyCode::Left,
        CtKeyCode::Right => KeyCode::Right,
        CtKeyCode::Home => KeyCode::Home,
        CtKeyCode::End => KeyCode::End,
        CtKeyCode::PageUp => KeyCode::PageUp,
        CtKeyCode::PageDown => KeyCode::PageDown,
        CtKeyCode::Insert => KeyCode::Insert,
        CtKeyCode::Delete => KeyCode::Delete,
        CtKeyCode::F(n) => KeyCode::F(n),
        _ => return None,
    };

    Some(InputEvent {
        key,
        modifiers,
        timestamp: Instant::now(),
        is_repeat: event.kind == KeyEventKind::Repeat,
    })
}

fn convert_mouse_button(button: CtMouseButton) -> MouseButton {
    match button {
        CtMouseButton::Left => MouseButton::Left,
        CtMouseButton::Right => MouseButton::Right,
        CtMouseButton::Middle => MouseButton::Middle,
    }
}

fn convert_mouse_event(event: CtMouseEvent) -> Option<MouseEvent> {
    let kind = match event.kind {
        CtMouseEventKind::Down(btn) => MouseEventKind::Down(convert_mouse_button(btn)),
        CtMouseEventKind::Up(btn) => MouseEventKind::Up(convert_mouse_button(btn)),
        CtMouseEventKind::Drag(btn) => MouseEventKind::Drag(convert_mouse_button(btn)),
        CtMouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
        CtMouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
        _ => return None,
    };
    Some(MouseEvent { kind, column: event.column, row: event.row, modifiers: convert_modifiers(event.modifiers) })
}

/// Copies a pre-built buffer into the terminal frame.
struct BufferWidget(Buffer);

impl Widget for BufferWidget {
    fn render(self, area: RatatuiRect, buf: &mut Buffer) {
        for y in area.y..area.y.saturating_add(area.height) {
            for x in area.x..area.x.saturating_add(area.width) {
                if let (Some(src), Some(dst)) = (self.0.cell((x, y)), buf.cell_mut((x, y))) {
                    *dst = src.clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: CtKeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent { code, modifiers, kind: KeyEventKind::Press, state: KeyEventState::empty() }
    }

    #[test]
    fn back_tab_becomes_shift_tab() {
        let event = convert_key_event(key(CtKeyCode::BackTab, KeyModifiers::SHIFT)).unwrap();
        assert_eq!(event.key, KeyCode::Tab);
        assert!(event.modifiers.shift);
    }

    #[test]
    fn ctrl_chord() {
        let event = convert_key_event(key(CtKeyCode::Char('s'), KeyModifiers::CONTROL)).unwrap();
        assert_eq!(event, InputEvent::new(KeyCode::Char('s'), Modifiers::ctrl()));
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        assert!(convert_key_event(key(CtKeyCode::CapsLock, KeyModifiers::NONE)).is_none());
    }

    #[test]
    fn mouse_move_is_dropped() {
        let moved = CtMouseEvent { kind: CtMouseEventKind::Moved, column: 1, row: 1, modifiers: KeyModifiers::NONE };
        assert!(convert_mouse_event(moved).is_none());
    }
}
