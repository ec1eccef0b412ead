use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    Down(MouseButton),
    Up(MouseButton),
    Drag(MouseButton),
    ScrollUp,
    ScrollDown,
}

/// Mouse event in terminal cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub column: u16,
    pub row: u16,
    pub modifiers: Modifiers,
}

/// Everything the runtime reads from the terminal
#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    Key(InputEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    F(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const fn none() -> Self {
        Self { ctrl: false, alt: false, shift: false }
    }

    pub const fn ctrl() -> Self {
        Self { ctrl: true, alt: false, shift: false }
    }

    #[cfg(test)]
    pub const fn shift() -> Self {
        Self { ctrl: false, alt: false, shift: true }
    }
}

/// A key press. Equality ignores timing.
#[derive(Debug, Clone, Copy)]
pub struct InputEvent {
    pub key: KeyCode,
    pub modifiers: Modifiers,
    pub timestamp: Instant,
    pub is_repeat: bool,
}

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.modifiers == other.modifiers
    }
}

impl Eq for InputEvent {}

impl InputEvent {
    pub fn new(key: KeyCode, modifiers: Modifiers) -> Self {
        Self { key, modifiers, timestamp: Instant::now(), is_repeat: false }
    }

    pub fn key(key: KeyCode) -> Self {
        Self::new(key, Modifiers::none())
    }

    /// True for `ch` typed without Ctrl or Alt
    pub fn is_char(&self, ch: char) -> bool {
        self.typed_char() == Some(ch)
    }

    /// The character this event would insert into a text field, if any.
    pub fn typed_char(&self) -> Option<char> {
        match self.key {
            KeyCode::Char(c) if !self.modifiers.ctrl && !self.modifiers.alt => Some(c),
            _ => None,
        }
    }
}

pub trait InputSource {
    /// Wait up to `timeout` for the next event.
    fn poll_event(&mut self, timeout: Duration) -> Option<AppEvent>;
}
