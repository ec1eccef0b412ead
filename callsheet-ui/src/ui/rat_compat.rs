//! Converts our input types back to crossterm events for rat-widget, which
//! handles raw `crossterm::event::Event` values.

use crossterm::event::{
    Event as CtEvent, KeyCode as CtKeyCode, KeyEvent as CtKeyEvent, KeyEventKind, KeyEventState, KeyModifiers,
};
use rat_event::Outcome;

use super::input::{InputEvent, KeyCode, Modifiers};

fn to_crossterm_modifiers(m: Modifiers) -> KeyModifiers {
    let mut modifiers = KeyModifiers::empty();
    if m.ctrl {
        modifiers |= KeyModifiers::CONTROL;
    }
    if m.alt {
        modifiers |= KeyModifiers::ALT;
    }
    if m.shift {
        modifiers |= KeyModifiers::SHIFT;
    }
    modifiers
}

pub fn to_crossterm_key_event(event: &InputEvent) -> CtEvent {
    let code = match event.key {
        KeyCode::Char(c) => CtKeyCode::Char(c),
        KeyCode::Enter => CtKeyCode::Enter,
        KeyCode::Escape => CtKeyCode::Esc,
        KeyCode::Backspace => CtKeyCode::Backspace,
        KeyCode::Tab if event.modifiers.shift => CtKeyCode::BackTab,
        KeyCode::Tab => CtKeyCode::Tab,
        KeyCode::Up => CtKeyCode::Up,
        KeyCode::Down => CtKeyCode::Down,
        KeyCode::Left => CtKeyCode::Left,
        KeyCode::Right => CtKeyCode::Right,
        KeyCode::Home => CtKeyCode::Home,
        KeyCode::End => CtKeyCode::End,
        KeyCode::PageUp => CtKeyCode::PageUp,
        KeyCode::PageDown => CtKeyCode::PageDown,
        KeyCode::Insert => CtKeyCode::Insert,
        KeyCode::Delete => CtKeyCode::Delete,
        KeyCode::F(n) => CtKeyCode::F(n),
    };

    CtEvent::Key(CtKeyEvent {
        code,
        modifiers: to_crossterm_modifiers(event.modifiers),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

/// Whether rat-widget used the event.
pub fn outcome_consumed(outcome: Outcome) -> bool {
    matches!(outcome, Outcome::Changed | Outcome::Unchanged)
}
