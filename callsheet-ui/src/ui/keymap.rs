//! Key patterns and per-layer binding tables.

use super::action_id::ActionId;
use super::input::{InputEvent, KeyCode};

/// What a binding matches. Character patterns ignore Shift so that `K`
/// matches however the terminal reports the capital.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPattern {
    Char(char),
    Key(KeyCode),
    Ctrl(char),
    Alt(char),
    CtrlKey(KeyCode),
    ShiftKey(KeyCode),
}

impl KeyPattern {
    pub fn matches(&self, event: &InputEvent) -> bool {
        let m = event.modifiers;
        match (*self, event.key) {
            (KeyPattern::Char(c), KeyCode::Char(k)) => c == k && !m.ctrl && !m.alt,
            (KeyPattern::Ctrl(c), KeyCode::Char(k)) => m.ctrl && !m.alt && c.eq_ignore_ascii_case(&k),
            (KeyPattern::Alt(c), KeyCode::Char(k)) => m.alt && !m.ctrl && c == k,
            (KeyPattern::Key(code), key) => code == key && !m.ctrl && !m.alt && !m.shift,
            (KeyPattern::CtrlKey(code), key) => code == key && m.ctrl,
            (KeyPattern::ShiftKey(code), key) => code == key && m.shift && !m.ctrl,
            _ => false,
        }
    }

    /// Notation shown in help, in the same form the bindings file uses.
    pub fn display(&self) -> String {
        match self {
            KeyPattern::Char(' ') => "Space".to_string(),
            KeyPattern::Char(c) => c.to_string(),
            KeyPattern::Key(code) => key_name(*code),
            KeyPattern::Ctrl(c) => format!("Ctrl+{}", c),
            KeyPattern::Alt(c) => format!("Alt+{}", c),
            KeyPattern::CtrlKey(code) => format!("Ctrl+{}", key_name(*code)),
            KeyPattern::ShiftKey(code) => format!("Shift+{}", key_name(*code)),
        }
    }
}

fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".into(),
        KeyCode::Escape => "Esc".into(),
        KeyCode::Backspace => "Backspace".into(),
        KeyCode::Tab => "Tab".into(),
        KeyCode::Up => "Up".into(),
        KeyCode::Down => "Down".into(),
        KeyCode::Left => "Left".into(),
        KeyCode::Right => "Right".into(),
        KeyCode::Home => "Home".into(),
        KeyCode::End => "End".into(),
        KeyCode::PageUp => "PgUp".into(),
        KeyCode::PageDown => "PgDn".into(),
        KeyCode::Insert => "Ins".into(),
        KeyCode::Delete => "Del".into(),
        KeyCode::F(n) => format!("F{}", n),
    }
}

#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub pattern: KeyPattern,
    pub action: ActionId,
    pub description: &'static str,
}

/// Ordered binding table; the first matching binding wins.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<KeyBinding>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bindings(bindings: Vec<KeyBinding>) -> Self {
        Self { bindings }
    }

    /// Builder form used by tests: bind a plain character.
    pub fn bind(mut self, key: char, action: ActionId, description: &'static str) -> Self {
        self.bindings.push(KeyBinding { pattern: KeyPattern::Char(key), action, description });
        self
    }

    pub fn bind_key(mut self, key: KeyCode, action: ActionId, description: &'static str) -> Self {
        self.bindings.push(KeyBinding { pattern: KeyPattern::Key(key), action, description });
        self
    }

    pub fn lookup(&self, event: &InputEvent) -> Option<ActionId> {
        self.bindings.iter().find(|b| b.pattern.matches(event)).map(|b| b.action)
    }

    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// First key bound to `action`, as shown to the user.
    pub fn key_for(&self, action: ActionId) -> Option<String> {
        self.bindings.iter().find(|b| b.action == action).map(|b| b.pattern.display())
    }

    /// Footer hint such as `[Enter] Edit  [a] Add`, skipping unbound actions
    /// so user overrides show their own keys.
    pub fn hint_line(&self, entries: &[(ActionId, &str)]) -> String {
        entries
            .iter()
            .filter_map(|(action, label)| self.key_for(*action).map(|key| format!("[{}] {}", key, label)))
            .collect::<Vec<_>>()
            .join("  ")
    }
}
