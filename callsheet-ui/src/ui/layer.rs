use std::collections::{HashMap, HashSet};

use super::action_id::ActionId;
use super::keymap::Keymap;
use super::InputEvent;

/// A named binding table. Unmatched keys fall through a transparent layer
/// and stop at an opaque one.
pub struct Layer {
    pub name: &'static str,
    pub keymap: Keymap,
    pub transparent: bool,
}

pub enum LayerResult {
    Action(ActionId),
    /// An opaque layer stopped the event without a binding for it
    Blocked,
    /// Nothing matched and every layer let the event through
    Unresolved,
}

/// Active layers, resolved top to bottom. Slot 0 holds `global`, slot 1 the
/// active pane's layer, and anything above is a mode layer such as
/// `text_edit`.
pub struct LayerStack {
    layers: HashMap<&'static str, Layer>,
    active: Vec<&'static str>,
}

impl LayerStack {
    pub fn new(layers: Vec<Layer>) -> Self {
        Self {
            layers: layers.into_iter().map(|l| (l.name, l)).collect(),
            active: Vec::new(),
        }
    }

    pub fn resolve(&self, event: &InputEvent) -> LayerResult {
        for name in self.active.iter().rev() {
            let Some(layer) = self.layers.get(name) else {
                continue;
            };
            if let Some(action) = layer.keymap.lookup(event) {
                return LayerResult::Action(action);
            }
            if !layer.transparent {
                return LayerResult::Blocked;
            }
        }
        LayerResult::Unresolved
    }

    pub fn push(&mut self, name: &'static str) {
        if !self.active.contains(&name) {
            self.active.push(name);
        }
    }

    pub fn pop(&mut self, name: &'static str) {
        self.active.retain(|n| *n != name);
    }

    /// Replace slot 1 with `name`, keeping global below and mode layers above.
    /// An unknown layer name leaves slot 1 empty.
    pub fn set_pane_layer(&mut self, name: &'static str) {
        let modes: Vec<&'static str> = self.active.iter().skip(2).copied().collect();
        self.active.truncate(1);
        if self.layers.contains_key(name) {
            self.active.push(name);
        }
        self.active.extend(modes);
    }

    pub fn has_layer(&self, name: &str) -> bool {
        self.active.iter().any(|n| *n == name)
    }

    /// Bindings reachable right now, highest priority first, one row per
    /// action: `(action, description, key)`.
    pub fn collect_commands(&self) -> Vec<(ActionId, &'static str, String)> {
        let mut seen = HashSet::new();
        let mut commands = Vec::new();
        for name in self.active.iter().rev() {
            let Some(layer) = self.layers.get(name) else {
                continue;
            };
            for binding in layer.keymap.bindings() {
                if seen.insert(binding.action) {
                    commands.push((binding.action, binding.description, binding.pattern.display()));
                }
            }
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::action_id::{GlobalActionId, ModeActionId};
    use crate::ui::input::KeyCode;

    fn make_layer(name: &'static str, key: char, transparent: bool) -> Layer {
        Layer {
            name,
            keymap: Keymap::new().bind(key, ActionId::Global(GlobalActionId::Quit), "test"),
            transparent,
        }
    }

    fn make_event(ch: char) -> InputEvent {
        InputEvent::key(KeyCode::Char(ch))
    }

    #[test]
    fn push_deduplicates() {
        let mut stack = LayerStack::new(vec![make_layer("test", 'q', true)]);
        stack.push("test");
        stack.push("test");
        assert_eq!(stack.active.len(), 1);
        stack.pop("test");
        assert!(!stack.has_layer("test"));
    }

    #[test]
    fn empty_stack_is_unresolved() {
        let stack = LayerStack::new(vec![]);
        assert!(matches!(stack.resolve(&make_event('q')), LayerResult::Unresolved));
    }

    #[test]
    fn opaque_layer_blocks() {
        let mut stack = LayerStack::new(vec![make_layer("global", 'x', true), make_layer("opaque", 'q', false)]);
        stack.push("global");
        stack.push("opaque");
        assert!(matches!(stack.resolve(&make_event('x')), LayerResult::Blocked));
    }

    #[test]
    fn transparent_layer_falls_through() {
        let mut stack = LayerStack::new(vec![make_layer("global", 'x', true), make_layer("pane", 'q', true)]);
        stack.push("global");
        stack.push("pane");
        assert!(matches!(stack.resolve(&make_event('x')), LayerResult::Action(_)));
        assert!(matches!(stack.resolve(&make_event('z')), LayerResult::Unresolved));
    }

    #[test]
    fn set_pane_layer_keeps_modes_on_top() {
        let mut stack = LayerStack::new(vec![
            make_layer("global", 'g', true),
            make_layer("header", 'a', true),
            make_layer("list", 'b', true),
            Layer {
                name: "text_edit",
                keymap: Keymap::new().bind_key(
                    KeyCode::Enter,
                    ActionId::Mode(ModeActionId::TextConfirm),
                    "confirm",
                ),
                transparent: false,
            },
        ]);
        stack.push("global");
        stack.push("header");
        stack.push("text_edit");

        stack.set_pane_layer("list");
        assert_eq!(stack.active, vec!["global", "list", "text_edit"]);
    }

    #[test]
    fn commands_are_deduplicated() {
        let mut stack = LayerStack::new(vec![make_layer("global", 'q', true), make_layer("pane", 'x', true)]);
        stack.push("global");
        stack.push("pane");
        let commands = stack.collect_commands();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].2, "x");
    }
}
