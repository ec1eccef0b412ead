use std::any::Any;

use super::action_id::ActionId;
use super::{InputEvent, Keymap, MouseEvent, Rect, RenderBuf};
use crate::state::AppState;

pub use crate::action::{Action, NavAction, NavIntent, SessionAction};

/// A screen of the editor: one sheet section, or a modal on top of one.
pub trait Pane {
    fn id(&self) -> &'static str;

    /// Keybinding layer used while this pane is active. Panes that edit the
    /// same kind of table share a layer.
    fn layer(&self) -> &'static str {
        self.id()
    }

    /// Title shown in the pane tabs and help
    fn title(&self) -> &'static str {
        self.id()
    }

    /// Handle a resolved action ID from the layer system
    fn handle_action(&mut self, action: ActionId, event: &InputEvent, state: &AppState) -> Action;

    /// Handle keys no layer claimed, or that an opaque layer blocked
    fn handle_raw_input(&mut self, _event: &InputEvent, _state: &AppState) -> Action {
        Action::None
    }

    /// Area is the full terminal area, the same one `render` receives.
    fn handle_mouse(&mut self, _event: &MouseEvent, _area: Rect, _state: &AppState) -> Action {
        Action::None
    }

    fn render(&mut self, area: Rect, buf: &mut RenderBuf, state: &AppState);

    fn keymap(&self) -> &Keymap;

    fn on_enter(&mut self, _state: &AppState) {}

    fn on_exit(&mut self, _state: &AppState) {}

    /// Called every loop turn; returns actions to dispatch.
    fn tick(&mut self, _state: &AppState) -> Vec<Action> {
        vec![]
    }

    /// True while an inline editor owns the keyboard. The runtime drops the
    /// `text_edit` layer once this turns false.
    fn is_editing(&self) -> bool {
        false
    }

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Owns every pane; one is active, and modal panes remember where they were
/// pushed from.
pub struct PaneManager {
    panes: Vec<Box<dyn Pane>>,
    active_index: usize,
    stack: Vec<usize>,
}

impl PaneManager {
    pub fn new(initial_pane: Box<dyn Pane>) -> Self {
        Self { panes: vec![initial_pane], active_index: 0, stack: Vec::new() }
    }

    pub fn add_pane(&mut self, pane: Box<dyn Pane>) {
        self.panes.push(pane);
    }

    pub fn active(&self) -> &dyn Pane {
        self.panes[self.active_index].as_ref()
    }

    pub fn active_mut(&mut self) -> &mut dyn Pane {
        self.panes[self.active_index].as_mut()
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.panes.iter().position(|p| p.id() == id)
    }

    fn activate(&mut self, index: usize, state: &AppState) {
        self.panes[self.active_index].on_exit(state);
        self.active_index = index;
        self.panes[self.active_index].on_enter(state);
    }

    /// Flat navigation: switch panes and forget any modal stack.
    pub fn switch_to(&mut self, id: &str, state: &AppState) -> bool {
        let Some(index) = self.index_of(id) else {
            log::warn!(target: "ui::pane", "switch to unknown pane '{}'", id);
            return false;
        };
        if index != self.active_index {
            self.activate(index, state);
        }
        self.stack.clear();
        true
    }

    /// Open `id` on top of the current pane.
    pub fn push_to(&mut self, id: &str, state: &AppState) -> bool {
        let Some(index) = self.index_of(id) else {
            log::warn!(target: "ui::pane", "push of unknown pane '{}'", id);
            return false;
        };
        self.stack.push(self.active_index);
        self.activate(index, state);
        true
    }

    pub fn pop(&mut self, state: &AppState) -> bool {
        match self.stack.pop() {
            Some(prev) => {
                self.activate(prev, state);
                true
            }
            None => false,
        }
    }

    /// True while a modal pane sits on top of a section pane
    pub fn is_modal(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn process_nav(&mut self, action: &Action, state: &AppState) {
        match action {
            Action::Nav(NavAction::SwitchPane(id)) => {
                self.switch_to(id, state);
            }
            Action::Nav(NavAction::PushPane(id)) => {
                self.push_to(id, state);
            }
            Action::Nav(NavAction::PopPane) => {
                self.pop(state);
            }
            _ => {}
        }
    }

    pub fn process_nav_intents(&mut self, intents: &[NavIntent], state: &AppState) {
        for intent in intents {
            match intent {
                NavIntent::SwitchTo(id) => {
                    self.switch_to(id, state);
                }
                NavIntent::PushTo(id) => {
                    self.push_to(id, state);
                }
                NavIntent::Pop => {
                    self.pop(state);
                }
                NavIntent::ConditionalPop(pane_id) => {
                    if self.active().id() == *pane_id {
                        self.pop(state);
                    }
                }
                NavIntent::PopOrSwitchTo(fallback) => {
                    if !self.pop(state) {
                        self.switch_to(fallback, state);
                    }
                }
            }
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut RenderBuf, state: &AppState) {
        self.panes[self.active_index].render(area, buf, state);
    }

    /// Mutable access to a pane of a known concrete type.
    pub fn get_pane_mut<T: 'static>(&mut self, id: &str) -> Option<&mut T> {
        self.panes
            .iter_mut()
            .find(|p| p.id() == id)
            .and_then(|p| p.as_any_mut().downcast_mut::<T>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::test_state;

    struct Stub {
        id: &'static str,
        keymap: Keymap,
        entered: usize,
    }

    impl Stub {
        fn boxed(id: &'static str) -> Box<dyn Pane> {
            Box::new(Self { id, keymap: Keymap::new(), entered: 0 })
        }
    }

    impl Pane for Stub {
        fn id(&self) -> &'static str {
            self.id
        }
        fn handle_action(&mut self, _: ActionId, _: &InputEvent, _: &AppState) -> Action {
            Action::None
        }
        fn render(&mut self, _: Rect, _: &mut RenderBuf, _: &AppState) {}
        fn keymap(&self) -> &Keymap {
            &self.keymap
        }
        fn on_enter(&mut self, _: &AppState) {
            self.entered += 1;
        }
        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    fn manager() -> PaneManager {
        let mut panes = PaneManager::new(Stub::boxed("header"));
        panes.add_pane(Stub::boxed("crew"));
        panes.add_pane(Stub::boxed("help"));
        panes
    }

    #[test]
    fn push_and_pop_return_to_origin() {
        let state = test_state();
        let mut panes = manager();
        panes.switch_to("crew", &state);
        assert!(panes.push_to("help", &state));
        assert!(panes.is_modal());
        assert!(panes.pop(&state));
        assert_eq!(panes.active().id(), "crew");
        assert!(!panes.pop(&state));
    }

    #[test]
    fn switch_clears_modal_stack() {
        let state = test_state();
        let mut panes = manager();
        panes.push_to("help", &state);
        panes.switch_to("crew", &state);
        assert!(!panes.is_modal());
    }

    #[test]
    fn conditional_pop_checks_active_pane() {
        let state = test_state();
        let mut panes = manager();
        panes.push_to("help", &state);
        panes.process_nav_intents(&[NavIntent::ConditionalPop("confirm")], &state);
        assert_eq!(panes.active().id(), "help");
        panes.process_nav_intents(&[NavIntent::ConditionalPop("help")], &state);
        assert_eq!(panes.active().id(), "header");
    }

    #[test]
    fn unknown_pane_is_ignored() {
        let state = test_state();
        let mut panes = manager();
        assert!(!panes.switch_to("mixer", &state));
        assert_eq!(panes.active().id(), "header");
    }

    #[test]
    fn downcast_by_id() {
        let state = test_state();
        let mut panes = manager();
        panes.switch_to("crew", &state);
        assert_eq!(panes.get_pane_mut::<Stub>("crew").map(|s| s.entered), Some(1));
    }
}
