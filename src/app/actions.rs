//! Control-action table and the built-in default bindings.
//!
//! Registered actions take precedence. Input without a registered action falls through to
//! [`default_intent`]: PageUp slows the loop down, PageDown speeds it up, and the exit key or
//! Ctrl+C stops it.

use crate::app::state::{Intent, LoopState};
use crate::input::{InputEvent, KeyBinding};
use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// A control action: inspects the loop state and returns what the loop should do.
pub type Action = Box<dyn FnMut(&LoopState) -> Intent + Send>;

/// Key binding to action lookup.
#[derive(Default)]
pub struct ActionTable {
    actions: HashMap<KeyBinding, Action>,
}

impl ActionTable {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Register `action` for `binding`, replacing any previous action.
    pub fn bind<F>(&mut self, binding: impl Into<KeyBinding>, action: F) -> &mut Self
    where
        F: FnMut(&LoopState) -> Intent + Send + 'static,
    {
        let binding = binding.into();
        if self.actions.insert(binding, Box::new(action)).is_some() {
            log::debug!("replaced action for {binding:?}");
        }
        self
    }

    pub fn unbind(&mut self, binding: impl Into<KeyBinding>) -> bool {
        self.actions.remove(&binding.into()).is_some()
    }

    pub fn contains(&self, binding: impl Into<KeyBinding>) -> bool {
        self.actions.contains_key(&binding.into())
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Invoke the action bound to `event`. `None` means nothing is bound.
    pub fn resolve(&mut self, event: &InputEvent, state: &LoopState) -> Option<Intent> {
        let binding = event.binding()?;
        let action = self.actions.get_mut(&binding)?;
        Some(action(state))
    }
}

/// Built-in bindings applied when no registered action matches.
pub fn default_intent(event: &InputEvent, exit_key: KeyCode) -> Intent {
    let Some(binding) = event.binding() else {
        return Intent::Continue;
    };
    match (binding.code(), binding.modifiers()) {
        (code, modifiers) if code == exit_key && modifiers.is_empty() => Intent::Stop,
        (KeyCode::Char('c'), modifiers) if modifiers == KeyModifiers::CONTROL => Intent::Stop,
        (KeyCode::PageUp, _) => Intent::Slower,
        (KeyCode::PageDown, _) => Intent::Faster,
        _ => Intent::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DriveConfig;
    use ratatui::crossterm::event::KeyEvent;
    use std::time::Duration;

    #[test]
    fn registered_action_is_invoked_with_state() {
        let mut table = ActionTable::new();
        table.bind(KeyBinding::char('+'), |state: &LoopState| {
            Intent::SetTick(state.tick() * 2)
        });
        let state = LoopState::new(&DriveConfig::default().with_tick(Duration::from_millis(20)));

        let intent = table.resolve(&InputEvent::key(KeyCode::Char('+')), &state);
        assert_eq!(intent, Some(Intent::SetTick(Duration::from_millis(40))));
    }

    #[test]
    fn unbound_keys_and_no_input_fall_through() {
        let mut table = ActionTable::new();
        table.bind(KeyCode::F(1), |_: &LoopState| Intent::Stop);
        let state = LoopState::new(&DriveConfig::default());

        assert_eq!(table.resolve(&InputEvent::NoInput, &state), None);
        assert_eq!(
            table.resolve(&InputEvent::key(KeyCode::Char('x')), &state),
            None
        );
        assert!(table.contains(KeyCode::F(1)));
        assert!(table.unbind(KeyCode::F(1)));
        assert!(table.is_empty());
    }

    #[test]
    fn actions_can_keep_their_own_state() {
        let mut table = ActionTable::new();
        let mut presses = 0;
        table.bind('s', move |_: &LoopState| {
            presses += 1;
            if presses >= 2 {
                Intent::Stop
            } else {
                Intent::Continue
            }
        });
        let state = LoopState::new(&DriveConfig::default());
        let press = InputEvent::key(KeyCode::Char('s'));

        assert_eq!(table.resolve(&press, &state), Some(Intent::Continue));
        assert_eq!(table.resolve(&press, &state), Some(Intent::Stop));
    }

    #[test]
    fn default_bindings() {
        let exit = KeyCode::Delete;
        assert_eq!(default_intent(&InputEvent::NoInput, exit), Intent::Continue);
        assert_eq!(
            default_intent(&InputEvent::key(KeyCode::Delete), exit),
            Intent::Stop
        );
        assert_eq!(
            default_intent(
                &InputEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
                exit
            ),
            Intent::Stop
        );
        assert_eq!(
            default_intent(&InputEvent::key(KeyCode::PageUp), exit),
            Intent::Slower
        );
        assert_eq!(
            default_intent(&InputEvent::key(KeyCode::PageDown), exit),
            Intent::Faster
        );
        assert_eq!(
            default_intent(&InputEvent::key(KeyCode::Char('q')), exit),
            Intent::Continue
        );
    }

    #[test]
    fn exit_key_is_configurable() {
        assert_eq!(
            default_intent(&InputEvent::key(KeyCode::Char('q')), KeyCode::Char('q')),
            Intent::Stop
        );
        assert_eq!(
            default_intent(&InputEvent::key(KeyCode::Delete), KeyCode::Char('q')),
            Intent::Continue
        );
    }
}
