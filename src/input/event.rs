//! Input event model shared by painters and the drive loop.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The latest input observed by the drive loop for one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Nothing was queued when the loop polled.
    NoInput,
    /// A key press.
    Key(KeyEvent),
}

impl InputEvent {
    /// Shorthand for an unmodified key press.
    pub fn key(code: KeyCode) -> Self {
        Self::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// Key code of the event, if it is a key press.
    pub fn code(&self) -> Option<KeyCode> {
        match self {
            Self::NoInput => None,
            Self::Key(key) => Some(key.code),
        }
    }

    /// Action-table lookup key for this event.
    pub fn binding(&self) -> Option<KeyBinding> {
        match self {
            Self::NoInput => None,
            Self::Key(key) => Some(KeyBinding::new(key.code, key.modifiers)),
        }
    }

    pub fn is_no_input(&self) -> bool {
        matches!(self, Self::NoInput)
    }
}

impl Default for InputEvent {
    fn default() -> Self {
        Self::NoInput
    }
}

/// Key code plus modifiers used to register control actions.
///
/// Character keys ignore SHIFT: terminals report `G` as `Char('G')` with SHIFT set, and the
/// character already carries the case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    code: KeyCode,
    modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        let modifiers = match code {
            KeyCode::Char(_) => modifiers.difference(KeyModifiers::SHIFT),
            _ => modifiers,
        };
        Self { code, modifiers }
    }

    /// Binding for a key without modifiers.
    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Binding for a printable character.
    pub fn char(ch: char) -> Self {
        Self::plain(KeyCode::Char(ch))
    }

    /// Binding for `Ctrl` + character.
    pub fn ctrl(ch: char) -> Self {
        Self::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    pub fn code(&self) -> KeyCode {
        self.code
    }

    pub fn modifiers(&self) -> KeyModifiers {
        self.modifiers
    }
}

impl From<KeyCode> for KeyBinding {
    fn from(code: KeyCode) -> Self {
        Self::plain(code)
    }
}

impl From<char> for KeyBinding {
    fn from(ch: char) -> Self {
        Self::char(ch)
    }
}
