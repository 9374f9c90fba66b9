//=========================================================================
// Input Mapper
//=========================================================================
//
// Maps raw input events to game inputs via key bindings.
//
// Architecture:
//   InputEvent → held-key tracking → KeyBinding lookup → GameInput
//
// Keys are edge-triggered: OS key repeat produces repeated KeyDown
// events without a KeyUp in between, and only the first one counts.
// Several keys may share the jump binding; JumpPressed fires when the
// first is pressed, JumpReleased when the last is let go.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{HashMap, HashSet};

use log::trace;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, MouseButton};
use super::GameInput;

//=== KeyBinding ==========================================================

/// What a bound key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyBinding {
    Jump,
    Pause,
}

//=== InputMapper =========================================================

pub struct InputMapper {
    key_bindings: HashMap<KeyCode, KeyBinding>,
    pointer_button: MouseButton,
    keys_down: HashSet<KeyCode>,
}

impl InputMapper {
    /// Creates a mapper with no key bindings. The left button drives the
    /// pointer.
    pub fn new() -> Self {
        Self {
            key_bindings: HashMap::new(),
            pointer_button: MouseButton::Left,
            keys_down: HashSet::new(),
        }
    }

    /// Space, ArrowUp and W jump; Escape and P pause.
    pub fn with_default_bindings() -> Self {
        let mut mapper = Self::new();
        mapper.bind_key(KeyCode::Space, KeyBinding::Jump);
        mapper.bind_key(KeyCode::ArrowUp, KeyBinding::Jump);
        mapper.bind_key(KeyCode::KeyW, KeyBinding::Jump);
        mapper.bind_key(KeyCode::Escape, KeyBinding::Pause);
        mapper.bind_key(KeyCode::KeyP, KeyBinding::Pause);
        mapper
    }

    //--- Binding API ------------------------------------------------------

    pub fn bind_key(&mut self, key: KeyCode, binding: KeyBinding) {
        self.key_bindings.insert(key, binding);
    }

    pub fn unbind_key(&mut self, key: KeyCode) {
        self.key_bindings.remove(&key);
    }

    pub fn set_pointer_button(&mut self, button: MouseButton) {
        self.pointer_button = button;
    }

    //--- Event Mapping ----------------------------------------------------

    /// Maps every event of a batch, in order, appending to `out`.
    pub fn map_batch(&mut self, events: &[InputEvent], out: &mut Vec<GameInput>) {
        out.extend(events.iter().filter_map(|event| self.map_event(event)));
    }

    /// Maps one event. Unbound keys, repeats and cursor motion yield `None`.
    pub fn map_event(&mut self, event: &InputEvent) -> Option<GameInput> {
        let input = match *event {
            InputEvent::KeyDown(key) => self.key_down(key),
            InputEvent::KeyUp(key) => self.key_up(key),
            InputEvent::MouseButtonDown { button, x, y } if button == self.pointer_button => {
                Some(GameInput::PointerDown(x, y))
            }
            InputEvent::MouseButtonUp { button, x, y } if button == self.pointer_button => {
                Some(GameInput::PointerUp(x, y))
            }
            _ => None,
        };

        if let Some(input) = input {
            trace!(target: "core", "{:?} → {:?}", event, input);
        }
        input
    }

    //--- Internal Helpers -------------------------------------------------

    fn key_down(&mut self, key: KeyCode) -> Option<GameInput> {
        let binding = *self.key_bindings.get(&key)?;
        let jump_was_held = self.jump_held();

        if !self.keys_down.insert(key) {
            return None;
        }

        match binding {
            KeyBinding::Jump if !jump_was_held => Some(GameInput::JumpPressed),
            KeyBinding::Jump => None,
            KeyBinding::Pause => Some(GameInput::PauseToggled),
        }
    }

    fn key_up(&mut self, key: KeyCode) -> Option<GameInput> {
        if !self.keys_down.remove(&key) {
            return None;
        }

        match self.key_bindings.get(&key) {
            Some(KeyBinding::Jump) if !self.jump_held() => Some(GameInput::JumpReleased),
            _ => None,
        }
    }

    fn jump_held(&self) -> bool {
        self.keys_down
            .iter()
            .any(|k| self.key_bindings.get(k) == Some(&KeyBinding::Jump))
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::with_default_bindings()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
