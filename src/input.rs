//! Keyboard state polled by the scene once per frame.

use std::collections::HashSet;

use winit::{event::ElementState, keyboard::KeyCode};

/// Set of keys currently held down.
#[derive(Clone, Debug, Default)]
pub struct KeyboardState {
    pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a key event from the window loop.
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => self.press(key),
            ElementState::Released => self.release(key),
        }
    }

    pub fn press(&mut self, key: KeyCode) {
        self.pressed.insert(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.pressed.remove(&key);
    }

    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Releases every key, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}
