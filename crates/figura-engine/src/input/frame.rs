use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState, Modifiers};

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held keys, modifiers, focus).
/// `InputFrame` provides events and transition sets for the current frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Keys pressed this frame (first press only, no repeats).
    pub keys_pressed: HashSet<Key>,

    /// Keys released this frame.
    pub keys_released: HashSet<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    /// Press events this frame in arrival order, including auto-repeats.
    ///
    /// Each stroke carries the modifiers held when it arrived, which may differ
    /// from the end-of-frame `InputState::modifiers`.
    /// Use this for step-per-stroke controls; use `keys_pressed` for toggles.
    pub fn key_strokes(&self) -> impl Iterator<Item = (Key, Modifiers)> + '_ {
        self.events.iter().filter_map(|ev| match ev {
            InputEvent::Key {
                key,
                state: KeyState::Pressed,
                modifiers,
                ..
            } => Some((*key, *modifiers)),
            _ => None,
        })
    }

    pub fn pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }
}
