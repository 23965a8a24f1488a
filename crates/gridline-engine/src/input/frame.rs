use std::collections::HashSet;

use super::types::{ButtonEvent, InputEvent, Key, WheelEvent};

/// What happened since the last frame, as opposed to what is held now
/// (`InputState`).
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Every event, in arrival order.
    pub events: Vec<InputEvent>,
    /// Keys that went down, auto-repeat excluded.
    pub keys_pressed: HashSet<Key>,
    /// Button presses, in order. Releases are not recorded.
    pub clicks: Vec<ButtonEvent>,
    pub wheel: Vec<WheelEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.clicks.clear();
        self.wheel.clear();
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
