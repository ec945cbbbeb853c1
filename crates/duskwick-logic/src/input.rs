//! Per-frame input snapshot filled by the host platform layer.
//!
//! Behaviors only ever see edges (pressed / released this frame) and the
//! mouse scroll delta; polling a live device is the host's job.

use serde::{Deserialize, Serialize};

/// Keys the gameplay behaviors can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Space,
    X,
    LeftAlt,
}

/// Input edges and scroll for a single frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputFrame {
    /// Keys that went down this frame
    pub pressed: Vec<Key>,
    /// Keys that went up this frame
    pub released: Vec<Key>,
    /// Mouse scroll wheel delta along y (positive = away from the user)
    pub scroll_y: f32,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(mut self, key: Key) -> Self {
        self.pressed.push(key);
        self
    }

    pub fn release(mut self, key: Key) -> Self {
        self.released.push(key);
        self
    }

    pub fn scroll(mut self, delta: f32) -> Self {
        self.scroll_y += delta;
        self
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    pub fn key_up(&self, key: Key) -> bool {
        self.released.contains(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty() && self.released.is_empty() && self.scroll_y == 0.0
    }
}
