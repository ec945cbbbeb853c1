//! Jump components.

use duskwick_logic::config::JumpTuning;
use duskwick_logic::input::Key;
use duskwick_logic::jump::JumpState;
use serde::{Deserialize, Serialize};

/// Jumper component - per-character jump tuning and state
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Jumper {
    pub state: JumpState,
    pub tuning: JumpTuning,
    pub jump_key: Key,
}

impl Jumper {
    pub fn new(tuning: JumpTuning, jump_key: Key) -> Self {
        Self {
            state: JumpState::new(),
            tuning,
            jump_key,
        }
    }

    pub fn is_jumping(&self) -> bool {
        self.state.is_jumping
    }
}

/// Ground contact, written by the host physics engine
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroundSensor {
    pub activated: bool,
}
