//! Character components: who controls an entity and whether it listens.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Controller {
    Player,
    Ai,
}

/// Character component - shared gate for every behavior on the entity
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Character {
    pub controller: Controller,
    /// Locked characters ignore all input (cutscenes, dialogue, death)
    pub locked: bool,
    /// Per-character input switch
    pub handle_input: bool,
}

impl Character {
    pub fn player() -> Self {
        Self {
            controller: Controller::Player,
            locked: false,
            handle_input: true,
        }
    }

    pub fn ai() -> Self {
        Self {
            controller: Controller::Ai,
            locked: false,
            handle_input: true,
        }
    }

    pub fn is_player(&self) -> bool {
        self.controller == Controller::Player
    }

    pub fn accepts_input(&self) -> bool {
        self.handle_input && !self.locked
    }
}
