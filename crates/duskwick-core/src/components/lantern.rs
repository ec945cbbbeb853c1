//! Lantern components: the lantern state, the light it drives, its dial.

use duskwick_logic::config::LanternTuning;
use duskwick_logic::lantern::{DialReading, LanternState, LightRadii};
use serde::{Deserialize, Serialize};

/// Lantern component - player-held, fuelled by oil from the inventory
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lantern {
    pub state: LanternState,
    /// Set once the start phase has run for this lantern
    pub started: bool,
}

impl Lantern {
    pub fn new(tuning: &LanternTuning) -> Self {
        Self {
            state: LanternState::new(tuning),
            started: false,
        }
    }

    pub fn is_on(&self) -> bool {
        self.state.is_on
    }
}

/// Point light read by the host renderer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PointLight {
    pub light: LightRadii,
}

impl PointLight {
    pub fn off(tuning: &LanternTuning) -> Self {
        Self {
            light: LightRadii::off(tuning),
        }
    }
}

/// Fuel dial shown in the HUD
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LanternDial {
    pub reading: DialReading,
    pub adjusting: bool,
}

impl Default for LanternDial {
    fn default() -> Self {
        Self {
            reading: DialReading::Off,
            adjusting: false,
        }
    }
}
