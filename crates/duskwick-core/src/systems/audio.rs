//! Sound cues - one-shot events queued for the host audio layer to play

use duskwick_logic::constants::sound_events;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    LanternLight,
    LanternExtinguish,
}

impl SoundCue {
    /// Event path understood by the audio middleware
    pub fn event_path(&self) -> &'static str {
        match self {
            SoundCue::LanternLight => sound_events::LANTERN_LIGHT,
            SoundCue::LanternExtinguish => sound_events::LANTERN_EXTINGUISH,
        }
    }
}

/// Pending one-shots, drained by the host once per frame
#[derive(Debug, Clone, Default)]
pub struct SoundQueue {
    cues: Vec<SoundCue>,
}

impl SoundQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play_one_shot(&mut self, cue: SoundCue) {
        log::debug!("Queued sound {}", cue.event_path());
        self.cues.push(cue);
    }

    pub fn drain(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.cues)
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }
}
