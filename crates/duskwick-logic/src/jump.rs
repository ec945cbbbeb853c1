//! Pure jump logic: takeoff decision, gravity shaping, landing, records.
//!
//! The jump gives a "video game" arc: gravity is scaled by
//! `low_jump_modifier` while rising and by `fall_multiplier` while falling,
//! so the ascent is snappy and the descent floaty (or heavy, depending on
//! tuning). Velocity integration and ground contact belong to the host
//! physics engine; these functions only shape the velocity it integrates.

use serde::{Deserialize, Serialize};

use crate::config::JumpTuning;
use crate::math::Vec2;

/// Per-character jump bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpState {
    pub is_jumping: bool,
    /// Height the last jump started from
    pub jump_start_y: f32,
    /// Seconds since the last takeoff
    pub time_since_last_jump: f32,
}

impl Default for JumpState {
    fn default() -> Self {
        Self {
            is_jumping: false,
            jump_start_y: 0.0,
            time_since_last_jump: f32::INFINITY,
        }
    }
}

impl JumpState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grounded, the jump key went down, and the cooldown has elapsed.
    pub fn can_jump(&self, grounded: bool, jump_pressed: bool, tuning: &JumpTuning) -> bool {
        grounded && jump_pressed && self.time_since_last_jump >= tuning.time_between_jumps
    }

    /// Take off from height `y`; returns the new velocity.
    ///
    /// The takeoff replaces the whole velocity: straight up at
    /// `vertical_takeoff`, any horizontal motion is dropped.
    pub fn jump(&mut self, y: f32, tuning: &JumpTuning) -> Vec2 {
        self.jump_start_y = y;
        self.is_jumping = true;
        self.time_since_last_jump = 0.0;
        Vec2::UP * tuning.vertical_takeoff
    }

    pub fn tick_cooldown(&mut self, dt: f32) {
        self.time_since_last_jump += dt;
    }

    /// Clear the jumping flag once the character is grounded and falling.
    ///
    /// Returns true on the frame the landing is detected.
    pub fn update_landed(&mut self, grounded: bool, vy: f32) -> bool {
        if grounded && vy < 0.0 {
            let was_jumping = self.is_jumping;
            self.is_jumping = false;
            return was_jumping;
        }
        false
    }

    /// Height gained above the takeoff point.
    pub fn height_above_start(&self, y: f32) -> f32 {
        y - self.jump_start_y
    }
}

/// Extra vertical velocity for this physics step, on top of the host's own
/// `gravity_y * gravity_scaled`.
///
/// Falling uses `fall_multiplier`, rising uses `low_jump_modifier`; a
/// character with zero vertical velocity is left to the host gravity.
pub fn gravity_delta(vy: f32, dt: f32, tuning: &JumpTuning) -> f32 {
    if vy < 0.0 {
        tuning.gravity_y * (tuning.fall_multiplier - tuning.gravity_scaled) * dt
    } else if vy > 0.0 {
        tuning.gravity_y * (tuning.low_jump_modifier - tuning.gravity_scaled) * dt
    } else {
        0.0
    }
}

/// New highest-jump record, if `y` beats `record` while jumping.
pub fn new_height_record(record: f32, y: f32, is_jumping: bool) -> Option<f32> {
    if is_jumping && y > record {
        Some(y)
    } else {
        None
    }
}

/// Vertical velocity the host physics adds by itself this step.
pub fn host_gravity_delta(dt: f32, tuning: &JumpTuning) -> f32 {
    tuning.gravity_y * tuning.gravity_scaled * dt
}

/// Closed-form apex height above takeoff.
///
/// Rising gravity totals `gravity_y * low_jump_modifier` once the host's
/// share is added back.
pub fn apex_height(tuning: &JumpTuning) -> f32 {
    let g = -tuning.gravity_y * tuning.low_jump_modifier;
    if g <= 0.0 {
        return f32::INFINITY;
    }
    tuning.vertical_takeoff * tuning.vertical_takeoff / (2.0 * g)
}
