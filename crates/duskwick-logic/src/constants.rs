//! Gameplay constants: lantern radii, flicker bounds, drain rates, physics.
//!
//! These are the default values behind [`crate::config::Tuning`]. The
//! lantern logic assumes every inner-radius limit is one quarter of the
//! matching outer-radius limit.

pub mod lantern {
    /// Outer radius is always this many times the inner radius at rest.
    pub const OUTER_RADIUS_FACTOR: f32 = 4.0;

    pub const DEFAULT_INNER_RADIUS: f32 = 1.5;
    pub const MIN_INNER_RADIUS: f32 = 0.5;
    pub const MAX_INNER_RADIUS: f32 = 2.0;

    pub const DEFAULT_OUTER_RADIUS: f32 = DEFAULT_INNER_RADIUS * OUTER_RADIUS_FACTOR;
    pub const MIN_OUTER_RADIUS: f32 = MIN_INNER_RADIUS * OUTER_RADIUS_FACTOR;
    pub const MAX_OUTER_RADIUS: f32 = MAX_INNER_RADIUS * OUTER_RADIUS_FACTOR;

    /// Radii the light settles at while the lantern is off (dim, not dark).
    pub const INNER_RADIUS_OFF: f32 = 0.3;
    pub const OUTER_RADIUS_OFF: f32 = INNER_RADIUS_OFF * OUTER_RADIUS_FACTOR;

    /// Drain added to the pool per tick when the inner radius is at its max.
    pub const MAX_DRAIN_RATE: f32 = 0.1;
    /// Pool level at which one unit of oil is consumed.
    pub const DRAIN_POOL_CAPACITY: f32 = 100.0;

    pub const MAX_INTENSITY: f32 = 0.85;
    pub const MIN_INTENSITY: f32 = 0.65;

    /// Outer radius units per second while animating toward a threshold.
    pub const OUTER_APPROACH_SPEED: f32 = 10.0;

    /// Inner threshold change per scroll notch (outer changes 4x this).
    pub const THRESHOLD_STEP: f32 = 0.25;
}

pub mod jump {
    pub const FALL_MULTIPLIER: f32 = 2.5;
    pub const LOW_JUMP_MODIFIER: f32 = 2.5;
    /// Gravity scale the host physics body applies on its own.
    pub const GRAVITY_SCALED: f32 = 1.0;
    pub const VERTICAL_TAKEOFF: f32 = 15.0;
    pub const TIME_BETWEEN_JUMPS: f32 = 0.0;
}

pub mod projectile {
    pub const SPEED: f32 = 20.0;
    pub const ACCELERATION: f32 = 0.0;
    pub const DAMAGE: f32 = 10.0;
}

pub mod physics {
    /// World gravity along y (units per second squared).
    pub const GRAVITY_Y: f32 = -9.81;
}

pub mod sound_events {
    pub const LANTERN_LIGHT: &str = "event:/SFX/Items/Lantern/Lantern_Light";
    pub const LANTERN_EXTINGUISH: &str = "event:/SFX/Items/Lantern/Lantern_Extinguish";
}
