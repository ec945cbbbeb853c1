//! Tuning values for every behavior, loadable from JSON.
//!
//! All sections use `#[serde(default)]`, so a tuning file only needs to name
//! the values it overrides. Missing sections fall back to the defaults in
//! [`crate::constants`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{jump, lantern, physics, projectile};
use crate::input::Key;

/// Errors raised while loading or validating a tuning file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

/// Complete tuning set for the gameplay behaviors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub lantern: LanternTuning,
    pub jump: JumpTuning,
    pub projectile: ProjectileTuning,
    pub keys: KeyBindings,
}

impl Tuning {
    /// Parse and validate a tuning set from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a tuning file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.lantern.validate()?;
        self.jump.validate()?;
        self.projectile.validate()
    }
}

/// Lantern radii, flicker bounds and fuel drain.
///
/// Outer-radius limits are derived from the inner ones through
/// `outer_radius_factor`, so the two radii stay linked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanternTuning {
    pub outer_radius_factor: f32,
    pub default_inner_radius: f32,
    pub min_inner_radius: f32,
    pub max_inner_radius: f32,
    pub inner_radius_off: f32,
    pub max_drain_rate: f32,
    pub drain_pool_capacity: f32,
    pub max_intensity: f32,
    pub min_intensity: f32,
    pub outer_approach_speed: f32,
    pub threshold_step: f32,
}

impl Default for LanternTuning {
    fn default() -> Self {
        Self {
            outer_radius_factor: lantern::OUTER_RADIUS_FACTOR,
            default_inner_radius: lantern::DEFAULT_INNER_RADIUS,
            min_inner_radius: lantern::MIN_INNER_RADIUS,
            max_inner_radius: lantern::MAX_INNER_RADIUS,
            inner_radius_off: lantern::INNER_RADIUS_OFF,
            max_drain_rate: lantern::MAX_DRAIN_RATE,
            drain_pool_capacity: lantern::DRAIN_POOL_CAPACITY,
            max_intensity: lantern::MAX_INTENSITY,
            min_intensity: lantern::MIN_INTENSITY,
            outer_approach_speed: lantern::OUTER_APPROACH_SPEED,
            threshold_step: lantern::THRESHOLD_STEP,
        }
    }
}

impl LanternTuning {
    pub fn default_outer_radius(&self) -> f32 {
        self.default_inner_radius * self.outer_radius_factor
    }

    pub fn min_outer_radius(&self) -> f32 {
        self.min_inner_radius * self.outer_radius_factor
    }

    pub fn max_outer_radius(&self) -> f32 {
        self.max_inner_radius * self.outer_radius_factor
    }

    pub fn outer_radius_off(&self) -> f32 {
        self.inner_radius_off * self.outer_radius_factor
    }

    pub fn inner_approach_speed(&self) -> f32 {
        self.outer_approach_speed / self.outer_radius_factor
    }

    pub fn outer_threshold_step(&self) -> f32 {
        self.threshold_step * self.outer_radius_factor
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.outer_radius_factor <= 0.0 {
            return Err(invalid("lantern.outer_radius_factor", "must be positive"));
        }
        if self.inner_radius_off < 0.0 {
            return Err(invalid("lantern.inner_radius_off", "must not be negative"));
        }
        // threshold_percentage divides by this span
        if self.min_inner_radius >= self.max_inner_radius {
            return Err(invalid(
                "lantern.min_inner_radius",
                format!(
                    "{} is not below max_inner_radius {}",
                    self.min_inner_radius, self.max_inner_radius
                ),
            ));
        }
        if !(self.min_inner_radius..=self.max_inner_radius).contains(&self.default_inner_radius) {
            return Err(invalid(
                "lantern.default_inner_radius",
                format!(
                    "{} outside [{}, {}]",
                    self.default_inner_radius, self.min_inner_radius, self.max_inner_radius
                ),
            ));
        }
        if self.min_intensity > self.max_intensity {
            return Err(invalid(
                "lantern.min_intensity",
                "must not exceed max_intensity",
            ));
        }
        if self.drain_pool_capacity <= 0.0 {
            return Err(invalid("lantern.drain_pool_capacity", "must be positive"));
        }
        if self.max_drain_rate < 0.0 {
            return Err(invalid("lantern.max_drain_rate", "must not be negative"));
        }
        if self.outer_approach_speed <= 0.0 {
            return Err(invalid("lantern.outer_approach_speed", "must be positive"));
        }
        if self.threshold_step <= 0.0 {
            return Err(invalid("lantern.threshold_step", "must be positive"));
        }
        Ok(())
    }
}

/// Jump takeoff and gravity shaping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpTuning {
    /// Gravity multiplier while falling
    pub fall_multiplier: f32,
    /// Gravity multiplier while rising
    pub low_jump_modifier: f32,
    /// Gravity scale of the host physics body; subtracted from both
    /// multipliers so the totals stay at `fall_multiplier` / `low_jump_modifier`
    pub gravity_scaled: f32,
    /// Upward velocity applied on takeoff
    pub vertical_takeoff: f32,
    /// Minimum seconds between two jumps
    pub time_between_jumps: f32,
    pub gravity_y: f32,
}

impl Default for JumpTuning {
    fn default() -> Self {
        Self {
            fall_multiplier: jump::FALL_MULTIPLIER,
            low_jump_modifier: jump::LOW_JUMP_MODIFIER,
            gravity_scaled: jump::GRAVITY_SCALED,
            vertical_takeoff: jump::VERTICAL_TAKEOFF,
            time_between_jumps: jump::TIME_BETWEEN_JUMPS,
            gravity_y: physics::GRAVITY_Y,
        }
    }
}

impl JumpTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vertical_takeoff < 0.0 {
            return Err(invalid("jump.vertical_takeoff", "must not be negative"));
        }
        if self.time_between_jumps < 0.0 {
            return Err(invalid("jump.time_between_jumps", "must not be negative"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    pub speed: f32,
    /// Speed gained per second of flight
    pub acceleration: f32,
    pub damage: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            speed: projectile::SPEED,
            acceleration: projectile::ACCELERATION,
            damage: projectile::DAMAGE,
        }
    }
}

impl ProjectileTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.damage < 0.0 {
            return Err(invalid("projectile.damage", "must not be negative"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub lantern_toggle: Key,
    /// Held to enter threshold adjustment (toggles on press and on release)
    pub lantern_adjust: Key,
    pub jump: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            lantern_toggle: Key::X,
            lantern_adjust: Key::LeftAlt,
            jump: Key::Space,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_outer_values() {
        let t = LanternTuning::default();
        assert_eq!(t.default_outer_radius(), 6.0);
        assert_eq!(t.min_outer_radius(), 2.0);
        assert_eq!(t.max_outer_radius(), 8.0);
        assert!((t.outer_radius_off() - 1.2).abs() < 1e-6);
        assert_eq!(t.inner_approach_speed(), 2.5);
        assert_eq!(t.outer_threshold_step(), 1.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning = Tuning::from_json_str(r#"{ "projectile": { "speed": 35.0 } }"#).unwrap();
        assert_eq!(tuning.projectile.speed, 35.0);
        assert_eq!(tuning.projectile.damage, projectile::DAMAGE);
        assert_eq!(tuning.lantern, LanternTuning::default());
        assert_eq!(tuning.keys.jump, Key::Space);
    }

    #[test]
    fn test_rejects_inverted_radius_limits() {
        let err = Tuning::from_json_str(
            r#"{ "lantern": { "min_inner_radius": 3.0, "max_inner_radius": 2.0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "lantern.min_inner_radius",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json_str("{ lantern: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_json_roundtrip_preserves_bindings() {
        let mut tuning = Tuning::default();
        tuning.keys.jump = Key::LeftAlt;
        let json = tuning.to_json_pretty().unwrap();
        assert_eq!(Tuning::from_json_str(&json).unwrap(), tuning);
    }
}
