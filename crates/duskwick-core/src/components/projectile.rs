//! Projectile and interactable components.

use duskwick_logic::config::ProjectileTuning;
use duskwick_logic::math::Vec2;
use duskwick_logic::projectile::SpriteFacing;
use serde::{Deserialize, Serialize};

/// Projectile component - pooled, so `active` replaces despawning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub direction: Vec2,
    pub speed: f32,
    /// Speed restored when the projectile is fired again from the pool
    pub base_speed: f32,
    pub acceleration: f32,
    pub damage: f32,
    pub facing_right: bool,
    pub facing: SpriteFacing,
    pub active: bool,
}

impl Projectile {
    pub fn new(tuning: &ProjectileTuning) -> Self {
        Self {
            direction: Vec2::ZERO,
            speed: tuning.speed,
            base_speed: tuning.speed,
            acceleration: tuning.acceleration,
            damage: tuning.damage,
            facing_right: true,
            facing: SpriteFacing::default(),
            active: false,
        }
    }

    /// Aim the projectile; flips the sprite when fired to the left.
    pub fn set_direction(&mut self, direction: Vec2, facing_right: bool) {
        self.direction = direction;
        self.facing_right = facing_right;
        self.facing.face(facing_right);
    }

    pub fn flip(&mut self) {
        self.facing.flip();
    }

    /// Restore pool defaults.
    pub fn reset(&mut self) {
        self.facing.reset();
        self.speed = self.base_speed;
        self.active = false;
    }
}

/// Something in the level projectiles can hit
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Interactable {
    pub breakable: bool,
    pub health: f32,
}

impl Interactable {
    pub fn new(breakable: bool, health: f32) -> Self {
        Self { breakable, health }
    }

    /// Apply damage; returns true if this hit broke it.
    pub fn damage(&mut self, amount: f32) -> bool {
        if !self.breakable || self.health <= 0.0 {
            return false;
        }
        self.health -= amount;
        self.health <= 0.0
    }
}

/// Marker for interactables whose health ran out
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Broken;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_direction_left_flips_sprite() {
        let mut p = Projectile::new(&ProjectileTuning::default());
        p.set_direction(Vec2::new(-1.0, 0.0), false);
        assert!(p.facing.flip_x);
        assert!(!p.facing_right);
        p.reset();
        assert!(!p.facing.flip_x);
        assert!(!p.active);
    }

    #[test]
    fn test_interactable_breaks_once() {
        let mut crate_box = Interactable::new(true, 15.0);
        assert!(!crate_box.damage(10.0));
        assert!(crate_box.damage(10.0));
        assert!(!crate_box.damage(10.0));

        let mut wall = Interactable::new(false, 15.0);
        assert!(!wall.damage(100.0));
        assert_eq!(wall.health, 15.0);
    }
}
