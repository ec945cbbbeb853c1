//! Pure projectile logic: straight-line motion with acceleration, sprite
//! facing, and what happens when a projectile enters another collider.

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// Tag carried by colliders a projectile can hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColliderTag {
    Platform,
    Interactable,
    Player,
    Enemy,
    Untagged,
}

/// Response to a trigger contact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TriggerResponse {
    /// Hit level geometry; go back to the pool
    ReturnToPool,
    /// Damage a breakable interactable, then go back to the pool
    DamageAndReturn(f32),
    /// Pass through
    Ignore,
}

/// Decide what a projectile does when it enters `tag`'s trigger.
///
/// `breakable` is only consulted for interactables.
pub fn trigger_response(tag: ColliderTag, breakable: bool, damage: f32) -> TriggerResponse {
    match tag {
        ColliderTag::Platform => TriggerResponse::ReturnToPool,
        ColliderTag::Interactable if breakable => TriggerResponse::DamageAndReturn(damage),
        _ => TriggerResponse::Ignore,
    }
}

/// One physics step: returns (new position, new speed).
///
/// Moves with the speed at the start of the step, then accelerates.
pub fn advance(position: Vec2, direction: Vec2, speed: f32, acceleration: f32, dt: f32) -> (Vec2, f32) {
    let movement = direction * speed * dt;
    (position + movement, speed + acceleration * dt)
}

/// Sprite orientation for a projectile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteFacing {
    pub flip_x: bool,
}

impl SpriteFacing {
    pub fn flip(&mut self) {
        self.flip_x = !self.flip_x;
    }

    /// Flip when fired to the left. Flips relative to the current state,
    /// so a pooled projectile must be [`reset`](Self::reset) before reuse.
    pub fn face(&mut self, facing_right: bool) {
        if !facing_right {
            self.flip();
        }
    }

    pub fn reset(&mut self) {
        self.flip_x = false;
    }
}
