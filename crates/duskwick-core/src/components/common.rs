//! Common components used across multiple entity types.

use duskwick_logic::math::Vec2;
use duskwick_logic::projectile::ColliderTag;
use serde::{Deserialize, Serialize};

/// Where an entity is and which way it points
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    /// Rotation around z in radians
    pub rotation: f32,
}

impl Transform {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            rotation: 0.0,
        }
    }
}

/// Velocity the host physics engine integrates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RigidBody {
    pub velocity: Vec2,
    /// Multiplier on the host's world gravity
    pub gravity_scale: f32,
}

impl RigidBody {
    pub fn with_gravity_scale(gravity_scale: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            gravity_scale,
        }
    }
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::with_gravity_scale(1.0)
    }
}

/// Trigger collider tag, reported back by the host physics engine on contact
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Collider {
    pub tag: ColliderTag,
}

impl Collider {
    pub fn new(tag: ColliderTag) -> Self {
        Self { tag }
    }
}
