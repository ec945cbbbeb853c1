//! Host physics seam.
//!
//! The engine never integrates character bodies or detects collisions
//! itself. After the behavior scripts run each fixed step, the host physics
//! engine integrates `RigidBody` velocities into `Transform`s, updates
//! `GroundSensor`s, and reports any projectile trigger contacts it found.

use duskwick_logic::constants::physics;
use duskwick_logic::math::Vec2;
use hecs::{Entity, World};

use crate::components::{Collider, GroundSensor, Projectile, RigidBody, Transform};
use crate::systems::TriggerContact;

pub trait PhysicsHost {
    /// Advance the host simulation by one fixed step of `dt` seconds.
    fn step(&mut self, world: &mut World, dt: f32, contacts: &mut Vec<TriggerContact>);
}

/// Host that owns no physics: bodies keep their positions, contacts only
/// arrive through [`GameEngine::report_trigger`](crate::engine::GameEngine::report_trigger).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPhysics;

impl PhysicsHost for NoPhysics {
    fn step(&mut self, _world: &mut World, _dt: f32, _contacts: &mut Vec<TriggerContact>) {}
}

/// Headless stand-in for a real physics engine, used by tools and tests.
///
/// Applies world gravity scaled per body, integrates velocities with
/// explicit Euler, treats `ground_y` as an infinite floor, and reports a
/// trigger contact whenever an active projectile comes within
/// `contact_radius` of another collider.
#[derive(Debug, Clone, Copy)]
pub struct FlatGround {
    pub gravity_y: f32,
    pub ground_y: f32,
    pub contact_radius: f32,
}

impl Default for FlatGround {
    fn default() -> Self {
        Self {
            gravity_y: physics::GRAVITY_Y,
            ground_y: 0.0,
            contact_radius: 0.5,
        }
    }
}

impl PhysicsHost for FlatGround {
    fn step(&mut self, world: &mut World, dt: f32, contacts: &mut Vec<TriggerContact>) {
        for (_, (transform, body, sensor)) in
            world.query_mut::<(&mut Transform, &mut RigidBody, Option<&mut GroundSensor>)>()
        {
            body.velocity.y += self.gravity_y * body.gravity_scale * dt;
            transform.position += body.velocity * dt;
            let grounded = transform.position.y <= self.ground_y;
            if grounded {
                transform.position.y = self.ground_y;
                if body.velocity.y < 0.0 {
                    // leave a small downward velocity so landing reads as "falling"
                    body.velocity.y = body.velocity.y.max(-0.01);
                }
            }
            if let Some(sensor) = sensor {
                sensor.activated = grounded;
            }
        }

        let projectiles: Vec<(Entity, Vec2)> = world
            .query::<(&Projectile, &Transform)>()
            .iter()
            .filter(|(_, (p, _))| p.active)
            .map(|(e, (_, t))| (e, t.position))
            .collect();
        if projectiles.is_empty() {
            return;
        }

        for (other, (_, transform, projectile)) in world
            .query::<(&Collider, &Transform, Option<&Projectile>)>()
            .iter()
        {
            if projectile.is_some() {
                continue;
            }
            for &(projectile, position) in &projectiles {
                if (transform.position - position).length() <= self.contact_radius {
                    contacts.push(TriggerContact { projectile, other });
                }
            }
        }
    }
}
