//! Projectile systems - pooling, straight-line motion, trigger resolution

use duskwick_logic::config::ProjectileTuning;
use duskwick_logic::math::Vec2;
use duskwick_logic::projectile::{advance, trigger_response, ColliderTag, TriggerResponse};
use hecs::{Entity, World};

use crate::components::{Broken, Collider, Interactable, Projectile, Transform};
use crate::error::EngineError;

/// A projectile entered another collider's trigger during a physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerContact {
    pub projectile: Entity,
    pub other: Entity,
}

/// Inactive projectile entities waiting to be fired again
#[derive(Debug, Clone, Default)]
pub struct ProjectilePool {
    free: Vec<Entity>,
}

impl ProjectilePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn available(&self) -> usize {
        self.free.len()
    }

    /// Fire a projectile from `origin`, reusing a pooled entity when one is free.
    pub fn fire(
        &mut self,
        world: &mut World,
        tuning: &ProjectileTuning,
        origin: Vec2,
        direction: Vec2,
        rotation: f32,
        facing_right: bool,
    ) -> Entity {
        let entity = loop {
            match self.free.pop() {
                Some(entity) if world.contains(entity) => break entity,
                Some(stale) => log::warn!("Dropping stale pooled projectile {:?}", stale),
                None => {
                    let entity = world.spawn((
                        Projectile::new(tuning),
                        Transform::default(),
                        Collider::new(ColliderTag::Untagged),
                    ));
                    log::debug!("Projectile pool grew: spawned {:?}", entity);
                    break entity;
                }
            }
        };

        if let Ok(mut transform) = world.get::<&mut Transform>(entity) {
            transform.position = origin;
            transform.rotation = rotation;
        }
        if let Ok(mut projectile) = world.get::<&mut Projectile>(entity) {
            projectile.reset();
            projectile.set_direction(direction, facing_right);
            projectile.active = true;
        }
        entity
    }

    /// Deactivate and reset a projectile, making it available again.
    pub fn return_to_pool(&mut self, world: &mut World, entity: Entity) -> Result<(), EngineError> {
        let mut projectile = world
            .get::<&mut Projectile>(entity)
            .map_err(|e| EngineError::component(entity, "Projectile", e))?;
        if !projectile.active {
            return Ok(());
        }
        projectile.reset();
        self.free.push(entity);
        Ok(())
    }
}

/// Physics step: move active projectiles, then apply their acceleration.
pub fn projectile_system(world: &mut World, dt: f32) {
    for (_, (projectile, transform)) in world.query_mut::<(&mut Projectile, &mut Transform)>() {
        if !projectile.active {
            continue;
        }
        let (position, speed) = advance(
            transform.position,
            projectile.direction,
            projectile.speed,
            projectile.acceleration,
            dt,
        );
        transform.position = position;
        projectile.speed = speed;
    }
}

/// Apply a projectile's trigger contact with `other`.
///
/// Inactive projectiles ignore contacts (a projectile can report several
/// contacts in one step but only the first one that returns it counts).
pub fn resolve_trigger(
    world: &mut World,
    pool: &mut ProjectilePool,
    contact: TriggerContact,
) -> Result<TriggerResponse, EngineError> {
    let TriggerContact { projectile, other } = contact;

    let (active, damage) = {
        let p = world
            .get::<&Projectile>(projectile)
            .map_err(|e| EngineError::component(projectile, "Projectile", e))?;
        (p.active, p.damage)
    };
    if !active {
        return Ok(TriggerResponse::Ignore);
    }

    let tag = world
        .get::<&Collider>(other)
        .map(|c| c.tag)
        .map_err(|e| EngineError::component(other, "Collider", e))?;
    log::debug!("{:?} entered trigger of {:?} ({:?})", projectile, other, tag);

    let breakable = world
        .get::<&Interactable>(other)
        .map(|i| i.breakable)
        .unwrap_or(false);

    let response = trigger_response(tag, breakable, damage);
    match response {
        TriggerResponse::ReturnToPool => {
            pool.return_to_pool(world, projectile)?;
        }
        TriggerResponse::DamageAndReturn(amount) => {
            let broke = world
                .get::<&mut Interactable>(other)
                .map(|mut i| i.damage(amount))
                .map_err(|e| EngineError::component(other, "Interactable", e))?;
            if broke {
                log::info!("{:?} broke", other);
                world
                    .insert_one(other, Broken)
                    .map_err(|_| EngineError::NoSuchEntity(other))?;
            }
            pool.return_to_pool(world, projectile)?;
        }
        TriggerResponse::Ignore => {}
    }
    Ok(response)
}
