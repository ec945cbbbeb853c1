//! Game engine - owns the world and runs behaviors in host frame order

use duskwick_logic::config::Tuning;
use duskwick_logic::input::InputFrame;
use duskwick_logic::math::Vec2;
use duskwick_logic::projectile::ColliderTag;
use hecs::{Entity, World};

use crate::components::*;
use crate::error::EngineError;
use crate::host::{NoPhysics, PhysicsHost};
use crate::systems::*;

/// Default physics step (50 Hz)
pub const DEFAULT_FIXED_TIMESTEP: f32 = 0.02;

/// Physics steps allowed per frame before the accumulator is dropped
const MAX_FIXED_STEPS_PER_FRAME: u32 = 8;

/// Main gameplay engine
///
/// Each [`update`](Self::update) runs, in order:
/// 1. Start phase for behaviors seen for the first time
/// 2. Zero or more fixed physics steps (behavior physics, host physics,
///    trigger contacts)
/// 3. The per-frame update (input, abilities, bookkeeping)
pub struct GameEngine {
    /// ECS world containing all entities
    pub world: World,
    pub tuning: Tuning,
    /// Shared item counts (oil for lanterns)
    pub inventory: Inventory,
    pub achievements: Achievements,
    /// One-shot sounds waiting for the audio layer
    pub sounds: SoundQueue,
    pub projectile_pool: ProjectilePool,

    pending_contacts: Vec<TriggerContact>,
    /// Seconds of scaled time since start
    elapsed: f64,
    frame_count: u64,
    fixed_accumulator: f32,
    fixed_timestep: f32,
    time_scale: f32,
}

impl GameEngine {
    /// Create an empty engine with default tuning
    pub fn new() -> Self {
        Self::with_tuning(Tuning::default())
    }

    pub fn with_tuning(tuning: Tuning) -> Self {
        Self {
            world: World::new(),
            tuning,
            inventory: Inventory::new(),
            achievements: Achievements::default(),
            sounds: SoundQueue::new(),
            projectile_pool: ProjectilePool::new(),
            pending_contacts: Vec::new(),
            elapsed: 0.0,
            frame_count: 0,
            fixed_accumulator: 0.0,
            fixed_timestep: DEFAULT_FIXED_TIMESTEP,
            time_scale: 1.0,
        }
    }

    /// Spawn a player character carrying a lantern and able to jump
    pub fn spawn_player(&mut self, position: Vec2) -> Entity {
        let entity = self.world.spawn((
            Character::player(),
            Transform {
                position,
                rotation: 0.0,
            },
            RigidBody::with_gravity_scale(self.tuning.jump.gravity_scaled),
            Collider::new(ColliderTag::Player),
            Lantern::new(&self.tuning.lantern),
            PointLight::off(&self.tuning.lantern),
            LanternDial::default(),
            Jumper::new(self.tuning.jump, self.tuning.keys.jump),
            GroundSensor::default(),
        ));
        log::info!("Spawned player {:?} at ({:.1}, {:.1})", entity, position.x, position.y);
        entity
    }

    /// Spawn an AI character (jump-capable, no lantern)
    pub fn spawn_ai_character(&mut self, position: Vec2) -> Entity {
        self.world.spawn((
            Character::ai(),
            Transform {
                position,
                rotation: 0.0,
            },
            RigidBody::with_gravity_scale(self.tuning.jump.gravity_scaled),
            Collider::new(ColliderTag::Enemy),
            Jumper::new(self.tuning.jump, self.tuning.keys.jump),
            GroundSensor::default(),
        ))
    }

    pub fn spawn_platform(&mut self, position: Vec2) -> Entity {
        self.world.spawn((
            Transform {
                position,
                rotation: 0.0,
            },
            Collider::new(ColliderTag::Platform),
        ))
    }

    pub fn spawn_interactable(&mut self, position: Vec2, breakable: bool, health: f32) -> Entity {
        self.world.spawn((
            Transform {
                position,
                rotation: 0.0,
            },
            Collider::new(ColliderTag::Interactable),
            Interactable::new(breakable, health),
        ))
    }

    /// Fire a pooled projectile
    pub fn fire_projectile(&mut self, origin: Vec2, direction: Vec2, facing_right: bool) -> Entity {
        let rotation = direction.y.atan2(direction.x);
        self.projectile_pool.fire(
            &mut self.world,
            &self.tuning.projectile,
            origin,
            direction,
            rotation,
            facing_right,
        )
    }

    /// Queue a trigger contact found by the host outside of a physics step
    pub fn report_trigger(&mut self, projectile: Entity, other: Entity) -> Result<(), EngineError> {
        for entity in [projectile, other] {
            if !self.world.contains(entity) {
                return Err(EngineError::NoSuchEntity(entity));
            }
        }
        self.pending_contacts.push(TriggerContact { projectile, other });
        Ok(())
    }

    /// Advance one frame with no host physics
    pub fn update(&mut self, delta_seconds: f32, input: &InputFrame) {
        self.update_with_host(delta_seconds, input, &mut NoPhysics);
    }

    /// Advance one frame, letting `host` integrate bodies each physics step
    pub fn update_with_host<H: PhysicsHost>(&mut self, delta_seconds: f32, input: &InputFrame, host: &mut H) {
        let dt = delta_seconds * self.time_scale;
        self.elapsed += dt as f64;
        self.frame_count += 1;

        // Start
        lantern_start_system(&mut self.world, &self.tuning.lantern);

        // Physics
        self.fixed_accumulator += dt;
        let mut steps = 0;
        while self.fixed_accumulator >= self.fixed_timestep {
            if steps == MAX_FIXED_STEPS_PER_FRAME {
                log::warn!(
                    "Frame {} fell behind: dropping {:.3}s of physics",
                    self.frame_count,
                    self.fixed_accumulator
                );
                self.fixed_accumulator = 0.0;
                break;
            }
            self.fixed_update(self.fixed_timestep, host);
            self.fixed_accumulator -= self.fixed_timestep;
            steps += 1;
        }

        // Input
        lantern_input_system(
            &mut self.world,
            input,
            &self.tuning.keys,
            &self.tuning.lantern,
            &mut self.sounds,
        );
        jump_input_system(&mut self.world, input);

        // Abilities and bookkeeping
        lantern_system(&mut self.world, &mut self.inventory, &self.tuning.lantern, dt);
        jump_system(&mut self.world, &mut self.achievements, dt);
    }

    fn fixed_update<H: PhysicsHost>(&mut self, dt: f32, host: &mut H) {
        jump_physics_system(&mut self.world, dt);
        projectile_system(&mut self.world, dt);

        host.step(&mut self.world, dt, &mut self.pending_contacts);

        for contact in std::mem::take(&mut self.pending_contacts) {
            if let Err(e) = resolve_trigger(&mut self.world, &mut self.projectile_pool, contact) {
                log::warn!("Skipping trigger contact {:?}: {}", contact, e);
            }
        }
    }

    /// Take all sounds queued since the last call
    pub fn drain_sounds(&mut self) -> Vec<SoundCue> {
        self.sounds.drain()
    }

    /// Set time scale (1.0 = real-time, 0.0 = paused)
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Set the physics step length in seconds
    pub fn set_fixed_timestep(&mut self, dt: f32) {
        self.fixed_timestep = dt.max(0.001);
    }

    pub fn fixed_timestep(&self) -> f32 {
        self.fixed_timestep
    }

    /// Scaled seconds since start
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn lantern(&self, entity: Entity) -> Result<Lantern, EngineError> {
        self.world
            .get::<&Lantern>(entity)
            .map(|l| *l)
            .map_err(|e| EngineError::component(entity, "Lantern", e))
    }

    pub fn point_light(&self, entity: Entity) -> Result<PointLight, EngineError> {
        self.world
            .get::<&PointLight>(entity)
            .map(|l| *l)
            .map_err(|e| EngineError::component(entity, "PointLight", e))
    }

    pub fn active_projectile_count(&self) -> usize {
        self.world
            .query::<&Projectile>()
            .iter()
            .filter(|(_, p)| p.active)
            .count()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
