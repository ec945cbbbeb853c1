//! Jump systems - takeoff on input, landing/records each frame, gravity each physics step

use duskwick_logic::input::InputFrame;
use duskwick_logic::jump::{gravity_delta, new_height_record};
use hecs::World;
use serde::{Deserialize, Serialize};

use crate::components::{Character, Controller, GroundSensor, Jumper, RigidBody, Transform};

/// Player achievement records (singleton, stored in engine)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Achievements {
    /// Highest y position reached mid-jump
    pub highest_jump_reached: f32,
}

/// Player takeoff. AI characters have no jump input yet.
pub fn jump_input_system(world: &mut World, input: &InputFrame) {
    for (entity, (character, jumper, sensor, transform, body)) in world.query_mut::<(
        &Character,
        &mut Jumper,
        &GroundSensor,
        &Transform,
        &mut RigidBody,
    )>() {
        if !character.accepts_input() {
            continue;
        }
        match character.controller {
            Controller::Player => {
                let pressed = input.key_down(jumper.jump_key);
                if jumper.state.can_jump(sensor.activated, pressed, &jumper.tuning) {
                    body.velocity = jumper.state.jump(transform.position.y, &jumper.tuning);
                    log::debug!("{:?} jumped from y={:.2}", entity, transform.position.y);
                }
            }
            Controller::Ai => {
                log::trace!("{:?} has no AI jump input", entity);
            }
        }
    }
}

/// Per-frame bookkeeping: cooldown, landing, highest-jump record.
pub fn jump_system(world: &mut World, achievements: &mut Achievements, dt: f32) {
    for (entity, (character, jumper, sensor, transform, body)) in world.query_mut::<(
        &Character,
        &mut Jumper,
        &GroundSensor,
        &Transform,
        &RigidBody,
    )>() {
        jumper.state.tick_cooldown(dt);
        jumper.state.update_landed(sensor.activated, body.velocity.y);

        if !character.is_player() {
            continue;
        }
        if let Some(record) = new_height_record(
            achievements.highest_jump_reached,
            transform.position.y,
            jumper.state.is_jumping,
        ) {
            achievements.highest_jump_reached = record;
            log::trace!(
                "{:?} set a jump record of {:.2} ({:.2} above takeoff)",
                entity,
                record,
                jumper.state.height_above_start(record)
            );
        }
    }
}

/// Physics step: extra gravity for a snappy rise and a shaped fall.
pub fn jump_physics_system(world: &mut World, dt: f32) {
    for (_, (jumper, body)) in world.query_mut::<(&Jumper, &mut RigidBody)>() {
        body.velocity.y += gravity_delta(body.velocity.y, dt, &jumper.tuning);
    }
}
