//! Pure gameplay logic for Duskwick.
//!
//! This crate contains all behavior math that is independent of the ECS
//! runtime, renderer, physics engine or audio layer. Functions take plain
//! data and return results, making them unit-testable and reusable from the
//! `duskwick-core` runtime, the headless simtest, and any future host engine.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Tuning values (lantern, jump, projectile, key bindings), JSON loading |
//! | [`constants`] | Default lantern radii, intensities, drain rates, physics defaults |
//! | [`input`] | Per-frame input snapshot (keys pressed/released, scroll delta) |
//! | [`jump`] | Jump decision, fall/low-jump gravity, landing, jump height records |
//! | [`lantern`] | Dual-radius approach-to-threshold state machine, flicker, oil drain |
//! | [`math`] | `Vec2`, `lerp` |
//! | [`projectile`] | Projectile kinematics, sprite flipping, trigger responses |

pub mod config;
pub mod constants;
pub mod input;
pub mod jump;
pub mod lantern;
pub mod math;
pub mod projectile;
