//! Component definitions for the ECS runtime.
//!
//! Components are pure data structs attached to entities.
//! They have no behavior - that lives in systems (and in `duskwick-logic`).

mod character;
mod common;
mod jump;
mod lantern;
mod projectile;

pub use character::*;
pub use common::*;
pub use jump::*;
pub use lantern::*;
pub use projectile::*;
