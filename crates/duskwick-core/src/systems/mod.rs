//! Systems - logic that operates on components

mod audio;
mod inventory;
mod jump;
mod lantern;
mod projectile;

pub use audio::*;
pub use inventory::*;
pub use jump::*;
pub use lantern::*;
pub use projectile::*;
