//! Duskwick Core - gameplay behavior runtime
//!
//! Per-entity gameplay behaviors (a fuel-burning lantern, shaped jump
//! physics, pooled projectiles) driven by a host frame loop.
//!
//! # Architecture
//!
//! The runtime uses an Entity Component System (ECS) architecture via `hecs`:
//! - **Entities**: Characters, projectiles, platforms, interactables
//! - **Components**: Pure data attached to entities (Lantern, Jumper, Projectile, etc.)
//! - **Systems**: Logic that queries and updates components, built on the
//!   pure functions in `duskwick-logic`
//!
//! Rendering, collision detection, input devices and audio playback belong
//! to the host. It reads components (`PointLight`, `LanternDial`), writes
//! components (`GroundSensor`, `RigidBody` via [`host::PhysicsHost`]), fills
//! an `InputFrame` per frame, and drains queued `SoundCue`s.
//!
//! # Example
//!
//! ```rust,no_run
//! use duskwick_core::prelude::*;
//!
//! let mut engine = GameEngine::new();
//! let player = engine.spawn_player(Vec2::ZERO);
//! engine.inventory.add(ItemType::Oil, 5);
//!
//! loop {
//!     engine.update(1.0 / 60.0, &InputFrame::new().press(Key::X)); // 60 FPS
//!     for cue in engine.drain_sounds() {
//!         println!("play {}", cue.event_path());
//!     }
//!     let _light = engine.point_light(player);
//! }
//! ```

pub mod components;
pub mod engine;
pub mod error;
pub mod host;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::engine::GameEngine;
    pub use crate::error::EngineError;
    pub use crate::host::{FlatGround, NoPhysics, PhysicsHost};
    pub use crate::systems::{ItemType, SoundCue, TriggerContact};
    pub use duskwick_logic::input::{InputFrame, Key};
    pub use duskwick_logic::math::Vec2;
}
