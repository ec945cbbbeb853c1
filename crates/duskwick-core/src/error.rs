//! Errors raised by engine operations on specific entities.

use hecs::{ComponentError, Entity};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("entity {0:?} does not exist")]
    NoSuchEntity(Entity),
    #[error("entity {entity:?} has no {component} component")]
    MissingComponent {
        entity: Entity,
        component: &'static str,
    },
}

impl EngineError {
    /// Translate a hecs lookup failure for `component` on `entity`.
    pub fn component(entity: Entity, component: &'static str, err: ComponentError) -> Self {
        match err {
            ComponentError::NoSuchEntity => EngineError::NoSuchEntity(entity),
            ComponentError::MissingComponent(_) => EngineError::MissingComponent { entity, component },
        }
    }
}
