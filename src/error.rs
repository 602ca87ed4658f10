//! Error types for the physics engine.
//!
//! Fallible construction and configuration return `PhysicsResult<T>`.
//! Advancing the simulation never fails.

use thiserror::Error;

use crate::math::vec2::Vec2;
use crate::world::BodyHandle;

#[derive(Debug, Error, PartialEq)]
pub enum PhysicsError {
    /// A construction parameter is out of its valid range.
    #[error("Invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The handle was not issued by this world.
    #[error("Unknown body handle {0:?}")]
    UnknownBody(BodyHandle),

    /// A configuration document could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type PhysicsResult<T> = Result<T, PhysicsError>;

impl PhysicsError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        PhysicsError::InvalidParameter { name, value, reason }
    }
}

/// Rejects NaN and infinities for every scalar input.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> PhysicsResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PhysicsError::invalid(name, value, "must be finite"))
    }
}

/// Rejects a vector with a NaN or infinite component.
pub(crate) fn ensure_finite_vec(name: &'static str, value: Vec2) -> PhysicsResult<Vec2> {
    ensure_finite(name, value.x)?;
    ensure_finite(name, value.y)?;
    Ok(value)
}
