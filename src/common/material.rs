//! Defines physical material properties.

use crate::error::{ensure_finite, PhysicsError, PhysicsResult};

/// Elasticity used when a body is created without an explicit material.
pub const DEFAULT_ELASTICITY: f64 = 1.0;

/// Represents the physical properties of a body affecting collisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Coefficient of restitution (bounciness). Range [0, infinity).
    /// 0 = perfectly inelastic, 1 = perfectly elastic, above 1 adds energy on every bounce.
    elasticity: f64,
}

impl Material {
    /// Creates a new material. Negative or non-finite elasticity is rejected, never clamped.
    pub fn new(elasticity: f64) -> PhysicsResult<Self> {
        let elasticity = ensure_finite("elasticity", elasticity)?;
        if elasticity < 0.0 {
            return Err(PhysicsError::invalid(
                "elasticity",
                elasticity,
                "must not be negative",
            ));
        }
        Ok(Material { elasticity })
    }

    pub fn elasticity(&self) -> f64 {
        self.elasticity
    }

    /// Restitution used for a pair: the less bouncy material wins.
    pub fn combined_elasticity(&self, other: &Material) -> f64 {
        self.elasticity.min(other.elasticity)
    }
}

impl Default for Material {
    fn default() -> Self {
        Material {
            elasticity: DEFAULT_ELASTICITY,
        }
    }
}
