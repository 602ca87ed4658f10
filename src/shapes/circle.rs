use crate::error::{ensure_finite, PhysicsError, PhysicsResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Fails unless the radius is finite and strictly positive.
    pub fn new(radius: f64) -> PhysicsResult<Self> {
        let radius = ensure_finite("radius", radius)?;
        if radius <= 0.0 {
            return Err(PhysicsError::invalid("radius", radius, "must be positive"));
        }
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}
