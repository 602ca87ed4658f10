use crate::common::Material;
use crate::error::{ensure_finite, ensure_finite_vec, PhysicsError, PhysicsResult};
use crate::math::vec2::Vec2;
use crate::shapes::Circle;

/// Magnitude applied to a body's control direction when none is configured.
pub const DEFAULT_ACCELERATION_CAP: f64 = 5.0;

/// A non-rotating disk. Mass 0 marks an immovable obstacle.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    // Geometry
    shape: Circle,
    material: Material,

    // Primary state, mutated in place by collision and integration
    pub(crate) position: Vec2,
    pub(crate) velocity: Vec2,
    /// Control direction set by the caller; only its direction is used.
    pub(crate) acceleration: Vec2,

    // Physical properties
    mass: f64,
    inv_mass: f64, // 1.0 / mass (0.0 for immovable)
    acceleration_cap: f64,
    controlled: bool,
}

impl Body {
    /// Creates a resting body. Fails if `radius <= 0` or `mass < 0`.
    pub fn new(position: Vec2, radius: f64, mass: f64) -> PhysicsResult<Self> {
        let shape = Circle::new(radius)?;
        let mass = ensure_finite("mass", mass)?;
        if mass < 0.0 {
            return Err(PhysicsError::invalid("mass", mass, "must not be negative"));
        }
        let position = ensure_finite_vec("position", position)?;

        let inv_mass = if mass == 0.0 { 0.0 } else { 1.0 / mass };

        Ok(Self {
            shape,
            material: Material::default(),
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            mass,
            inv_mass,
            acceleration_cap: DEFAULT_ACCELERATION_CAP,
            controlled: false,
        })
    }

    /// Builder-style elasticity override.
    pub fn with_elasticity(mut self, elasticity: f64) -> PhysicsResult<Self> {
        self.set_elasticity(elasticity)?;
        Ok(self)
    }

    /// Builder-style flag for player control.
    pub fn controlled(mut self) -> Self {
        self.controlled = true;
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) -> PhysicsResult<()> {
        self.position = ensure_finite_vec("position", position)?;
        Ok(())
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) -> PhysicsResult<()> {
        self.velocity = ensure_finite_vec("velocity", velocity)?;
        Ok(())
    }

    pub fn radius(&self) -> f64 {
        self.shape.radius()
    }

    pub fn shape(&self) -> &Circle {
        &self.shape
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn inv_mass(&self) -> f64 {
        self.inv_mass
    }

    /// True for mass 0 bodies, which collisions never move.
    pub fn is_immovable(&self) -> bool {
        self.inv_mass == 0.0
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn elasticity(&self) -> f64 {
        self.material.elasticity()
    }

    pub fn set_elasticity(&mut self, elasticity: f64) -> PhysicsResult<()> {
        self.material = Material::new(elasticity)?;
        Ok(())
    }

    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    /// Sets the control direction. Its magnitude is ignored at integration time,
    /// the body always accelerates by its cap; a zero vector means no thrust.
    pub fn set_control_direction(&mut self, direction: Vec2) -> PhysicsResult<()> {
        self.acceleration = ensure_finite_vec("control direction", direction)?;
        Ok(())
    }

    pub fn acceleration_cap(&self) -> f64 {
        self.acceleration_cap
    }

    pub fn set_acceleration_cap(&mut self, cap: f64) -> PhysicsResult<()> {
        let cap = ensure_finite("acceleration_cap", cap)?;
        if cap < 0.0 {
            return Err(PhysicsError::invalid(
                "acceleration_cap",
                cap,
                "must not be negative",
            ));
        }
        self.acceleration_cap = cap;
        Ok(())
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    pub fn set_controlled(&mut self, controlled: bool) {
        self.controlled = controlled;
    }

    /// 0.5 * m * v^2. Zero for immovable bodies.
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }
}
