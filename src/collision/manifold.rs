use crate::math::vec2::Vec2;
use crate::world::{BodyHandle, BoundaryHandle};

/// What a body collided with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collider {
    Boundary(BoundaryHandle),
    Body(BodyHandle),
}

/// A collision resolved during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// The body whose pass over the collections found the collision.
    pub body: BodyHandle,
    pub other: Collider,
    /// Unit direction pushing `body` away from `other`, taken before correction.
    pub normal: Vec2,
    /// Overlap depth before correction.
    pub depth: f64,
}
