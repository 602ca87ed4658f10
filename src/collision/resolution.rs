//! Positional correction that removes overlap after detection.

use crate::collision::detection::closest_point_on_segment;
use crate::objects::{Body, Boundary};

/// Pushes `body` out of `boundary` along the line from the closest wall point
/// to the body's center.
///
/// A center lying exactly on the wall has no push direction and is left in
/// place. Immovable bodies are never displaced.
pub fn resolve_body_boundary_penetration(body: &mut Body, boundary: &Boundary) {
    if body.is_immovable() {
        return;
    }
    let penetration = body.position - closest_point_on_segment(body, boundary);
    let depth = body.radius() - penetration.magnitude();
    body.position += penetration.unit() * depth;
}

/// Separates two overlapping bodies, splitting the correction by inverse mass
/// so the heavier body moves less. A pair of immovable bodies is left alone.
pub fn resolve_body_body_penetration(a: &mut Body, b: &mut Body) {
    let total_inv_mass = a.inv_mass() + b.inv_mass();
    if total_inv_mass == 0.0 {
        return;
    }
    let delta = a.position - b.position;
    let depth = a.radius() + b.radius() - delta.magnitude();
    let correction = delta.unit() * (depth / total_inv_mass);
    a.position += correction * a.inv_mass();
    b.position -= correction * b.inv_mass();
}
